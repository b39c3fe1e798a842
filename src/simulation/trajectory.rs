use crate::rendering::Segment;
use macroquad::prelude::{vec3, Color, Vec3};
use std::collections::VecDeque;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TrajectoryError {
    #[error("trajectory has no points")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub position: Vec3,
    pub color: Color,
    /// Frame on which the point was appended. Strictly increasing along the store.
    pub frame: u64,
}

impl TrajectoryPoint {
    pub fn new(position: Vec3, color: Color, frame: u64) -> Self {
        Self {
            position,
            color,
            frame,
        }
    }
}

/// Chronological trail of points, oldest at the front.
pub struct TrajectoryStore {
    points: VecDeque<TrajectoryPoint>,
    capacity: usize,
}

impl TrajectoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            // one extra slot: append runs before eviction
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn append(&mut self, point: TrajectoryPoint) {
        self.points.push_back(point);
    }

    /// Drop the oldest points until at most `max_capacity` remain. Returns how many went.
    pub fn evict_overflow(&mut self, max_capacity: usize) -> usize {
        let mut evicted = 0;
        while self.points.len() > max_capacity {
            self.points.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Mean position of every live point.
    pub fn centroid(&self) -> Result<Vec3, TrajectoryError> {
        if self.points.is_empty() {
            return Err(TrajectoryError::Empty);
        }
        let (sx, sy, sz) = self.points.iter().fold((0.0f64, 0.0f64, 0.0f64), |acc, p| {
            (
                acc.0 + p.position.x as f64,
                acc.1 + p.position.y as f64,
                acc.2 + p.position.z as f64,
            )
        });
        let n = self.points.len() as f64;
        Ok(vec3((sx / n) as f32, (sy / n) as f32, (sz / n) as f32))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrajectoryPoint> + '_ {
        self.points.iter()
    }

    /// One segment per point, in order. The chain starts at the oldest point
    /// (a zero-length first segment), then joins each point to its predecessor.
    // Anchoring on the live oldest point is intended; the evicted point is never joined.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let anchor = self.oldest().map(|p| p.position);
        let starts = anchor.into_iter().chain(self.iter().map(|p| p.position));
        starts.zip(self.iter()).map(|(start, to)| Segment {
            start,
            end: to.position,
            color: to.color,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<&TrajectoryPoint> {
        self.points.front()
    }

    pub fn newest(&self) -> Option<&TrajectoryPoint> {
        self.points.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::{BLUE, GREEN, RED, WHITE};

    fn point(i: u64) -> TrajectoryPoint {
        TrajectoryPoint::new(vec3(i as f32, 2.0 * i as f32, -(i as f32)), WHITE, i)
    }

    #[test]
    fn test_fifo_eviction_keeps_newest() {
        let mut store = TrajectoryStore::new(3);
        for i in 1..=5 {
            store.append(point(i));
            store.evict_overflow(3);
        }
        let frames: Vec<u64> = store.iter().map(|p| p.frame).collect();
        assert_eq!(frames, vec![3, 4, 5]);
        assert_eq!(store.oldest().map(|p| p.frame), Some(3));
        assert_eq!(store.newest().map(|p| p.frame), Some(5));
    }

    #[test]
    fn test_capacity_invariant() {
        let capacity = 7;
        let mut store = TrajectoryStore::new(capacity);
        for frame in 1..=50u64 {
            store.append(point(frame));
            store.evict_overflow(capacity);
            assert_eq!(store.len(), (frame as usize).min(capacity));
        }
        assert_eq!(store.capacity(), capacity);
    }

    #[test]
    fn test_evict_reports_count_and_is_noop_within_capacity() {
        let mut store = TrajectoryStore::new(10);
        for i in 0..4 {
            store.append(point(i));
        }
        assert_eq!(store.evict_overflow(10), 0);
        assert_eq!(store.len(), 4);
        assert_eq!(store.evict_overflow(1), 3);
        assert_eq!(store.oldest().map(|p| p.frame), Some(3));
    }

    #[test]
    fn test_chronological_order() {
        let mut store = TrajectoryStore::new(16);
        for i in 0..40 {
            store.append(point(i));
            store.evict_overflow(16);
        }
        let frames: Vec<u64> = store.iter().map(|p| p.frame).collect();
        assert!(frames.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_centroid() {
        let mut store = TrajectoryStore::new(10);
        assert_eq!(store.centroid(), Err(TrajectoryError::Empty));

        store.append(TrajectoryPoint::new(vec3(1.5, -2.0, 7.25), RED, 1));
        assert_eq!(store.centroid().unwrap(), vec3(1.5, -2.0, 7.25));

        store.append(TrajectoryPoint::new(vec3(2.5, 4.0, 0.75), RED, 2));
        store.append(TrajectoryPoint::new(vec3(-1.0, 1.0, 1.0), RED, 3));
        assert_eq!(store.centroid().unwrap(), vec3(1.0, 1.0, 3.0));
    }

    #[test]
    fn test_centroid_follows_eviction() {
        let mut store = TrajectoryStore::new(2);
        for i in 1..=4 {
            store.append(point(i));
            store.evict_overflow(2);
        }
        // points 3 and 4 remain
        assert_eq!(store.centroid().unwrap(), vec3(3.5, 7.0, -3.5));
    }

    #[test]
    fn test_segments_anchor_on_oldest() {
        let mut store = TrajectoryStore::new(3);
        assert_eq!(store.segments().count(), 0);

        let p1 = TrajectoryPoint::new(vec3(1.0, 0.0, 0.0), RED, 1);
        store.append(p1);
        let first: Vec<Segment> = store.segments().collect();
        assert_eq!(
            first,
            vec![Segment { start: p1.position, end: p1.position, color: RED }]
        );

        let p2 = TrajectoryPoint::new(vec3(2.0, 0.0, 0.0), GREEN, 2);
        let p3 = TrajectoryPoint::new(vec3(3.0, 0.0, 0.0), BLUE, 3);
        let p4 = TrajectoryPoint::new(vec3(4.0, 0.0, 0.0), WHITE, 4);
        for p in [p2, p3, p4] {
            store.append(p);
            store.evict_overflow(3);
        }
        let segments: Vec<Segment> = store.segments().collect();
        assert_eq!(segments.len(), store.len());
        // after eviction the chain re-anchors on p2
        assert_eq!(
            segments,
            vec![
                Segment { start: p2.position, end: p2.position, color: GREEN },
                Segment { start: p2.position, end: p3.position, color: BLUE },
                Segment { start: p3.position, end: p4.position, color: WHITE },
            ]
        );
    }

    #[test]
    fn test_evicted_point_is_never_joined() {
        let mut store = TrajectoryStore::new(2);
        for i in 1..=3 {
            store.append(point(i));
            store.evict_overflow(store.capacity());
        }
        let evicted = point(1).position;
        let first = store.segments().next().unwrap();
        assert_ne!(first.start, evicted);
        assert_eq!(first.start, point(2).position);
        assert_eq!(first.end, point(2).position);
        assert!(store.segments().all(|s| s.start != evicted && s.end != evicted));
    }

    #[test]
    fn test_iter_is_restartable() {
        let mut store = TrajectoryStore::new(5);
        for i in 0..5 {
            store.append(point(i));
        }
        let first: Vec<u64> = store.iter().map(|p| p.frame).collect();
        let second: Vec<u64> = store.iter().map(|p| p.frame).collect();
        assert_eq!(first, second);
    }
}
