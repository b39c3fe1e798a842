use anyhow::Context;
use macroquad::miniquad::conf::Platform;
use macroquad::prelude::*;
use macroquad::window::Conf;

mod config;
mod physics;
mod rendering;
mod simulation;

use config::{LorenzConfig, ACTIVE_PRESET};
use rendering::MacroquadCanvas;
use simulation::{Simulation, TimeState};

fn window_conf() -> Conf {
    let config = LorenzConfig::from_preset(ACTIVE_PRESET);
    Conf {
        window_title: "Lorenz Attractor".to_owned(),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: false,
        sample_count: 4,
        platform: Platform {
            // vsync off when uncapped
            swap_interval: (config.target_fps == 0).then_some(0),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = LorenzConfig::from_preset(ACTIVE_PRESET);
    let mut sim = Simulation::new(config).context("refusing to start with these constants")?;
    log::info!(
        "Starting Lorenz attractor ({}): sigma={} rho={} beta={:.4} h={} max points={}",
        config.name,
        config.sigma,
        config.rho,
        config.beta,
        config.time_step,
        sim.trajectory.capacity()
    );

    // window close is handled below so shutdown is logged
    prevent_quit();

    let mut time = TimeState::new(get_time());
    let mut canvas = MacroquadCanvas;

    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }

        time.tick(get_time());
        sim.update(get_frame_time()).context("frame update failed")?;
        sim.draw(&mut canvas).context("frame draw failed")?;

        if let Some(fps) = time.fps_sample(get_time()) {
            log::info!(
                "FPS: {:.1}, points: {}, hue: {:.1}",
                fps,
                sim.trajectory.len(),
                sim.hue.value()
            );
        }

        time.pace(config.target_fps, get_time());
        next_frame().await;
    }

    log::info!("Window closed after {} frames", sim.frame);
    Ok(())
}
