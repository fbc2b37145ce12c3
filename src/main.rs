use anyhow::{Context, Result};
use log::info;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::InputManager;
use game::world::ObstacleKind;
use game::{GameConfig, GameState, Session, TickReport, Viewport};

/// Environment variable holding an optional spawn seed
const SEED_ENV: &str = "RUNNER_SEED";

/// Log frame statistics every N frames
const STATS_INTERVAL: u64 = 600;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Runner...");

    let config = GameConfig::default();
    let mut session = match read_seed()? {
        Some(seed) => {
            info!("Using spawn seed {}", seed);
            Session::seeded(config, seed)?
        }
        None => Session::new(config)?,
    };

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Runner")
        .with_inner_size(LogicalSize::new(800, 400))
        .with_resizable(true)
        .build(&event_loop)
        .context("Failed to create window")?;

    info!("Window created successfully");

    let size = window.inner_size();
    let mut viewport = Viewport::for_window(size.width, size.height);
    let mut input = InputManager::new();
    let mut clock = GameLoop::new();
    let mut title = String::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    viewport = Viewport::for_window(physical_size.width, physical_size.height);
                    info!(
                        "Window resized to {:?}, playing at {}x{} ({})",
                        physical_size,
                        viewport.width,
                        viewport.height,
                        if viewport.is_landscape() { "landscape" } else { "portrait" }
                    );
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input.process_mouse_button(button, state);
                }
                WindowEvent::Touch(touch) => {
                    input.process_touch(touch.phase);
                }
                WindowEvent::RedrawRequested => {
                    let now = clock.begin_frame();
                    let report = session.tick(input.take_tick_input(), viewport, now);
                    log_tick(&report);
                    log_frame(&session, &clock);

                    let next_title = window_title(&session);
                    if next_title != title {
                        window.set_title(&next_title);
                        title = next_title;
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Read the optional spawn seed from the environment
fn read_seed() -> Result<Option<u64>> {
    match std::env::var(SEED_ENV) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} must be an unsigned integer, got {:?}", SEED_ENV, value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", SEED_ENV)),
    }
}

/// Score and state overlay, shown in the title bar
fn window_title(session: &Session) -> String {
    let score = session.display_score();
    match session.state() {
        GameState::Running => format!("Runner - Score: {}", score),
        GameState::Paused => format!("Runner - Score: {} (paused)", score),
        GameState::GameOver => format!("Runner - Game over! Score: {} - click to restart", score),
    }
}

/// Surface the events a renderer or audio layer would react to
fn log_tick(report: &TickReport) {
    if report.restarted {
        info!("New run started");
    }
    if report.game_over {
        info!("Run ended");
    }
    if report.coins_collected > 0 {
        log::debug!("+{} coin(s)", report.coins_collected);
    }
    if let Some(kind) = report.obstacle_spawned {
        log::debug!("{:?} obstacle incoming", kind);
    }
    log::trace!(
        "jumped={} landed={} platform_appended={} coin_spawned={}",
        report.jumped,
        report.landed,
        report.platform_appended,
        report.coin_spawned
    );
}

/// Dump what a renderer would draw this frame
fn log_frame(session: &Session, clock: &GameLoop) {
    if clock.frame_count() % STATS_INTERVAL == 0 {
        log::debug!(
            "frame {}: {:.1} fps, scrolled {:.0}",
            clock.frame_count(),
            clock.fps(),
            session.scroll_offset()
        );
    }

    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    let sprite = session.sprite_frame();
    log::trace!(
        "character {:?} (grounded={}) sprite {}#{} at {:?} hitbox {:?}",
        session.character().position(),
        session.character().is_grounded(),
        sprite.cycle.name(),
        sprite.frame_index,
        session.character().sprite_rect(),
        session.hitbox()
    );
    let flying = session
        .obstacles()
        .iter()
        .filter(|o| o.kind == ObstacleKind::Flying)
        .count();
    log::trace!(
        "{} platforms, {} obstacles ({} flying), {} coins",
        session.platforms().len(),
        session.obstacles().len(),
        flying,
        session.coins().len()
    );
}
