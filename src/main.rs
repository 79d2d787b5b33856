use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod accessibility;
mod config;
mod constants;
mod deck;
mod error;
mod input;
mod navigation;
mod presentation;
mod slide;
mod stage;
mod state;
#[cfg(test)]
mod testing;
mod texture_loader;
mod timer;
mod window_input;

use crate::config::{Cli, Config};
use crate::constants::*;
use crate::deck::{load_slides, Deck};
use crate::presentation::Presentation;
use crate::window_input::WindowInput;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());
    install_panic_hook();

    tracing::info!("Starting presenter v{}", env!("CARGO_PKG_VERSION"));
    let config = Config::load(cli.config.as_deref(), &cli.deck).context("loading presentation config")?;

    let started = Instant::now();
    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title(&config.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let slides = match load_slides(&mut rl, &thread, &cli.deck, &config) {
        Ok(slides) => slides,
        Err(e) => {
            show_error(&mut rl, &thread, &e.to_string());
            return Err(e).with_context(|| format!("loading slides from {}", cli.deck.display()));
        }
    };

    let deck = Deck::new(slides, &config);
    let mut presentation = match Presentation::new(deck, &config) {
        Ok(presentation) => presentation,
        Err(e) => {
            show_error(&mut rl, &thread, "No slides loaded.");
            return Err(e).with_context(|| format!("presenting {}", cli.deck.display()));
        }
    };
    tracing::info!(elapsed_ms = started.elapsed().as_millis() as u64, "presentation loaded");

    let mut input = WindowInput::new(rl.is_window_focused());

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        for event in input.poll(&mut rl, presentation.stage()) {
            let consumed = presentation.dispatch(event);
            tracing::trace!(?event, consumed, "input");
        }
        presentation.update(dt);
        presentation.stage_mut().update(dt);

        let mut d = rl.begin_drawing(&thread);
        presentation.stage().draw(&mut d);
    }

    tracing::info!(slide = presentation.current_slide(), total = presentation.total_slides(), "presentation closed");
    Ok(())
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// Faults go to the log before the default hook prints them.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("presentation fault: {info}");
        default_hook(info);
    }));
}

fn show_error(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    tracing::error!("{message}");
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);
    d.draw_text(&format!("Error: {}", message), 20, 20, FONT_SIZE, Color::RED);
    drop(d);
    std::thread::sleep(Duration::from_secs(ERROR_SCREEN_DURATION));
}
