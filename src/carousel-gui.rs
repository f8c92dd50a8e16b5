//! Carousel GUI Application
//!
//! Desktop host for the carousel built with egui. It shows one slide at a time
//! with:
//! - Autoplay on a fixed interval, paused and resumed from the controls or Space
//! - Previous/next buttons, arrow keys, indicator dots and swipes
//! - Decks loaded from JSON files or generated at random
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Carousel, deck and theme state
//! - `presentation/` - Slide and indicator colours
//! - `rendering/` - Low-level slide painting
//! - `ui/` - Panel rendering and input translation
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use rcarousel::CarouselConfig;
use std::path::PathBuf;
use std::time::Duration;

mod utils;
mod presentation;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator, SettingsCoordinator, LAST_DECK_KEY};
use ui::panel_manager::{PanelInteraction, PanelManager};

#[derive(Parser, Debug)]
#[command(name = "carousel-gui", about = "Slide carousel with autoplay")]
struct Args {
    /// Deck file (JSON) to show on startup
    deck: Option<PathBuf>,

    /// Carousel config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Autoplay interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Swipe distance in pixels needed to change slides
    #[arg(long)]
    swipe_threshold: Option<f32>,

    /// Start with autoplay paused
    #[arg(long)]
    paused: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Application entry point: parses arguments, sets up logging and launches the window.
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = build_config(&args)?;
    log::info!(
        "Carousel starting (interval {} ms, swipe threshold {} px, autoplay {})",
        config.timer_interval_ms,
        config.swipe_threshold_px,
        config.autoplay
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("Carousel"),
        ..Default::default()
    };

    let initial_deck = args.deck;
    eframe::run_native(
        "Carousel",
        options,
        Box::new(move |cc| Ok(Box::new(CarouselApp::new(cc, config, initial_deck)?))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}

/// Console logging; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .filter_module("egui", log::LevelFilter::Info)
        .filter_module("eframe", log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();
}

/// Reads the config file and applies command-line overrides.
fn build_config(args: &Args) -> Result<CarouselConfig> {
    let mut config = match &args.config {
        Some(path) => CarouselConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CarouselConfig::load_default_location().context("Failed to load default config")?,
    };

    if let Some(interval_ms) = args.interval_ms {
        config.timer_interval_ms = interval_ms;
    }
    if let Some(threshold) = args.swipe_threshold {
        config.swipe_threshold_px = threshold;
    }
    if args.paused {
        config.autoplay = false;
    }

    config.validate().context("Invalid carousel options")?;
    Ok(config)
}

/// The carousel application.
///
/// Most work is delegated:
/// - `ApplicationCoordinator` handles deck loading, input routing and autoplay time
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles panel layout and rendering
struct CarouselApp {
    /// Centralized application state
    state: AppState,
    /// Deck to open on the first frame
    pending_deck_load: Option<PathBuf>,
}

impl CarouselApp {
    /// Creates the app with preferences from persistent storage.
    ///
    /// A deck given on the command line wins over the last deck of the previous session.
    fn new(
        cc: &eframe::CreationContext,
        config: CarouselConfig,
        initial_deck: Option<PathBuf>,
    ) -> Result<Self, rcarousel::CarouselError> {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let last_deck: Option<PathBuf> = SettingsCoordinator::load_setting_or(cc.storage, LAST_DECK_KEY, None);

        Ok(Self {
            state: AppState::with_theme(config, theme_name)?,
            pending_deck_load: initial_deck.or(last_deck),
        })
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::OpenDeckRequested(path) => {
                ApplicationCoordinator::open_deck(&mut self.state, path);
            }
            PanelInteraction::GenerateDeckRequested => {
                ApplicationCoordinator::open_generated_deck(&mut self.state);
            }
            PanelInteraction::Carousel(event) => {
                ApplicationCoordinator::handle_carousel_input(&mut self.state, event);
            }
        }
    }
}

impl eframe::App for CarouselApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, LAST_DECK_KEY, &self.state.deck.source());
    }

    /// Per-frame loop:
    /// 1. Open the startup deck (first frame only)
    /// 2. Advance autoplay by the frame time
    /// 3. Dispatch keyboard input before widgets see it
    /// 4. Apply theme, render panels, handle their interactions
    /// 5. Schedule a repaint for the next autoplay deadline
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(path) = self.pending_deck_load.take() {
            ApplicationCoordinator::open_deck(&mut self.state, path);
        }

        let frame_time = Duration::from_secs_f32(ctx.input(|i| i.unstable_dt).max(0.0));
        ApplicationCoordinator::advance_autoplay(&mut self.state, frame_time);

        ApplicationCoordinator::handle_keyboard(&mut self.state, ctx);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        for interaction in PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }

        // Wake up for the next autoplay advance; the countdown in the status bar
        // refreshes at the same time.
        if let Some(remaining) = self.state.carousel.time_until_advance() {
            ctx.request_repaint_after(remaining.min(Duration::from_millis(100)));
        }
    }
}
