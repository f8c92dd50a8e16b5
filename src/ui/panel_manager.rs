//! Panel orchestration and layout management.
//!
//! Lays out header, controls, status bar and slide stage, and gathers what
//! the user did in them.

use crate::app::AppState;
use crate::ui::{controls_bar, header, slide_panel, status_bar};
use rcarousel::InputEvent;
use std::path::PathBuf;

/// Panel interactions that need to be handled by the application coordinator.
#[derive(Debug)]
pub enum PanelInteraction {
    /// User picked a deck file to open
    OpenDeckRequested(PathBuf),
    /// User asked for a random deck
    GenerateDeckRequested,
    /// A carousel control, indicator or swipe produced an event
    Carousel(InputEvent),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Interactions are returned in the order they happened within the frame.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interactions.push(match header_interaction {
                    header::HeaderInteraction::OpenDeckRequested(path) => PanelInteraction::OpenDeckRequested(path),
                    header::HeaderInteraction::GenerateDeckRequested => PanelInteraction::GenerateDeckRequested,
                });
            }
        });

        let theme_colors = state.theme.colors().clone();

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        egui::TopBottomPanel::bottom("controls_panel")
            .exact_height(44.0)
            .show(ctx, |ui| {
                let events = controls_bar::render_controls_bar(ui, state, &theme_colors);
                interactions.extend(events.into_iter().map(PanelInteraction::Carousel));
            });

        let stage_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(12))
            .fill(theme_colors.stage_background);

        egui::CentralPanel::default()
            .frame(stage_frame)
            .show(ctx, |ui| {
                let events = slide_panel::render_slide_panel(ui, state, &theme_colors);
                interactions.extend(events.into_iter().map(PanelInteraction::Carousel));
            });

        interactions
    }
}
