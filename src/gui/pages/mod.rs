// src/gui/pages/mod.rs
use eframe::egui;

use crate::{ config::options::PageKind, model::CaseRecord };

pub mod history;
pub mod orders;
pub mod overview;
pub mod sections;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the page for the loaded record. `status` is the bottom status line.
    fn draw(&self, ui: &mut egui::Ui, record: &CaseRecord, status: &mut String);
}

/// Heading + bullet list, or a muted "none".
pub(super) fn string_list(ui: &mut egui::Ui, title: &str, items: &[String]) {
    ui.heading(format!("{title} ({})", items.len()));
    if items.is_empty() {
        ui.weak("none");
    }
    for item in items {
        ui.label(format!("• {item}"));
    }
    ui.add_space(8.0);
}
