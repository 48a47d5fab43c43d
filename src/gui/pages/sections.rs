// src/gui/pages/sections.rs
//
// Everything else the page carries: IA applications and transfers.

use eframe::egui;

use crate::{ config::options::PageKind::{ self, * }, model::CaseRecord };

use super::Page;

pub struct SectionsPage;
pub static PAGE: SectionsPage = SectionsPage;

impl Page for SectionsPage {
    fn kind(&self) -> PageKind { Sections }
    fn title(&self) -> &'static str { "Sections" }

    fn draw(&self, ui: &mut egui::Ui, record: &CaseRecord, _status: &mut String) {
        super::string_list(ui, "Interlocutory Applications", &record.ia_applications);
        super::string_list(ui, "Transfers", &record.transfers);
    }
}
