// src/gui/pages/history.rs
use eframe::egui;

use crate::{ config::options::PageKind::{ self, * }, model::CaseRecord };

use super::Page;

pub struct HistoryPage;
pub static PAGE: HistoryPage = HistoryPage;

impl Page for HistoryPage {
    fn kind(&self) -> PageKind { History }
    fn title(&self) -> &'static str { "History" }

    fn draw(&self, ui: &mut egui::Ui, record: &CaseRecord, _status: &mut String) {
        super::string_list(ui, "Case History", &record.history);
    }
}
