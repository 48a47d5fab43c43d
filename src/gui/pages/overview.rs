// src/gui/pages/overview.rs
use eframe::egui;

use crate::{
    config::options::PageKind::{ self, * },
    model::CaseRecord,
    specs::case_types,
};

use super::Page;

pub struct OverviewPage;
pub static PAGE: OverviewPage = OverviewPage;

impl Page for OverviewPage {
    fn kind(&self) -> PageKind { Overview }
    fn title(&self) -> &'static str { "Overview" }

    fn draw(&self, ui: &mut egui::Ui, record: &CaseRecord, _status: &mut String) {
        let type_label = match case_types::describe(&record.case_type) {
            Some(desc) => format!("{} ({desc})", record.case_type),
            None => record.case_type.clone(),
        };

        egui::Grid::new("overview_grid")
            .num_columns(2)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for (label, value) in [
                    ("Case Type", type_label.as_str()),
                    ("Case Number", record.case_number.as_str()),
                    ("Filing Year", record.filing_year.as_str()),
                    ("Filing Date", record.filing_date.as_str()),
                    ("Petitioner", record.petitioner.as_str()),
                    ("Respondent", record.respondent.as_str()),
                ] {
                    ui.strong(label);
                    ui.label(value);
                    ui.end_row();
                }
                ui.strong("Orders");
                ui.label(format!(
                    "{} interim, {} final",
                    record.interim_orders.len(),
                    record.final_orders.len()
                ));
                ui.end_row();
            });

        ui.add_space(12.0);
        super::string_list(ui, "Acts", &record.acts);
    }
}
