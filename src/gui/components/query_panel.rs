// src/gui/components/query_panel.rs
//
// Left panel: what to look up, where the saved page is, and the query log.

use eframe::egui;

use crate::{
    config::consts::PORTAL_URL,
    gui::{ actions, app::App },
    specs::case_types,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Case");

    {
        let query = &mut app.state.options.session.query;
        let selected = if query.case_type.is_empty() { s!("Select type") } else { query.case_type.clone() };
        egui::ComboBox::from_id_salt("case_type")
            .selected_text(selected)
            .width(170.0)
            .show_ui(ui, |ui| {
                for (code, desc) in case_types::all() {
                    ui.selectable_value(&mut query.case_type, s!(*code), format!("{code} · {desc}"));
                }
            });

        egui::Grid::new("query_grid").num_columns(2).show(ui, |ui| {
            ui.label("Number");
            ui.add(egui::TextEdit::singleline(&mut query.case_number).desired_width(110.0));
            ui.end_row();
            ui.label("Year");
            ui.add(egui::TextEdit::singleline(&mut query.filing_year).desired_width(110.0));
            ui.end_row();
        });
    }

    ui.add_space(6.0);
    if ui.button("Open portal").on_hover_text(PORTAL_URL).clicked() {
        logf!("UI: Open portal");
        ui.ctx().open_url(egui::OpenUrl::new_tab(PORTAL_URL));
        app.status("Search the case in the browser, then save the case-detail page");
    }

    ui.label("Saved page:");
    ui.add(egui::TextEdit::singleline(&mut app.page_path_text).font(egui::TextStyle::Monospace));
    ui.checkbox(&mut app.state.options.session.log_queries, "Keep in query log");

    if ui.button("Load").clicked() {
        actions::load(app);
    }

    ui.separator();
    ui.heading("Query log");

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let mut replay: Option<u64> = None;
    egui::ScrollArea::vertical()
        .id_salt("query_log_scroll")
        .show(ui, |ui| {
            if app.queries.is_empty() {
                ui.weak("empty");
            }
            for entry in app.queries.iter().rev() {
                let selected = app.state.gui.selected_query == Some(entry.id);
                let when = entry.logged_at_local()
                    .map(|t| t.format("%d-%m-%Y %H:%M").to_string())
                    .unwrap_or_default();
                let resp = ui.selectable_label(selected, format!("#{} {}", entry.id, entry.query.label()))
                    .on_hover_text(when);
                if resp.clicked() && !selected {
                    replay = Some(entry.id);
                }
            }
        });

    if let Some(id) = replay {
        actions::replay(app, id);
    }
}
