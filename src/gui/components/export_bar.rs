// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::{ ExportFormat, OrderScope },
    gui::{ actions, app::App },
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers + Scope ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            ui.separator();

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }

            ui.separator();

            ui.label("Orders:");
            let prev_scope = export.scope;
            ui.selectable_value(&mut export.scope, OrderScope::All, "All");
            ui.selectable_value(&mut export.scope, OrderScope::Interim, "Interim");
            ui.selectable_value(&mut export.scope, OrderScope::Final, "Final");
            if export.scope != prev_scope {
                logf!("UI: Scope → {:?}", export.scope);
            }
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(360.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions ---
    ui.horizontal(|ui| {
        if ui.button("Copy").on_hover_text("Orders table to clipboard").clicked() {
            actions::copy_orders(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export_orders(app);
        }

        ui.separator();

        if ui.button("Copy summary").clicked() {
            actions::copy_summary(app, ui.ctx());
        }
        if ui.button("Summary").on_hover_text("Write the printable summary next to the export").clicked() {
            actions::export_summary(app);
        }

        ui.separator();
        ui.label(format!("Status: {}", app.status));
    });
}
