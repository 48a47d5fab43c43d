// src/gui/actions/copy.rs
use eframe::egui;
use crate::{ file, gui::app::App, summary };

pub fn copy_orders(app: &mut App, ui_ctx: &egui::Context) {
    let Some(record) = super::current_record(app) else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but no case is loaded");
        return;
    };

    let export = &app.state.options.export;
    let rows = file::order_rows(record, export.scope).len();
    if rows == 0 {
        app.status("No orders in scope");
        return;
    }
    let txt = file::orders_export_string(export, record);
    logf!("Copy: orders={}, scope={:?}, format={:?}", rows, export.scope, export.format);

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {rows} order(s) to clipboard"));
}

pub fn copy_summary(app: &mut App, ui_ctx: &egui::Context) {
    let Some(record) = super::current_record(app) else {
        app.status("Nothing to copy");
        return;
    };
    ui_ctx.copy_text(summary::render_summary(record, &summary::generated_now()));
    logf!("Copy: summary for {}", record.query().label());
    app.status("Summary copied to clipboard");
}
