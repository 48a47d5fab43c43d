// src/gui/actions/export.rs
use crate::{ file, gui::app::App, summary };

pub fn export_orders(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.commit_out_path();

    let Some(record) = super::current_record(app) else {
        logd!("Export: Clicked, but no case is loaded");
        app.status("Nothing to export");
        return;
    };

    let export = &app.state.options.export;
    logf!(
        "Export: Begin {} scope={:?} path={}",
        record.query().label(),
        export.scope,
        export.out_path().display()
    );
    let msg = match file::write_orders(export, record) {
        Ok(path) => format!("Exported to {}", path.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}

pub fn export_summary(app: &mut App) {
    app.commit_out_path();

    let Some(record) = super::current_record(app) else {
        app.status("Nothing to export");
        return;
    };

    let path = app.state.options.export.summary_path();
    let text = summary::render_summary(record, &summary::generated_now());
    let msg = match file::write_summary(&path, &text) {
        Ok(path) => format!("Summary written to {}", path.display()),
        Err(e) => {
            loge!("Summary: Error: {}", e);
            format!("Summary error: {e}")
        }
    };
    app.status(msg);
}
