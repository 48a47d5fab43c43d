// src/gui/actions/load.rs
use std::path::PathBuf;

use crate::{
    config::options::PageKind,
    gui::{ app::App, router },
    session::{ self, FileSource, PageSource },
};

/// Read the saved page, log it, extract, show.
pub fn load(app: &mut App) {
    let session_opts = &mut app.state.options.session;
    session_opts.page_path = PathBuf::from(app.page_path_text.trim());

    let query = session_opts.query.clone();
    let mut src = FileSource::new(&session_opts.page_path);
    let log_root = session_opts.log_queries.then(|| app.store_root.clone());

    logf!("Load: Begin {} from {}", query.label(), src.describe());
    match session::lookup(&mut src, &query, log_root.as_deref()) {
        Ok(found) => {
            logf!("Load: OK {} (logged={:?})", query.label(), found.logged_id);
            app.set_record(found.record, found.logged_id);
            app.set_current_index(router::index_of(&PageKind::Overview));
            if found.logged_id.is_some() {
                app.refresh_queries();
            }
        }
        Err(e) => {
            loge!("Load: Error {}: {}", query.label(), e);
            app.status(format!("Load error: {e}"));
        }
    }
}

/// Re-extract a logged snapshot.
pub fn replay(app: &mut App, id: u64) {
    match session::replay(&app.store_root, id) {
        Ok(record) => {
            logf!("Replay: #{id} → {}", record.query().label());
            app.state.options.session.query = record.query();
            app.set_record(record, Some(id));
        }
        Err(e) => {
            loge!("Replay: #{id} failed: {}", e);
            app.status(format!("Replay error: {e}"));
        }
    }
}
