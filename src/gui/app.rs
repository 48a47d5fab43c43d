// src/gui/app.rs
use std::{ error::Error, path::PathBuf };

use eframe::egui;

use crate::{
    config::{
        consts::STORE_DIR,
        options::PageKind,
        state::AppState,
    },
    model::CaseRecord,
    store::{ self, QueryLogEntry },
};

use super::{ pages::Page, router };

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "eCourts Case Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state, PathBuf::from(STORE_DIR))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // currently shown case
    pub record: Option<CaseRecord>,

    // query log listing, newest last
    pub queries: Vec<QueryLogEntry>,
    pub store_root: PathBuf,

    // text fields mapped <-> options
    pub page_path_text: String,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState, store_root: PathBuf) -> Self {
        let page_path_text = state.options.session.page_path.to_string_lossy().into_owned();
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            record: None,
            queries: Vec::new(),
            store_root,
            page_path_text,
            out_path_text,
            out_path_dirty: false,
            status: s!("Idle"),
        };
        app.refresh_queries();
        logf!("Init: {} logged queries, store={}", app.queries.len(), app.store_root.display());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn refresh_queries(&mut self) {
        match store::list_queries(&self.store_root) {
            Ok(list) => self.queries = list,
            Err(e) => loge!("Store: cannot list queries: {}", e),
        }
    }

    /// Show a freshly extracted record and let the default output name follow it.
    pub fn set_record(&mut self, record: CaseRecord, logged_id: Option<u64>) {
        let export = &mut self.state.options.export;
        export.set_stem_for_case(&record.query());
        if !self.out_path_dirty {
            self.out_path_text = export.out_path().to_string_lossy().into_owned();
        }
        self.state.gui.selected_query = logged_id;
        self.status(format!(
            "{}: {} interim, {} final order(s)",
            record.query().label(),
            record.interim_orders.len(),
            record.final_orders.len()
        ));
        self.record = Some(record);
    }

    /// Apply a typed output path before Export.
    pub fn commit_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            logf!("Export: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("query")
            .resizable(false)
            .show(ctx, |ui| {
                super::components::query_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            super::components::export_bar::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| match &self.record {
                    Some(record) => page.draw(ui, record, &mut self.status),
                    None => {
                        ui.label("No case loaded. Save the case-detail page from the portal, then Load.");
                    }
                });
        });
    }
}
