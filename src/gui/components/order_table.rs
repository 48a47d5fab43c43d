// src/gui/components/order_table.rs
//
// One order list as a table: No. | Date | View.
// View opens the PDF in the system browser, which carries the portal session.

use eframe::egui;
use egui_extras::{ Column, TableBuilder };

use crate::model::{ OrderEntry, OrderKind };

pub fn draw(ui: &mut egui::Ui, kind: OrderKind, orders: &[OrderEntry], status: &mut String) {
    if orders.is_empty() {
        ui.weak("none");
        return;
    }

    TableBuilder::new(ui)
        .id_salt(("orders", kind))
        .striped(true)
        .vscroll(false)
        .column(Column::initial(80.0).at_least(40.0).resizable(true))
        .column(Column::initial(140.0).at_least(60.0).resizable(true).clip(true))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for title in ["No.", "Date", ""] {
                header.col(|ui| { ui.strong(title); });
            }
        })
        .body(|mut body| {
            for order in orders {
                body.row(22.0, |mut row| {
                    row.col(|ui| { ui.label(order.order_number.as_str()); });
                    row.col(|ui| { ui.label(order.order_date.as_str()); });
                    row.col(|ui| {
                        let pdf = order.pdf_url();
                        let resp = ui.add_enabled(pdf.is_some(), egui::Button::new("View"));
                        if let Some(url) = pdf {
                            let resp = resp.on_hover_text(url.as_str());
                            if resp.clicked() {
                                logf!("UI: View {} order {} → {}", kind.label(), order.order_number, url);
                                ui.ctx().open_url(egui::OpenUrl::new_tab(&url));
                                *status = format!("Opened order {} in browser", order.order_number);
                            }
                        }
                    });
                });
            }
        });
}
