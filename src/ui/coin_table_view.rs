use chrono::Utc;
use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use strum::IntoEnumIterator;

use crate::{
    domain::TickersInfo,
    models::CoinTable,
    ui::{CoinColumn, UI_CONFIG, UI_TEXT},
    utils::{format_age, format_unix_secs, secs_since},
};

pub(crate) fn render_heading(ui: &mut Ui, table: &CoinTable) {
    ui.heading(
        RichText::new(&UI_TEXT.heading)
            .size(UI_CONFIG.sizes.heading)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    if let Some(line) = table.info().and_then(info_line) {
        ui.label(RichText::new(line).small().color(UI_CONFIG.colors.subdued));
    }
    ui.add_space(12.0);
}

/// "12345 coins tracked · updated 2023-11-14 22:13:20 UTC (3m ago)"
fn info_line(info: TickersInfo) -> Option<String> {
    let updated = format_unix_secs(info.time)?;
    let age = format_age(secs_since(info.time, Utc::now()));
    Some(format!(
        "{} {} · {} {} ({} {})",
        info.coins_num,
        UI_TEXT.info_coins_tracked,
        UI_TEXT.info_updated,
        updated,
        age,
        UI_TEXT.info_ago
    ))
}

/// The current page of coins, one striped row per record keyed by its id.
pub(crate) fn render_coin_table(ui: &mut Ui, table: &CoinTable) {
    let rows = table.visible();
    if rows.is_empty() {
        ui.label(RichText::new(&UI_TEXT.no_coins).color(UI_CONFIG.colors.subdued));
        return;
    }

    let mut builder = TableBuilder::new(ui)
        .id_salt("coin_table")
        .striped(true)
        .resizable(false)
        .vscroll(true);
    let last = CoinColumn::iter().count() - 1;
    for (i, col) in CoinColumn::iter().enumerate() {
        let width = if i == last {
            Column::remainder().at_least(col.min_width())
        } else {
            Column::auto().at_least(col.min_width())
        };
        builder = builder.column(width);
    }

    builder
        .header(UI_CONFIG.sizes.header_row_height, |mut header| {
            for col in CoinColumn::iter() {
                header.col(|ui| {
                    ui.with_layout(col.layout(), |ui| {
                        ui.label(
                            RichText::new(col.to_string())
                                .strong()
                                .color(UI_CONFIG.colors.heading),
                        );
                    });
                });
            }
        })
        .body(|mut body| {
            for coin in rows {
                body.row(UI_CONFIG.sizes.row_height, |mut row| {
                    for col in CoinColumn::iter() {
                        row.col(|ui| {
                            ui.push_id(&coin.id, |ui| {
                                ui.with_layout(col.layout(), |ui| {
                                    ui.label(
                                        RichText::new(col.cell_text(coin))
                                            .color(UI_CONFIG.colors.label),
                                    );
                                });
                            });
                        });
                    }
                });
            }
        });
}
