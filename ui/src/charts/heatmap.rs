use dioxus::prelude::*;
use tracing::warn;

use crate::{
    charts::render_no_data, config::config, core::format, data, engine::heat::HeatGrid,
};

#[component]
pub fn SpendingHeatmapCard() -> Element {
    rsx! {
        section { class: "card card--heatmap",
            div { class: "card__header",
                div {
                    p { class: "card__eyebrow", "Card Activity" }
                    h3 { class: "card__title", "Spend by Time of Day" }
                }
            }
            div { class: "card__body",
                SpendingHeatmap { grid: data::spending_heatmap() }
            }
        }
    }
}

#[derive(Clone)]
struct CellView {
    row: usize,
    column: usize,
    style: String,
    title: String,
}

#[component]
pub fn SpendingHeatmap(grid: HeatGrid) -> Element {
    let mut hovered = use_signal(|| Option::<(usize, usize)>::None);

    let colors = match grid.colors(&config().heat_ramp()) {
        Ok(colors) => colors,
        Err(err) => {
            warn!(%err, "heatmap dataset rejected");
            return render_no_data(&err.to_string());
        }
    };

    let rows: Vec<(String, Vec<CellView>)> = grid
        .rows
        .iter()
        .zip(grid.cells.iter().zip(colors))
        .enumerate()
        .map(|(row, (label, (values, row_colors)))| {
            let cells = values
                .iter()
                .zip(row_colors)
                .enumerate()
                .map(|(column, (value, color))| CellView {
                    row,
                    column,
                    style: format!("background: {color}"),
                    title: format!(
                        "{label} {}: {}",
                        grid.columns[column],
                        format::format_whole_currency(*value)
                    ),
                })
                .collect();
            (label.clone(), cells)
        })
        .collect();

    let caption = hovered()
        .and_then(|(row, column)| rows.get(row).and_then(|(_, cells)| cells.get(column)))
        .map(|cell| cell.title.clone())
        .unwrap_or_else(|| "Hover a cell for details".to_string());
    let columns = grid.columns.clone();

    rsx! {
        div { class: "heatmap",
            div { class: "heatmap__row heatmap__row--header",
                span { class: "heatmap__label" }
                for column in columns.into_iter() {
                    span { key: "{column}", class: "heatmap__column-label", "{column}" }
                }
            }
            for (label, cells) in rows.into_iter() {
                div { key: "{label}", class: "heatmap__row",
                    span { class: "heatmap__label", "{label}" }
                    for cell in cells.into_iter() {
                        span {
                            key: "{cell.column}",
                            class: "heatmap__cell",
                            style: "{cell.style}",
                            title: "{cell.title}",
                            onmouseenter: move |_| hovered.set(Some((cell.row, cell.column))),
                            onmouseleave: move |_| hovered.set(None),
                        }
                    }
                }
            }
            p { class: "heatmap__caption", "{caption}" }
        }
    }
}
