use dioxus::prelude::*;
use tracing::warn;

use crate::{
    charts::render_no_data,
    config::config,
    data,
    engine::geometry::{compute_arcs_with, CategorySegment},
};

#[component]
pub fn SpendingBreakdownCard() -> Element {
    rsx! {
        section { class: "card card--breakdown",
            div { class: "card__header",
                div {
                    p { class: "card__eyebrow", "Spending Breakdown" }
                    h3 { class: "card__title", "This Month" }
                }
            }
            div { class: "card__body",
                DonutChart { segments: data::spending_breakdown() }
            }
        }
    }
}

#[derive(Clone)]
struct SliceView {
    index: usize,
    path: String,
    color: String,
    opacity: &'static str,
}

#[derive(Clone)]
struct LegendEntry {
    label: String,
    swatch: String,
    percentage: String,
}

#[component]
pub fn DonutChart(segments: Vec<CategorySegment>) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    let settings = config();
    let layout = settings.donut;
    let arcs = match compute_arcs_with(&segments, &layout) {
        Ok(arcs) => arcs,
        Err(err) => {
            warn!(%err, "donut chart dataset rejected");
            return render_no_data(&err.to_string());
        }
    };

    let active = hovered();
    let slices: Vec<SliceView> = arcs
        .iter()
        .enumerate()
        .map(|(index, arc)| SliceView {
            index,
            path: arc.path.clone(),
            color: arc.color.clone(),
            opacity: if active == Some(index) { "1" } else { "0.9" },
        })
        .collect();
    let legend: Vec<LegendEntry> = arcs
        .iter()
        .map(|arc| LegendEntry {
            label: arc.label.clone(),
            swatch: format!("background: {}", arc.color),
            percentage: arc.percentage_label(),
        })
        .collect();

    let width = layout.cx * 2.0;
    let height = layout.cy * 2.0;
    let view_box = format!("0 0 {width} {height}");
    let hole = settings.donut_hole_radius;

    rsx! {
        div { class: "donut-chart",
            svg {
                class: "donut-chart__svg",
                width: "{width}",
                height: "{height}",
                view_box: "{view_box}",
                for slice in slices.into_iter() {
                    path {
                        key: "{slice.index}",
                        d: "{slice.path}",
                        fill: "{slice.color}",
                        opacity: "{slice.opacity}",
                        onmouseenter: move |_| hovered.set(Some(slice.index)),
                        onmouseleave: move |_| hovered.set(None),
                    }
                }
                circle {
                    class: "donut-chart__hole",
                    cx: "{layout.cx}",
                    cy: "{layout.cy}",
                    r: "{hole}",
                }
            }
            ul { class: "donut-chart__legend",
                for entry in legend.into_iter() {
                    li { key: "{entry.label}", class: "donut-chart__legend-item",
                        span { class: "donut-chart__swatch", style: "{entry.swatch}" }
                        span { class: "donut-chart__legend-label", "{entry.label}" }
                        span { class: "donut-chart__legend-value", "{entry.percentage}" }
                    }
                }
            }
        }
    }
}
