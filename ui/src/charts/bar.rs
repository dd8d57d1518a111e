use dioxus::prelude::*;
use tracing::warn;

use crate::{
    charts::render_no_data,
    config::config,
    core::format,
    data::{RevenueRange, REVENUE_LABELS},
    engine::geometry::compute_bar_heights,
};

#[component]
pub fn RevenueCard() -> Element {
    let mut range = use_signal(|| config().default_range);
    let active = range();
    let series = active.series().to_vec();
    let labels: Vec<String> = REVENUE_LABELS.iter().map(|label| label.to_string()).collect();

    rsx! {
        section { class: "card card--revenue",
            div { class: "card__header",
                div {
                    p { class: "card__eyebrow", "Revenue Performance" }
                    h3 { class: "card__title", "{active.label()} Overview" }
                }
                div { class: "range-toggle",
                    for option in RevenueRange::ALL {
                        button {
                            key: "{option.label()}",
                            r#type: "button",
                            class: range_option_class(option == active),
                            onclick: move |_| range.set(option),
                            "{option.label()}"
                        }
                    }
                }
            }
            div { class: "card__body",
                BarChart { series, labels }
            }
        }
    }
}

fn range_option_class(is_active: bool) -> &'static str {
    if is_active {
        "range-toggle__option range-toggle__option--active"
    } else {
        "range-toggle__option"
    }
}

#[derive(Clone)]
struct BarView {
    index: usize,
    height: String,
    label: String,
    tooltip: String,
}

#[component]
pub fn BarChart(series: Vec<f64>, labels: Vec<String>) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    let heights = match compute_bar_heights(&series) {
        Ok(heights) => heights,
        Err(err) => {
            warn!(%err, "bar chart dataset rejected");
            return render_no_data(&err.to_string());
        }
    };

    let bars: Vec<BarView> = series
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(index, (value, height))| BarView {
            index,
            height: format!("height: {:.1}%", height * 100.0),
            label: labels.get(index).cloned().unwrap_or_default(),
            tooltip: format::format_whole_currency(*value),
        })
        .collect();

    let active = hovered();

    rsx! {
        div { class: "bar-chart",
            for bar in bars.into_iter() {
                div { key: "{bar.index}", class: "bar-chart__column",
                    div {
                        class: "bar-chart__bar",
                        style: "{bar.height}",
                        onmouseenter: move |_| hovered.set(Some(bar.index)),
                        onmouseleave: move |_| hovered.set(None),
                    }
                    p { class: "bar-chart__label", "{bar.label}" }
                    if active == Some(bar.index) {
                        div { class: "bar-chart__tooltip", "{bar.tooltip}" }
                    }
                }
            }
        }
    }
}
