use dioxus::prelude::*;

use crate::data::StatSummary;

#[component]
pub fn StatCard(title: String, value: String, delta: String, positive: bool) -> Element {
    let (badge_class, arrow) = if positive {
        ("stat-card__delta stat-card__delta--up", "↗")
    } else {
        ("stat-card__delta stat-card__delta--down", "↘")
    };

    rsx! {
        div { class: "stat-card",
            p { class: "stat-card__title", "{title}" }
            div { class: "stat-card__body",
                p { class: "stat-card__value", "{value}" }
                span { class: "{badge_class}",
                    span { class: "stat-card__arrow", "{arrow}" }
                    "{delta}"
                }
            }
        }
    }
}

#[component]
pub fn StatGrid(stats: Vec<StatSummary>) -> Element {
    rsx! {
        div { class: "stat-grid",
            for stat in stats.into_iter() {
                StatCard {
                    key: "{stat.title}",
                    title: stat.title.to_string(),
                    value: stat.value.to_string(),
                    delta: stat.delta.to_string(),
                    positive: stat.positive,
                }
            }
        }
    }
}
