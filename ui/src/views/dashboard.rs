use dioxus::prelude::*;

use crate::{
    charts::{RevenueCard, SpendingBreakdownCard, SpendingHeatmapCard},
    components::{Header, Hero, Sidebar, StatGrid},
    data,
    transactions::TransactionsCard,
};

/// Full dashboard page: sidebar, header, hero and the content grid.
#[component]
pub fn Dashboard() -> Element {
    let dark = use_signal(|| true);
    let theme_class = if dark() { "app app--dark" } else { "app app--light" };

    rsx! {
        div { class: "{theme_class}",
            Sidebar {}
            div { class: "app__main",
                Header { dark }
                main { class: "page page-dashboard",
                    Hero {}
                    DashboardContent {}
                }
            }
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    rsx! {
        div { class: "dashboard",
            StatGrid { stats: data::STATS.to_vec() }

            div { class: "dashboard__charts",
                RevenueCard {}
                SpendingBreakdownCard {}
            }

            SpendingHeatmapCard {}
            TransactionsCard {}
        }
    }
}
