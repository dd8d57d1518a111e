use dioxus::prelude::*;

mod bar;
pub use bar::{BarChart, RevenueCard};

mod donut;
pub use donut::{DonutChart, SpendingBreakdownCard};

mod heatmap;
pub use heatmap::{SpendingHeatmap, SpendingHeatmapCard};

/// Placeholder for a chart whose dataset the engine rejected.
pub(crate) fn render_no_data(detail: &str) -> Element {
    rsx! {
        div { class: "chart-empty",
            p { class: "chart-empty__title", "No data available" }
            p { class: "chart-empty__detail", "{detail}" }
        }
    }
}
