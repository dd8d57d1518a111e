//! Inline mock datasets rendered by the dashboard.

use serde::{Deserialize, Serialize};
use time::{macros::date, Date};

use crate::engine::geometry::CategorySegment;
use crate::engine::heat::HeatGrid;
use crate::engine::table::{Column, FieldType, Row, Schema, Table, Value};
use crate::engine::EngineResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatSummary {
    pub title: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub positive: bool,
}

pub const STATS: [StatSummary; 4] = [
    StatSummary {
        title: "Total Balance",
        value: "$128,940",
        delta: "3.4%",
        positive: true,
    },
    StatSummary {
        title: "Monthly Revenue",
        value: "$42,560",
        delta: "8.1%",
        positive: true,
    },
    StatSummary {
        title: "Expenses",
        value: "$19,320",
        delta: "2.3%",
        positive: false,
    },
    StatSummary {
        title: "Active Subscriptions",
        value: "1,248",
        delta: "1.8%",
        positive: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenueRange {
    Weekly,
    Monthly,
}

impl RevenueRange {
    pub const ALL: [RevenueRange; 2] = [RevenueRange::Weekly, RevenueRange::Monthly];

    pub fn label(self) -> &'static str {
        match self {
            RevenueRange::Weekly => "Weekly",
            RevenueRange::Monthly => "Monthly",
        }
    }

    pub fn series(self) -> &'static [f64] {
        match self {
            RevenueRange::Weekly => &REVENUE_WEEKLY,
            RevenueRange::Monthly => &REVENUE_MONTHLY,
        }
    }
}

pub const REVENUE_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const REVENUE_MONTHLY: [f64; 7] = [
    12000.0, 15800.0, 13200.0, 16500.0, 17800.0, 21000.0, 19800.0,
];
const REVENUE_WEEKLY: [f64; 7] = [3800.0, 4200.0, 3900.0, 5200.0, 6100.0, 5800.0, 6400.0];

pub fn spending_breakdown() -> Vec<CategorySegment> {
    vec![
        CategorySegment::new("Card Payments", 4200.0, "#60a5fa"),
        CategorySegment::new("Transfers", 2600.0, "#a78bfa"),
        CategorySegment::new("Subscriptions", 1800.0, "#34d399"),
        CategorySegment::new("Fees", 600.0, "#f59e0b"),
    ]
}

/// Card spend by weekday and time of day, in dollars.
pub fn spending_heatmap() -> HeatGrid {
    let labels = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    HeatGrid {
        rows: labels(&REVENUE_LABELS),
        columns: labels(&["00–06", "06–12", "12–18", "18–24"]),
        cells: vec![
            vec![120.0, 860.0, 1240.0, 540.0],
            vec![90.0, 910.0, 1320.0, 610.0],
            vec![110.0, 780.0, 1180.0, 580.0],
            vec![140.0, 940.0, 1410.0, 720.0],
            vec![180.0, 1020.0, 1560.0, 1340.0],
            vec![260.0, 640.0, 1480.0, 1620.0],
            vec![210.0, 520.0, 1090.0, 880.0],
        ],
    }
}

pub fn transactions_schema() -> EngineResult<Schema> {
    Schema::new(
        "id",
        vec![
            Column::new("id", "ID", FieldType::Text),
            Column::new("name", "Counterparty", FieldType::Text),
            Column::new("type", "Type", FieldType::Text),
            Column::new("amount", "Amount", FieldType::Number),
            Column::new("status", "Status", FieldType::Text),
            Column::new("date", "Date", FieldType::Date),
        ],
    )
}

pub fn transactions() -> EngineResult<Table> {
    let row = |id: &str, name: &str, kind: &str, amount: f64, status: &str, date: Date| {
        Row::new()
            .with("id", Value::text(id))
            .with("name", Value::text(name))
            .with("type", Value::text(kind))
            .with("amount", Value::Number(amount))
            .with("status", Value::text(status))
            .with("date", Value::Date(date))
    };

    let rows = vec![
        row("TX-98231", "Acme Inc.", "Invoice", 2450.0, "Paid", date!(2025 - 10 - 02)),
        row("TX-98219", "Nimbus LLC", "Payout", 1200.0, "Pending", date!(2025 - 10 - 02)),
        row("TX-98177", "Aurora Bank", "Transfer", 5000.0, "Completed", date!(2025 - 10 - 01)),
        row("TX-98132", "Blue Harbor", "Refund", -140.0, "Processed", date!(2025 - 09 - 30)),
        row("TX-98118", "Skyline Co.", "Invoice", 890.0, "Paid", date!(2025 - 09 - 29)),
    ];

    Table::new(transactions_schema()?, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::geometry::{compute_arcs, compute_bar_heights};

    #[test]
    fn mock_datasets_are_well_formed() {
        let table = transactions().unwrap();
        assert_eq!(table.len(), 5);

        assert_eq!(compute_arcs(&spending_breakdown()).unwrap().len(), 4);
        for range in RevenueRange::ALL {
            let heights = compute_bar_heights(range.series()).unwrap();
            assert_eq!(heights.len(), REVENUE_LABELS.len());
        }

        let grid = spending_heatmap();
        assert_eq!(grid.bounds().unwrap(), (90.0, 1620.0));
    }
}
