use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::{
    charts::render_no_data,
    config::config,
    core::format,
    data,
    engine::{
        table::{FieldType, Row, SortState, Table, Value},
        EngineResult,
    },
    transactions::ExportCsvButton,
};

#[component]
pub fn TransactionsCard() -> Element {
    let body = match data::transactions() {
        Ok(table) => rsx! { TransactionsTable { table } },
        Err(err) => {
            warn!(%err, "transactions dataset rejected");
            render_no_data(&err.to_string())
        }
    };

    rsx! {
        section { class: "card card--table", {body} }
    }
}

#[derive(Clone)]
struct HeaderView {
    key: &'static str,
    label: &'static str,
    indicator: Option<&'static str>,
}

#[derive(Clone)]
struct CellView {
    class: &'static str,
    text: String,
    badge: bool,
}

#[derive(Clone)]
struct RowView {
    key: String,
    cells: Vec<CellView>,
}

type SortedView = EngineResult<(Vec<Row>, SortState)>;

#[component]
pub fn TransactionsTable(table: Table) -> Element {
    let source = use_signal(|| table);
    let sorted = use_signal(move || {
        let initial = SortState::new(config().default_sort_key.clone());
        source
            .peek()
            .sorted_by(&initial)
            .map(|rows| (rows, initial))
    });

    let (rows, state) = match sorted() {
        Ok(view) => view,
        Err(err) => {
            warn!(%err, "transactions could not be sorted");
            return render_no_data(&err.to_string());
        }
    };

    let (headers, row_views, export_schema) = {
        let table = source.read();
        let schema = table.schema();
        let headers: Vec<HeaderView> = schema
            .columns()
            .iter()
            .map(|column| HeaderView {
                key: column.key,
                label: column.label,
                indicator: (state.key == column.key).then(|| state.direction.indicator()),
            })
            .collect();

        let row_views: Vec<RowView> = rows
            .iter()
            .map(|row| RowView {
                key: table.row_key(row),
                cells: schema
                    .columns()
                    .iter()
                    .map(|column| render_cell(column.key, column.kind, row.get(column.key)))
                    .collect(),
            })
            .collect();

        (headers, row_views, schema.clone())
    };

    rsx! {
        div { class: "card__header",
            div {
                p { class: "card__eyebrow", "Recent Activity" }
                h3 { class: "card__title", "Transactions" }
            }
            ExportCsvButton { schema: export_schema, rows }
        }
        div { class: "transactions__scroll",
            table { class: "transactions",
                thead {
                    tr {
                        for header in headers.into_iter() {
                            th {
                                key: "{header.key}",
                                class: "transactions__heading",
                                onclick: move |_| request_sort(source, sorted, header.key),
                                span { class: "transactions__heading-inner",
                                    "{header.label}"
                                    if let Some(indicator) = header.indicator {
                                        span { class: "transactions__sort-indicator", "{indicator}" }
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    for row in row_views.into_iter() {
                        tr { key: "{row.key}", class: "transactions__row",
                            for cell in row.cells.into_iter() {
                                td { class: "{cell.class}",
                                    if cell.badge {
                                        span { class: "transactions__badge", "{cell.text}" }
                                    } else {
                                        "{cell.text}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn request_sort(source: Signal<Table>, mut sorted: Signal<SortedView>, key: &'static str) {
    let current = match &*sorted.peek() {
        Ok((_, state)) => state.clone(),
        Err(_) => return,
    };

    match source.peek().sort(key, &current) {
        Ok((rows, next)) => {
            debug!(key, direction = ?next.direction, "sort requested");
            sorted.set(Ok((rows, next)));
        }
        Err(err) => warn!(%err, key, "sort request rejected"),
    }
}

fn render_cell(key: &str, kind: FieldType, value: Option<&Value>) -> CellView {
    let Some(value) = value else {
        return CellView {
            class: "transactions__cell transactions__cell--muted",
            text: "—".to_string(),
            badge: false,
        };
    };

    match (kind, value.as_number()) {
        (FieldType::Number, Some(amount)) => CellView {
            class: if amount < 0.0 {
                "transactions__cell transactions__cell--negative"
            } else {
                "transactions__cell transactions__cell--positive"
            },
            text: format::format_currency(amount),
            badge: false,
        },
        (FieldType::Date, _) => CellView {
            class: "transactions__cell transactions__cell--muted",
            text: value.display(),
            badge: false,
        },
        _ => CellView {
            class: match key {
                "type" => "transactions__cell transactions__cell--muted",
                _ => "transactions__cell",
            },
            text: value.display(),
            badge: key == "status",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{table::SortDirection, EngineError};

    #[test]
    fn amounts_are_colored_by_sign() {
        let refund = render_cell("amount", FieldType::Number, Some(&Value::Number(-140.0)));
        assert_eq!(refund.text, "-$140.00");
        assert!(refund.class.ends_with("--negative"));

        let invoice = render_cell("amount", FieldType::Number, Some(&Value::Number(2450.0)));
        assert_eq!(invoice.text, "$2,450.00");
        assert!(invoice.class.ends_with("--positive"));
    }

    #[test]
    fn status_renders_as_badge() {
        let status = render_cell("status", FieldType::Text, Some(&Value::text("Paid")));
        assert!(status.badge);
        assert_eq!(status.text, "Paid");
        assert!(!render_cell("name", FieldType::Text, Some(&Value::text("Acme"))).badge);
    }

    #[test]
    fn header_clicks_go_through_the_table_sort() {
        let table = data::transactions().unwrap();
        let initial = SortState::new("date");

        let (rows, state) = table.sort("amount", &initial).unwrap();
        assert_eq!(state.direction, SortDirection::Descending);
        assert_eq!(table.row_key(&rows[0]), "TX-98177");

        let (rows, state) = table.sort("amount", &state).unwrap();
        assert_eq!(state.direction, SortDirection::Ascending);
        assert_eq!(table.row_key(&rows[0]), "TX-98132");

        assert!(matches!(
            table.sort("memo", &state),
            Err(EngineError::FieldNotFound { .. })
        ));
    }

    #[test]
    fn missing_value_renders_placeholder() {
        assert_eq!(render_cell("date", FieldType::Date, None).text, "—");
    }
}
