use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::platform::Platform;
use crate::engine::table::{Row, Schema};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

/// Exports `rows` in their current order.
#[component]
pub fn ExportCsvButton(schema: Schema, rows: Vec<Row>) -> Element {
    let mut status = use_signal(|| ExportStatus::Idle);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Done(message) => Some((
            "export__status export__status--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "export__status export__status--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let csv_handler = move |_| {
        let outcome = perform_csv_export(&schema, &rows);
        match outcome {
            Ok(message) => {
                info!(%message, platform = Platform::current().label(), "csv export finished");
                status.set(ExportStatus::Done(message));
            }
            Err(err) => {
                warn!(%err, "csv export failed");
                status.set(ExportStatus::Error(err));
            }
        }
    };

    rsx! {
        div { class: "export",
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: csv_handler,
                "Export CSV"
            }
            if let Some((class_name, message)) = feedback {
                span { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn perform_csv_export(schema: &Schema, rows: &[Row]) -> Result<String, String> {
    let csv = build_csv(schema, rows);
    let filename = format!("finsight-transactions-{}.csv", export_stamp());
    Ok(match save_csv(&filename, &csv)? {
        Some(path) => format!("CSV saved to {}", path.display()),
        None => "CSV download started".to_string(),
    })
}

/// Header row of column labels, then one line per row in the given order.
pub fn build_csv(schema: &Schema, rows: &[Row]) -> String {
    let columns = schema.columns();
    let mut csv = String::new();

    push_record(&mut csv, columns.iter().map(|column| column.label.to_string()));
    for row in rows {
        push_record(
            &mut csv,
            columns.iter().map(|column| {
                row.get(column.key)
                    .map(|value| value.display())
                    .unwrap_or_default()
            }),
        );
    }

    csv
}

fn push_record(csv: &mut String, fields: impl Iterator<Item = String>) {
    let record = fields
        .map(|field| escape_csv(&field))
        .collect::<Vec<_>>()
        .join(",");
    csv.push_str(&record);
    csv.push('\n');
}

fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn export_stamp() -> String {
    use time::{macros::format_description, OffsetDateTime};

    let stamp = format_description!("[year][month][day]-[hour][minute][second]");
    OffsetDateTime::now_utc()
        .format(&stamp)
        .unwrap_or_else(|_| "latest".to_string())
}

/// Browser builds hand the file to a download link; native builds write it
/// under the app's data directory and return the path.
#[cfg(target_arch = "wasm32")]
fn save_csv(filename: &str, csv: &str) -> Result<Option<std::path::PathBuf>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(csv));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "could not build the CSV blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "could not create a download URL".to_string())?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no document to attach the download to")?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into().ok())
        .ok_or("could not create a download link")?;
    link.set_href(&url);
    link.set_download(filename);
    link.click();
    Url::revoke_object_url(&url).ok();

    Ok(None)
}

#[cfg(not(target_arch = "wasm32"))]
fn save_csv(filename: &str, csv: &str) -> Result<Option<std::path::PathBuf>, String> {
    let dirs = directories::ProjectDirs::from("com", "FinSight", "FinSight")
        .ok_or("no home directory to export into")?;
    let dir = dirs.data_dir().join("exports");
    std::fs::create_dir_all(&dir).map_err(|err| err.to_string())?;

    let path = dir.join(filename);
    std::fs::write(&path, csv).map_err(|err| err.to_string())?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::table::{Column, FieldType, Value};

    fn schema() -> Schema {
        Schema::new(
            "id",
            vec![
                Column::new("id", "ID", FieldType::Text),
                Column::new("name", "Counterparty", FieldType::Text),
                Column::new("amount", "Amount", FieldType::Number),
            ],
        )
        .unwrap()
    }

    #[test]
    fn csv_has_label_header_and_rows_in_order() {
        let rows = vec![
            Row::new()
                .with("id", Value::text("TX-2"))
                .with("name", Value::text("Nimbus LLC"))
                .with("amount", Value::Number(1200.0)),
            Row::new()
                .with("id", Value::text("TX-1"))
                .with("name", Value::text("Blue Harbor"))
                .with("amount", Value::Number(-140.5)),
        ];

        let csv = build_csv(&schema(), &rows);
        assert_eq!(
            csv,
            "ID,Counterparty,Amount\nTX-2,Nimbus LLC,1200\nTX-1,Blue Harbor,-140.5\n"
        );
    }

    #[test]
    fn csv_quotes_commas_and_quotes() {
        assert_eq!(escape_csv("Acme, Inc."), "\"Acme, Inc.\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_csv(""), "");
    }
}
