//! Schema-typed, stable sorting for tabular datasets.
//!
//! A [`Schema`] declares every column and its [`FieldType`] up front, and a
//! [`Table`] refuses rows that disagree with it. The comparator therefore only
//! ever sees values of the declared type for a column.
//!
//! Sorting follows the table-header convention used across the dashboard:
//! clicking the active column flips its direction, clicking another column
//! switches to it and starts over at [`SortDirection::Descending`].

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use time::{macros::format_description, Date};

use super::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Number,
    Date,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
        };
        f.write_str(label)
    }
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Date(Date),
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Text(_) => FieldType::Text,
            Value::Number(_) => FieldType::Number,
            Value::Date(_) => FieldType::Date,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Plain rendering used for keys, CSV cells and untyped table cells.
    pub fn display(&self) -> String {
        match self {
            Value::Text(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Date(date) => date
                .format(&format_description!("[year]-[month]-[day]"))
                .unwrap_or_else(|_| "—".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldType,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldType) -> Self {
        Self { key, label, kind }
    }
}

/// Static column declaration plus the field that identifies a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    key_field: &'static str,
    columns: Vec<Column>,
}

impl Schema {
    /// `key_field` must name one of `columns`.
    pub fn new(key_field: &'static str, columns: Vec<Column>) -> EngineResult<Self> {
        if !columns.iter().any(|column| column.key == key_field) {
            return Err(EngineError::field_not_found(key_field));
        }
        Ok(Self { key_field, columns })
    }

    pub fn key_field(&self) -> &'static str {
        self.key_field
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> EngineResult<&Column> {
        self.columns
            .iter()
            .find(|column| column.key == key)
            .ok_or_else(|| EngineError::field_not_found(key))
    }

    /// Looks up `column` in `row`, enforcing the declared type.
    pub fn value_of<'r>(&self, row: &'r Row, column: &Column) -> EngineResult<&'r Value> {
        let value = row
            .get(column.key)
            .ok_or_else(|| EngineError::field_not_found(column.key))?;

        let actual = value.field_type();
        if actual != column.kind {
            return Err(EngineError::TypeMismatch {
                field: column.key.to_string(),
                expected: column.kind,
                actual,
            });
        }

        Ok(value)
    }

    fn validate(&self, row: &Row) -> EngineResult<()> {
        for column in &self.columns {
            self.value_of(row, column)?;
        }
        Ok(())
    }
}

/// Named fields in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a repeated name replaces the earlier value.
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header glyph for the active column.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    /// Initial state for `key`; every column starts out descending.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::default(),
        }
    }

    /// State after the user asks to sort by `key`.
    pub fn toggled(&self, key: &str) -> Self {
        if self.key == key {
            Self {
                key: self.key.clone(),
                direction: self.direction.flipped(),
            }
        } else {
            Self::new(key)
        }
    }
}

/// Sorts `rows` by `key`, toggling `current` per the header-click rule.
///
/// Returns the reordered copy together with the state it was sorted under.
/// The input slice is left untouched.
pub fn sort(
    schema: &Schema,
    rows: &[Row],
    key: &str,
    current: &SortState,
) -> EngineResult<(Vec<Row>, SortState)> {
    let column = schema.column(key)?;
    let next = current.toggled(column.key);
    let sorted = sort_by_state(schema, rows, &next)?;
    Ok((sorted, next))
}

/// Orders `rows` under an already-decided `state` without toggling it.
pub fn sort_by_state(schema: &Schema, rows: &[Row], state: &SortState) -> EngineResult<Vec<Row>> {
    let column = schema.column(&state.key)?;

    // Resolve every key up front so a bad row fails the whole call instead of
    // surfacing halfway through the comparator.
    let mut keyed = rows
        .iter()
        .map(|row| schema.value_of(row, column).map(|value| (value, row)))
        .collect::<EngineResult<Vec<_>>>()?;

    // `sort_by` is stable; reversing the comparator rather than the output
    // keeps ties in input order for both directions.
    keyed.sort_by(|(a, _), (b, _)| state.direction.apply(compare_values(a, b)));

    Ok(keyed.into_iter().map(|(_, row)| row.clone()).collect())
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => collate(a, b),
        // Schema checks rule this out; rank by type so the order stays total.
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Number(_) => 0,
        Value::Date(_) => 1,
        Value::Text(_) => 2,
    }
}

/// Case-insensitive ordering; on case-only differences lowercase sorts first.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Rows validated against a schema, with unique key-field values.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    schema: Schema,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(schema: Schema, rows: Vec<Row>) -> EngineResult<Self> {
        let key_column = schema.column(schema.key_field())?.clone();
        let mut seen = HashSet::with_capacity(rows.len());

        for row in &rows {
            schema.validate(row)?;
            let key = schema.value_of(row, &key_column)?.display();
            if !seen.insert(key.clone()) {
                return Err(EngineError::DuplicateRowKey { key });
            }
        }

        Ok(Self { schema, rows })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sort(&self, key: &str, current: &SortState) -> EngineResult<(Vec<Row>, SortState)> {
        sort(&self.schema, &self.rows, key, current)
    }

    pub fn sorted_by(&self, state: &SortState) -> EngineResult<Vec<Row>> {
        sort_by_state(&self.schema, &self.rows, state)
    }

    /// Display form of a row's identifying field.
    pub fn row_key(&self, row: &Row) -> String {
        row.get(self.schema.key_field())
            .map(Value::display)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn ledger_schema() -> Schema {
        Schema::new(
            "id",
            vec![
                Column::new("id", "ID", FieldType::Text),
                Column::new("amt", "Amount", FieldType::Number),
            ],
        )
        .unwrap()
    }

    fn ledger_row(id: &str, amt: f64) -> Row {
        Row::new()
            .with("id", Value::text(id))
            .with("amt", Value::Number(amt))
    }

    fn ids(rows: &[Row]) -> Vec<String> {
        rows.iter()
            .map(|row| row.get("id").unwrap().display())
            .collect()
    }

    #[test]
    fn toggle_flips_same_key_and_resets_new_key() {
        let state = SortState::new("amt");
        assert_eq!(state.direction, SortDirection::Descending);

        let flipped = state.toggled("amt");
        assert_eq!(flipped.direction, SortDirection::Ascending);

        let switched = flipped.toggled("id");
        assert_eq!(switched.key, "id");
        assert_eq!(switched.direction, SortDirection::Descending);
    }

    #[test]
    fn descending_sort_keeps_ties_in_input_order() {
        let schema = ledger_schema();
        let rows = vec![
            ledger_row("A", 10.0),
            ledger_row("B", 30.0),
            ledger_row("C", 10.0),
        ];

        let (sorted, state) = sort(&schema, &rows, "amt", &SortState::new("id")).unwrap();
        assert_eq!(state, SortState::new("amt"));
        assert_eq!(ids(&sorted), ["B", "A", "C"]);

        let ascending = sort_by_state(
            &schema,
            &rows,
            &SortState {
                key: "amt".into(),
                direction: SortDirection::Ascending,
            },
        )
        .unwrap();
        assert_eq!(ids(&ascending), ["A", "C", "B"]);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let schema = ledger_schema();
        let rows = vec![ledger_row("A", 1.0)];
        let err = sort(&schema, &rows, "missing", &SortState::new("id")).unwrap_err();
        assert_eq!(
            err,
            EngineError::FieldNotFound {
                field: "missing".into()
            }
        );
    }

    #[test]
    fn text_collation_ignores_case() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn dates_sort_chronologically() {
        let schema = Schema::new(
            "id",
            vec![
                Column::new("id", "ID", FieldType::Text),
                Column::new("date", "Date", FieldType::Date),
            ],
        )
        .unwrap();
        let rows = vec![
            Row::new()
                .with("id", Value::text("late"))
                .with("date", Value::Date(date!(2025 - 10 - 02))),
            Row::new()
                .with("id", Value::text("early"))
                .with("date", Value::Date(date!(2025 - 09 - 29))),
        ];
        let table = Table::new(schema, rows).unwrap();

        let sorted = table
            .sorted_by(&SortState {
                key: "date".into(),
                direction: SortDirection::Ascending,
            })
            .unwrap();
        assert_eq!(ids(&sorted), ["early", "late"]);
    }

    #[test]
    fn table_rejects_mismatched_missing_and_duplicate_rows() {
        let mismatched = Row::new()
            .with("id", Value::text("A"))
            .with("amt", Value::text("ten"));
        assert_eq!(
            Table::new(ledger_schema(), vec![mismatched]).unwrap_err(),
            EngineError::TypeMismatch {
                field: "amt".into(),
                expected: FieldType::Number,
                actual: FieldType::Text,
            }
        );

        let missing = Row::new().with("id", Value::text("A"));
        assert!(matches!(
            Table::new(ledger_schema(), vec![missing]),
            Err(EngineError::FieldNotFound { .. })
        ));

        let duplicate = vec![ledger_row("A", 1.0), ledger_row("A", 2.0)];
        assert_eq!(
            Table::new(ledger_schema(), duplicate).unwrap_err(),
            EngineError::DuplicateRowKey { key: "A".into() }
        );
    }

    #[test]
    fn schema_requires_declared_key_field() {
        let err = Schema::new("id", vec![Column::new("amt", "Amount", FieldType::Number)]);
        assert!(matches!(err, Err(EngineError::FieldNotFound { .. })));
    }

    #[test]
    fn row_with_replaces_existing_field() {
        let row = Row::new()
            .with("id", Value::text("A"))
            .with("id", Value::text("B"));
        assert_eq!(row.fields().count(), 1);
        assert_eq!(row.get("id"), Some(&Value::text("B")));
    }
}
