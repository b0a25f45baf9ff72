//! Per-row transformation from a [`SourceRow`] into a persistable unit record.

use anyhow::Result;
use chrono::{Datelike, NaiveDateTime, Timelike};
use mysql::Value;

use crate::mapping::{compound_id_for, parse_floor};
use crate::source::SourceRow;

/// Insert defaults for freshly imported units
pub const DEFAULT_AVAILABLE: bool = true;
pub const DEFAULT_IS_SOLD: bool = false;
pub const DEFAULT_STATUS: &str = "in_progress";

/// A unit ready for insertion.
///
/// The bilingual name/usage columns are not stored here; the same source
/// string is written to the base, `_en`, and `_ar` columns at bind time. That
/// mirrors the source data, which carries no translations.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitRecord {
    pub compound_id: i64,
    pub unit_name: Option<String>,
    /// Raw project string, denormalized onto the unit row
    pub compound_name: String,
    pub usage_type: Option<String>,
    pub built_up_area: Option<f64>,
    pub garden_area: Option<f64>,
    pub roof_area: Option<f64>,
    pub floor_number: Option<i64>,
    pub number_of_beds: Option<i64>,
    pub normal_price: Option<f64>,
}

impl UnitRecord {
    /// Bind values in insert-column order (see `schema::column_names`),
    /// expanding bilingual columns and appending the fixed defaults and the
    /// run timestamp.
    pub fn insert_values(&self, now: NaiveDateTime) -> Vec<Value> {
        let created_at = datetime(now);

        let mut values = Vec::with_capacity(19);
        values.push(Value::Int(self.compound_id));
        push_bilingual(&mut values, self.unit_name.as_deref());
        values.push(opt_text(Some(&self.compound_name)));
        push_bilingual(&mut values, self.usage_type.as_deref());
        values.push(opt_real(self.built_up_area));
        values.push(opt_real(self.garden_area));
        values.push(opt_real(self.roof_area));
        values.push(opt_int(self.floor_number));
        values.push(opt_int(self.number_of_beds));
        values.push(opt_real(self.normal_price));
        values.push(Value::Int(DEFAULT_AVAILABLE as i64));
        values.push(Value::Int(DEFAULT_IS_SOLD as i64));
        values.push(opt_text(Some(DEFAULT_STATUS)));
        values.push(created_at.clone());
        values.push(created_at);
        values
    }
}

/// Result of transforming one source row
#[derive(Debug)]
pub enum RowOutcome {
    Unit(UnitRecord),
    /// Project name has no mapping entry; diagnostic cites the row
    Skipped(String),
    /// Field coercion failed; diagnostic cites the row
    Failed(String),
}

/// Transform one source row, resolving the project and coercing each field.
pub fn transform_row(row: &SourceRow) -> RowOutcome {
    let raw_project = row.project.as_text().unwrap_or_default();

    let Some(compound_id) = compound_id_for(&raw_project) else {
        return RowOutcome::Skipped(format!(
            "Row {}: Project '{}' not found",
            row.row_number, raw_project
        ));
    };

    match build_record(row, compound_id, &raw_project) {
        Ok(unit) => RowOutcome::Unit(unit),
        Err(e) => RowOutcome::Failed(format!("Row {}: {}", row.row_number, e)),
    }
}

/// Coerce the row's fields. The first bad cell fails the whole row; empty
/// cells become NULL.
fn build_record(row: &SourceRow, compound_id: i64, project: &str) -> Result<UnitRecord> {
    Ok(UnitRecord {
        compound_id,
        unit_name: row.unit_name.as_text(),
        compound_name: project.to_string(),
        usage_type: row.usage_type.as_text(),
        built_up_area: row.bua.to_f64("BUA")?,
        garden_area: row.garden_area.to_f64("Garden Area")?,
        roof_area: row.roof_area.to_f64("Roof Area")?,
        floor_number: row.floor.as_text().and_then(|s| parse_floor(&s)),
        number_of_beds: row.bedrooms.to_i64("No. of Bedrooms")?,
        normal_price: row.price.to_f64("Nominal Price")?,
    })
}

fn push_bilingual(values: &mut Vec<Value>, text: Option<&str>) {
    // base, _en, _ar all carry the same source string
    for _ in 0..3 {
        values.push(opt_text(text));
    }
}

fn opt_text(value: Option<&str>) -> Value {
    value.map(Value::from).unwrap_or(Value::NULL)
}

fn opt_real(value: Option<f64>) -> Value {
    value.map(Value::Double).unwrap_or(Value::NULL)
}

fn opt_int(value: Option<i64>) -> Value {
    value.map(Value::Int).unwrap_or(Value::NULL)
}

fn datetime(dt: NaiveDateTime) -> Value {
    Value::Date(
        dt.year() as u16,
        dt.month() as u8,
        dt.day() as u8,
        dt.hour() as u8,
        dt.minute() as u8,
        dt.second() as u8,
        dt.nanosecond() / 1000,
    )
}
