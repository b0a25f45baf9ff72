//! Load unit rows from the availability spreadsheet.

use anyhow::{bail, Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use log::debug;
use std::path::Path;

use super::cell::Cell;

/// Header columns the first worksheet must carry
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Project",
    "Unit Name",
    "Usage Type",
    "BUA",
    "Garden Area",
    "Roof Area",
    "Floor",
    "No. of Bedrooms",
    "Nominal Price",
];

/// One spreadsheet row, cells still untyped beyond [`Cell`].
///
/// `row_number` is the row as a spreadsheet user would cite it: 1-based, with
/// the header on row 1, so the first data row is 2.
#[derive(Debug, Clone)]
pub struct SourceRow {
    pub row_number: usize,
    pub project: Cell,
    pub unit_name: Cell,
    pub usage_type: Cell,
    pub bua: Cell,
    pub garden_area: Cell,
    pub roof_area: Cell,
    pub floor: Cell,
    pub bedrooms: Cell,
    pub price: Cell,
}

impl SourceRow {
    fn is_blank(&self) -> bool {
        self.project.is_empty()
            && self.unit_name.is_empty()
            && self.usage_type.is_empty()
            && self.bua.is_empty()
            && self.garden_area.is_empty()
            && self.roof_area.is_empty()
            && self.floor.is_empty()
            && self.bedrooms.is_empty()
            && self.price.is_empty()
    }
}

#[derive(Debug)]
struct ColumnIndices {
    project: usize,
    unit_name: usize,
    usage_type: usize,
    bua: usize,
    garden_area: usize,
    roof_area: usize,
    floor: usize,
    bedrooms: usize,
    price: usize,
}

fn parse_header(header: &[Data]) -> Result<ColumnIndices> {
    let find = |name: &str| {
        header.iter().position(|cell| match cell {
            Data::String(s) => s.trim() == name,
            _ => false,
        })
    };

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| find(name).is_none())
        .collect();
    if !missing.is_empty() {
        bail!("spreadsheet is missing required columns: {}", missing.join(", "));
    }

    // All lookups succeed past the check above
    Ok(ColumnIndices {
        project: find("Project").unwrap(),
        unit_name: find("Unit Name").unwrap(),
        usage_type: find("Usage Type").unwrap(),
        bua: find("BUA").unwrap(),
        garden_area: find("Garden Area").unwrap(),
        roof_area: find("Roof Area").unwrap(),
        floor: find("Floor").unwrap(),
        bedrooms: find("No. of Bedrooms").unwrap(),
        price: find("Nominal Price").unwrap(),
    })
}

fn cell_at(row: &[Data], index: usize) -> Cell {
    row.get(index).map(Cell::from_data).unwrap_or(Cell::Empty)
}

/// Read all unit rows from the first worksheet of the spreadsheet.
///
/// Fully blank rows (a common artifact at the bottom of exported sheets) are
/// dropped; everything else is returned for the transformer to judge.
pub fn read_units(path: &Path) -> Result<Vec<SourceRow>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .context("Excel file has no sheets")?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    let mut rows = range.rows();
    let header = rows.next().context("Sheet has no header row")?;
    let columns = parse_header(header)?;
    debug!("resolved header columns: {:?}", columns);

    let units: Vec<SourceRow> = rows
        .enumerate()
        .map(|(idx, row)| SourceRow {
            row_number: idx + 2,
            project: cell_at(row, columns.project),
            unit_name: cell_at(row, columns.unit_name),
            usage_type: cell_at(row, columns.usage_type),
            bua: cell_at(row, columns.bua),
            garden_area: cell_at(row, columns.garden_area),
            roof_area: cell_at(row, columns.roof_area),
            floor: cell_at(row, columns.floor),
            bedrooms: cell_at(row, columns.bedrooms),
            price: cell_at(row, columns.price),
        })
        .filter(|row| !row.is_blank())
        .collect();

    Ok(units)
}
