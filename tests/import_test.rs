//! Integration tests that drive the pipeline from a real spreadsheet file.
//!
//! Fixture workbooks are generated on the fly with rust_xlsxwriter, so the
//! spreadsheet-reading and transform tests run self-contained. The database
//! round trip needs a disposable MySQL database and is ignored by default:
//! ```sh
//! UNITS_TEST_DB=units_test cargo test --test import_test -- --ignored
//! ```

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use units_xlsx_to_mysql::source::{read_units, REQUIRED_COLUMNS};
use units_xlsx_to_mysql::transform::{transform_row, RowOutcome};

// =============================================================================
// Fixture Helpers
// =============================================================================

enum TestCell {
    Text(&'static str),
    Number(f64),
    Blank,
}
use TestCell::*;

fn write_sheet(path: &Path, header: &[&str], rows: &[Vec<TestCell>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Text(s) => {
                    sheet.write_string((r + 1) as u32, c as u16, *s).unwrap();
                }
                Number(n) => {
                    sheet.write_number((r + 1) as u32, c as u16, *n).unwrap();
                }
                Blank => {}
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Columns follow REQUIRED_COLUMNS order: Project, Unit Name, Usage Type,
/// BUA, Garden Area, Roof Area, Floor, No. of Bedrooms, Nominal Price.
fn standard_rows() -> Vec<Vec<TestCell>> {
    vec![
        // Clean row on the ground floor
        vec![
            Text("Rai"),
            Text("A12"),
            Text("Residential"),
            Number(120.0),
            Blank,
            Blank,
            Text("G"),
            Number(2.0),
            Number(1_500_000.0),
        ],
        // Project missing from the alias table
        vec![
            Text("Unknown Tower"),
            Text("B1"),
            Text("Residential"),
            Number(80.0),
            Blank,
            Blank,
            Text("1"),
            Number(1.0),
            Number(900_000.0),
        ],
        // Penthouse, no bedroom count or price
        vec![
            Text("ELAN"),
            Text("C3"),
            Text("Commercial"),
            Number(95.5),
            Number(40.0),
            Blank,
            Text("P"),
            Blank,
            Blank,
        ],
        // Non-numeric BUA fails the row
        vec![
            Text("RAI VIEWS"),
            Text("D4"),
            Text("Residential"),
            Text("abc"),
            Blank,
            Blank,
            Text("2"),
            Number(2.0),
            Number(1_000_000.0),
        ],
        // Fully blank export artifact, dropped by the reader
        vec![Blank, Blank, Blank, Blank, Blank, Blank, Blank, Blank, Blank],
    ]
}

// =============================================================================
// Spreadsheet Reading
// =============================================================================

#[test]
fn test_read_units_drops_blank_rows_and_numbers_the_rest() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("units.xlsx");
    write_sheet(&path, REQUIRED_COLUMNS, &standard_rows());

    let rows = read_units(&path).unwrap();
    assert_eq!(rows.len(), 4);
    let numbers: Vec<usize> = rows.iter().map(|r| r.row_number).collect();
    assert_eq!(numbers, vec![2, 3, 4, 5]);
}

#[test]
fn test_read_units_accepts_reordered_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("units.xlsx");
    let header = [
        "Nominal Price",
        "Project",
        "Unit Name",
        "Usage Type",
        "BUA",
        "Garden Area",
        "Roof Area",
        "Floor",
        "No. of Bedrooms",
    ];
    write_sheet(
        &path,
        &header,
        &[vec![
            Number(750_000.0),
            Text("Talala"),
            Text("T1"),
            Text("Residential"),
            Number(60.0),
            Blank,
            Blank,
            Text("3"),
            Number(1.0),
        ]],
    );

    let rows = read_units(&path).unwrap();
    assert_eq!(rows.len(), 1);

    let RowOutcome::Unit(unit) = transform_row(&rows[0]) else {
        panic!("expected a unit");
    };
    assert_eq!(unit.compound_id, 796);
    assert_eq!(unit.normal_price, Some(750_000.0));
    assert_eq!(unit.floor_number, Some(3));
}

#[test]
fn test_read_units_rejects_missing_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("units.xlsx");
    write_sheet(&path, &["Project", "Unit Name"], &[]);

    let err = read_units(&path).unwrap_err();
    assert!(err.to_string().contains("missing required columns"));
}

#[test]
fn test_read_units_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(read_units(&dir.path().join("nope.xlsx")).is_err());
}

// =============================================================================
// Transform Outcomes
// =============================================================================

#[test]
fn test_transform_outcomes_over_a_realistic_sheet() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("units.xlsx");
    write_sheet(&path, REQUIRED_COLUMNS, &standard_rows());

    let rows = read_units(&path).unwrap();
    let outcomes: Vec<RowOutcome> = rows.iter().map(transform_row).collect();

    let RowOutcome::Unit(first) = &outcomes[0] else {
        panic!("row 2 should import");
    };
    assert_eq!(first.compound_id, 719);
    assert_eq!(first.floor_number, Some(0));
    assert_eq!(first.garden_area, None);

    let RowOutcome::Skipped(diagnostic) = &outcomes[1] else {
        panic!("row 3 should be skipped");
    };
    assert_eq!(diagnostic, "Row 3: Project 'Unknown Tower' not found");

    let RowOutcome::Unit(penthouse) = &outcomes[2] else {
        panic!("row 4 should import");
    };
    assert_eq!(penthouse.compound_id, 571);
    assert_eq!(penthouse.floor_number, Some(-2));
    assert_eq!(penthouse.number_of_beds, None);
    assert_eq!(penthouse.normal_price, None);

    let RowOutcome::Failed(diagnostic) = &outcomes[3] else {
        panic!("row 5 should fail");
    };
    assert!(diagnostic.starts_with("Row 5:"));
    assert!(diagnostic.contains("BUA"));
}

// =============================================================================
// Database Round Trip (ignored unless a test database is provided)
// =============================================================================

mod db {
    use super::*;
    use mysql::prelude::Queryable;
    use units_xlsx_to_mysql::config::DbConfig;
    use units_xlsx_to_mysql::report::SilentReporter;
    use units_xlsx_to_mysql::schema::{generate_create_table, UNITS};
    use units_xlsx_to_mysql::writer::run_import;

    /// Build a config for the disposable test database named by UNITS_TEST_DB;
    /// host/user/password can be overridden the same way.
    fn test_config() -> Option<DbConfig> {
        let database = std::env::var("UNITS_TEST_DB").ok()?;
        let mut config = DbConfig {
            database,
            ..DbConfig::default()
        };
        if let Ok(host) = std::env::var("UNITS_TEST_DB_HOST") {
            config.host = host;
        }
        if let Ok(user) = std::env::var("UNITS_TEST_DB_USER") {
            config.user = user;
        }
        if let Ok(password) = std::env::var("UNITS_TEST_DB_PASSWORD") {
            config.password = password;
        }
        Some(config)
    }

    #[test]
    #[ignore = "needs a disposable MySQL database; set UNITS_TEST_DB"]
    fn test_import_round_trip() {
        let config = test_config().expect("UNITS_TEST_DB must name a disposable test database");

        let mut conn = mysql::Conn::new(config.opts()).expect("failed to connect to test database");
        conn.query_drop("DROP TABLE IF EXISTS units").unwrap();
        conn.query_drop(generate_create_table(&UNITS)).unwrap();
        drop(conn);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("units.xlsx");
        write_sheet(&path, REQUIRED_COLUMNS, &standard_rows());

        let mut reporter = SilentReporter::new();
        let stats = run_import(&path, &config, &mut reporter).unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.success, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.failed, 1);

        let mut conn = mysql::Conn::new(config.opts()).unwrap();
        let count: Option<u64> = conn.query_first("SELECT COUNT(*) FROM units").unwrap();
        assert_eq!(count, Some(2));

        let row: Option<(Option<i64>, Option<String>, i64)> = conn
            .query_first(
                "SELECT floor_number, unit_name_ar, available FROM units WHERE compound_id = 719",
            )
            .unwrap();
        let (floor, name_ar, available) = row.expect("the Rai unit should be inserted");
        assert_eq!(floor, Some(0));
        assert_eq!(name_ar.as_deref(), Some("A12"));
        assert_eq!(available, 1);
    }
}
