//! Static description of the `units` table.
//!
//! The schema drives both the insert column list used by the writer and the
//! `CREATE TABLE` DDL printed by the `schema` subcommand. Bilingual columns
//! expand to three physical columns (base, `_en`, `_ar`); the importer writes
//! the same source string into all three.

/// Language suffixes for bilingual text columns
pub const LANGUAGES: &[&str] = &["en", "ar"];

/// Column data type, mapped to MySQL types in the generated DDL
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    Integer,
    /// DECIMAL with (precision, scale)
    Decimal(u8, u8),
    Text,
    /// Expands to base, `_en`, and `_ar` text columns
    Bilingual,
    Boolean,
    DateTime,
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColumnType,
    pub nullable: bool,
}

impl Column {
    /// Create an optional (nullable) column
    pub const fn new(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: true,
        }
    }

    /// Create a required (non-nullable) column
    pub const fn required(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: false,
        }
    }
}

/// Foreign key reference
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
}

/// Table schema definition
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub foreign_keys: &'static [ForeignKey],
}

/// The `units` table, in insert order
pub static UNITS: TableSchema = TableSchema {
    name: "units",
    columns: &[
        Column::required("compound_id", ColumnType::Integer),
        Column::new("unit_name", ColumnType::Bilingual),
        Column::new("compound_name", ColumnType::Text),
        Column::new("usage_type", ColumnType::Bilingual),
        Column::new("built_up_area", ColumnType::Decimal(10, 2)),
        Column::new("garden_area", ColumnType::Decimal(10, 2)),
        Column::new("roof_area", ColumnType::Decimal(10, 2)),
        Column::new("floor_number", ColumnType::Integer),
        Column::new("number_of_beds", ColumnType::Integer),
        Column::new("normal_price", ColumnType::Decimal(15, 2)),
        Column::required("available", ColumnType::Boolean),
        Column::required("is_sold", ColumnType::Boolean),
        Column::new("status", ColumnType::Text),
        Column::new("created_at", ColumnType::DateTime),
        Column::new("updated_at", ColumnType::DateTime),
    ],
    foreign_keys: &[ForeignKey {
        column: "compound_id",
        references_table: "compounds",
        references_column: "id",
    }],
};

/// Physical column names for a schema, expanding bilingual columns
pub fn column_names(schema: &TableSchema) -> Vec<String> {
    let mut columns = Vec::new();

    for col in schema.columns {
        match col.col_type {
            ColumnType::Bilingual => {
                columns.push(col.name.to_string());
                for lang in LANGUAGES {
                    columns.push(format!("{}_{}", col.name, lang));
                }
            }
            _ => {
                columns.push(col.name.to_string());
            }
        }
    }

    columns
}

/// Generate CREATE TABLE SQL for a table schema
pub fn generate_create_table(schema: &TableSchema) -> String {
    let mut sql = format!("CREATE TABLE {} (\n", schema.name);
    let mut columns = vec!["    id BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY".to_string()];

    for col in schema.columns {
        match col.col_type {
            ColumnType::Bilingual => {
                columns.push(format!("    {} VARCHAR(255)", col.name));
                for lang in LANGUAGES {
                    columns.push(format!("    {}_{} VARCHAR(255)", col.name, lang));
                }
            }
            _ => {
                let sql_type = match col.col_type {
                    ColumnType::Integer => "INT".to_string(),
                    ColumnType::Decimal(precision, scale) => {
                        format!("DECIMAL({},{})", precision, scale)
                    }
                    ColumnType::Text => "VARCHAR(255)".to_string(),
                    ColumnType::Boolean => "TINYINT(1)".to_string(),
                    ColumnType::DateTime => "DATETIME".to_string(),
                    ColumnType::Bilingual => unreachable!(),
                };

                let null_constraint = if !col.nullable { " NOT NULL" } else { "" };
                columns.push(format!("    {} {}{}", col.name, sql_type, null_constraint));
            }
        }
    }

    for fk in schema.foreign_keys {
        columns.push(format!(
            "    FOREIGN KEY ({}) REFERENCES {} ({})",
            fk.column, fk.references_table, fk.references_column
        ));
    }

    sql.push_str(&columns.join(",\n"));
    sql.push_str("\n) DEFAULT CHARSET=utf8mb4");

    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names_expand_bilingual() {
        let names = column_names(&UNITS);
        assert_eq!(names.len(), 19);
        assert_eq!(names[0], "compound_id");
        assert_eq!(names[1], "unit_name");
        assert_eq!(names[2], "unit_name_en");
        assert_eq!(names[3], "unit_name_ar");
        assert_eq!(names[4], "compound_name");
        assert_eq!(names[18], "updated_at");
    }

    #[test]
    fn test_generate_create_table() {
        let sql = generate_create_table(&UNITS);
        assert!(sql.contains("CREATE TABLE units"));
        assert!(sql.contains("unit_name_ar VARCHAR(255)"));
        assert!(sql.contains("normal_price DECIMAL(15,2)"));
        assert!(sql.contains("available TINYINT(1) NOT NULL"));
        assert!(sql.contains("FOREIGN KEY (compound_id) REFERENCES compounds (id)"));
    }
}
