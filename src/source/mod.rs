pub mod cell;
pub mod sheet;

pub use cell::Cell;
pub use sheet::{read_units, SourceRow, REQUIRED_COLUMNS};
