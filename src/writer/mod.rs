mod mysql;

pub use mysql::{run_import, UnitWriter, COMMIT_INTERVAL};
