use anyhow::Result;
use std::path::PathBuf;
use std::time::Instant;
use units_xlsx_to_mysql::{
    cli::{Cli, Commands},
    config::{DbConfig, DEFAULT_EXCEL_FILE},
    mapping::PROJECT_ALIASES,
    report::ConsoleReporter,
    schema::{generate_create_table, UNITS},
    writer::run_import,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Import { input, config } => {
            let start = Instant::now();
            let input = input.unwrap_or_else(|| PathBuf::from(DEFAULT_EXCEL_FILE));
            let config = DbConfig::load(config.as_deref())?;

            println!("{}", "=".repeat(80));
            println!("Units Import");
            println!("{}", "=".repeat(80));

            let mut reporter = ConsoleReporter::new();
            let stats = run_import(&input, &config, &mut reporter)?;

            let elapsed = start.elapsed();
            println!(
                "\n[SUCCESS] Imported {} of {} rows in {:.1}s",
                stats.success,
                stats.total,
                elapsed.as_secs_f64()
            );
        }

        Commands::ListProjects => {
            println!("Known project aliases:\n");
            for (alias, id) in PROJECT_ALIASES {
                println!("  {:<20} -> {}", alias, id);
            }
        }

        Commands::Schema => {
            println!("{}", generate_create_table(&UNITS));
        }
    }

    Ok(())
}
