use std::io::IsTerminal;

use clap::Parser;
use tracing::{Level, error, info};

use pet_meals::demo::{self, OutputFormat};
use pet_meals::schema::initialize_schema;
use pet_meals::sqlite::SqliteOptions;
use pet_meals::sqlite::config::DEFAULT_DB_PATH;

#[derive(Parser, Debug)]
#[command(author, version, about = "Seed and exercise the pets/meals SQLite database")]
struct Args {
    /// Database file; created if missing
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    db: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Tuples)]
    format: OutputFormat,
    /// Enforce the meals -> pets foreign key
    #[arg(long)]
    foreign_keys: bool,
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_max_level(args.log_level)
        .init();

    let opts = SqliteOptions::builder(args.db)
        .foreign_keys(args.foreign_keys)
        .finish();
    let conn = match pet_meals::SqliteConnection::open_with(&opts) {
        Ok(conn) => conn,
        Err(e) => {
            error!("{e}");
            return;
        }
    };

    if let Err(e) = initialize_schema(&conn) {
        error!("{e}");
    }

    let mut stdout = std::io::stdout().lock();
    match demo::run(&conn, &mut stdout, args.format) {
        Ok(report) => info!(seeded = report.inserted.len(), "demo finished"),
        Err(e) => error!("{e}"),
    }
    drop(stdout);

    if let Err(e) = conn.close() {
        error!("{e}");
    }
}
