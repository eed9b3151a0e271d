use std::process::ExitCode;

use clap::{Arg, Command};
use diesel::{Connection, PgConnection};
use portfolio_projects::{config::Config, db::seed, error::AppResult, init_tracing};
use tracing::error;

fn main() -> ExitCode {
    let matches = Command::new("seed")
        .about("Insert the sample portfolio projects")
        .arg(
            Arg::new("database-url")
                .long("database-url")
                .value_name("URL")
                .help("Database to seed (overrides DATABASE_URL)"),
        )
        .get_matches();

    let database_url = matches.get_one::<String>("database-url").map(String::as_str);
    let config = match Config::from_env_with_database_url(database_url) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    match seed_database(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Seeding failed");
            ExitCode::FAILURE
        }
    }
}

// The connection is dropped when this returns, on success and failure alike.
fn seed_database(config: &Config) -> AppResult<usize> {
    let mut conn = PgConnection::establish(&config.database_url)?;
    seed::run(&mut conn)
}
