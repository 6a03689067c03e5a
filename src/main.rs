mod cli;
mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod utils;

use std::io::{self, Write};
use std::process;

use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, warn};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::db::EmployeeStore;
use crate::errors::AppResult;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let command = Command::from_cli(&Cli::parse());

    if let Err(err) = execute(command).await {
        error!("{}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn execute(command: Command) -> AppResult<()> {
    let mut out = io::stdout();

    if !command.needs_store() {
        return handlers::respond_without_store(&command, &mut out);
    }

    let config = Config::from_env()?;
    run(command, &config, &mut out).await
}

async fn run<W: Write>(command: Command, config: &Config, out: &mut W) -> AppResult<()> {
    let mut store = EmployeeStore::connect(&config.database_url).await?;

    // The store is closed on every path, including a failed dispatch.
    let result = handlers::dispatch(&mut store, command, config, out).await;
    let closed = store.close().await;

    match (result, closed) {
        (Err(err), Err(close_err)) => {
            warn!("Closing the database also failed: {}", close_err);
            Err(err)
        }
        (result, closed) => result.and(closed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::employee::Employee;

    fn file_config(dir: &tempfile::TempDir) -> Config {
        Config {
            database_url: format!("sqlite://{}", dir.path().join("employees.db").display()),
            batch_size: 100,
        }
    }

    #[tokio::test]
    async fn test_failed_operation_still_releases_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = file_config(&dir);
        let mut out = Vec::new();

        // No table yet, so listing fails inside the store.
        let err = run(Command::ListUnique, &config, &mut out).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
        assert!(out.is_empty());

        let mut store = EmployeeStore::connect(&config.database_url).await.unwrap();
        store.create_table().await.unwrap();
        store
            .add_employee(&Employee::new("Ford Henry A.", "1980-05-15", "Male").unwrap())
            .await
            .unwrap();
        assert_eq!(store.count_employees().await.unwrap(), 1);
        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_run_modes_against_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = file_config(&dir);
        let mut out = Vec::new();

        run(Command::CreateTable, &config, &mut out).await.unwrap();
        run(
            Command::AddEmployee {
                full_name: "Ford Henry A.".to_string(),
                birth_date: "1980-05-15".to_string(),
                gender: "Male".to_string(),
            },
            &config,
            &mut out,
        )
        .await
        .unwrap();
        run(Command::ListUnique, &config, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Ford Henry A., 1980-05-15, Male, age="));
    }
}
