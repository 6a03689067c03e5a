pub mod employee;

use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::{Command, USAGE};
use crate::config::Config;
use crate::db::EmployeeStore;
use crate::errors::AppResult;

/// Output for commands that never touch the database.
pub fn respond_without_store<W: Write>(command: &Command, out: &mut W) -> AppResult<()> {
    match command {
        Command::Usage => writeln!(out, "{}", USAGE)?,
        Command::ModeUsage(usage) => writeln!(out, "{}", usage)?,
        Command::Unknown(mode) => writeln!(out, "Unknown mode: {}", mode)?,
        _ => {}
    }
    Ok(())
}

pub async fn dispatch<W: Write>(
    store: &mut EmployeeStore,
    command: Command,
    config: &Config,
    out: &mut W,
) -> AppResult<()> {
    match command {
        Command::CreateTable => employee::create_table(store, out).await,
        Command::AddEmployee { full_name, birth_date, gender } => {
            employee::add_employee(store, &full_name, &birth_date, &gender, out).await
        }
        Command::ListUnique => employee::list_unique_employees(store, out).await,
        Command::Generate { count } => {
            let mut rng = StdRng::from_entropy();
            employee::generate_random_employees(store, count, config.batch_size, &mut rng, out)
                .await
                .map(|_| ())
        }
        Command::Search => employee::search_male_f_lastname(store, out).await.map(|_| ()),
        Command::Optimize => employee::optimize_database(store, out).await,
        other => respond_without_store(&other, out),
    }
}
