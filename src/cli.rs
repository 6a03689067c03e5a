use clap::Parser;

use crate::utils::generator::DEFAULT_COUNT;

pub const USAGE: &str = "Usage: employee_directory <mode> [arguments]
Modes:
  1 - Create employee table
  2 - Add employee (requires full_name, birth_date, gender)
  3 - List all unique employees sorted by name
  4 - Generate random employees (optional count, default 1000000)
  5 - Search male employees with last names starting with F
  6 - Optimize database";

pub const ADD_EMPLOYEE_USAGE: &str =
    "Usage: employee_directory 2 \"Full Name\" \"YYYY-MM-DD\" \"Gender\"";

pub const GENERATE_USAGE: &str = "Usage: employee_directory 4 [count]";

#[derive(Parser, Debug)]
#[command(
    name = "employee_directory",
    version,
    about = "Manage a SQLite table of employee records",
    after_help = USAGE
)]
pub struct Cli {
    /// Operation mode (1-6)
    #[arg(value_name = "MODE", allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Positional arguments for the selected mode
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Usage,
    /// A known mode invoked with unusable arguments.
    ModeUsage(&'static str),
    CreateTable,
    AddEmployee {
        full_name: String,
        birth_date: String,
        gender: String,
    },
    ListUnique,
    Generate { count: usize },
    Search,
    Optimize,
    Unknown(String),
}

impl Command {
    pub fn from_cli(cli: &Cli) -> Self {
        let Some(mode) = cli.mode.as_deref() else {
            return Command::Usage;
        };

        match mode {
            "1" => Command::CreateTable,
            "2" => match cli.args.as_slice() {
                [full_name, birth_date, gender, ..] => Command::AddEmployee {
                    full_name: full_name.clone(),
                    birth_date: birth_date.clone(),
                    gender: gender.clone(),
                },
                _ => Command::ModeUsage(ADD_EMPLOYEE_USAGE),
            },
            "3" => Command::ListUnique,
            "4" => match cli.args.first() {
                None => Command::Generate { count: DEFAULT_COUNT },
                Some(raw) => match raw.parse::<usize>() {
                    Ok(count) => Command::Generate { count },
                    Err(_) => Command::ModeUsage(GENERATE_USAGE),
                },
            },
            "5" => Command::Search,
            "6" => Command::Optimize,
            other => Command::Unknown(other.to_string()),
        }
    }

    pub fn needs_store(&self) -> bool {
        !matches!(self, Command::Usage | Command::ModeUsage(_) | Command::Unknown(_))
    }
}
