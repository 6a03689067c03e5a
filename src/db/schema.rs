pub const CREATE_EMPLOYEES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT NOT NULL,
    birth_date TEXT NOT NULL,
    gender TEXT NOT NULL
)
"#;

pub const SEARCH_INDEX_NAME: &str = "idx_gender_lastname";

/// Composite index serving the gender + name-prefix search.
pub const CREATE_SEARCH_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_gender_lastname
ON employees(gender, full_name)
"#;

pub const INSERT_EMPLOYEE: &str =
    "INSERT INTO employees (full_name, birth_date, gender) VALUES (?, ?, ?)";

pub const BATCH_INSERT_PREFIX: &str = "INSERT INTO employees (full_name, birth_date, gender) ";

// Grouping on (full_name, birth_date) only: rows differing just in gender
// collapse into one, and SQLite reports the gender of an arbitrary member.
pub const SELECT_UNIQUE_EMPLOYEES: &str = r#"
SELECT full_name, birth_date, gender
FROM employees
GROUP BY full_name, birth_date
ORDER BY full_name
"#;

pub const SELECT_MALE_F_LASTNAME: &str = r#"
SELECT full_name, birth_date, gender
FROM employees
WHERE gender = 'Male' AND full_name LIKE 'F%'
"#;

pub const COUNT_EMPLOYEES: &str = "SELECT COUNT(*) FROM employees";

pub const SELECT_INDEX_NAMES: &str =
    "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'employees' ORDER BY name";
