pub mod schema;

use std::str::FromStr;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use log::{debug, info};
use rand::Rng;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection, QueryBuilder, Sqlite};

use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, ListedEmployee};
use crate::utils::generator;

/// SQLite's default ceiling on bound parameters per statement.
const SQLITE_BIND_LIMIT: usize = 32_766;
const COLUMNS_PER_ROW: usize = 3;
const ROWS_PER_INSERT: usize = SQLITE_BIND_LIMIT / COLUMNS_PER_ROW;

#[derive(Debug)]
pub struct SearchOutcome {
    pub employees: Vec<Employee>,
    pub elapsed: Duration,
}

impl SearchOutcome {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Owns the single database connection for one invocation.
pub struct EmployeeStore {
    conn: SqliteConnection,
}

impl EmployeeStore {
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let conn = SqliteConnectOptions::from_str(database_url)
            .map_err(|err| AppError::ConnectionError(format!("{}: {}", database_url, err)))?
            .create_if_missing(true)
            .connect()
            .await
            .map_err(|err| AppError::ConnectionError(format!("{}: {}", database_url, err)))?;

        info!("Connected to {}", database_url);
        Ok(EmployeeStore { conn })
    }

    pub async fn create_table(&mut self) -> AppResult<()> {
        sqlx::query(schema::CREATE_EMPLOYEES_TABLE)
            .execute(&mut self.conn)
            .await?;
        Ok(())
    }

    pub async fn add_employee(&mut self, employee: &Employee) -> AppResult<()> {
        sqlx::query(schema::INSERT_EMPLOYEE)
            .bind(&employee.full_name)
            .bind(&employee.birth_date)
            .bind(&employee.gender)
            .execute(&mut self.conn)
            .await?;
        Ok(())
    }

    /// Inserts every row with multi-row statements and commits once.
    pub async fn batch_add_employees(&mut self, employees: &[Employee]) -> AppResult<usize> {
        if employees.is_empty() {
            return Ok(0);
        }

        let mut tx = self.conn.begin().await?;
        for chunk in employees.chunks(ROWS_PER_INSERT) {
            let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new(schema::BATCH_INSERT_PREFIX);
            builder.push_values(chunk, |mut row, employee| {
                row.push_bind(employee.full_name.as_str())
                    .push_bind(employee.birth_date.as_str())
                    .push_bind(employee.gender.as_str());
            });
            builder.build().execute(&mut *tx).await?;
        }
        tx.commit().await?;

        debug!("Committed batch of {} rows", employees.len());
        Ok(employees.len())
    }

    pub async fn list_unique_employees(&mut self) -> AppResult<Vec<ListedEmployee>> {
        self.list_unique_employees_on(Local::now().date_naive()).await
    }

    /// Grouped listing with ages computed as of `today`.
    pub async fn list_unique_employees_on(&mut self, today: NaiveDate) -> AppResult<Vec<ListedEmployee>> {
        let rows = sqlx::query_as::<_, Employee>(schema::SELECT_UNIQUE_EMPLOYEES)
            .fetch_all(&mut self.conn)
            .await?;

        rows.into_iter()
            .map(|employee| {
                let age = employee.age_on(today)?;
                Ok(ListedEmployee { employee, age })
            })
            .collect()
    }

    /// Inserts `count` random employees flushed every `batch_size` rows, then
    /// the fixed batch of F-surnamed men. `on_flush` sees the size of every
    /// committed batch. Returns the number of rows written.
    pub async fn generate_random_employees<R, F>(
        &mut self,
        count: usize,
        batch_size: usize,
        rng: &mut R,
        mut on_flush: F,
    ) -> AppResult<usize>
    where
        R: Rng + ?Sized,
        F: FnMut(usize) -> AppResult<()>,
    {
        let batch_size = batch_size.max(1);
        let mut inserted = 0;
        let mut buffer = Vec::with_capacity(batch_size.min(count));

        for _ in 0..count {
            buffer.push(generator::random_employee(rng));
            if buffer.len() >= batch_size {
                let added = self.batch_add_employees(&buffer).await?;
                on_flush(added)?;
                inserted += added;
                buffer.clear();
            }
        }
        if !buffer.is_empty() {
            let added = self.batch_add_employees(&buffer).await?;
            on_flush(added)?;
            inserted += added;
        }

        let f_batch = generator::f_surnamed_batch(rng);
        let added = self.batch_add_employees(&f_batch).await?;
        on_flush(added)?;
        inserted += added;

        debug!("Generation wrote {} rows", inserted);
        Ok(inserted)
    }

    pub async fn search_male_f_lastname(&mut self) -> AppResult<SearchOutcome> {
        let started = Instant::now();
        let employees = sqlx::query_as::<_, Employee>(schema::SELECT_MALE_F_LASTNAME)
            .fetch_all(&mut self.conn)
            .await?;
        let elapsed = started.elapsed();

        debug!("Search matched {} rows in {:?}", employees.len(), elapsed);
        Ok(SearchOutcome { employees, elapsed })
    }

    pub async fn optimize_database(&mut self) -> AppResult<()> {
        sqlx::query(schema::CREATE_SEARCH_INDEX)
            .execute(&mut self.conn)
            .await?;
        info!("Index {} is in place", schema::SEARCH_INDEX_NAME);
        Ok(())
    }

    pub async fn count_employees(&mut self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(schema::COUNT_EMPLOYEES)
            .fetch_one(&mut self.conn)
            .await?;
        Ok(count)
    }

    pub async fn index_names(&mut self) -> AppResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(schema::SELECT_INDEX_NAMES)
            .fetch_all(&mut self.conn)
            .await?;
        Ok(names)
    }

    /// Releases the connection. Consumes the store, so it can only happen once.
    pub async fn close(self) -> AppResult<()> {
        self.conn.close().await?;
        debug!("Connection closed");
        Ok(())
    }
}
