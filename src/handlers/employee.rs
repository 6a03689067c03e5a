use std::io::Write;

use log::{debug, info};
use rand::Rng;

use crate::db::{EmployeeStore, SearchOutcome};
use crate::errors::AppResult;
use crate::models::employee::Employee;

pub async fn create_table<W: Write>(store: &mut EmployeeStore, out: &mut W) -> AppResult<()> {
    store.create_table().await?;
    writeln!(out, "Table 'employees' created successfully.")?;
    Ok(())
}

pub async fn add_employee<W: Write>(
    store: &mut EmployeeStore,
    full_name: &str,
    birth_date: &str,
    gender: &str,
    out: &mut W,
) -> AppResult<()> {
    let employee = Employee::new(full_name, birth_date, gender)?;
    store.add_employee(&employee).await?;
    writeln!(out, "Employee {} added successfully.", employee.full_name)?;
    Ok(())
}

pub async fn list_unique_employees<W: Write>(store: &mut EmployeeStore, out: &mut W) -> AppResult<()> {
    let listed = store.list_unique_employees().await?;
    for entry in &listed {
        writeln!(out, "{}", entry)?;
    }
    info!("Listed {} unique employees", listed.len());
    Ok(())
}

pub async fn generate_random_employees<W: Write, R: Rng + ?Sized>(
    store: &mut EmployeeStore,
    count: usize,
    batch_size: usize,
    rng: &mut R,
    out: &mut W,
) -> AppResult<usize> {
    let inserted = store
        .generate_random_employees(count, batch_size, rng, |added| {
            writeln!(out, "Added {} employees in batch.", added)?;
            Ok(())
        })
        .await?;
    writeln!(out, "Finished generating random employees.")?;
    info!("Directory now holds {} employees", store.count_employees().await?);
    Ok(inserted)
}

pub async fn search_male_f_lastname<W: Write>(
    store: &mut EmployeeStore,
    out: &mut W,
) -> AppResult<SearchOutcome> {
    let outcome = store.search_male_f_lastname().await?;
    writeln!(
        out,
        "Found {} male employees with last names starting with 'F'",
        outcome.employees.len()
    )?;
    writeln!(out, "Execution time: {:.4} seconds", outcome.elapsed_secs())?;
    Ok(outcome)
}

/// Creates the index, then times the search twice. Both timings run with the
/// index already present, so "before" is not an unindexed baseline.
pub async fn optimize_database<W: Write>(store: &mut EmployeeStore, out: &mut W) -> AppResult<()> {
    store.optimize_database().await?;
    debug!("Indexes on employees: {:?}", store.index_names().await?);
    writeln!(out, "Database optimized with index on gender and full_name.")?;
    writeln!(out, "Running performance test before and after optimization...")?;

    writeln!(out, "\nBefore optimization:")?;
    let before = search_male_f_lastname(store, out).await?.elapsed_secs();

    writeln!(out, "\nAfter optimization:")?;
    let after = search_male_f_lastname(store, out).await?.elapsed_secs();

    writeln!(out, "\n{}", format_improvement(before, after))?;
    Ok(())
}

pub fn format_improvement(before: f64, after: f64) -> String {
    let ratio = if after > 0.0 {
        format!("{:.1}x", before / after)
    } else {
        "n/a".to_string()
    };
    format!(
        "Optimization improvement: {:.4} seconds ({} faster)",
        before - after,
        ratio
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::tests::memory_store;
    use crate::errors::AppError;
    use crate::models::employee::age_between;
    use chrono::{Local, NaiveDate};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[tokio::test]
    async fn test_create_add_list_end_to_end() {
        let mut store = memory_store().await;
        let mut out = Vec::new();

        create_table(&mut store, &mut out).await.unwrap();
        add_employee(&mut store, "Ford Henry A.", "1980-05-15", "Male", &mut out)
            .await
            .unwrap();
        list_unique_employees(&mut store, &mut out).await.unwrap();
        store.close().await.unwrap();

        let age = age_between(
            NaiveDate::from_ymd_opt(1980, 5, 15).unwrap(),
            Local::now().date_naive(),
        );
        let text = output(out);
        assert!(text.contains("Table 'employees' created successfully."));
        assert!(text.contains("Employee Ford Henry A. added successfully."));
        assert!(text.contains(&format!("Ford Henry A., 1980-05-15, Male, age={}", age)));
    }

    #[tokio::test]
    async fn test_add_employee_rejects_invalid_date() {
        let mut store = memory_store().await;
        let mut out = Vec::new();

        let err = add_employee(&mut store, "Ford Henry A.", "May 15 1980", "Male", &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(store.count_employees().await.unwrap(), 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_generate_then_search() {
        let mut store = memory_store().await;
        let mut rng = StdRng::seed_from_u64(99);
        let mut out = Vec::new();

        let inserted = generate_random_employees(&mut store, 500, 200, &mut rng, &mut out)
            .await
            .unwrap();
        assert_eq!(inserted, 600);

        let outcome = search_male_f_lastname(&mut store, &mut out).await.unwrap();
        assert!(outcome.employees.len() >= 100);

        let text = output(out);
        assert_eq!(text.matches("Added 200 employees in batch.").count(), 2);
        assert_eq!(text.matches("Added 100 employees in batch.").count(), 2);
        assert!(text.contains("Finished generating random employees."));
        assert!(text.contains("Found 100 male employees with last names starting with 'F'"));
        assert!(text.contains("Execution time: "));
    }

    #[tokio::test]
    async fn test_optimize_reports_both_timings() {
        let mut store = memory_store().await;
        let mut rng = StdRng::seed_from_u64(1);
        let mut sink = Vec::new();
        generate_random_employees(&mut store, 50, 10, &mut rng, &mut sink)
            .await
            .unwrap();

        let mut out = Vec::new();
        optimize_database(&mut store, &mut out).await.unwrap();
        optimize_database(&mut store, &mut out).await.unwrap();

        let text = output(out);
        assert_eq!(text.matches("Before optimization:").count(), 2);
        assert_eq!(text.matches("After optimization:").count(), 2);
        assert_eq!(text.matches("Optimization improvement: ").count(), 2);
    }

    #[test]
    fn test_format_improvement() {
        assert_eq!(
            format_improvement(0.5, 0.25),
            "Optimization improvement: 0.2500 seconds (2.0x faster)"
        );
        assert_eq!(
            format_improvement(0.5, 0.0),
            "Optimization improvement: 0.5000 seconds (n/a faster)"
        );
    }
}
