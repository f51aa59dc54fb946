use async_trait::async_trait;
use log::error;
use sqlx::PgPool;
use std::env;

use crate::errors::AppError;
use crate::models::employee::{Employee, NewEmployee};

pub async fn create_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to the database")
}

/// Store access seam for employee records. Handlers only see this trait, so
/// they can be exercised against an in-memory stand-in without Postgres.
///
/// `update` and `delete` report the matched-row count; classifying zero rows
/// as not-found is the caller's job. Store faults surface as
/// `AppError::Storage` and are never retried here.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn create(&self, new_employee: &NewEmployee) -> Result<Employee, AppError>;
    async fn list(&self) -> Result<Vec<Employee>, AppError>;
    async fn update(&self, id: i32, employee: &NewEmployee) -> Result<u64, AppError>;
    async fn delete(&self, id: i32) -> Result<u64, AppError>;
}

pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_error(err: sqlx::Error) -> AppError {
    error!("database error: {}", err);
    AppError::Storage(err.to_string())
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn create(&self, new_employee: &NewEmployee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (name, employee_id, email, phone, department, date_of_joining, role) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, name, employee_id, email, phone, department, date_of_joining, role",
        )
        .bind(&new_employee.name)
        .bind(&new_employee.employee_id)
        .bind(&new_employee.email)
        .bind(&new_employee.phone)
        .bind(&new_employee.department)
        .bind(new_employee.date_of_joining)
        .bind(&new_employee.role)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, employee_id, email, phone, department, date_of_joining, role \
             FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)
    }

    async fn update(&self, id: i32, employee: &NewEmployee) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE employees \
             SET name = $1, employee_id = $2, email = $3, phone = $4, department = $5, date_of_joining = $6, role = $7 \
             WHERE id = $8",
        )
        .bind(&employee.name)
        .bind(&employee.employee_id)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(&employee.department)
        .bind(employee.date_of_joining)
        .bind(&employee.role)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(result.rows_affected())
    }
}
