use actix_web::{web, HttpResponse};
use log::info;
use serde_json::json;

use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::NewEmployee;
use crate::utils;

fn parse_record_id(raw: &str) -> Result<i32, AppError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::Validation(format!("Invalid employee ID: {}", raw))),
    }
}

pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    let new_employee = new_employee.into_inner();
    utils::validation::validate_payload(&new_employee)?;

    let employee = store.create(&new_employee).await?;
    info!("employee {} created", employee.id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee added successfully!",
        "employee": employee,
    })))
}

pub async fn get_employees(
    store: web::Data<dyn EmployeeStore>,
) -> Result<HttpResponse, AppError> {
    let employees = store.list().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<String>,
    employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    let id = parse_record_id(&id.into_inner())?;
    let employee = employee.into_inner();
    utils::validation::validate_payload(&employee)?;

    // Not-found is decided by the matched-row count alone.
    let rows = store.update(id, &employee).await?;
    if rows == 0 {
        return Err(AppError::NotFound(format!("Employee not found with ID: {}", id)));
    }
    info!("employee {} updated", id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee updated successfully!",
    })))
}

pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_record_id(&id.into_inner())?;

    let rows = store.delete(id).await?;
    if rows == 0 {
        return Err(AppError::NotFound(format!("Employee not found with ID: {}", id)));
    }
    info!("employee {} deleted", id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully!",
    })))
}
