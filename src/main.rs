mod handlers;
mod models;
mod utils;
mod db;
mod errors;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use std::env;
use std::sync::Arc;
use log::info;

use crate::db::{EmployeeStore, PgEmployeeStore};
use crate::errors::AppError;

// Malformed bodies (missing fields, wrong types, unparsable dates) share the
// validation taxonomy instead of actix's default error shape.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Welcome to the Employee Management System")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Initialize the database pool
    let pool = db::create_pool().await;
    let store: Arc<dyn EmployeeStore> = Arc::new(PgEmployeeStore::new(pool));

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("Starting server at {}", bind_addr);

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(json_config())
            .app_data(web::Data::from(store.clone()))
            .service(web::resource("/").route(web::get().to(index)))
            .service(
                web::resource("/api/employees")
                    .route(web::post().to(handlers::employee::create_employee))
                    .route(web::get().to(handlers::employee::get_employees)),
            )
            .service(
                web::resource("/api/employees/{id}")
                    .route(web::put().to(handlers::employee::update_employee))
                    .route(web::delete().to(handlers::employee::delete_employee)),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
