use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::db::memory::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let catalog_len = state.catalog_len();
    let catalog_status = if catalog_len > 0 {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Catalog holds {} places", catalog_len)),
        }
    } else {
        // Still serviceable: recommendations come from the course templates.
        ServiceStatus {
            status: "ok".to_string(),
            details: Some("Catalog empty, recommendations served from templates".to_string()),
        }
    };
    health.services.insert("catalog".to_string(), catalog_status);

    health.services.insert(
        "recommendation".to_string(),
        ServiceStatus {
            status: "ok".to_string(),
            details: None,
        },
    );

    HttpResponse::Ok().json(health)
}
