use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use uuid::Uuid;

use crate::db::memory::AppState;
use crate::models::visit::{NewVisit, VisitHistory, VisitRecord};
use crate::services::gamification_service::GamificationService;

#[derive(serde::Deserialize)]
pub struct HistoryParams {
    sort: Option<String>,
}

/// Record a visit and award XP from the visited place's catalog importance.
pub async fn record_visit(
    state: web::Data<AppState>,
    payload: web::Json<NewVisit>,
) -> impl Responder {
    let new_visit = payload.into_inner();
    if new_visit.username.trim().is_empty() {
        return HttpResponse::BadRequest().body("username must not be empty");
    }
    if new_visit.place_name.trim().is_empty() {
        return HttpResponse::BadRequest().body("place_name must not be empty");
    }

    let catalog = state.catalog_snapshot();
    let importance = GamificationService::importance_of(&catalog, &new_visit.place_name);

    let visit = VisitRecord {
        id: Uuid::new_v4(),
        place_name: new_visit.place_name,
        latitude: new_visit.latitude,
        longitude: new_visit.longitude,
        xp_gained: GamificationService::xp_for_visit(importance),
        visited_at: Utc::now(),
    };

    state.add_visit(&new_visit.username, visit.clone());
    let stats = GamificationService::stats(&state.visits_for(&new_visit.username));

    HttpResponse::Created().json(serde_json::json!({
        "visit": visit,
        "stats": stats,
    }))
}

/// Visit history plus XP/level stats. `?sort=recent` orders newest first,
/// `?sort=xp` highest award first; default is recording order.
pub async fn get_visits(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<HistoryParams>,
) -> impl Responder {
    let username = path.into_inner();
    let mut visits = state.visits_for(&username);
    let stats = GamificationService::stats(&visits);

    match params.sort.as_deref() {
        Some("recent") => visits.sort_by(|a, b| b.visited_at.cmp(&a.visited_at)),
        Some("xp") => visits.sort_by(|a, b| b.xp_gained.cmp(&a.xp_gained)),
        _ => {}
    }

    HttpResponse::Ok().json(VisitHistory { visits, stats })
}
