use actix_web::{web, HttpResponse, Responder};

use crate::db::memory::AppState;
use crate::models::itinerary::RecommendationRequest;
use crate::services::recommendation_service::RecommendationService;

const MAX_NUM_DAYS: usize = 30;
const MAX_PLACES_PER_DAY: usize = 10;

pub async fn recommend(
    state: web::Data<AppState>,
    payload: web::Json<RecommendationRequest>,
) -> impl Responder {
    let request = payload.into_inner();

    if request.num_days == 0 || request.num_days > MAX_NUM_DAYS {
        return HttpResponse::BadRequest()
            .body(format!("num_days must be between 1 and {}", MAX_NUM_DAYS));
    }
    if let Some(places_per_day) = request.places_per_day {
        if places_per_day == 0 || places_per_day > MAX_PLACES_PER_DAY {
            return HttpResponse::BadRequest().body(format!(
                "places_per_day must be between 1 and {}",
                MAX_PLACES_PER_DAY
            ));
        }
    }

    // Snapshot under the read lock, compute outside of it.
    let catalog = state.catalog_snapshot();
    let recommendation = RecommendationService::new().recommend(&catalog, &request);

    HttpResponse::Ok().json(recommendation)
}
