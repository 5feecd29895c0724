use actix_web::{web, HttpResponse, Responder};

use crate::db::memory::AppState;
use crate::models::place::Place;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    search: Option<String>,
    category: Option<String>,
}

pub async fn get_places(
    state: web::Data<AppState>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let mut places = state.catalog_snapshot();

    if let Some(category) = &params.category {
        if !category.is_empty() {
            places.retain(|p| p.category.eq_ignore_ascii_case(category));
        }
    }
    if let Some(search_text) = &params.search {
        if !search_text.is_empty() {
            let needle = search_text.to_lowercase();
            places.retain(|p| p.title.to_lowercase().contains(&needle));
        }
    }
    if let Some(limit) = params.limit {
        places.truncate(limit.into());
    }

    HttpResponse::Ok().json(places)
}

/// Replace the whole catalog from a JSON array of places. Records outside the
/// Seoul region are dropped and counted in the response.
pub async fn load_places(
    state: web::Data<AppState>,
    payload: web::Json<Vec<Place>>,
) -> impl Responder {
    let load = state.replace_catalog(payload.into_inner());
    println!(
        "Catalog replaced: {} places loaded, {} skipped",
        load.loaded, load.skipped
    );
    HttpResponse::Ok().json(load)
}
