use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use crate::models::travel_style::TravelStyle;

#[derive(Serialize)]
struct StyleOption {
    name: &'static str,
    display_name: &'static str,
}

/// The fixed travel-style list clients render as selection options.
pub async fn get_styles() -> impl Responder {
    let styles: Vec<StyleOption> = TravelStyle::ALL
        .iter()
        .map(|style| StyleOption {
            name: style.wire_name(),
            display_name: style.display_name(),
        })
        .collect();

    HttpResponse::Ok().json(styles)
}
