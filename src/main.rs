use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use seoulmate_api::db::memory::{self, AppState};
use seoulmate_api::routes;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let state = web::Data::new(AppState::new());
    memory::seed_catalog_from_env(&state);

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(state.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route("/places", web::get().to(routes::place::get_places))
                    .route("/places", web::post().to(routes::place::load_places))
                    .route("/styles", web::get().to(routes::style::get_styles))
                    .route(
                        "/recommendations",
                        web::post().to(routes::recommendation::recommend),
                    )
                    .route("/visits", web::post().to(routes::visit::record_visit))
                    .route(
                        "/visits/{username}",
                        web::get().to(routes::visit::get_visits),
                    )
                    .route("/courses", web::post().to(routes::course::save_course))
                    .route(
                        "/courses/{username}",
                        web::get().to(routes::course::get_courses),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
