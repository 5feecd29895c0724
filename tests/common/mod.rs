use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use seoulmate_api::db::memory::AppState;
use seoulmate_api::models::place::Place;
use seoulmate_api::routes;

pub struct TestApp {
    pub state: web::Data<AppState>,
}

impl TestApp {
    /// Fresh app over an empty in-memory state.
    pub fn new() -> Self {
        Self {
            state: web::Data::new(AppState::new()),
        }
    }

    pub fn with_catalog(places: Vec<Place>) -> Self {
        Self {
            state: web::Data::new(AppState::with_catalog(places)),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
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
    }
}

/// Small Seoul catalog used across the integration suites.
pub fn sample_catalog() -> Vec<Place> {
    let place = |title: &str, category: &str, importance: f32, lat: f64, lng: f64| Place {
        title: title.to_string(),
        category: category.to_string(),
        latitude: lat,
        longitude: lng,
        importance,
        address: None,
        info: None,
    };

    vec![
        place("Gyeongbokgung Palace", "culture", 3.2, 37.5796, 126.977),
        place("Bukchon Hanok Village", "history", 2.4, 37.5826, 126.9831),
        place("Myeongdong", "shopping", 1.0, 37.5637, 126.9838),
        place("Gwangjang Market", "market", 1.8, 37.5701, 126.9996),
        place("Namsan Park", "park", 2.0, 37.5512, 126.9882),
        place("Seoul Forest", "nature", 1.6, 37.5443, 127.0374),
        place("Dongdaemun Design Plaza", "exhibition", 2.2, 37.5669, 127.0095),
        place("Jamsil Sports Complex", "sports", 1.2, 37.5148, 127.0736),
    ]
}
