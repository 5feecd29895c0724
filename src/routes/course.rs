use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use uuid::Uuid;

use crate::db::memory::AppState;
use crate::models::visit::{NewCourse, SavedCourse};

pub async fn save_course(
    state: web::Data<AppState>,
    payload: web::Json<NewCourse>,
) -> impl Responder {
    let new_course = payload.into_inner();
    if new_course.username.trim().is_empty() {
        return HttpResponse::BadRequest().body("username must not be empty");
    }

    let course = SavedCourse {
        id: Uuid::new_v4(),
        course_label: new_course.course_label,
        num_days: new_course.num_days,
        place_names: new_course.place_names,
        saved_at: Utc::now(),
    };

    state.add_course(&new_course.username, course.clone());
    HttpResponse::Created().json(course)
}

pub async fn get_courses(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let username = path.into_inner();
    HttpResponse::Ok().json(state.courses_for(&username))
}
