mod common;

use actix_web::test;
use serial_test::serial;

use common::TestApp;

#[actix_rt::test]
#[serial]
async fn test_health_check_empty_catalog() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["services"]["catalog"]["status"], "ok");
    assert!(body["services"]["catalog"]["details"]
        .as_str()
        .unwrap()
        .contains("templates"));
}

#[actix_rt::test]
#[serial]
async fn test_health_check_reports_catalog_size() {
    let test_app = TestApp::with_catalog(common::sample_catalog());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["services"]["catalog"]["details"]
        .as_str()
        .unwrap()
        .contains("8 places"));
    assert!(body["version"].as_str().is_some());
}

#[actix_rt::test]
#[serial]
async fn test_styles_listing() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/styles").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let styles = body.as_array().unwrap();
    assert_eq!(styles.len(), 6);

    let names: Vec<&str> = styles.iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"history/culture"));
    assert!(names.contains(&"active"));
    assert_eq!(styles[4]["display_name"], "History & Culture");
}
