use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use app_api::handlers;
use app_api::result::AppState;
use serde_json::{Value, json};

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new()))
                .configure(handlers::configure),
        )
        .await
    };
}

fn ana() -> Value {
    json!({
        "email": "a@x",
        "password": "p",
        "name": "Ana",
        "age": 60,
        "photo": "data:image/png;base64,AAAA",
        "lat": 40.41,
        "lon": -3.70,
        "gender": "female"
    })
}

#[actix_web::test]
async fn register_duplicate_then_login() {
    let app = app!();

    let req = test::TestRequest::post().uri("/api/register").set_json(ana()).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], "a@x");
    assert_eq!(body["user"]["gender"], "female");
    assert!(body["user"].get("password").is_none());

    let req = test::TestRequest::post().uri("/api/register").set_json(ana()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "User already exists");

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "a@x", "password": "p"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["name"], "Ana");
    assert_eq!(body["user"]["age"], 60);
    assert!(body["user"].get("password").is_none());
}

#[actix_web::test]
async fn login_with_wrong_password_is_401() {
    let app = app!();
    let req = test::TestRequest::post().uri("/api/register").set_json(ana()).to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "a@x", "password": "nope"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[actix_web::test]
async fn users_never_expose_passwords() {
    let app = app!();
    for (email, name) in [("a@x", "Ana"), ("b@x", "Beto")] {
        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(json!({"email": email, "password": "secret", "name": name, "age": 70}))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/users").to_request();
    let users: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], "Ana");
    assert_eq!(users[1]["name"], "Beto");
    assert!(users.iter().all(|u| u.get("password").is_none()));
    assert_ne!(users[0]["id"], users[1]["id"]);
}

#[actix_web::test]
async fn messages_round_trip_between_pair() {
    let app = app!();
    for (from, to, text) in [("a@x", "b@x", "hola"), ("b@x", "a@x", "hey"), ("a@x", "c@x", "otro")] {
        let req = test::TestRequest::post()
            .uri("/api/message")
            .set_json(json!({"from": from, "to": to, "text": text}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"success": true}));
    }

    let req = test::TestRequest::get().uri("/api/messages?from=a%40x&to=b%40x").to_request();
    let ab: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    let req = test::TestRequest::get().uri("/api/messages?from=b%40x&to=a%40x").to_request();
    let ba: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(ab, ba);
    assert_eq!(ab.len(), 2);
    assert_eq!(ab[0]["text"], "hola");
    assert_eq!(ab[1]["text"], "hey");
    assert!(ab[0]["date"].is_string());
}

#[actix_web::test]
async fn malformed_body_is_rejected() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn status_and_openapi_are_served() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/status").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 200);

    let req = test::TestRequest::get().uri("/openapi.json").to_request();
    let doc: Value = test::call_and_read_body_json(&app, req).await;
    assert!(doc["paths"].get("/api/register").is_some());
    assert!(doc["paths"].get("/api/messages").is_some());
}
