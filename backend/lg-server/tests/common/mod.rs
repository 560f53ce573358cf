#![allow(dead_code)]

//! Test infrastructure for lg-server API tests

use lg_auth::StaticCredentials;
use lg_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use axum_test::TestServer;
use http_body_util::BodyExt;

pub const SUCCESS_BODY: &str =
    r#"{"message":{"code":200,"description":"You are successfully logged in!"}}"#;
pub const FAILURE_BODY: &str = r#"{"error":{"code":401,"description":"Wrong login or password"}}"#;

pub const FORM: &str = "application/x-www-form-urlencoded";

/// Router with the default `human` / `iamnotbot` pair
pub fn create_test_app() -> Router {
    build_router(AppState::default())
}

/// Router accepting a custom pair, optionally mirroring status codes
pub fn create_test_app_with(login: &str, password: &str, mirror_status_code: bool) -> Router {
    let state = AppState {
        verifier: Arc::new(StaticCredentials::new(login, password)),
        mirror_status_code,
    };
    build_router(state)
}

pub fn create_test_server() -> TestServer {
    TestServer::builder()
        .build(create_test_app())
        .expect("Failed to create test server")
}

/// POST /login with a form-encoded body
pub fn login_post(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, FORM)
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
