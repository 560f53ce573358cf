use crate::{LoginForm, MAX_FORM_BYTES};

use lg_auth::Credentials;

use axum::{
    body::Body,
    extract::{FromRequest, Request},
};
use googletest::assert_that;
use googletest::prelude::eq;
use http::header;

const FORM: &str = "application/x-www-form-urlencoded";
const MULTIPART: &str = "multipart/form-data; boundary=XYZ";

fn post(uri: &str, content_type: &str, body: impl Into<Body>) -> Request {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn multipart(uri: &str, body: &str) -> Request {
    post(uri, MULTIPART, body.replace('\n', "\r\n"))
}

fn assert_empty(credentials: &Credentials) {
    assert_that!(credentials.login.as_str(), eq(""));
    assert_that!(credentials.password.as_str(), eq(""));
}

async fn extract(req: Request) -> Credentials {
    let LoginForm(credentials) = LoginForm::from_request(req, &()).await.unwrap();
    credentials
}

#[tokio::test]
async fn given_form_body_when_extracted_then_reads_both_fields() {
    let req = post("/login", FORM, "login=human&password=iamnotbot");

    let credentials = extract(req).await;

    assert_that!(credentials.login.as_str(), eq("human"));
    assert_that!(credentials.password.as_str(), eq("iamnotbot"));
}

#[tokio::test]
async fn given_query_string_when_extracted_then_reads_both_fields() {
    let credentials = extract(get("/login?login=human&password=iamnotbot")).await;

    assert_that!(credentials.login.as_str(), eq("human"));
    assert_that!(credentials.password.as_str(), eq("iamnotbot"));
}

#[tokio::test]
async fn given_body_and_query_when_extracted_then_body_wins() {
    let req = post("/login?login=query&password=query", FORM, "login=body");

    let credentials = extract(req).await;

    assert_that!(credentials.login.as_str(), eq("body"));
    assert_that!(credentials.password.as_str(), eq("query"));
}

#[tokio::test]
async fn given_repeated_key_when_extracted_then_first_value_wins() {
    let req = post("/login", FORM, "login=first&login=second&password=p");

    let credentials = extract(req).await;

    assert_that!(credentials.login.as_str(), eq("first"));
}

#[tokio::test]
async fn given_encoded_values_when_extracted_then_decoded() {
    let req = post("/login", FORM, "login=a+b%21&password=%C3%A9t%C3%A9");

    let credentials = extract(req).await;

    assert_that!(credentials.login.as_str(), eq("a b!"));
    assert_that!(credentials.password.as_str(), eq("été"));
}

#[tokio::test]
async fn given_missing_fields_when_extracted_then_empty_strings() {
    let credentials = extract(post("/login", FORM, "user=human")).await;

    assert_empty(&credentials);
}

#[tokio::test]
async fn given_content_type_with_charset_when_extracted_then_body_read() {
    let req = post(
        "/login",
        "Application/X-WWW-Form-Urlencoded; charset=utf-8",
        "login=human&password=iamnotbot",
    );

    let credentials = extract(req).await;

    assert_that!(credentials.login.as_str(), eq("human"));
    assert_that!(credentials.password.as_str(), eq("iamnotbot"));
}

#[tokio::test]
async fn given_invalid_percent_escape_in_body_when_extracted_then_empty_credentials() {
    let req = post("/login", FORM, "login=human&password=iamnot%zzbot");

    let credentials = extract(req).await;

    assert_empty(&credentials);
}

#[tokio::test]
async fn given_truncated_percent_escape_when_extracted_then_empty_credentials() {
    let req = post("/login", FORM, "login=human&password=iamnotbot%4");

    let credentials = extract(req).await;

    assert_empty(&credentials);
}

#[tokio::test]
async fn given_invalid_query_with_valid_body_when_extracted_then_empty_credentials() {
    let req = post("/login?x=%", FORM, "login=human&password=iamnotbot");

    let credentials = extract(req).await;

    assert_empty(&credentials);
}

#[tokio::test]
async fn given_semicolon_separator_when_extracted_then_empty_credentials() {
    let credentials = extract(get("/login?login=human;password=iamnotbot")).await;

    assert_empty(&credentials);
}

#[tokio::test]
async fn given_json_body_when_extracted_then_body_ignored() {
    let req = post(
        "/login?login=human",
        "application/json",
        r#"{"login":"x","password":"iamnotbot"}"#,
    );

    let credentials = extract(req).await;

    assert_that!(credentials.login.as_str(), eq("human"));
    assert_that!(credentials.password.as_str(), eq(""));
}

#[tokio::test]
async fn given_get_with_form_body_when_extracted_then_body_ignored() {
    let req = Request::builder()
        .method("GET")
        .uri("/login")
        .header(header::CONTENT_TYPE, FORM)
        .body(Body::from("login=human&password=iamnotbot"))
        .unwrap();

    let credentials = extract(req).await;

    assert_empty(&credentials);
}

#[tokio::test]
async fn given_put_with_form_body_when_extracted_then_body_read() {
    let req = Request::builder()
        .method("PUT")
        .uri("/login")
        .header(header::CONTENT_TYPE, FORM)
        .body(Body::from("login=human&password=iamnotbot"))
        .unwrap();

    let credentials = extract(req).await;

    assert_that!(credentials.login.as_str(), eq("human"));
    assert_that!(credentials.password.as_str(), eq("iamnotbot"));
}

#[tokio::test]
async fn given_oversized_body_when_extracted_then_empty_credentials() {
    let mut body = String::from("login=human&password=iamnotbot&pad=");
    body.push_str(&"a".repeat(MAX_FORM_BYTES));

    let credentials = extract(post("/login", FORM, body)).await;

    assert_empty(&credentials);
}

#[tokio::test]
async fn given_non_utf8_value_when_extracted_then_decoded_lossily() {
    let req = post("/login", FORM, "login=%FFhuman&password=iamnotbot");

    let credentials = extract(req).await;

    assert_that!(credentials.login.as_str(), eq("\u{FFFD}human"));
}

#[tokio::test]
async fn given_multipart_body_when_extracted_then_reads_both_fields() {
    let req = multipart(
        "/login",
        "--XYZ\n\
         Content-Disposition: form-data; name=\"login\"\n\
         \n\
         human\n\
         --XYZ\n\
         Content-Disposition: form-data; name=\"password\"\n\
         \n\
         iamnotbot\n\
         --XYZ--\n",
    );

    let credentials = extract(req).await;

    assert_that!(credentials.login.as_str(), eq("human"));
    assert_that!(credentials.password.as_str(), eq("iamnotbot"));
}

#[tokio::test]
async fn given_query_and_multipart_when_extracted_then_query_wins() {
    let req = multipart(
        "/login?login=query",
        "--XYZ\n\
         Content-Disposition: form-data; name=\"login\"\n\
         \n\
         multipart\n\
         --XYZ\n\
         Content-Disposition: form-data; name=\"password\"\n\
         \n\
         secret\n\
         --XYZ--\n",
    );

    let credentials = extract(req).await;

    assert_that!(credentials.login.as_str(), eq("query"));
    assert_that!(credentials.password.as_str(), eq("secret"));
}

#[tokio::test]
async fn given_multipart_file_part_when_extracted_then_ignored() {
    let req = multipart(
        "/login",
        "--XYZ\n\
         Content-Disposition: form-data; name=\"login\"; filename=\"login.txt\"\n\
         Content-Type: text/plain\n\
         \n\
         human\n\
         --XYZ\n\
         Content-Disposition: form-data; name=\"password\"\n\
         \n\
         iamnotbot\n\
         --XYZ--\n",
    );

    let credentials = extract(req).await;

    assert_that!(credentials.login.as_str(), eq(""));
    assert_that!(credentials.password.as_str(), eq("iamnotbot"));
}

#[tokio::test]
async fn given_multipart_without_boundary_when_extracted_then_empty_credentials() {
    let req = post(
        "/login?login=human&password=iamnotbot",
        "multipart/form-data",
        "login=human",
    );

    let credentials = extract(req).await;

    assert_empty(&credentials);
}

#[tokio::test]
async fn given_truncated_multipart_body_when_extracted_then_empty_credentials() {
    let req = multipart(
        "/login",
        "--XYZ\n\
         Content-Disposition: form-data; name=\"login\"\n\
         \n\
         human\n\
         --XYZ\n\
         Content-Disposition: form-data; name=\"password\"\n\
         \n\
         iamnot",
    );

    let credentials = extract(req).await;

    assert_empty(&credentials);
}
