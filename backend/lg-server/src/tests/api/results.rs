use crate::{Description, ErrorResult, MessageResult};

use googletest::assert_that;
use googletest::prelude::eq;
use http::StatusCode;

#[test]
fn given_wrong_credentials_then_carries_401() {
    let result = ErrorResult::wrong_credentials();

    assert_that!(result.error.code, eq(401));
    assert_that!(result.error.description.as_str(), eq("Wrong login or password"));
    assert_that!(result.error.status(), eq(StatusCode::UNAUTHORIZED));
}

#[test]
fn given_logged_in_then_carries_200() {
    let result = MessageResult::logged_in();

    assert_that!(result.message.code, eq(200));
    assert_that!(
        result.message.description.as_str(),
        eq("You are successfully logged in!")
    );
}

#[test]
fn given_out_of_range_code_when_status_then_internal_error() {
    let description = Description {
        code: 42,
        description: "nonsense".into(),
    };

    assert_that!(description.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
}

#[test]
fn given_fresh_results_then_equal_across_calls() {
    assert_eq!(ErrorResult::wrong_credentials(), ErrorResult::wrong_credentials());
    assert_eq!(MessageResult::logged_in(), MessageResult::logged_in());
}
