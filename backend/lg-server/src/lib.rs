pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    cors::set_cors_allow_all,
    error::{LoginError, Result as LoginResult},
    login::{
        description::Description,
        error_result::ErrorResult,
        json_reply::JsonReply,
        login::login,
        login_form::{LoginForm, MAX_FORM_BYTES},
        message_result::MessageResult,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
