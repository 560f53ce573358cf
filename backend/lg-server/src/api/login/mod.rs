pub mod description;
pub mod error_result;
pub mod json_reply;
#[allow(clippy::module_inception)]
pub mod login;
pub mod login_form;
pub mod message_result;
