//! Form extractor for `/login`
//!
//! Reads `login` and `password` from the query string and, for POST, PUT and
//! PATCH requests, from an `application/x-www-form-urlencoded` or
//! `multipart/form-data` body. The first occurrence of a key wins. Values are
//! collected in this order:
//!
//! - urlencoded body, then query string
//! - query string, then multipart fields (file parts are skipped)
//!
//! The extractor never rejects a request. Any decode problem is logged and
//! the credentials come out empty, which the verifier then refuses.

use crate::{LoginError, LoginResult};

use lg_auth::Credentials;

use std::convert::Infallible;
use std::future::Future;

use axum::{
    body::Body,
    extract::{FromRequest, Multipart, Request},
};
use http::{HeaderMap, Method, header, request::Parts};
use log::warn;
use url::form_urlencoded;

/// Largest form body read before giving up (10 MiB)
pub const MAX_FORM_BYTES: usize = 10 << 20;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART_FORM_DATA: &str = "multipart/form-data";
const LOGIN_FIELD: &str = "login";
const PASSWORD_FIELD: &str = "password";

/// Credentials submitted with a login request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm(pub Credentials);

impl<S> FromRequest<S> for LoginForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match parse_request(req).await {
                Ok(fields) => Ok(LoginForm(fields.into_credentials())),
                Err(e) => {
                    warn!("{}", e);
                    Ok(LoginForm::default())
                }
            }
        }
    }
}

/// First value seen for each credential field
#[derive(Debug, Default)]
struct FormFields {
    login: Option<String>,
    password: Option<String>,
}

impl FormFields {
    fn absorb(&mut self, raw: &[u8]) -> LoginResult<()> {
        validate_encoding(raw)?;

        for (key, value) in form_urlencoded::parse(raw) {
            self.offer(&key, || value.into_owned());
        }

        Ok(())
    }

    async fn absorb_multipart(&mut self, mut multipart: Multipart) -> LoginResult<()> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| LoginError::form_parse(format!("invalid multipart body: {e}")))?
        {
            // Uploaded files are not form values
            if field.file_name().is_some() {
                continue;
            }
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            let value = field
                .text()
                .await
                .map_err(|e| LoginError::form_parse(format!("invalid multipart field: {e}")))?;
            self.offer(&name, || value);
        }

        Ok(())
    }

    fn offer(&mut self, key: &str, value: impl FnOnce() -> String) {
        let slot = match key {
            LOGIN_FIELD => &mut self.login,
            PASSWORD_FIELD => &mut self.password,
            _ => return,
        };
        if slot.is_none() {
            *slot = Some(value());
        }
    }

    fn into_credentials(self) -> Credentials {
        Credentials::new(
            self.login.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}

/// Body encodings that carry form values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormBody {
    UrlEncoded,
    Multipart,
}

async fn parse_request(req: Request) -> LoginResult<FormFields> {
    let (parts, body) = req.into_parts();
    let mut fields = FormFields::default();

    match form_body(&parts)? {
        Some(FormBody::UrlEncoded) => {
            let bytes = read_body(body).await?;
            fields.absorb(&bytes)?;
            absorb_query(&mut fields, &parts)?;
        }
        Some(FormBody::Multipart) => {
            absorb_query(&mut fields, &parts)?;
            let multipart = Multipart::from_request(Request::from_parts(parts, body), &())
                .await
                .map_err(|e| LoginError::form_parse(format!("invalid multipart request: {e}")))?;
            fields.absorb_multipart(multipart).await?;
        }
        None => absorb_query(&mut fields, &parts)?,
    }

    Ok(fields)
}

fn absorb_query(fields: &mut FormFields, parts: &Parts) -> LoginResult<()> {
    match parts.uri.query() {
        Some(query) => fields.absorb(query.as_bytes()),
        None => Ok(()),
    }
}

fn form_body(parts: &Parts) -> LoginResult<Option<FormBody>> {
    if !matches!(parts.method, Method::POST | Method::PUT | Method::PATCH) {
        return Ok(None);
    }

    let kind = media_type(&parts.headers)?.and_then(|m| {
        if m.eq_ignore_ascii_case(FORM_URLENCODED) {
            Some(FormBody::UrlEncoded)
        } else if m.eq_ignore_ascii_case(MULTIPART_FORM_DATA) {
            Some(FormBody::Multipart)
        } else {
            None
        }
    });

    Ok(kind)
}

/// Content-Type without parameters, e.g. `text/plain` for `text/plain; charset=utf-8`
fn media_type(headers: &HeaderMap) -> LoginResult<Option<&str>> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|e| LoginError::form_parse(format!("invalid Content-Type header: {e}")))?;

    Ok(value.split(';').next().map(str::trim))
}

async fn read_body(body: Body) -> LoginResult<axum::body::Bytes> {
    axum::body::to_bytes(body, MAX_FORM_BYTES)
        .await
        .map_err(|e| LoginError::form_parse(format!("failed to read form body: {e}")))
}

/// Reject malformed percent escapes and `;` separators.
///
/// `form_urlencoded::parse` passes bad escapes through literally, so they are
/// caught here before decoding.
fn validate_encoding(raw: &[u8]) -> LoginResult<()> {
    if raw.contains(&b';') {
        return Err(LoginError::form_parse("invalid semicolon separator"));
    }

    let mut i = 0;
    while i < raw.len() {
        if raw[i] != b'%' {
            i += 1;
            continue;
        }

        let escape = raw.get(i + 1..i + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            let end = (i + 3).min(raw.len());
            return Err(LoginError::form_parse(format!(
                "invalid URL escape \"{}\"",
                String::from_utf8_lossy(&raw[i..end])
            )));
        }
        i += 3;
    }

    Ok(())
}
