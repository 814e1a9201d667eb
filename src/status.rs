//! HTTP status codes as a typed enum.
//!
//! Only the codes govanity actually sends. Use [`Status`] anywhere a status
//! code is accepted: `Response::status()`, `Response::builder().status()`,
//! or as a bare handler return value.

/// An HTTP status code the server emits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,                  // 200
    NotFound,            // 404
    InternalServerError, // 500
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                  => 200,
            Status::NotFound            => 404,
            Status::InternalServerError => 500,
        }
    }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> http::StatusCode {
        match s {
            Status::Ok                  => http::StatusCode::OK,
            Status::NotFound            => http::StatusCode::NOT_FOUND,
            Status::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
