//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The `month` query parameter was not provided, or was empty.
    #[error("the query parameter \"month\" is required")]
    MissingMonth,

    /// The query string could not be read, e.g. a parameter was repeated.
    ///
    /// Holds the reason given by the query extractor. The reason is logged
    /// but not sent to the client.
    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    /// A record's date of sale could not be parsed as a date.
    ///
    /// Holds the text that failed to parse. This error is not intended to be
    /// shown to the client: records with invalid dates are left out of month
    /// based views instead.
    #[error("could not parse \"{0}\" as a date")]
    InvalidDate(String),

    /// The page number or page size was not a positive integer.
    #[error("page and perPage must be positive integers")]
    InvalidPagination,

    /// The requested route does not exist.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// The records used to seed the database could not be read.
    #[error("invalid seed data: {0}")]
    InvalidSeedData(String),
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", error);
        Error::SqlError(error)
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidQuery(rejection.body_text())
    }
}

/// The body sent to the client when a request fails.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: &'static str,
}

fn render_error(status_code: StatusCode, message: &'static str) -> Response {
    (
        status_code,
        Json(ErrorBody {
            success: false,
            message,
        }),
    )
        .into_response()
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::MissingMonth => render_error(StatusCode::BAD_REQUEST, "Month is required"),
            Error::InvalidQuery(reason) => {
                tracing::debug!("rejected query string: {reason}");
                render_error(StatusCode::BAD_REQUEST, "Invalid query parameters")
            }
            Error::InvalidPagination => render_error(
                StatusCode::BAD_REQUEST,
                "Page and perPage must be positive integers",
            ),
            Error::NotFound => render_error(StatusCode::NOT_FOUND, "Not Found"),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_error(StatusCode::INTERNAL_SERVER_ERROR, "Server Error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use serde_json::{Value, json};

    use super::Error;

    async fn into_status_and_json(error: Error) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not read response body");

        (
            status,
            serde_json::from_slice(&body).expect("Response body is not JSON"),
        )
    }

    #[tokio::test]
    async fn missing_month_is_bad_request() {
        let (status, body) = into_status_and_json(Error::MissingMonth).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "message": "Month is required"})
        );
    }

    #[tokio::test]
    async fn invalid_query_is_bad_request_without_details() {
        let (status, body) = into_status_and_json(Error::InvalidQuery(
            "Failed to deserialize query string: duplicate field `month`".to_owned(),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "message": "Invalid query parameters"})
        );
    }

    #[tokio::test]
    async fn invalid_pagination_is_bad_request() {
        let (status, body) = into_status_and_json(Error::InvalidPagination).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
    }

    #[tokio::test]
    async fn upstream_failures_do_not_leak_details() {
        let (status, body) = into_status_and_json(Error::SqlError(
            rusqlite::Error::InvalidQuery,
        ))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"success": false, "message": "Server Error"}));
    }

    #[tokio::test]
    async fn lock_error_is_server_error() {
        let (status, body) = into_status_and_json(Error::DatabaseLockError).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], json!("Server Error"));
    }
}
