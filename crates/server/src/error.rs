use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use stringstat_protocol::FilterError;
use stringstat_query::QueryError;
use stringstat_store::StoreError;
use thiserror::Error;

/// Transport-level rendering of the core error kinds. Every variant maps to
/// exactly one status code; nothing is retried or coerced.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidBody(&'static str),

    /// The "value" field was present but not a JSON string.
    #[error("invalid data type for \"value\" (must be a string)")]
    TypeInvalid,

    #[error("missing \"query\" parameter")]
    MissingQuery,

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::MissingQuery | Self::Filter(_) | Self::Query(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::TypeInvalid => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(StoreError::DuplicateIdentity { .. }) => StatusCode::CONFLICT,
            Self::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "invalid_request",
            Self::TypeInvalid => "type_invalid",
            Self::MissingQuery => "missing_query",
            Self::Filter(_) => "filter_value_invalid",
            Self::Query(QueryError::Unparseable) => "query_unparseable",
            Self::Store(StoreError::DuplicateIdentity { .. }) => "duplicate_identity",
            Self::Store(StoreError::NotFound) => "not_found",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    param: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let param = match &self {
            Self::Filter(err) => Some(err.param()),
            _ => None,
        };
        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
            param,
        };
        (self.status(), Json(body)).into_response()
    }
}
