use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use research_core::ResearchError;

/// Handler error mapped onto an HTTP status with a plain-text body.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct AppError(#[from] pub ResearchError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ResearchError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            ResearchError::Transport(_) => StatusCode::BAD_GATEWAY,
            ResearchError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.0.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_error_kinds_to_statuses() {
        let cases = [
            (ResearchError::InvalidOperation("x".into()), StatusCode::BAD_REQUEST),
            (ResearchError::transport("down"), StatusCode::BAD_GATEWAY),
            (ResearchError::Config("bad".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).into_response().status(), status);
        }
    }
}
