use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rolodex_core::error::CoreError;
use rolodex_core::types::DbId;
use rolodex_db::repositories::RepositoryError;

/// The write operation behind a rejected repository call, used to pick the
/// fixed 500 body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update,
    Delete,
}

impl WriteOp {
    fn failure_body(self) -> &'static str {
        match self {
            WriteOp::Create => "Failed to create contact",
            WriteOp::Update => "Failed to update contact",
            WriteOp::Delete => "Failed to delete contact",
        }
    }
}

impl std::fmt::Display for WriteOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.failure_body())
    }
}

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] so every failure path terminates in a
/// defined plain-text response. Full detail goes to the log here and never
/// to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `rolodex_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A write the storage backend declined without failing outright.
    #[error("{0}")]
    WriteFailed(WriteOp),

    /// A storage backend failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }

    /// Classify a repository error from a create/update/delete call: a
    /// rejected write keeps its operation-specific body, anything else is an
    /// opaque server error.
    pub fn from_write(op: WriteOp, err: RepositoryError) -> Self {
        match err {
            RepositoryError::WriteRejected => AppError::WriteFailed(op),
            other => AppError::Repository(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal Server Error".to_string(),
                    )
                }
            },

            AppError::WriteFailed(op) => {
                tracing::warn!(body = op.failure_body(), "Storage backend rejected write");
                (StatusCode::INTERNAL_SERVER_ERROR, op.failure_body().to_string())
            }

            AppError::Repository(err) => {
                tracing::error!(error = %err, "Repository failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, body).into_response()
    }
}
