/**
 * Error Conversion
 *
 * This module converts component errors into `BackendError` and
 * `BackendError` into HTTP responses.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * Dependency failures are logged here with their full detail; the client
 * only ever sees "Internal server error".
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::CredentialError;
use crate::backend::content::ContentError;
use crate::backend::error::types::BackendError;
use crate::backend::server::database::StoreError;
use crate::backend::stacks::StackError;
use crate::shared::error::SharedError;

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let BackendError::DependencyError { message } = &self {
            tracing::error!("Request failed on a dependency: {}", message);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { field, message } => {
                BackendError::validation(format!("{}: {}", field, message))
            }
            SharedError::SerializationError { message } => BackendError::validation(message),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        BackendError::dependency(err.to_string())
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MalformedToken | TokenError::InvalidSignature => {
                BackendError::auth("Invalid token")
            }
            TokenError::Expired => BackendError::auth("Token expired"),
            TokenError::Signing(e) => BackendError::dependency(format!("token signing: {}", e)),
        }
    }
}

impl From<CredentialError> for BackendError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Invalid(e) => e.into(),
            CredentialError::DuplicateIdentity { username } => {
                BackendError::conflict(format!("Username '{}' is already taken", username))
            }
            // Unknown user and wrong password are indistinguishable to the client
            CredentialError::NotFound | CredentialError::InvalidCredential => {
                BackendError::auth("Invalid username or password")
            }
            CredentialError::Hashing(e) => BackendError::dependency(format!("bcrypt: {}", e)),
            CredentialError::Store(e) => e.into(),
        }
    }
}

impl From<StackError> for BackendError {
    fn from(err: StackError) -> Self {
        match err {
            StackError::Invalid(e) => e.into(),
            StackError::Conflict { name } => {
                BackendError::conflict(format!("A stack named '{}' already exists", name))
            }
            StackError::NotFound { .. } => BackendError::not_found("Stack not found"),
            StackError::PartialResolution { missing } => BackendError::validation(format!(
                "One or more stacks not found: {}",
                missing.join(", ")
            )),
            StackError::Store(e) => e.into(),
        }
    }
}

impl From<ContentError> for BackendError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::Invalid(e) => e.into(),
            ContentError::Stack(e) => e.into(),
            ContentError::NotFoundOrForbidden => {
                BackendError::not_found("Content not found or unauthorized")
            }
            ContentError::Store(e) => e.into(),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        BackendError::validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use uuid::Uuid;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let response = BackendError::conflict("A stack named 'go' already exists").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["error"], "A stack named 'go' already exists");
        assert_eq!(body["status"], 409);
    }

    #[tokio::test]
    async fn test_dependency_detail_not_leaked() {
        let store = StoreError::Timeout(std::time::Duration::from_secs(5));
        let response = BackendError::from(store).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
    }

    #[test]
    fn test_credential_failures_share_a_message() {
        let unknown = BackendError::from(CredentialError::NotFound);
        let wrong = BackendError::from(CredentialError::InvalidCredential);
        assert_eq!(unknown.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown.message(), wrong.message());
    }

    #[test]
    fn test_token_errors_are_unauthorized() {
        for err in [
            TokenError::MalformedToken,
            TokenError::InvalidSignature,
            TokenError::Expired,
        ] {
            assert_eq!(BackendError::from(err).status_code(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_stack_error_mapping() {
        let missing = BackendError::from(StackError::PartialResolution {
            missing: vec!["zig".to_string()],
        });
        assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
        assert!(missing.message().contains("zig"));

        let not_found = BackendError::from(StackError::NotFound { id: Uuid::new_v4() });
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let conflict = BackendError::from(StackError::Conflict {
            name: "go".to_string(),
        });
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_content_not_found_or_forbidden() {
        let err = BackendError::from(ContentError::NotFoundOrForbidden);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Content not found or unauthorized");
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = BackendError::from(SharedError::validation("username", "must not be empty"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "username: must not be empty");
    }
}
