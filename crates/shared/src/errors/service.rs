use crate::errors::{ApiError, CartError, LifecycleError};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    #[error("Lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Cart operation failed: {0}")]
    CartOperation(#[source] ApiError),

    #[error("Transition submission failed: {0}")]
    TransitionSubmission(#[source] ApiError),

    #[error("Checkout rejected by the order service: {0}")]
    CheckoutRejected(#[source] ApiError),

    #[error("Request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}"));
                messages.push(format!("{field}: {message}"));
            }
        }

        ServiceError::Validation(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    #[test]
    fn test_validation_errors_are_collected() {
        let form = Form {
            name: String::new(),
        };
        let err: ServiceError = form.validate().unwrap_err().into();
        match err {
            ServiceError::Validation(messages) => {
                assert_eq!(messages, vec!["name: Name is required".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
