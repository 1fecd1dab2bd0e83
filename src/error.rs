use thiserror::Error;

/// Error produced by a service callback.
///
/// Callbacks build one of these to report a failure; the dispatcher wraps it
/// in a [`DispatchError`] before handing it back to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        ServiceError { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The single error kind the bridge produces: a downstream invocation failed.
///
/// Always delivered as a value inside a resolved [`Outcome`], never as a
/// panic or a rejected future.
///
/// [`Outcome`]: crate::dispatch::Outcome
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    /// The callback ran and reported an error.
    #[error("service method invocation failed: {source}")]
    CallbackFailed {
        method: &'static str,
        source: ServiceError,
    },

    /// The service does not declare the callback for this event kind.
    #[error("service method invocation failed: service does not declare method '{method}'")]
    MethodNotDeclared { method: &'static str },

    /// The spawned callback task died without reporting, e.g. it panicked.
    #[error("service method invocation failed: method '{method}' terminated without a result")]
    CallbackLost { method: &'static str },
}

impl DispatchError {
    /// The callback method name the failed dispatch targeted.
    pub fn method(&self) -> &'static str {
        match self {
            DispatchError::CallbackFailed { method, .. } => method,
            DispatchError::MethodNotDeclared { method } => method,
            DispatchError::CallbackLost { method } => method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_carries_the_invocation_failed_prefix() {
        let errors = [
            DispatchError::CallbackFailed {
                method: "on_file_create",
                source: ServiceError::new("disk full"),
            },
            DispatchError::MethodNotDeclared { method: "on_folder_update" },
            DispatchError::CallbackLost { method: "on_file_delete" },
        ];

        for err in errors {
            assert!(
                err.to_string().starts_with("service method invocation failed: "),
                "unexpected rendering: {err}"
            );
        }
    }

    #[test]
    fn test_callback_failed_keeps_the_original_message() {
        let err = DispatchError::CallbackFailed {
            method: "on_file_update",
            source: ServiceError::new("timeout talking to index"),
        };
        assert_eq!(
            err.to_string(),
            "service method invocation failed: timeout talking to index"
        );
        assert_eq!(err.method(), "on_file_update");
    }
}
