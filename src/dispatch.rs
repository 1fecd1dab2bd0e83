use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::error::DispatchError;
use crate::kind::EventKind;
use crate::message::EventMessage;
use crate::service::ServiceHandle;

/// How a dispatch ended: the callback's return value, or the wrapped error.
///
/// Failures travel inside this enum as ordinary values. A [`Dispatch`] always
/// resolves; it never panics and never rejects.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Value),
    Failure(DispatchError),
}

impl Outcome {
    pub fn into_result(self) -> Result<Value, DispatchError> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// Deferred completion of one dispatched event.
///
/// Returned immediately by every entry point; resolves exactly once, after the
/// callback has run on the tokio runtime. Dropping it abandons the completion
/// but does not cancel the callback, which tokio runs to the end regardless.
pub struct Dispatch {
    rx: oneshot::Receiver<Outcome>,
    method: &'static str,
}

impl Future for Dispatch {
    type Output = Outcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // Sender dropped without sending: the callback task panicked.
            Poll::Ready(Err(_)) => {
                warn!(method = this.method, "callback task dropped its completion");
                Poll::Ready(Outcome::Failure(DispatchError::CallbackLost { method: this.method }))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Route an event to the callback mapped to `kind`, passing `(message, true)`.
///
/// Registers the completion and returns without blocking; the callback runs
/// later on the tokio runtime. Callback errors come back wrapped inside the
/// resolved [`Outcome`], as do dispatches to methods the service never
/// declared.
///
/// Must be called from within a tokio runtime.
pub fn dispatch(service: &ServiceHandle, kind: EventKind, message: EventMessage) -> Dispatch {
    invoke_service_method(service, message, kind.parent_call(), kind.method_name())
}

fn invoke_service_method(
    service: &ServiceHandle,
    message: EventMessage,
    parent_call: &'static str,
    method: &'static str,
) -> Dispatch {
    let (tx, rx) = oneshot::channel();

    match service.callback(method) {
        Some(callback) => {
            debug!(call = parent_call, method, "dispatching event");
            tokio::spawn(async move {
                let outcome = match callback(message, true).await {
                    Ok(value) => {
                        debug!(call = parent_call, method, "callback completed");
                        Outcome::Success(value)
                    }
                    Err(err) => {
                        warn!(call = parent_call, method, error = %err, "callback failed");
                        Outcome::Failure(DispatchError::CallbackFailed { method, source: err })
                    }
                };
                // Receiver may have been dropped; completion is best-effort there
                let _ = tx.send(outcome);
            });
        }
        None => {
            warn!(call = parent_call, method, "service does not declare method");
            let _ = tx.send(Outcome::Failure(DispatchError::MethodNotDeclared { method }));
        }
    }

    Dispatch { rx, method }
}

/// Callback names declared on `service`, in declaration order. Callers use
/// this to decide which event kinds are worth dispatching at all.
pub fn service_method_names(service: &ServiceHandle) -> Vec<String> {
    service.method_names()
}

pub fn call_on_file_create(service: &ServiceHandle, message: EventMessage) -> Dispatch {
    dispatch(service, EventKind::FileCreate, message)
}

pub fn call_on_file_create_on_specific_folder(
    service: &ServiceHandle,
    message: EventMessage,
) -> Dispatch {
    dispatch(service, EventKind::FileCreateOnSpecificFolder, message)
}

pub fn call_on_file_delete(service: &ServiceHandle, message: EventMessage) -> Dispatch {
    dispatch(service, EventKind::FileDelete, message)
}

pub fn call_on_file_delete_on_specific_folder(
    service: &ServiceHandle,
    message: EventMessage,
) -> Dispatch {
    dispatch(service, EventKind::FileDeleteOnSpecificFolder, message)
}

pub fn call_on_file_update(service: &ServiceHandle, message: EventMessage) -> Dispatch {
    dispatch(service, EventKind::FileUpdate, message)
}

pub fn call_on_file_update_on_specific_folder(
    service: &ServiceHandle,
    message: EventMessage,
) -> Dispatch {
    dispatch(service, EventKind::FileUpdateOnSpecificFolder, message)
}

pub fn call_on_folder_create(service: &ServiceHandle, message: EventMessage) -> Dispatch {
    dispatch(service, EventKind::FolderCreate, message)
}

pub fn call_on_folder_create_on_specific_folder(
    service: &ServiceHandle,
    message: EventMessage,
) -> Dispatch {
    dispatch(service, EventKind::FolderCreateOnSpecificFolder, message)
}

pub fn call_on_folder_delete(service: &ServiceHandle, message: EventMessage) -> Dispatch {
    dispatch(service, EventKind::FolderDelete, message)
}

pub fn call_on_folder_delete_on_specific_folder(
    service: &ServiceHandle,
    message: EventMessage,
) -> Dispatch {
    dispatch(service, EventKind::FolderDeleteOnSpecificFolder, message)
}

pub fn call_on_folder_update(service: &ServiceHandle, message: EventMessage) -> Dispatch {
    dispatch(service, EventKind::FolderUpdate, message)
}

pub fn call_on_folder_update_on_specific_folder(
    service: &ServiceHandle,
    message: EventMessage,
) -> Dispatch {
    dispatch(service, EventKind::FolderUpdateOnSpecificFolder, message)
}
