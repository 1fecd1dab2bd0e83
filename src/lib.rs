//! Bridge between a file/folder event producer and async service callbacks.
//!
//! A watcher (or any other event source) hands the bridge an opaque
//! [`EventMessage`] plus a [`ServiceHandle`]; the bridge looks up the callback
//! mapped to the event kind, runs it on the tokio runtime, and hands the
//! result back through a [`Dispatch`] future. Dispatching never blocks and the
//! completion arrives exactly once, with callback failures wrapped into an
//! [`Outcome::Failure`] value rather than surfaced as panics or rejections.
//!
//! ```
//! use serde_json::json;
//! use watchhook::{EventMessage, ServiceHandle, call_on_file_create};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let service = ServiceHandle::builder()
//!     .on("on_file_create", |message: EventMessage, _fire| async move {
//!         Ok(json!({ "seen": message.get("path") }))
//!     })
//!     .build();
//!
//! let mut message = EventMessage::new();
//! message.insert("path".into(), json!("docs/spec.txt"));
//!
//! let outcome = call_on_file_create(&service, message).await;
//! assert!(outcome.is_success());
//! # }
//! ```

pub mod dispatch;
pub mod error;
pub mod kind;
pub mod message;
pub mod service;

pub use dispatch::{
    Dispatch, Outcome, call_on_file_create, call_on_file_create_on_specific_folder,
    call_on_file_delete, call_on_file_delete_on_specific_folder, call_on_file_update,
    call_on_file_update_on_specific_folder, call_on_folder_create,
    call_on_folder_create_on_specific_folder, call_on_folder_delete,
    call_on_folder_delete_on_specific_folder, call_on_folder_update,
    call_on_folder_update_on_specific_folder, dispatch, service_method_names,
};
pub use error::{DispatchError, ServiceError};
pub use kind::EventKind;
pub use message::EventMessage;
pub use service::{CallbackResult, ServiceBuilder, ServiceHandle};
