//! ==============================================================================
//! lib.rs - shared core for the employee directory client
//! ==============================================================================
//!
//! purpose:
//!     everything about the directory page that does not touch the browser:
//!     wire types, routes, the error classifier, form validation, view state
//!     and the operation/handler set itself. the browser only supplies a
//!     `Transport` (fetch) and a `Host` (view signal, confirm, timers).
//!
//! relationships:
//!     - used by: dashboard (leptos wasm front end)
//!
//! testing:
//!     handlers run under plain `cargo test` against an in-memory transport
//!     and host; no browser is involved.
//!
//! ==============================================================================

pub mod client;
pub mod directory;
pub mod endpoint;
pub mod error;
pub mod form;
pub mod model;
pub mod notify;
pub mod view;

pub use client::{ApiRequest, DirectoryClient, Transport};
pub use directory::{Directory, Host};
pub use endpoint::{DirectoryConfig, Endpoint, Method, SaveMode};
pub use error::{classify, ApiError, Failure};
pub use form::{EmployeeForm, InputError, SearchForm, ROLE_ID_RANGE};
pub use model::{Employee, EmployeeDraft, Role};
pub use notify::{Notification, NotificationId, Severity};
pub use view::{EmployeeRow, RoleOption, ViewState};
