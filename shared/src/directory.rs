//! ==============================================================================
//! directory.rs - directory operations and page event handlers
//! ==============================================================================
//!
//! purpose:
//!     the single handler set behind the page. every operation issues at
//!     most one request (plus the follow-up list refresh after a save or
//!     delete) and ends by writing rows, form values or a notification
//!     into the view state.
//!
//! relationships:
//!     - uses: DirectoryClient for the http side
//!     - uses: Host for view state, the confirm dialog and timers
//!     - used by: dashboard (browser host + gloo-net transport)
//!
//! failure reporting:
//!     list all / list roles / edit / delete -> raw error text
//!     find by id / by role                  -> classify()
//!     save                                  -> fixed "fill in" message
//!
//! ==============================================================================

use std::time::Duration;

use crate::client::{DirectoryClient, Transport};
use crate::endpoint::{DirectoryConfig, SaveMode};
use crate::error::{classify, ApiError};
use crate::form::InputError;
use crate::model::{Employee, EmployeeDraft};
use crate::notify::{NotificationId, Severity};
use crate::view::ViewState;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";
pub const SAVE_FAILED: &str = "Fill in all required fields, please";

// ==============================================================================
// host seam
// ==============================================================================

/// what the directory needs from the page it runs in
pub trait Host {
    fn update_view(&self, f: impl FnOnce(&mut ViewState));
    fn read_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;
    /// blocking yes/no dialog
    fn confirm(&self, prompt: &str) -> bool;
    /// remove notification `id` once `after` has elapsed
    fn schedule_dismiss(&self, id: NotificationId, after: Duration);
}

// ==============================================================================
// directory
// ==============================================================================

#[derive(Debug, Clone)]
pub struct Directory<T, H> {
    client: DirectoryClient<T>,
    host: H,
    dismiss_after: Duration,
}

impl<T: Transport, H: Host> Directory<T, H> {
    pub fn new(transport: T, host: H, config: &DirectoryConfig) -> Self {
        Directory {
            client: DirectoryClient::new(transport, config),
            host,
            dismiss_after: config.dismiss_after,
        }
    }

    /// show a notification and schedule its removal
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        let mut id = None;
        self.host
            .update_view(|view| id = Some(view.notify(message, severity)));
        if let Some(id) = id {
            self.host.schedule_dismiss(id, self.dismiss_after);
        }
    }

    fn report(&self, operation: &str, err: &ApiError, message: String) {
        tracing::warn!(operation, error = %err, "directory request failed");
        self.notify(message, Severity::Danger);
    }

    fn reject(&self, err: InputError) {
        tracing::debug!(error = %err, "input rejected");
        self.notify(classify(err.to_string()), Severity::Danger);
    }

    // ==========================================================================
    // api operations
    // ==========================================================================

    /// initial page load
    pub async fn load(&self) {
        self.list_all().await;
        self.list_roles().await;
    }

    pub async fn list_all(&self) {
        match self.client.list_employees().await {
            Ok(employees) => self.host.update_view(|view| view.replace_rows(employees)),
            Err(err) => self.report("list_all", &err, err.to_string()),
        }
    }

    pub async fn list_roles(&self) {
        match self.client.list_roles().await {
            Ok(roles) => self.host.update_view(|view| view.set_roles(roles)),
            Err(err) => self.report("list_roles", &err, err.to_string()),
        }
    }

    pub async fn get_by_id(&self, id: u64) {
        match self.client.get_employee(id).await {
            Ok(employee) => self.host.update_view(|view| view.show_single(employee)),
            Err(err) => self.report("get_by_id", &err, classify(&err)),
        }
    }

    pub async fn list_by_role_id(&self, role_id: u32) {
        let result = self.client.employees_by_role_id(role_id).await;
        self.show_filtered(
            "list_by_role_id",
            result,
            format!("There are no employees with Role ID {role_id}"),
        );
    }

    pub async fn list_by_role_title(&self, title: &str) {
        let result = self.client.employees_by_role_title(title).await;
        self.show_filtered(
            "list_by_role_title",
            result,
            format!("There are no employees with Role Title \"{title}\""),
        );
    }

    fn show_filtered(
        &self,
        operation: &str,
        result: Result<Option<Vec<Employee>>, ApiError>,
        not_found: String,
    ) {
        match result {
            Ok(Some(employees)) if !employees.is_empty() => {
                self.host.update_view(|view| view.replace_rows(employees));
            }
            Ok(_) => self.notify(classify(not_found), Severity::Danger),
            Err(err) => self.report(operation, &err, classify(&err)),
        }
    }

    /// create or update, then clear the edit form and refresh the table
    ///
    /// a failed save always shows the generic fill-in message; the real
    /// error only reaches the log.
    pub async fn save(&self, mode: SaveMode, draft: EmployeeDraft) {
        match self.client.save(mode, &draft).await {
            Ok(saved) => {
                self.notify(
                    format!("Employee with id {} saved successfully", saved.id),
                    Severity::Success,
                );
                self.host.update_view(ViewState::clear_employee_form);
                self.list_all().await;
            }
            Err(err) => self.report("save", &err, classify(SAVE_FAILED)),
        }
    }

    /// asks first; a declined prompt does nothing at all
    pub async fn delete_by_id(&self, id: u64) {
        if !self.host.confirm(DELETE_PROMPT) {
            return;
        }
        match self.client.delete(id).await {
            Ok(()) => {
                self.notify(
                    format!("Employee with id {id} has been deleted"),
                    Severity::Success,
                );
                self.host.update_view(ViewState::clear_employee_form);
                self.list_all().await;
            }
            Err(err) => self.report("delete_by_id", &err, err.to_string()),
        }
    }

    /// load an employee into the form; the table stays as is
    pub async fn prepare_edit(&self, id: u64) {
        match self.client.get_employee(id).await {
            Ok(employee) => self.host.update_view(|view| view.populate_form(&employee)),
            Err(err) => self.report("prepare_edit", &err, err.to_string()),
        }
    }

    // ==========================================================================
    // page events
    // ==========================================================================

    pub async fn submit_form(&self) {
        match self.host.read_view(|view| view.form.to_draft()) {
            Ok((mode, draft)) => self.save(mode, draft).await,
            Err(err) => self.reject(err),
        }
    }

    pub fn reset_form(&self) {
        self.host.update_view(ViewState::reset_form);
    }

    pub async fn find_by_id(&self) {
        match self.host.read_view(|view| view.search.employee_id()) {
            Ok(id) => self.get_by_id(id).await,
            Err(err) => self.reject(err),
        }
    }

    pub async fn find_by_role_title(&self) {
        let title = self.host.read_view(|view| {
            view.search
                .role_title(&view.roles)
                .map(str::to_string)
        });
        match title {
            Ok(title) => self.list_by_role_title(&title).await,
            Err(err) => self.reject(err),
        }
    }

    /// out-of-range input clears the field before the notification
    pub async fn find_by_role_id(&self) {
        match self.host.read_view(|view| view.search.role_id()) {
            Ok(role_id) => self.list_by_role_id(role_id).await,
            Err(err) => {
                self.host.update_view(|view| view.search.role_id.clear());
                self.reject(err);
            }
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
