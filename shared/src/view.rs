//! ==============================================================================
//! view.rs - explicit view state for the directory page
//! ==============================================================================
//!
//! everything the page shows lives in one `ViewState` value: table rows,
//! loaded roles (both dropdowns render from the same list), the two forms
//! and the visible notifications. rows and roles are always replaced
//! wholesale, never patched.
//!
//! ==============================================================================

use crate::form::{EmployeeForm, SearchForm};
use crate::model::{Employee, Role};
use crate::notify::{NotificationId, Notifications, Severity};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub rows: Vec<Employee>,
    pub roles: Vec<Role>,
    pub form: EmployeeForm,
    pub search: SearchForm,
    pub notifications: Notifications,
}

/// one table row, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: u64,
    pub cells: [String; 5],
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        EmployeeRow {
            id: employee.id,
            cells: [
                employee.id.to_string(),
                employee.first_name.clone(),
                employee.last_name.clone(),
                employee.job_title.clone(),
                employee.salary_label(),
            ],
        }
    }
}

/// `(value, label)` of a dropdown option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleOption {
    pub value: u32,
    pub label: String,
}

impl From<&Role> for RoleOption {
    fn from(role: &Role) -> Self {
        RoleOption {
            value: role.id,
            label: role.job_title.clone(),
        }
    }
}

impl ViewState {
    pub fn replace_rows(&mut self, employees: Vec<Employee>) {
        self.rows = employees;
    }

    pub fn show_single(&mut self, employee: Employee) {
        self.rows = vec![employee];
    }

    pub fn set_roles(&mut self, roles: Vec<Role>) {
        self.roles = roles;
    }

    pub fn populate_form(&mut self, employee: &Employee) {
        self.form.fill(employee, &self.roles);
    }

    /// clear only the create/edit form
    pub fn clear_employee_form(&mut self) {
        self.form.clear();
    }

    /// clear both forms and both role selections
    pub fn reset_form(&mut self) {
        self.form.clear();
        self.search.clear();
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.notifications.push(message, severity)
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    pub fn table_rows(&self) -> Vec<EmployeeRow> {
        self.rows.iter().map(EmployeeRow::from).collect()
    }

    pub fn role_options(&self) -> Vec<RoleOption> {
        self.roles.iter().map(RoleOption::from).collect()
    }
}
