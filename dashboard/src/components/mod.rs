//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod employee_form;
mod employee_table;
mod header;
mod notifications;
mod search;

pub use employee_form::EmployeeForm;
pub use employee_table::EmployeeTable;
pub use header::Header;
pub use notifications::NotificationArea;
pub use search::SearchPanel;
