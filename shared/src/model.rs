//! ==============================================================================
//! model.rs - wire types for the employee directory api
//! ==============================================================================
//!
//! the backend speaks hal-style json: collections arrive wrapped in an
//! `_embedded` envelope keyed by dto list name, and single resources carry
//! a `_links` map the client never follows.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

// ==============================================================================
// employees
// ==============================================================================

/// employee as the server returns it
///
/// `job_title` and `annual_salary` are derived server-side from the role
/// and are never edited by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub annual_salary: Option<f64>,
}

impl Employee {
    /// salary cell text, empty when the server omitted it
    pub fn salary_label(&self) -> String {
        self.annual_salary
            .map(|salary| salary.to_string())
            .unwrap_or_default()
    }
}

/// role reference sent inside a create/update body
///
/// always serialized as an object; with no role selected it is
/// `{"id": null}`, which the backend answers with 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    pub id: Option<u32>,
}

/// request body for create (POST) and update (PUT)
///
/// the id is never part of the body; updates carry it in the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub role: RoleRef,
}

/// the part of a save response the client reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SavedEmployee {
    pub id: u64,
}

// ==============================================================================
// roles
// ==============================================================================

/// job title category, read-only from the client's point of view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: u32,
    pub job_title: String,
    #[serde(default)]
    pub annual_salary: Option<f64>,
}

// ==============================================================================
// hal envelopes
// ==============================================================================

/// `{ "_embedded": { ... } }` wrapper
///
/// the server drops `_embedded` entirely when the collection is empty, so
/// `embedded` is `None` in that case.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection<T> {
    #[serde(rename = "_embedded", default = "Option::default")]
    pub embedded: Option<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeList {
    #[serde(rename = "employeeDtoList", default)]
    pub employees: Vec<Employee>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleList {
    #[serde(rename = "roleDtoList", default)]
    pub roles: Vec<Role>,
}

impl Collection<EmployeeList> {
    /// employees inside the envelope, `None` when `_embedded` was absent
    pub fn into_employees(self) -> Option<Vec<Employee>> {
        self.embedded.map(|list| list.employees)
    }
}

impl Collection<RoleList> {
    /// roles sorted by id, empty when `_embedded` was absent
    pub fn into_roles(self) -> Vec<Role> {
        let mut roles = self.embedded.map(|list| list.roles).unwrap_or_default();
        roles.sort_by_key(|role| role.id);
        roles
    }
}

// ==============================================================================
// tests
// ==============================================================================
