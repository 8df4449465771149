//! ==============================================================================
//! form.rs - create/edit form and search form values
//! ==============================================================================
//!
//! the page keeps raw input text here; nothing is sent until the values
//! pass the checks below. a failed check becomes a danger notification
//! and no request is issued.
//!
//! ==============================================================================

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::endpoint::SaveMode;
use crate::model::{Employee, EmployeeDraft, Role, RoleRef};

/// role ids the backend knows about
pub const ROLE_ID_RANGE: RangeInclusive<u32> = 1..=11;

/// client-side validation failures, displayed verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Fill in an Employee ID, please")]
    MissingEmployeeId,
    #[error("Fill in a valid Employee ID, please")]
    InvalidEmployeeId,
    #[error("Fill in a Role Title, please")]
    MissingRoleTitle,
    #[error("Fill in a valid Role ID, please")]
    InvalidRoleId,
}

// ==============================================================================
// create / edit form
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    /// empty for a new employee, set by `fill` when editing
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// selected option of the role dropdown
    pub role_id: Option<u32>,
}

impl EmployeeForm {
    /// request body plus create/update decision
    pub fn to_draft(&self) -> Result<(SaveMode, EmployeeDraft), InputError> {
        let id = match self.id.trim() {
            "" => None,
            raw => Some(raw.parse::<u64>().map_err(|_| InputError::InvalidEmployeeId)?),
        };
        let draft = EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: RoleRef { id: self.role_id },
        };
        Ok((SaveMode::from_id(id), draft))
    }

    /// load an employee for editing
    ///
    /// the role is picked by job title text: the first role whose title
    /// contains the employee's title wins.
    pub fn fill(&mut self, employee: &Employee, roles: &[Role]) {
        self.id = employee.id.to_string();
        self.first_name = employee.first_name.clone();
        self.last_name = employee.last_name.clone();
        self.role_id = if employee.job_title.is_empty() {
            None
        } else {
            roles
                .iter()
                .find(|role| role.job_title.contains(&employee.job_title))
                .map(|role| role.id)
        };
    }

    pub fn clear(&mut self) {
        *self = EmployeeForm::default();
    }
}

// ==============================================================================
// search form
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub employee_id: String,
    /// selected option of the search role dropdown
    pub selected_role: Option<u32>,
    pub role_id: String,
}

impl SearchForm {
    pub fn employee_id(&self) -> Result<u64, InputError> {
        match self.employee_id.trim() {
            "" => Err(InputError::MissingEmployeeId),
            raw => raw.parse().map_err(|_| InputError::InvalidEmployeeId),
        }
    }

    /// text of the selected search option
    pub fn role_title<'a>(&self, roles: &'a [Role]) -> Result<&'a str, InputError> {
        let selected = self.selected_role.ok_or(InputError::MissingRoleTitle)?;
        roles
            .iter()
            .find(|role| role.id == selected)
            .map(|role| role.job_title.as_str())
            .ok_or(InputError::MissingRoleTitle)
    }

    pub fn role_id(&self) -> Result<u32, InputError> {
        self.role_id
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|id| ROLE_ID_RANGE.contains(id))
            .ok_or(InputError::InvalidRoleId)
    }

    pub fn clear(&mut self) {
        *self = SearchForm::default();
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> Vec<Role> {
        vec![
            Role {
                id: 5,
                job_title: "Web Developer".to_string(),
                annual_salary: Some(34000.0),
            },
            Role {
                id: 6,
                job_title: "Web Administrator".to_string(),
                annual_salary: Some(32000.0),
            },
            Role {
                id: 10,
                job_title: "IT Director".to_string(),
                annual_salary: Some(67000.0),
            },
        ]
    }

    fn employee(job_title: &str) -> Employee {
        Employee {
            id: 9,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            job_title: job_title.to_string(),
            annual_salary: None,
        }
    }

    #[test]
    fn test_empty_id_creates() {
        let form = EmployeeForm {
            id: "  ".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            role_id: Some(3),
        };
        let (mode, draft) = form.to_draft().unwrap();
        assert_eq!(mode, SaveMode::Create);
        assert_eq!(draft.role, RoleRef { id: Some(3) });
    }

    #[test]
    fn test_present_id_updates() {
        let form = EmployeeForm {
            id: "12".to_string(),
            ..EmployeeForm::default()
        };
        let (mode, draft) = form.to_draft().unwrap();
        assert_eq!(mode, SaveMode::Update(12));
        assert_eq!(draft.role, RoleRef { id: None });
    }

    #[test]
    fn test_non_numeric_form_id_is_rejected() {
        let form = EmployeeForm {
            id: "abc".to_string(),
            ..EmployeeForm::default()
        };
        assert_eq!(form.to_draft(), Err(InputError::InvalidEmployeeId));
    }

    #[test]
    fn test_fill_selects_role_by_title() {
        let mut form = EmployeeForm::default();
        form.fill(&employee("IT Director"), &roles());
        assert_eq!(form.id, "9");
        assert_eq!(form.first_name, "Ann");
        assert_eq!(form.role_id, Some(10));
    }

    #[test]
    fn test_fill_matches_by_containment() {
        // "Web" is contained in both web titles, the first one wins
        let mut form = EmployeeForm::default();
        form.fill(&employee("Web"), &roles());
        assert_eq!(form.role_id, Some(5));

        form.fill(&employee("Astronaut"), &roles());
        assert_eq!(form.role_id, None);

        form.fill(&employee(""), &roles());
        assert_eq!(form.role_id, None);
    }

    #[test]
    fn test_employee_id_validation() {
        let mut search = SearchForm::default();
        assert_eq!(search.employee_id(), Err(InputError::MissingEmployeeId));
        search.employee_id = "x1".to_string();
        assert_eq!(search.employee_id(), Err(InputError::InvalidEmployeeId));
        search.employee_id = " 7 ".to_string();
        assert_eq!(search.employee_id(), Ok(7));
    }

    #[test]
    fn test_role_title_resolves_option_text() {
        let mut search = SearchForm::default();
        assert_eq!(search.role_title(&roles()), Err(InputError::MissingRoleTitle));
        search.selected_role = Some(6);
        assert_eq!(search.role_title(&roles()), Ok("Web Administrator"));
    }

    #[test]
    fn test_role_id_bounds() {
        let mut search = SearchForm::default();
        for bad in ["", "0", "12", "-1", "3.5", "abc"] {
            search.role_id = bad.to_string();
            assert_eq!(search.role_id(), Err(InputError::InvalidRoleId), "{bad}");
        }
        for good in ["1", "11", " 4 "] {
            search.role_id = good.to_string();
            assert!(search.role_id().is_ok(), "{good}");
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(InputError::InvalidRoleId.to_string(), "Fill in a valid Role ID, please");
        assert_eq!(InputError::MissingRoleTitle.to_string(), "Fill in a Role Title, please");
    }
}
