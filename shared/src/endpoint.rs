//! ==============================================================================
//! endpoint.rs - directory api routes and base url handling
//! ==============================================================================
//!
//! api (relative to the page location):
//!     GET    employees                  -> employee collection
//!     GET    employees/:id              -> one employee
//!     GET    employees/roleid/:role_id  -> employees with that role id
//!     GET    employees/role/:title      -> employees with that job title
//!     GET    employees/role?job=:title  -> same, as a query parameter
//!     POST   employees                  -> create
//!     PUT    employees/:id              -> update
//!     DELETE employees/:id              -> delete
//!     GET    roles                      -> role collection
//!     GET    roles/:id                  -> one role
//!
//! ==============================================================================

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::ApiError;

/// how long a notification stays on screen
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

// ==============================================================================
// configuration
// ==============================================================================

/// runtime settings for the directory client
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryConfig {
    /// directory every endpoint path is resolved against (ends with `/`)
    pub base_url: Url,
    /// auto-dismiss delay for notifications
    pub dismiss_after: Duration,
}

impl DirectoryConfig {
    /// derive the api base from the page location
    ///
    /// the page's own file name, query and fragment are dropped, so
    /// `http://host/app/index.html?x#y` resolves to `http://host/app/`.
    pub fn from_location(href: &str) -> Result<Self, ApiError> {
        let page = Url::parse(href)?;
        let base_url = page.join("./")?;
        Ok(DirectoryConfig {
            base_url,
            dismiss_after: DISMISS_AFTER,
        })
    }
}

// ==============================================================================
// http method
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==============================================================================
// endpoints
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Employees,
    Employee(u64),
    EmployeesByRoleId(u32),
    EmployeesByRoleTitle(String),
    EmployeesByRoleQuery(String),
    Roles,
    Role(u32),
}

impl Endpoint {
    /// absolute url for this endpoint under `base`
    pub fn url(&self, base: &Url) -> Result<Url, ApiError> {
        let url = match self {
            Endpoint::Employees => base.join("employees")?,
            Endpoint::Employee(id) => base.join(&format!("employees/{id}"))?,
            Endpoint::EmployeesByRoleId(role_id) => {
                base.join(&format!("employees/roleid/{role_id}"))?
            }
            Endpoint::EmployeesByRoleTitle(title) => {
                // titles contain spaces; push() percent-encodes one segment
                let mut url = base.join("employees/role")?;
                url.path_segments_mut()
                    .map_err(|_| ApiError::InvalidUrl(base.to_string()))?
                    .push(title);
                url
            }
            Endpoint::EmployeesByRoleQuery(title) => {
                let mut url = base.join("employees/role")?;
                url.query_pairs_mut().append_pair("job", title);
                url
            }
            Endpoint::Roles => base.join("roles")?,
            Endpoint::Role(id) => base.join(&format!("roles/{id}"))?,
        };
        Ok(url)
    }
}

// ==============================================================================
// save mode
// ==============================================================================

/// create vs update, decided by whether the form carries an id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update(u64),
}

impl SaveMode {
    pub fn from_id(id: Option<u64>) -> Self {
        match id {
            Some(id) => SaveMode::Update(id),
            None => SaveMode::Create,
        }
    }

    pub fn method(self) -> Method {
        match self {
            SaveMode::Create => Method::Post,
            SaveMode::Update(_) => Method::Put,
        }
    }

    pub fn endpoint(self) -> Endpoint {
        match self {
            SaveMode::Create => Endpoint::Employees,
            SaveMode::Update(id) => Endpoint::Employee(id),
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        DirectoryConfig::from_location("http://localhost:8080/")
            .unwrap()
            .base_url
    }

    #[test]
    fn test_base_url_drops_page_query_and_fragment() {
        let config =
            DirectoryConfig::from_location("http://localhost:8080/app/index.html?x=1#top").unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/app/");
        assert_eq!(config.dismiss_after, Duration::from_millis(3000));
    }

    #[test]
    fn test_base_url_rejects_garbage() {
        assert!(matches!(
            DirectoryConfig::from_location("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_employee_paths() {
        let base = base();
        assert_eq!(
            Endpoint::Employees.url(&base).unwrap().as_str(),
            "http://localhost:8080/employees"
        );
        assert_eq!(
            Endpoint::Employee(7).url(&base).unwrap().as_str(),
            "http://localhost:8080/employees/7"
        );
        assert_eq!(
            Endpoint::EmployeesByRoleId(3).url(&base).unwrap().as_str(),
            "http://localhost:8080/employees/roleid/3"
        );
        assert_eq!(
            Endpoint::Role(2).url(&base).unwrap().as_str(),
            "http://localhost:8080/roles/2"
        );
    }

    #[test]
    fn test_role_title_is_encoded_as_one_segment() {
        let url = Endpoint::EmployeesByRoleTitle("QA Tester".to_string())
            .url(&base())
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/employees/role/QA%20Tester");

        let url = Endpoint::EmployeesByRoleTitle("a/b".to_string())
            .url(&base())
            .unwrap();
        assert_eq!(url.path(), "/employees/role/a%2Fb");
    }

    #[test]
    fn test_role_query_parameter() {
        let url = Endpoint::EmployeesByRoleQuery("IT Director".to_string())
            .url(&base())
            .unwrap();
        assert_eq!(url.path(), "/employees/role");
        assert_eq!(url.query(), Some("job=IT+Director"));
    }

    #[test]
    fn test_save_mode_picks_method_and_path() {
        assert_eq!(SaveMode::from_id(None), SaveMode::Create);
        assert_eq!(SaveMode::Create.method(), Method::Post);
        assert_eq!(SaveMode::Create.endpoint(), Endpoint::Employees);

        let update = SaveMode::from_id(Some(42));
        assert_eq!(update.method(), Method::Put);
        assert_eq!(update.endpoint(), Endpoint::Employee(42));
    }
}
