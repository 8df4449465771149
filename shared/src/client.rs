//! ==============================================================================
//! client.rs - typed client for the directory api
//! ==============================================================================
//!
//! purpose:
//!     builds one request per operation and decodes the json answer.
//!     the actual http call sits behind `Transport` so the browser can use
//!     fetch while tests use an in-memory fake.
//!
//! ==============================================================================

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::endpoint::{DirectoryConfig, Endpoint, Method, SaveMode};
use crate::error::ApiError;
use crate::model::{Collection, Employee, EmployeeDraft, EmployeeList, Role, RoleList, SavedEmployee};

// ==============================================================================
// transport seam
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    /// json body, only for create and update
    pub body: Option<String>,
}

/// performs one http request
///
/// implementations return the response text for 2xx answers and
/// `ApiError::Status` for anything else.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError>;
}

// ==============================================================================
// client
// ==============================================================================

#[derive(Debug, Clone)]
pub struct DirectoryClient<T> {
    transport: T,
    base_url: Url,
}

impl<T: Transport> DirectoryClient<T> {
    pub fn new(transport: T, config: &DirectoryConfig) -> Self {
        DirectoryClient {
            transport,
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn call(
        &self,
        method: Method,
        endpoint: Endpoint,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let url = endpoint.url(&self.base_url)?;
        tracing::debug!(%method, %url, "directory request");
        self.transport.send(ApiRequest { method, url, body }).await
    }

    async fn get<R: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<R, ApiError> {
        let text = self.call(Method::Get, endpoint, None).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// all employees; an envelope without `_embedded` is an empty list
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let collection: Collection<EmployeeList> = self.get(Endpoint::Employees).await?;
        Ok(collection.into_employees().unwrap_or_default())
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>, ApiError> {
        let collection: Collection<RoleList> = self.get(Endpoint::Roles).await?;
        Ok(collection.into_roles())
    }

    pub async fn get_employee(&self, id: u64) -> Result<Employee, ApiError> {
        self.get(Endpoint::Employee(id)).await
    }

    pub async fn get_role(&self, id: u32) -> Result<Role, ApiError> {
        self.get(Endpoint::Role(id)).await
    }

    /// `Ok(None)` when the server sent no embedded collection
    pub async fn employees_by_role_id(&self, role_id: u32) -> Result<Option<Vec<Employee>>, ApiError> {
        let collection: Collection<EmployeeList> =
            self.get(Endpoint::EmployeesByRoleId(role_id)).await?;
        Ok(collection.into_employees())
    }

    pub async fn employees_by_role_title(
        &self,
        title: &str,
    ) -> Result<Option<Vec<Employee>>, ApiError> {
        let collection: Collection<EmployeeList> = self
            .get(Endpoint::EmployeesByRoleTitle(title.to_string()))
            .await?;
        Ok(collection.into_employees())
    }

    pub async fn employees_by_role_query(
        &self,
        title: &str,
    ) -> Result<Option<Vec<Employee>>, ApiError> {
        let collection: Collection<EmployeeList> = self
            .get(Endpoint::EmployeesByRoleQuery(title.to_string()))
            .await?;
        Ok(collection.into_employees())
    }

    /// POST for `Create`, PUT for `Update`
    pub async fn save(&self, mode: SaveMode, draft: &EmployeeDraft) -> Result<SavedEmployee, ApiError> {
        let body = serde_json::to_string(draft)?;
        let text = self.call(mode.method(), mode.endpoint(), Some(body)).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// the response body is ignored
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.call(Method::Delete, Endpoint::Employee(id), None).await?;
        Ok(())
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// in-memory transport: records requests, answers from a queue
    #[derive(Clone, Default)]
    pub(crate) struct FakeTransport {
        pub(crate) requests: Rc<RefCell<Vec<ApiRequest>>>,
        responses: Rc<RefCell<VecDeque<Result<String, ApiError>>>>,
    }

    impl FakeTransport {
        pub(crate) fn respond(&self, response: Result<&str, ApiError>) -> &Self {
            self.responses
                .borrow_mut()
                .push_back(response.map(str::to_string));
            self
        }

        pub(crate) fn sent(&self) -> Vec<(Method, String)> {
            self.requests
                .borrow()
                .iter()
                .map(|request| (request.method, request.url.path().to_string()))
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_string())))
        }
    }

    pub(crate) fn config() -> DirectoryConfig {
        DirectoryConfig::from_location("http://localhost:8080/").unwrap()
    }

    const EMPLOYEES: &str = r#"{"_embedded":{"employeeDtoList":[
        {"id":1,"firstName":"Ann","lastName":"Lee","jobTitle":"QA Tester","annualSalary":30000},
        {"id":2,"firstName":"Bo","lastName":"Kim","jobTitle":"IT Director","annualSalary":67000}
    ]}}"#;

    #[test]
    fn test_list_employees() {
        let transport = FakeTransport::default();
        transport.respond(Ok(EMPLOYEES));
        let client = DirectoryClient::new(transport.clone(), &config());

        let employees = block_on(client.list_employees()).unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].first_name, "Bo");
        assert_eq!(transport.sent(), vec![(Method::Get, "/employees".to_string())]);
    }

    #[test]
    fn test_list_employees_without_embedded_is_empty() {
        let transport = FakeTransport::default();
        transport.respond(Ok("{}"));
        let client = DirectoryClient::new(transport, &config());
        assert!(block_on(client.list_employees()).unwrap().is_empty());
    }

    #[test]
    fn test_role_filters_keep_missing_embedded() {
        let transport = FakeTransport::default();
        transport.respond(Ok("{}")).respond(Ok(EMPLOYEES)).respond(Ok("{}"));
        let client = DirectoryClient::new(transport.clone(), &config());

        assert_eq!(block_on(client.employees_by_role_id(4)).unwrap(), None);
        assert_eq!(
            block_on(client.employees_by_role_title("QA Tester")).unwrap().map(|e| e.len()),
            Some(2)
        );
        assert_eq!(block_on(client.employees_by_role_query("QA Tester")).unwrap(), None);

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].url.path(), "/employees/roleid/4");
        assert_eq!(requests[1].url.path(), "/employees/role/QA%20Tester");
        assert_eq!(requests[2].url.query(), Some("job=QA+Tester"));
    }

    #[test]
    fn test_get_role() {
        let transport = FakeTransport::default();
        transport.respond(Ok(r#"{"id":3,"jobTitle":"QA Tester","annualSalary":30000}"#));
        let client = DirectoryClient::new(transport.clone(), &config());

        let role = block_on(client.get_role(3)).unwrap();
        assert_eq!(role.job_title, "QA Tester");
        assert_eq!(transport.sent(), vec![(Method::Get, "/roles/3".to_string())]);
    }

    #[test]
    fn test_save_sends_json_body() {
        let transport = FakeTransport::default();
        transport.respond(Ok(r#"{"id":42,"firstName":"Ann"}"#));
        let client = DirectoryClient::new(transport.clone(), &config());
        let draft = EmployeeDraft {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            role: crate::model::RoleRef { id: Some(3) },
        };

        let saved = block_on(client.save(SaveMode::Update(42), &draft)).unwrap();
        assert_eq!(saved.id, 42);

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].url.path(), "/employees/42");
        let body: EmployeeDraft = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, draft);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let transport = FakeTransport::default();
        transport.respond(Ok("<html>"));
        let client = DirectoryClient::new(transport, &config());
        assert!(matches!(block_on(client.get_employee(1)), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_status_error_passes_through() {
        let transport = FakeTransport::default();
        transport.respond(Err(ApiError::Status { status: 404 }));
        let client = DirectoryClient::new(transport, &config());
        assert_eq!(
            block_on(client.delete(9)),
            Err(ApiError::Status { status: 404 })
        );
    }
}
