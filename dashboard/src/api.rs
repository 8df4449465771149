//! ==============================================================================
//! api.rs - fetch-backed transport for the directory api
//! ==============================================================================

use async_trait::async_trait;
use directory_shared::{ApiError, ApiRequest, Method, Transport};
use gloo_net::http::{Request, RequestBuilder};

/// browser fetch via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
        let url = request.url.as_str();
        let builder = builder(request.method, url).header("Accept", "application/json");

        let response = match request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(transport_error)?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(transport_error)?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

/// map fetch rejections onto the directory error kinds
fn transport_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
        gloo_net::Error::JsError(js) if js.name == "TimeoutError" => ApiError::Timeout,
        gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}
