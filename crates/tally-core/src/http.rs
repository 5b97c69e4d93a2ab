//! HTTP client abstraction for testability
//!
//! The trait is `?Send` because the browser event loop is single-threaded
//! and fetch futures are not `Send`. Production implementations live in
//! the frontend crate (gloo-net on wasm, reqwest natively).

use async_trait::async_trait;

/// HTTP response from a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over the HTTP transport for dependency injection
///
/// `bearer` carries the access token for authenticated operations; the
/// implementation attaches it as an `Authorization: Bearer <token>` header.
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient {
    /// Send a GET request
    async fn get(&self, url: &str, bearer: Option<&str>) -> crate::Result<HttpResponse>;

    /// Send a POST request with a JSON body
    async fn post_json(
        &self,
        url: &str,
        body: &str,
        bearer: Option<&str>,
    ) -> crate::Result<HttpResponse>;

    /// Send a PUT request with a JSON body
    async fn put_json(
        &self,
        url: &str,
        body: &str,
        bearer: Option<&str>,
    ) -> crate::Result<HttpResponse>;

    /// Send a DELETE request
    async fn delete(&self, url: &str, bearer: Option<&str>) -> crate::Result<HttpResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_hundreds_are_success() {
        for status in [200u16, 201, 204, 299] {
            let response = HttpResponse {
                status,
                body: String::new(),
            };
            assert!(response.is_success(), "{status}");
        }
    }

    #[test]
    fn other_statuses_are_failure() {
        for status in [199u16, 301, 400, 401, 404, 500] {
            let response = HttpResponse {
                status,
                body: String::new(),
            };
            assert!(!response.is_success(), "{status}");
        }
    }
}
