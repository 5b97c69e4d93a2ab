//! Production HTTP client implementations
//!
//! Browser builds go through gloo-net's fetch wrapper; native builds use
//! reqwest. Both implement the core's [`HttpClient`] seam, so the gateway
//! and everything above it never sees the difference.

use std::sync::Arc;

use async_trait::async_trait;
use tally_core::http::{HttpClient, HttpResponse};
use tally_core::session::Session;
use tally_core::{ApiClient, ApiConfig, TallyError};

/// Fetch-based client for wasm builds
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct GlooHttpClient;

#[cfg(target_arch = "wasm32")]
impl GlooHttpClient {
    fn apply_bearer(
        request: gloo_net::http::RequestBuilder,
        bearer: Option<&str>,
    ) -> gloo_net::http::RequestBuilder {
        match bearer {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    async fn finish(
        request: gloo_net::http::Request,
        method: &str,
        url: &str,
    ) -> tally_core::Result<HttpResponse> {
        log::debug!("{method} {url}");
        let response = request
            .send()
            .await
            .map_err(|e| TallyError::Http(format!("{method} {url} failed: {e}")))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TallyError::Http(format!("Reading response body: {e}")))?;
        log::debug!("{method} {url} -> {status} ({} bytes)", body.len());
        Ok(HttpResponse { status, body })
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn get(&self, url: &str, bearer: Option<&str>) -> tally_core::Result<HttpResponse> {
        let request = Self::apply_bearer(gloo_net::http::Request::get(url), bearer)
            .build()
            .map_err(|e| TallyError::Http(format!("GET {url} failed: {e}")))?;
        Self::finish(request, "GET", url).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &str,
        bearer: Option<&str>,
    ) -> tally_core::Result<HttpResponse> {
        let request = Self::apply_bearer(gloo_net::http::Request::post(url), bearer)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .map_err(|e| TallyError::Http(format!("POST {url} failed: {e}")))?;
        Self::finish(request, "POST", url).await
    }

    async fn put_json(
        &self,
        url: &str,
        body: &str,
        bearer: Option<&str>,
    ) -> tally_core::Result<HttpResponse> {
        let request = Self::apply_bearer(gloo_net::http::Request::put(url), bearer)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .map_err(|e| TallyError::Http(format!("PUT {url} failed: {e}")))?;
        Self::finish(request, "PUT", url).await
    }

    async fn delete(&self, url: &str, bearer: Option<&str>) -> tally_core::Result<HttpResponse> {
        let request = Self::apply_bearer(gloo_net::http::Request::delete(url), bearer)
            .build()
            .map_err(|e| TallyError::Http(format!("DELETE {url} failed: {e}")))?;
        Self::finish(request, "DELETE", url).await
    }
}

/// reqwest-based client for native builds
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestHttpClient {
    fn apply_bearer(
        request: reqwest::RequestBuilder,
        bearer: Option<&str>,
    ) -> reqwest::RequestBuilder {
        match bearer {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn finish(
        request: reqwest::RequestBuilder,
        method: &str,
        url: &str,
    ) -> tally_core::Result<HttpResponse> {
        log::debug!("{method} {url}");
        let response = request
            .send()
            .await
            .map_err(|e| TallyError::Http(format!("{method} {url} failed: {e}")))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TallyError::Http(format!("Reading response body: {e}")))?;
        log::debug!("{method} {url} -> {status} ({} bytes)", body.len());
        Ok(HttpResponse { status, body })
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, bearer: Option<&str>) -> tally_core::Result<HttpResponse> {
        Self::finish(Self::apply_bearer(self.client.get(url), bearer), "GET", url).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &str,
        bearer: Option<&str>,
    ) -> tally_core::Result<HttpResponse> {
        let request = Self::apply_bearer(self.client.post(url), bearer)
            .header("Content-Type", "application/json")
            .body(body.to_string());
        Self::finish(request, "POST", url).await
    }

    async fn put_json(
        &self,
        url: &str,
        body: &str,
        bearer: Option<&str>,
    ) -> tally_core::Result<HttpResponse> {
        let request = Self::apply_bearer(self.client.put(url), bearer)
            .header("Content-Type", "application/json")
            .body(body.to_string());
        Self::finish(request, "PUT", url).await
    }

    async fn delete(&self, url: &str, bearer: Option<&str>) -> tally_core::Result<HttpResponse> {
        Self::finish(
            Self::apply_bearer(self.client.delete(url), bearer),
            "DELETE",
            url,
        )
        .await
    }
}

/// The HTTP client for the current platform
pub fn http_client() -> Arc<dyn HttpClient> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(GlooHttpClient)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(ReqwestHttpClient::default())
    }
}

/// Build the API gateway for the given session.
///
/// Construction is cheap; callers build one inside each spawned action
/// rather than holding a long-lived instance.
pub fn gateway(session: &Session) -> ApiClient {
    ApiClient::new(http_client(), session.clone(), &ApiConfig::from_env())
}
