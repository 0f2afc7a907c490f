use log::debug;
use reqwest::{header, Client as ReqwestClient, Method, RequestBuilder, StatusCode};

mod apps;
mod deploys;
mod error;
mod pagination;
mod rate_limit;
mod repos;

pub use apps::AppClient;
pub use deploys::{CreateDeploymentRequest, CreateDeploymentStatusRequest, DeploymentClient};
pub use error::{ApiError, ApiErrorDetail, Error, Result};
pub use pagination::{ListOptions, Pagination};
pub use rate_limit::Rate;
pub use repos::{CreateStatusRequest, RepositoryClient};

// Constants
const DEFAULT_BASE_URL: &str = "https://api.github.com/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const HEADER_LINK: &str = "Link";
const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";
const HEADER_RATE_RESET: &str = "X-RateLimit-Reset";
const HEADER_REQUEST_ID: &str = "X-GitHub-Request-Id";

const MEDIA_TYPE_V3: &str = "application/vnd.github.v3+json";

// https://developer.github.com/changes/2016-04-06-deployment-and-deployment-status-enhancements/
const MEDIA_TYPE_DEPLOYMENT_STATUS_PREVIEW: &str = "application/vnd.github.ant-man-preview+json";

// https://developer.github.com/changes/2018-10-16-deployments-environments-states-and-auto-inactive-updates/
const MEDIA_TYPE_EXPAND_DEPLOYMENT_STATUS_PREVIEW: &str =
    "application/vnd.github.flash-preview+json";

#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    api_token: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            api_token: None,
        }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn api_token<S: Into<String>>(mut self, api_token: S) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned());

        let mut client_builder = ReqwestClient::builder().user_agent(&user_agent);

        if let Some(token) = &self.api_token {
            let mut headers = header::HeaderMap::new();
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("token {}", token))
                    .map_err(|e| e.to_string())?,
            );
            client_builder = client_builder.default_headers(headers);
        }

        let client = client_builder.build()?;

        Ok(Client {
            base_url,
            user_agent,
            api_token: self.api_token,
            client,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Pagination, rate-limit, and request-tracing information extracted from
/// the response headers of every call, successful or not.
#[derive(Debug, Default)]
pub struct ResponseMeta {
    pub pagination: Pagination,
    pub rate: Rate,
    /// Provider-assigned id of the request, for support correlation.
    pub request_id: Option<String>,
}

impl ResponseMeta {
    fn from_headers(headers: &header::HeaderMap) -> Self {
        Self {
            pagination: Pagination::from_headers(headers),
            rate: Rate::from_headers(headers),
            request_id: headers
                .get(HEADER_REQUEST_ID)
                .and_then(|h| h.to_str().ok())
                .map(str::to_owned),
        }
    }
}

/// A decoded API response: the domain value plus the metadata that
/// accompanied it.
#[derive(Debug)]
pub struct Response<T> {
    meta: ResponseMeta,
    value: T,
}

impl<T> Response<T> {
    fn new(meta: ResponseMeta, value: T) -> Self {
        Self { meta, value }
    }

    pub fn meta(&self) -> &ResponseMeta {
        &self.meta
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (ResponseMeta, T) {
        (self.meta, self.value)
    }
}

#[derive(Debug)]
pub struct Client {
    /// Base URL to use for API requests. Defaults to the public GitHub API,
    /// but can be overridden for use with GitHub Enterprise or a test
    /// server. Always terminated with a trailing slash.
    base_url: String,

    /// User agent string sent when communicating with the API
    #[allow(unused)]
    user_agent: String,

    /// API token to use when issuing requests
    #[allow(unused)]
    api_token: Option<String>,

    /// Client used to make http requests
    client: ReqwestClient,
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build().unwrap()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    fn post(&self, url: &str) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    fn delete(&self, url: &str) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, url);
        debug!("request: {} {}", method, url);
        self.client
            .request(method, &url)
            .header(header::ACCEPT, MEDIA_TYPE_V3)
    }

    /// Decode a response into a domain value, capturing response metadata
    /// and converting non-2xx statuses into typed errors.
    async fn json<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Response<T>> {
        let meta = ResponseMeta::from_headers(response.headers());
        let status = response.status();
        debug!("response: {} ({:?})", status, meta.request_id);

        if !status.is_success() {
            return Err(Self::api_error(meta, status, response).await);
        }

        let body = response.bytes().await?;
        let value = serde_json::from_slice(&body)?;
        Ok(Response::new(meta, value))
    }

    /// Like [`Client::json`] for endpoints that answer with no body.
    async fn empty(&self, response: reqwest::Response) -> Result<Response<()>> {
        let meta = ResponseMeta::from_headers(response.headers());
        let status = response.status();
        debug!("response: {} ({:?})", status, meta.request_id);

        if !status.is_success() {
            return Err(Self::api_error(meta, status, response).await);
        }

        Ok(Response::new(meta, ()))
    }

    async fn api_error(meta: ResponseMeta, status: StatusCode, response: reqwest::Response) -> Error {
        if status == StatusCode::FORBIDDEN && meta.rate.is_exhausted() {
            return Error::RateLimit {
                meta: Box::new(meta),
            };
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return err.into(),
        };
        let error =
            serde_json::from_str(&body).unwrap_or_else(|_| ApiError::from_status(status));

        Error::Api {
            status,
            meta: Box::new(meta),
            error,
        }
    }

    pub fn deployments(&self) -> DeploymentClient {
        DeploymentClient::new(self)
    }

    pub fn apps(&self) -> AppClient {
        AppClient::new(self)
    }

    pub fn repos(&self) -> RepositoryClient {
        RepositoryClient::new(self)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
