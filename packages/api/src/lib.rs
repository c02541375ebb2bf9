//! # API crate — typed REST client for the Track Craft backend
//!
//! [`ApiClient`] wraps every backend operation in a typed async function.
//! Each call issues exactly one request, never retries, and maps
//! non-success statuses to a structured [`ApiError`].
//!
//! ## Operations
//!
//! | Function | Request |
//! |----------|---------|
//! | [`login`](ApiClient::login) | `POST /login`, form-encoded credentials |
//! | [`signup`](ApiClient::signup) | `POST /users/signup` |
//! | [`current_user`](ApiClient::current_user) | `GET /users/me` |
//! | [`user_by_id`](ApiClient::user_by_id) | `GET /users/{id}` |
//! | [`update_monthly_limit`](ApiClient::update_monthly_limit) | `PUT /users/{id}/monthly-limit` |
//! | [`create_expense`](ApiClient::create_expense) | `POST /expenses/create` |
//! | [`list_expenses`](ApiClient::list_expenses) | `GET /expenses/get_expenses` |
//! | [`update_expense`](ApiClient::update_expense) | `PUT /expenses/update/{id}` |
//! | [`delete_expense`](ApiClient::delete_expense) | `DELETE /expenses/delete/{id}` |
//!
//! Authenticated operations take the bearer token explicitly; the client
//! itself is stateless and cheap to construct per call.
//!
//! The base URL comes from the `TRACKCRAFT_API_URL` environment setting
//! (compile-time on WASM, where there is no process environment; a runtime
//! override is honored on native) and defaults to [`DEFAULT_BASE_URL`].

use serde::{Deserialize, Serialize};

use store::{Expense, NewExpense, TokenResponse, User};

mod error;
pub use error::ApiError;

/// Backend address used when `TRACKCRAFT_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Resolve the backend base URL from the environment.
pub fn base_url_from_env() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(url) = std::env::var("TRACKCRAFT_API_URL") {
        if !url.is_empty() {
            return url;
        }
    }
    option_env!("TRACKCRAFT_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

#[derive(Serialize)]
struct SignupBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct MonthlyLimitBody {
    monthly_limit: f64,
}

/// Error body the backend sends with non-success statuses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Stateless client for the Track Craft REST backend.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client pointed at the environment-configured backend.
    pub fn new() -> Self {
        Self::with_base_url(base_url_from_env())
    }

    /// Client pointed at an explicit base URL (tests, alternate deployments).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /login` with form-encoded credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/login"))
            .form(&[("username", email), ("password", password)])
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `POST /users/signup`. Does not authenticate the new account.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let response = self
            .http
            .post(self.url("/users/signup"))
            .json(&SignupBody {
                name,
                email,
                password,
            })
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `GET /users/me` for the token's owner.
    pub async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        let response = self
            .http
            .get(self.url("/users/me"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `GET /users/{id}`.
    pub async fn user_by_id(&self, token: &str, id: i64) -> Result<User, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/users/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `PUT /users/{id}/monthly-limit`. Returns the updated user.
    pub async fn update_monthly_limit(
        &self,
        token: &str,
        id: i64,
        monthly_limit: f64,
    ) -> Result<User, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/users/{id}/monthly-limit")))
            .bearer_auth(token)
            .json(&MonthlyLimitBody { monthly_limit })
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `POST /expenses/create`.
    pub async fn create_expense(
        &self,
        token: &str,
        expense: &NewExpense,
    ) -> Result<Expense, ApiError> {
        let response = self
            .http
            .post(self.url("/expenses/create"))
            .bearer_auth(token)
            .json(expense)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `GET /expenses/get_expenses` — every expense of the token's owner.
    pub async fn list_expenses(&self, token: &str) -> Result<Vec<Expense>, ApiError> {
        let response = self
            .http
            .get(self.url("/expenses/get_expenses"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `PUT /expenses/update/{id}` — full replace.
    pub async fn update_expense(
        &self,
        token: &str,
        id: i64,
        expense: &NewExpense,
    ) -> Result<Expense, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/expenses/update/{id}")))
            .bearer_auth(token)
            .json(expense)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `DELETE /expenses/delete/{id}`.
    pub async fn delete_expense(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/expenses/delete/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

/// Map a non-success response to [`ApiError::Status`].
///
/// The backend reports failures as `{"detail": "..."}`; when the body is
/// missing or shaped differently the canonical reason phrase stands in.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .map(|body| body.detail)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::with_base_url("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/login"), "http://localhost:8000/login");
    }

    #[test]
    fn error_body_parses_backend_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.detail, "Invalid credentials");
    }

    #[test]
    fn monthly_limit_body_uses_the_wire_key() {
        let json = serde_json::to_string(&MonthlyLimitBody {
            monthly_limit: 20000.0,
        })
        .unwrap();
        assert_eq!(json, r#"{"monthly_limit":20000.0}"#);
    }
}
