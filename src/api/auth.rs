//! Auth Operations
//!
//! Signup and login. Neither call carries a token.

use super::{ApiClient, ApiError, Method};
use crate::models::{AuthResponse, Credentials};

pub async fn signup(api: &ApiClient, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = Credentials { email, password };
    api.fetch_json(Method::Post, "/api/auth/signup", Some(&body), None).await
}

pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = Credentials { email, password };
    api.fetch_json(Method::Post, "/api/auth/login", Some(&body), None).await
}
