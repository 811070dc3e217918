//! Auth Endpoints
//!
//! Registration, login and session validation.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use super::{bearer, decode_json, expect_ok, ApiError, BASE_URL};

#[derive(Serialize)]
struct CredentialArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserInfo {
    pub email: String,
}

pub async fn register(email: &str, password: &str) -> Result<(), ApiError> {
    let response = Request::post(&format!("{BASE_URL}/register"))
        .json(&CredentialArgs { email, password })?
        .send()
        .await?;
    expect_ok(response).await
}

pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let response = Request::post(&format!("{BASE_URL}/login"))
        .json(&CredentialArgs { email, password })?
        .send()
        .await?;
    decode_json(response).await
}

/// Validates the stored token against the server's user-info endpoint.
pub async fn user_info(token: &str) -> Result<UserInfo, ApiError> {
    let response = Request::get(&format!("{BASE_URL}/user-info"))
        .header("Authorization", &bearer(token))
        .send()
        .await?;
    decode_json(response).await
}
