//! Board Endpoints

use gloo_net::http::Request;
use serde::Serialize;

use super::{bearer, decode_json, expect_ok, ApiError, BASE_URL};
use crate::models::Board;

#[derive(Serialize)]
struct CreateBoardArgs<'a> {
    name: &'a str,
}

pub async fn list_boards(token: &str) -> Result<Vec<Board>, ApiError> {
    let response = Request::get(&format!("{BASE_URL}/boards"))
        .header("Authorization", &bearer(token))
        .send()
        .await?;
    decode_json(response).await
}

pub async fn create_board(token: &str, name: &str) -> Result<(), ApiError> {
    let response = Request::post(&format!("{BASE_URL}/boards"))
        .header("Authorization", &bearer(token))
        .json(&CreateBoardArgs { name })?
        .send()
        .await?;
    expect_ok(response).await
}

pub async fn delete_board(token: &str, id: u32) -> Result<(), ApiError> {
    let response = Request::delete(&format!("{BASE_URL}/boards/{id}"))
        .header("Authorization", &bearer(token))
        .send()
        .await?;
    expect_ok(response).await
}
