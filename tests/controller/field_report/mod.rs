//! Tests for the field report endpoints.

mod create;
mod router;
mod update;

use axum::{body::to_bytes, response::Response};
use beacon::model::api::ErrorDto;
use serde_json::Value;

use super::*;

async fn error_body(resp: Response) -> ErrorDto {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
