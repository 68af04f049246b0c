use super::RemoteCollection;
use crate::shared::api_utils::item_url;
use crate::shared::error::{SyncError, WriteAction};
use async_trait::async_trait;
use contracts::domain::common::CatalogRecord;
use gloo_net::http::{Request, Response};
use std::marker::PhantomData;

/// Longest response body quoted in an error message
const MAX_ERROR_BODY: usize = 200;

/// REST resource accessed with gloo-net
///
/// No auth header, no query parameters: the whole collection is fetched on
/// every `list`.
pub struct HttpCollection<R> {
    resource_url: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for HttpCollection<R> {
    fn clone(&self) -> Self {
        Self {
            resource_url: self.resource_url.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: CatalogRecord> HttpCollection<R> {
    pub fn new(resource_url: impl Into<String>) -> Self {
        Self {
            resource_url: resource_url.into(),
            _record: PhantomData,
        }
    }

    async fn read_record(response: Response, action: WriteAction) -> Result<R, SyncError> {
        if !response.ok() {
            return Err(SyncError::write(action, status_message(response).await));
        }
        response
            .json::<R>()
            .await
            .map_err(|e| SyncError::write(action, format!("Failed to parse response: {}", e)))
    }
}

#[async_trait(?Send)]
impl<R: CatalogRecord> RemoteCollection<R> for HttpCollection<R> {
    async fn list(&self) -> Result<Vec<R>, SyncError> {
        log::debug!("GET {}", self.resource_url);
        let response = Request::get(&self.resource_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SyncError::fetch(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(SyncError::fetch(status_message(response).await));
        }

        response
            .json::<Vec<R>>()
            .await
            .map_err(|e| SyncError::fetch(format!("Failed to parse response: {}", e)))
    }

    async fn create(&self, draft: &R::Draft) -> Result<R, SyncError> {
        let action = WriteAction::Create;
        log::debug!("POST {}", self.resource_url);
        let response = Request::post(&self.resource_url)
            .header("Accept", "application/json")
            .json(draft)
            .map_err(|e| SyncError::write(action, format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| SyncError::write(action, format!("Failed to send request: {}", e)))?;

        Self::read_record(response, action).await
    }

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R, SyncError> {
        let action = WriteAction::Update;
        let url = item_url(&self.resource_url, id);
        log::debug!("PUT {}", url);
        let response = Request::put(&url)
            .header("Accept", "application/json")
            .json(draft)
            .map_err(|e| SyncError::write(action, format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| SyncError::write(action, format!("Failed to send request: {}", e)))?;

        Self::read_record(response, action).await
    }

    async fn delete(&self, id: &str) -> Result<(), SyncError> {
        let action = WriteAction::Delete;
        let url = item_url(&self.resource_url, id);
        log::debug!("DELETE {}", url);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| SyncError::write(action, format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(SyncError::write(action, status_message(response).await));
        }
        Ok(())
    }
}

/// "HTTP 404: Not found" with the response body when the server sent one
async fn status_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    format_status(status, &body)
}

fn format_status(status: u16, body: &str) -> String {
    let body = body.trim().trim_matches('"');
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        let quoted: String = body.chars().take(MAX_ERROR_BODY).collect();
        format!("HTTP {}: {}", status, quoted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status() {
        assert_eq!(format_status(500, ""), "HTTP 500");
        assert_eq!(format_status(404, "\"Not found\""), "HTTP 404: Not found");
        let long = "x".repeat(MAX_ERROR_BODY + 50);
        assert_eq!(
            format_status(400, &long).len(),
            "HTTP 400: ".len() + MAX_ERROR_BODY
        );
    }
}
