//! Remote Collection Client
//!
//! - `RemoteCollection`: list/create/update/delete against one REST resource
//! - `HttpCollection`: the gloo-net implementation used by the screens
//! - `fake`: in-memory implementation for unit tests

mod http;

#[cfg(test)]
pub mod fake;

pub use http::HttpCollection;

use crate::shared::error::SyncError;
use async_trait::async_trait;
use contracts::domain::common::CatalogRecord;

/// One remote collection of records
///
/// Create and update return the server's canonical record (with its id and
/// any server-side normalization); callers reconcile local state from that
/// value, never from what they sent.
#[async_trait(?Send)]
pub trait RemoteCollection<R: CatalogRecord> {
    /// `GET {resource}`: the full collection
    async fn list(&self) -> Result<Vec<R>, SyncError>;

    /// `POST {resource}`: the server assigns the id
    async fn create(&self, draft: &R::Draft) -> Result<R, SyncError>;

    /// `PUT {resource}/{id}`: full replacement
    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R, SyncError>;

    /// `DELETE {resource}/{id}`
    async fn delete(&self, id: &str) -> Result<(), SyncError>;
}
