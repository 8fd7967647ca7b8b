//! List resource abstract Trait

use async_trait::async_trait;
use proxy_warden_api::ListResourceClient;

use crate::error::CoreResult;
use crate::types::{ItemFields, ListItem, MutationReply, ResourceKind};

/// Remote list resource (`/api/cidrs`, `/api/domains`, `/api/hides`)
///
/// Implementations:
/// - `ListResourceClient` (HTTP)
/// - `MockListResource` (tests)
#[async_trait]
pub trait ListResource: Send + Sync {
    /// Which resource this is
    fn kind(&self) -> ResourceKind;

    /// Fetch every item
    async fn list(&self) -> CoreResult<Vec<ListItem>>;

    /// Create an item (server assigns `idx`)
    ///
    /// # Arguments
    /// * `fields` - Editable fields
    async fn create(&self, fields: &ItemFields) -> CoreResult<MutationReply>;

    /// Replace every editable field of an item
    ///
    /// # Arguments
    /// * `idx` - Item identifier
    /// * `fields` - New field values
    async fn update(&self, idx: i64, fields: &ItemFields) -> CoreResult<MutationReply>;

    /// Delete an item
    async fn remove(&self, idx: i64) -> CoreResult<MutationReply>;

    /// Set the active flag of an item
    async fn set_active(&self, idx: i64, active: bool) -> CoreResult<MutationReply>;
}

#[async_trait]
impl ListResource for ListResourceClient {
    fn kind(&self) -> ResourceKind {
        ListResourceClient::kind(self)
    }

    async fn list(&self) -> CoreResult<Vec<ListItem>> {
        Ok(ListResourceClient::list(self).await?)
    }

    async fn create(&self, fields: &ItemFields) -> CoreResult<MutationReply> {
        Ok(ListResourceClient::create(self, fields).await?)
    }

    async fn update(&self, idx: i64, fields: &ItemFields) -> CoreResult<MutationReply> {
        Ok(ListResourceClient::update(self, idx, fields).await?)
    }

    async fn remove(&self, idx: i64) -> CoreResult<MutationReply> {
        Ok(ListResourceClient::remove(self, idx).await?)
    }

    async fn set_active(&self, idx: i64, active: bool) -> CoreResult<MutationReply> {
        Ok(ListResourceClient::set_active(self, idx, active).await?)
    }
}
