use async_trait::async_trait;

use super::model::Service;
use crate::domain::DomainResult;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Find a service by primary key with its group loaded
    async fn find_with_group(&self, id: i32) -> DomainResult<Option<Service>>;
}
