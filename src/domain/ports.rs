use crate::domain::model::{Payload, Source, StatusPolicy};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn sources(&self) -> Result<Vec<Source>>;
    fn output_path(&self) -> &str;
    fn status_policy(&self) -> StatusPolicy;
    fn timeout(&self) -> Option<Duration>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self, source: &Source) -> Result<Payload>;
    async fn load(&self, source: &Source, payload: &Payload) -> Result<String>;
}
