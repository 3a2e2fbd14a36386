use crate::core::{ConfigProvider, Payload, Pipeline, Source, StatusPolicy, Storage};
use crate::utils::error::{FetchError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Downloads a source with a plain GET and writes the body verbatim to storage.
pub struct FetchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> FetchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            storage,
            config,
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FetchPipeline<S, C> {
    async fn extract(&self, source: &Source) -> Result<Payload> {
        tracing::debug!("Requesting {} from {}", source.kind, source.url);
        let response = self.client.get(&source.url).send().await?;

        let status = response.status();
        tracing::debug!("{} response status: {}", source.kind, status);

        if !status.is_success() {
            match self.config.status_policy() {
                StatusPolicy::Strict => {
                    return Err(FetchError::HttpStatus {
                        url: source.url.clone(),
                        status: status.as_u16(),
                    });
                }
                StatusPolicy::Lenient => {
                    tracing::warn!(
                        "{} returned {}; saving the body anyway",
                        source.url,
                        status
                    );
                }
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await?.to_vec();
        tracing::debug!(
            "Read {} bytes ({}) from {}",
            body.len(),
            content_type.as_deref().unwrap_or("no content type"),
            source.url
        );

        Ok(Payload {
            status: status.as_u16(),
            content_type,
            body,
        })
    }

    async fn load(&self, source: &Source, payload: &Payload) -> Result<String> {
        tracing::debug!(
            "Writing {} bytes to {}",
            payload.body.len(),
            source.destination
        );
        self.storage
            .write_file(&source.destination, &payload.body)
            .await
    }
}
