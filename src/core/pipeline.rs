use crate::core::classifier::classify;
use crate::core::people::{people_or_empty, EMPTY_LIST};
use crate::core::render::render;
use crate::core::{ClassifiedView, ConfigProvider, InputSource, Pipeline, Storage};
use crate::utils::error::Result;
use reqwest::Client;

/// Destination reported by `load` when the cards go to stdout.
pub const STDOUT: &str = "<stdout>";

pub struct BirthdayPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> BirthdayPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Making request to: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status: {}", response.status());
        let body = response.error_for_status()?.bytes().await?;
        Ok(body.to_vec())
    }

    /// 參考資料不存在或抓取失敗時退回空清單
    async fn fetch_reference_data(&self) -> Vec<u8> {
        let Some(url) = self.config.reference_data_url() else {
            tracing::debug!("No reference data configured, starting from an empty list");
            return EMPTY_LIST.as_bytes().to_vec();
        };

        match self.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Reference data unavailable ({}), starting from an empty list", e);
                EMPTY_LIST.as_bytes().to_vec()
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BirthdayPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<u8>> {
        match self.config.input_source() {
            InputSource::Inline(text) => Ok(text.into_bytes()),
            InputSource::File(path) => self.storage.read_file(&path).await,
            InputSource::Url(url) => self.fetch(&url).await,
            InputSource::Default => Ok(self.fetch_reference_data().await),
        }
    }

    async fn transform(&self, raw: Vec<u8>) -> Result<ClassifiedView> {
        let reference_year = self.config.reference_year();
        let input = people_or_empty(&raw);
        if let Some(detail) = &input.detail {
            tracing::debug!("Input rejected: {}", detail);
        }

        let day_map = classify(&input.people, reference_year);
        tracing::debug!(
            "Classified {} of {} people for {}",
            day_map.len(),
            input.people.len(),
            reference_year
        );

        Ok(ClassifiedView {
            reference_year,
            day_map,
            error: input.error,
        })
    }

    async fn load(&self, view: ClassifiedView) -> Result<String> {
        let rendered = render(&view, self.config.output_format())?;

        match self.config.output_path() {
            Some(path) => {
                self.storage.write_file(path, rendered.as_bytes()).await?;
                Ok(path.to_string())
            }
            None => {
                print!("{}", rendered);
                Ok(STDOUT.to_string())
            }
        }
    }
}
