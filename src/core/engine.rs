use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct BirthdayEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BirthdayEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// extract -> transform -> load. Invalid people input is not an error
    /// here: the cards are rendered empty with the message attached.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Building weekday cards");

        let raw = self.pipeline.extract().await?;
        tracing::debug!("Read {} bytes of people input", raw.len());

        let view = self.pipeline.transform(raw).await?;
        match &view.error {
            Some(message) => tracing::warn!("⚠️ {}: showing empty cards", message),
            None => tracing::info!(
                "Grouped {} people by weekday for {}",
                view.day_map.len(),
                view.reference_year
            ),
        }

        let destination = self.pipeline.load(view).await?;
        tracing::info!("📁 Output written to: {}", destination);

        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClassifiedView;
    use crate::domain::model::DayMap;
    use crate::utils::error::BirthdayError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingPipeline {
        calls: AtomicUsize,
        fail_extract: bool,
    }

    #[async_trait]
    impl Pipeline for CountingPipeline {
        async fn extract(&self) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_extract {
                return Err(BirthdayError::ConfigError {
                    message: "no source".to_string(),
                });
            }
            Ok(b"[]".to_vec())
        }

        async fn transform(&self, _raw: Vec<u8>) -> Result<ClassifiedView> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ClassifiedView {
                reference_year: 2024,
                day_map: DayMap::new(),
                error: None,
            })
        }

        async fn load(&self, _view: ClassifiedView) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("memory".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_calls_every_stage() {
        let engine = BirthdayEngine::new(CountingPipeline::default());
        assert_eq!(engine.run().await.unwrap(), "memory");
        assert_eq!(engine.pipeline().calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_run_stops_on_extract_error() {
        let engine = BirthdayEngine::new(CountingPipeline {
            fail_extract: true,
            ..Default::default()
        });
        assert!(engine.run().await.is_err());
        assert_eq!(engine.pipeline().calls.load(Ordering::SeqCst), 1);
    }
}
