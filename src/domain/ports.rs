use crate::domain::model::{ClassifiedView, OutputFormat};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where the raw people text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(String),
    Url(String),
    /// 嘗試預設的靜態參考資料，失敗時退回空清單
    Default,
}

pub trait ConfigProvider: Send + Sync {
    fn input_source(&self) -> InputSource;
    fn reference_data_url(&self) -> Option<&str>;
    fn reference_year(&self) -> i32;
    fn output_format(&self) -> OutputFormat;
    /// None 表示輸出到 stdout
    fn output_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Raw people input, decoded and validated by `transform`.
    async fn extract(&self) -> Result<Vec<u8>>;
    async fn transform(&self, raw: Vec<u8>) -> Result<ClassifiedView>;
    async fn load(&self, view: ClassifiedView) -> Result<String>;
}
