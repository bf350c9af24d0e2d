use crate::config::toml_config::TomlConfig;
use crate::core::render::OutputFormat;
use crate::core::years::{current_year, validate_year};
use crate::core::{ConfigProvider, InputSource};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "bday-weekdays")]
#[command(about = "Group birthdays by the weekday they fall on in a given year")]
pub struct CliConfig {
    #[arg(long, help = "Read the people list from a JSON file")]
    pub input: Option<String>,

    #[arg(long, help = "Fetch the people list from a URL")]
    pub source_url: Option<String>,

    #[arg(long, help = "Static reference list tried when no input is given")]
    pub reference_url: Option<String>,

    #[arg(long, help = "People list as inline JSON")]
    pub json: Option<String>,

    #[arg(long, help = "Reference year (defaults to the current year)")]
    pub year: Option<i32>,

    #[arg(long, value_enum, help = "Output format [default: text]")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Write the result to a file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Load settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Command-line values win over the TOML file.
    pub fn merge_toml(&mut self, file: &TomlConfig) {
        if self.input.is_none() && self.json.is_none() && self.source_url.is_none() {
            self.input = file.source.path.clone();
            self.source_url = file.source.url.clone();
        }
        if self.reference_url.is_none() {
            self.reference_url = file.source.reference_url.clone();
        }
        if self.year.is_none() {
            self.year = file.view.as_ref().and_then(|v| v.year);
        }
        if self.output.is_none() {
            self.output = file.output.as_ref().and_then(|o| o.path.clone());
        }
        if self.format.is_none() {
            self.format = file.output.as_ref().and_then(|o| o.format);
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_source(&self) -> InputSource {
        if let Some(json) = &self.json {
            InputSource::Inline(json.clone())
        } else if let Some(path) = &self.input {
            InputSource::File(path.clone())
        } else if let Some(url) = &self.source_url {
            InputSource::Url(url.clone())
        } else {
            InputSource::Default
        }
    }

    fn reference_data_url(&self) -> Option<&str> {
        self.reference_url.as_deref()
    }

    fn reference_year(&self) -> i32 {
        self.year.unwrap_or_else(current_year)
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input {
            validate_path("input", path)?;
            validate_file_extension("input", path, &["json"])?;
        }
        if let Some(url) = &self.source_url {
            validate_url("source_url", url)?;
        }
        if let Some(url) = &self.reference_url {
            validate_url("reference_url", url)?;
        }
        if let Some(json) = &self.json {
            validate_non_empty_string("json", json)?;
        }
        if let Some(year) = self.year {
            validate_year("year", year)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}
