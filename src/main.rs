use bday_weekdays::utils::error::ErrorSeverity;
use bday_weekdays::utils::{logger, validation::Validate};
use bday_weekdays::{BirthdayEngine, BirthdayPipeline, CliConfig, LocalStorage, TomlConfig};
use clap::Parser;

fn exit_with(e: &bday_weekdays::BirthdayError) -> ! {
    tracing::error!(
        "❌ Failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Some(path) = config.config.clone() {
        match TomlConfig::from_file(&path).and_then(|file| file.validate().map(|_| file)) {
            Ok(file) => {
                tracing::debug!("Loaded settings from {}", path);
                config.merge_toml(&file);
            }
            Err(e) => exit_with(&e),
        }
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let storage = LocalStorage::default();
    let pipeline = BirthdayPipeline::new(storage, config);
    let engine = BirthdayEngine::new(pipeline);

    if let Err(e) = engine.run().await {
        exit_with(&e);
    }

    Ok(())
}
