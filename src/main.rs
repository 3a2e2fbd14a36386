use clap::Parser;
use fuel_feed::core::ConfigProvider;
use fuel_feed::utils::logger::{self, LogFormat};
use fuel_feed::utils::validation::Validate;
use fuel_feed::{CliConfig, DownloadEngine, FetchError, FetchPipeline, FetchReport, LocalStorage};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    let format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, config.verbose);

    tracing::info!("Starting fuel-feed");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!(
            "Download failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: CliConfig) -> Result<(), FetchError> {
    config.validate()?;

    let json = config.json;
    let sources = config.sources()?;
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = FetchPipeline::new(storage, config)?;
    let engine = DownloadEngine::new(pipeline);

    let reports = engine.run(&sources).await?;
    tracing::info!("All downloads completed");

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_summary(&reports);
    }

    Ok(())
}

fn print_summary(reports: &[FetchReport]) {
    for report in reports {
        println!(
            "✅ {} -> {} ({} bytes, HTTP {})",
            report.kind, report.destination, report.bytes, report.status
        );
    }
}
