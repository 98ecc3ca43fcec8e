use anyhow::Context;
use clap::Parser;
use wp_deploy::utils::{logger, validation::Validate};
use wp_deploy::{CliConfig, DeployEngine, DeployError, LocalStorage, WpClient, WpConfig};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!("❌ Deployment failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: CliConfig) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        exit_with_config_error(&e);
    }

    let wp_config = match WpConfig::from_env() {
        Ok(wp_config) => wp_config,
        Err(e) => exit_with_config_error(&e),
    };

    let changed_paths = config.changed_paths();
    if changed_paths.is_empty() {
        tracing::info!("ℹ️  No files to deploy");
        return Ok(());
    }

    tracing::info!("🚀 Starting deployment to {}", wp_config.base_url);
    tracing::info!("📦 Files to deploy: {}", changed_paths.len());

    let client =
        WpClient::new(&wp_config, config.timeout()).context("failed to build HTTP client")?;
    let storage = LocalStorage::new(config.root.clone());
    let engine = DeployEngine::new(client, storage);

    let report = engine.dispatch(&changed_paths).await;

    tracing::info!(
        "📊 Created: {}, Updated: {}, Images skipped: {}, Skipped: {}, Failed: {}",
        report.created(),
        report.updated(),
        report.images(),
        report.skipped(),
        report.failed()
    );
    tracing::info!("✨ Deployment completed!");

    Ok(())
}

fn exit_with_config_error(e: &DeployError) -> ! {
    tracing::error!(
        "❌ Error: {} (Category: {:?}, Severity: {:?})",
        e.user_friendly_message(),
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
