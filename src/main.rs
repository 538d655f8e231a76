use clap::Parser;
use country_fetch::utils::{logger, validation::Validate};
use country_fetch::{CliConfig, DemoRunner};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting country-fetch");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    if config.monitor {
        tracing::info!("🔍 Process monitoring enabled");
    }

    let runner = DemoRunner::new_with_monitoring(config.to_demo_config(), config.monitor);
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = runner.run(&mut stdout).await {
        tracing::error!("❌ Run failed: {} (Severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }
}
