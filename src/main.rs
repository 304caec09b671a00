use clap::Parser;
use degreewise_planner::domain::ports::Clock;
use degreewise_planner::utils::error::ErrorSeverity;
use degreewise_planner::utils::{logger, validation::Validate};
use degreewise_planner::{
    CliConfig, FixedClock, LocalStorage, PlannerEngine, PlanningPipeline, SystemClock,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting degreewise planner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let today = config.today.unwrap_or_else(|| SystemClock.today());
    let record_storage = LocalStorage::new(".".to_string());
    let output_storage = LocalStorage::new(config.output_path.clone());
    let pipeline = PlanningPipeline::new(record_storage, output_storage, config, FixedClock(today));
    let engine = PlannerEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Planning report written to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "Planning failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
