use anyhow::Context;
use clap::Parser;
use degreewise_planner::core::ConfigProvider;
use degreewise_planner::domain::ports::Clock;
use degreewise_planner::utils::{logger, validation::Validate};
use degreewise_planner::{
    FixedClock, LocalStorage, PlannerEngine, PlanningPipeline, SystemClock, TomlConfig,
};

#[derive(Parser)]
#[command(name = "toml-plan")]
#[command(about = "Degree planner driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "degreewise.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the planning date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<chrono::NaiveDate>,

    /// Show the effective settings without reading the record
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    let verbose = args.verbose || config.verbose();
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Loaded configuration '{}' from {}", config.name(), args.config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let today = args
        .today
        .or_else(|| config.today())
        .unwrap_or_else(|| SystemClock.today());

    display_config_summary(&config, today);
    if args.dry_run {
        tracing::info!("Dry run, nothing was computed");
        return Ok(());
    }

    let record_storage = LocalStorage::new(".".to_string());
    let output_storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = PlanningPipeline::new(record_storage, output_storage, config, FixedClock(today));

    let output_path = PlannerEngine::new(pipeline)
        .run()
        .await
        .context("planning run failed")?;
    println!("✅ Planning report written to: {}", output_path);

    Ok(())
}

fn display_config_summary(config: &TomlConfig, today: chrono::NaiveDate) {
    let schedule = config.schedule_options();
    let scenario = config.gpa_scenario();
    tracing::info!("Record: {}", config.record_path());
    tracing::info!("Output: {}", config.output_path());
    tracing::info!(
        "Schedules: {}-{} courses, floor {} credits, up to {} option(s)",
        schedule.min_size,
        schedule.max_size,
        schedule.credit_floor,
        schedule.limit
    );
    tracing::info!(
        "GPA what-if: {} on {} credits",
        scenario.target_term_gpa,
        scenario.term_credits
    );
    tracing::info!(
        "Graduation pace: {} credits per term, as of {}",
        config.credits_per_term(),
        today
    );
}
