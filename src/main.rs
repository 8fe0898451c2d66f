use breed_stats::core::{ConfigProvider, OutputFormat};
use breed_stats::utils::error::ErrorSeverity;
use breed_stats::utils::{logger, validation::Validate};
use breed_stats::{CliConfig, LocalStorage, RecordStore, ReportConfig, ReportEngine, StatsError};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.format == OutputFormat::Json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting breed-stats CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
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
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig) -> Result<(), StatsError> {
    let config = ReportConfig::from_cli(cli)?;
    config.validate()?;
    tracing::debug!("Resolved config: {:?}", config);

    let storage = LocalStorage::new(".".to_string());
    let store = RecordStore::load(&storage, config.data_path(), &config.year_range())?;
    let engine = ReportEngine::new(store, config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    if cli.list_breeds {
        return engine.list_breeds(&mut output);
    }

    engine.run(&mut input, &mut output)?;
    tracing::info!("✅ Report completed");
    Ok(())
}
