mod cli;
mod config;

use anyhow::Context;
use cli::{Args, Command};
use commission_ledger::adapters::inbound::http::{self, DEFAULT_BIND};
use commission_ledger::adapters::outbound::console::{
    StderrProgressReporter, StdinConfirmationPrompt,
};
use commission_ledger::adapters::outbound::filesystem::FileSystemReader;
use commission_ledger::application::dto::{ClearOutcome, ExportFormat, ImportRequest, ViewFormat};
use commission_ledger::application::factories::{
    ExporterFactory, OutputDestination, PresenterFactory, StoreFactory, StoreSettings,
    ViewFormatterFactory,
};
use commission_ledger::application::use_cases::{
    ClearLedgerUseCase, ExportLedgerUseCase, ImportReportUseCase, QueryLedgerUseCase,
    RestoreSnapshotUseCase,
};
use commission_ledger::ledger::services::LineFilter;
use commission_ledger::ports::inbound::LedgerQueryPort;
use commission_ledger::ports::outbound::{LedgerStore, SharedLedgerStore, ViewFormatter};
use commission_ledger::shared::error::ExitCode;
use commission_ledger::shared::Result;
use config::ConfigFile;
use std::io::IsTerminal;
use std::net::SocketAddr;
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    init_logging(config.log_level.as_deref());

    let settings = store_settings(&args, &config)?;
    let store = StoreFactory::create(&settings)?;

    match args.command {
        Command::Import { report, replace } => {
            let use_case = ImportReportUseCase::new(
                FileSystemReader::new(),
                store,
                StderrProgressReporter::new(),
            );
            use_case.execute(ImportRequest::new(report, replace))?;
        }
        Command::Restore { snapshot } => {
            let use_case = RestoreSnapshotUseCase::new(
                FileSystemReader::new(),
                store,
                StderrProgressReporter::new(),
            );
            use_case.execute(&snapshot)?;
        }
        Command::Summary { format } => {
            let summary = QueryLedgerUseCase::new(store).summary()?;
            present_view(format, |formatter| formatter.format_summary(&summary))?;
        }
        Command::Lines {
            search,
            status,
            format,
        } => {
            let filter = LineFilter::new(search, status);
            let lines = QueryLedgerUseCase::new(store).lines(&filter)?;
            present_view(format, |formatter| formatter.format_lines(&lines))?;
        }
        Command::Show {
            service_number,
            format,
        } => {
            let detail = QueryLedgerUseCase::new(store).line_detail(&service_number)?;
            present_view(format, |formatter| formatter.format_line_detail(&detail))?;
        }
        Command::Monthly { format } => {
            let buckets = QueryLedgerUseCase::new(store).monthly()?;
            present_view(format, |formatter| formatter.format_monthly(&buckets))?;
        }
        Command::Export { format, output } => {
            let format = match format {
                Some(format) => format,
                None => config.export_format()?.unwrap_or(ExportFormat::Csv),
            };
            eprintln!("{}", ExporterFactory::progress_message(format));

            let presenter = PresenterFactory::for_export(
                OutputDestination::from_flag(output),
                &store.location(),
            )?;
            let use_case = ExportLedgerUseCase::new(store, ExporterFactory::create(format));
            let exported = use_case.execute()?;
            presenter.present(&exported)?;
        }
        Command::Clear { yes } => {
            let use_case = ClearLedgerUseCase::new(
                store,
                StdinConfirmationPrompt::new(),
                StderrProgressReporter::new(),
            );
            if use_case.execute(yes)? == ClearOutcome::Aborted {
                return Ok(ExitCode::Aborted);
            }
        }
        Command::Serve { bind } => {
            let bind = resolve_bind(bind, &config)?;
            serve(bind, store)?;
        }
    }

    Ok(ExitCode::Success)
}

/// Loads the explicit config file, or the one in the working directory
fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path);
    }

    let cwd = std::env::current_dir().context("Failed to determine the working directory")?;
    Ok(config::discover_config(&cwd)?.unwrap_or_default())
}

fn init_logging(level: Option<&str>) {
    let default_level = level.unwrap_or("warn");
    // RUST_LOG wins over the config file
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .try_init();
}

/// Merges store flags over the config file. Flags win.
fn store_settings(args: &Args, config: &ConfigFile) -> Result<StoreSettings> {
    let backend = match args.store {
        Some(backend) => backend,
        None => config.store_backend()?.unwrap_or_default(),
    };

    Ok(StoreSettings {
        backend,
        path: args.store_path.clone().or_else(|| config.store_path.clone()),
        url: args.store_url.clone().or_else(|| config.store_url.clone()),
        collection: args.collection.clone().or_else(|| config.collection.clone()),
    })
}

fn resolve_bind(bind: Option<SocketAddr>, config: &ConfigFile) -> Result<SocketAddr> {
    if let Some(bind) = bind {
        return Ok(bind);
    }
    let raw = config.bind.as_deref().unwrap_or(DEFAULT_BIND);
    raw.parse()
        .with_context(|| format!("Invalid bind address: {}", raw))
}

/// Formats a view and writes it to stdout. Colors only reach a terminal.
fn present_view<F>(format: ViewFormat, render: F) -> Result<()>
where
    F: FnOnce(&dyn ViewFormatter) -> Result<String>,
{
    let colored = std::io::stdout().is_terminal();
    let formatter = ViewFormatterFactory::create(format, colored);
    let output = render(formatter.as_ref())?;
    PresenterFactory::for_view().present(&output)
}

fn serve(bind: SocketAddr, store: SharedLedgerStore) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    // The store outlives the runtime; blocking HTTP clients must not be
    // dropped on an async worker.
    let result = runtime.block_on(http::serve(bind, store.clone()));
    drop(runtime);
    drop(store);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use commission_ledger::application::dto::StoreBackend;
    use std::path::PathBuf;

    fn args(extra: &[&str]) -> Args {
        use clap::Parser;
        Args::try_parse_from(
            std::iter::once("commission-ledger")
                .chain(extra.iter().copied())
                .chain(std::iter::once("summary")),
        )
        .unwrap()
    }

    #[test]
    fn test_store_settings_defaults() {
        let settings = store_settings(&args(&[]), &ConfigFile::default()).unwrap();
        assert_eq!(settings, StoreSettings::default());
    }

    #[test]
    fn test_store_settings_from_config() {
        let config = ConfigFile {
            store: Some("documents".to_string()),
            store_path: Some(PathBuf::from("data")),
            ..ConfigFile::default()
        };
        let settings = store_settings(&args(&[]), &config).unwrap();
        assert_eq!(settings.backend, StoreBackend::Documents);
        assert_eq!(settings.path, Some(PathBuf::from("data")));
    }

    #[test]
    fn test_flags_override_config() {
        let config = ConfigFile {
            store: Some("documents".to_string()),
            store_path: Some(PathBuf::from("data")),
            collection: Some("from-config".to_string()),
            ..ConfigFile::default()
        };
        let settings = store_settings(
            &args(&["--store", "json", "--store-path", "ledger.json"]),
            &config,
        )
        .unwrap();
        assert_eq!(settings.backend, StoreBackend::Json);
        assert_eq!(settings.path, Some(PathBuf::from("ledger.json")));
        assert_eq!(settings.collection.as_deref(), Some("from-config"));
    }

    #[test]
    fn test_resolve_bind() {
        let default = resolve_bind(None, &ConfigFile::default()).unwrap();
        assert_eq!(default.to_string(), DEFAULT_BIND);

        let config = ConfigFile {
            bind: Some("0.0.0.0:9000".to_string()),
            ..ConfigFile::default()
        };
        assert_eq!(resolve_bind(None, &config).unwrap().port(), 9000);

        let flag: SocketAddr = "127.0.0.1:7000".parse().unwrap();
        assert_eq!(resolve_bind(Some(flag), &config).unwrap(), flag);
    }
}
