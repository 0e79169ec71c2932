use anyhow::Result;
use chrono::Local;
use clap::Parser;
use cli::{Cli, resolve_urls};
use societe_common::observability::{LogConfig, init_logging};
use societe_config::{SocieteConfig, SocieteConfigLoader, default_config_path};
use societe_drivers::societe_browser::driver::{DriverOptions, FantocciniLauncher};
use societe_scrape::{FieldExtractor, ProfileFetcher};
use tracing::{debug, error, info};
mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Load config (env wins)
    let loader = SocieteConfigLoader::new();
    let loader = match (&cli.config, default_config_path()) {
        (Some(path), _) => loader.with_file(path),
        (None, Some(path)) => loader.with_optional_file(path),
        (None, None) => loader,
    };
    let cfg: SocieteConfig = loader.load()?;

    // 2) Logging from the loaded settings
    let log_path = init_logging(LogConfig {
        log_dir: cfg.logging.directory.clone(),
        emit_stderr: cfg.logging.emit_stderr,
        format: cfg.logging.format,
        default_filter: cfg.logging.filter.clone(),
        ..LogConfig::default()
    })?;
    debug!(log = %log_path.display(), "logging initialised");

    // 3) Scrape
    let launcher = FantocciniLauncher::new(DriverOptions {
        kind: cfg.browser.kind,
        endpoint: cfg.browser.endpoint().to_string(),
        headless: cfg.browser.headless,
    });
    let fetcher = ProfileFetcher::new(
        launcher,
        FieldExtractor::new(cfg.extraction.field_timeout()),
    );
    let urls = resolve_urls(cli.urls, cfg.urls);
    info!(count = urls.len(), browser = %cfg.browser.kind, "starting run");
    let records = fetcher.fetch_profiles(&urls).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    // 4) Export; a failed write leaves the run successful
    let directory = cli.output_dir.unwrap_or(cfg.output.directory);
    let now = Local::now().naive_local();
    match societe_export::export(&records, &directory, &cfg.output.sheet_prefix, now) {
        Ok(path) => info!(path = %path.display(), records = records.len(), "run complete"),
        Err(e) => {
            error!(target: "societe.export", error = %e, "export failed");
            eprintln!("export failed: {e}");
        }
    }
    Ok(())
}
