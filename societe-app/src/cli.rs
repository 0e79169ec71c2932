use clap::Parser;
use std::path::PathBuf;

/// Profiles scraped when neither the command line nor the configuration
/// names any.
pub const DEMO_URLS: [&str; 4] = [
    "https://www.societe.com/societe/bouygues-telecom-397480930.html",
    "https://www.societe.com/societe/orange-380129866.html",
    "https://www.societe.com/societe/free-421938861.html",
    "https://www.societe.com/societe/societe-francaise-du-radiotelephone-s-f-r-343059564.html",
];

/// Scrape company profiles from societe.com into a spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "societe", version)]
pub struct Cli {
    /// Profile URLs, e.g. https://www.societe.com/societe/orange-380129866.html
    pub urls: Vec<String>,

    /// Configuration file (YAML). Defaults to ~/.config/societe/societe.yaml when present.
    #[arg(short, long, env = "SOCIETE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory the workbook is written to; overrides `output.directory`.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Also print the records as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

/// URLs to scrape: the command line wins over the configuration, which wins
/// over [`DEMO_URLS`].
pub fn resolve_urls(from_cli: Vec<String>, from_config: Vec<String>) -> Vec<String> {
    if !from_cli.is_empty() {
        from_cli
    } else if !from_config.is_empty() {
        from_config
    } else {
        DEMO_URLS.iter().map(|u| u.to_string()).collect()
    }
}
