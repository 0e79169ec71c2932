#![allow(dead_code)]

use societe_common::observability::{LogConfig, LogFormat};
use societe_drivers::societe_browser::fixture::{StaticLauncher, StaticPage};
use std::sync::OnceLock;

static INIT_PATH: OnceLock<std::path::PathBuf> = OnceLock::new();

pub fn init_test_tracing() {
    let _ = INIT_PATH.get_or_init(|| {
        let config = LogConfig {
            app_name: "societe-tests",
            format: if std::env::var("SOCIETE_LOG_FORMAT")
                .map(|raw| raw.trim().eq_ignore_ascii_case("json"))
                .unwrap_or(false)
            {
                LogFormat::Json
            } else {
                LogFormat::Text
            },
            default_filter: "debug".to_string(),
            ..LogConfig::default()
        };

        societe_common::observability::init_logging(config).unwrap_or_default()
    });
}

pub const ISP_URLS: [&str; 4] = [
    "https://www.societe.com/societe/bouygues-telecom-397480930.html",
    "https://www.societe.com/societe/orange-380129866.html",
    "https://www.societe.com/societe/free-421938861.html",
    "https://www.societe.com/societe/societe-francaise-du-radiotelephone-s-f-r-343059564.html",
];

/// A profile page carrying only the SIREN, enough to tell records apart.
pub fn page_with_siren(siren: &str) -> StaticPage {
    StaticPage::new().with_text("#siren_number > span.copyNumber__copy", siren)
}

/// Launcher serving one page per ISP profile.
pub fn isp_launcher() -> StaticLauncher {
    ISP_URLS
        .iter()
        .zip(["397480930", "380129866", "421938861", "343059564"])
        .fold(StaticLauncher::new(), |launcher, (url, siren)| {
            launcher.with_page(*url, page_with_siren(siren))
        })
}
