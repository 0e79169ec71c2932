//! Smoke test against societe.com through a real WebDriver.
//!
//! Needs geckodriver (or chromedriver, via `SOCIETE__BROWSER__KIND=chrome`)
//! listening locally:
//!
//! ```sh
//! geckodriver --port 4444 &
//! cargo test -p societe-scrape --features e2e -- --ignored
//! ```
#![cfg(feature = "e2e")]

use societe_config::SocieteConfigLoader;
use societe_drivers::societe_browser::driver::{DriverOptions, FantocciniLauncher};
use societe_scrape::{FieldExtractor, ProfileFetcher};

#[tokio::test]
#[ignore]
async fn scrapes_orange_profile() -> anyhow::Result<()> {
    let cfg = SocieteConfigLoader::new().load()?;
    let launcher = FantocciniLauncher::new(DriverOptions {
        kind: cfg.browser.kind,
        endpoint: cfg.browser.endpoint().to_string(),
        headless: cfg.browser.headless,
    });
    let fetcher = ProfileFetcher::new(
        launcher,
        FieldExtractor::new(cfg.extraction.field_timeout()),
    );

    let record = fetcher
        .fetch_profile("https://www.societe.com/societe/orange-380129866.html")
        .await?
        .expect("profile URL resolves");

    assert_eq!(record.profile_name(), "orange-380129866");
    assert!(
        record.columns().iter().all(|(_, v)| v.as_deref() != Some("")),
        "no empty cells expected"
    );
    Ok(())
}
