use crate::societe_browser::{
    page::SocietePage,
    session::{BrowserSession, PageHandle, SessionLauncher},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use fantoccini::ClientBuilder;
use serde_json::json;
use societe_common::BrowserKind;
use tracing::{debug, info};
use url::Url;
use webdriver::capabilities::Capabilities;

/// How to reach and start the browser.
#[derive(Debug, Clone)]
pub struct DriverOptions {
    pub kind: BrowserKind,
    /// WebDriver service endpoint (geckodriver, chromedriver, a grid, ...).
    pub endpoint: String,
    pub headless: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        let kind = BrowserKind::default();
        Self {
            kind,
            endpoint: kind.default_webdriver_url().to_string(),
            headless: true,
        }
    }
}

impl DriverOptions {
    fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::new();
        match self.kind {
            BrowserKind::Firefox => {
                let args: Vec<&str> = if self.headless { vec!["-headless"] } else { vec![] };
                caps.insert("browserName".to_string(), json!("firefox"));
                caps.insert("moz:firefoxOptions".to_string(), json!({ "args": args }));
            }
            BrowserKind::Chrome => {
                let mut args = vec!["--disable-dev-shm-usage", "--no-sandbox"];
                if self.headless {
                    args.push("--headless");
                    args.push("--disable-gpu");
                }
                caps.insert("browserName".to_string(), json!("chrome"));
                caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
            }
        }
        caps
    }
}

/// One WebDriver session holding a single page.
pub struct SocieteDriver {
    pub page: SocietePage,
}

impl SocieteDriver {
    /// Start a new session on the WebDriver service named in `options`.
    pub async fn new(options: &DriverOptions) -> Result<Self> {
        Url::parse(&options.endpoint)
            .with_context(|| format!("invalid WebDriver endpoint: {}", options.endpoint))?;

        let client = ClientBuilder::native()
            .capabilities(options.capabilities())
            .connect(&options.endpoint)
            .await
            .with_context(|| {
                format!(
                    "cannot start {} session at {}",
                    options.kind, options.endpoint
                )
            })?;

        debug!(
            target: "societe.browser",
            browser = %options.kind,
            endpoint = %options.endpoint,
            headless = options.headless,
            "session started"
        );
        Ok(Self {
            page: SocietePage::new(client),
        })
    }
}

#[async_trait]
impl BrowserSession for SocieteDriver {
    async fn goto(&mut self, url: &str) -> Result<()> {
        info!(target: "societe.browser", %url, "navigating");
        self.page.goto(url).await
    }

    fn page(&self) -> &dyn PageHandle {
        &self.page
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.page.client.close().await?;
        debug!(target: "societe.browser", "session closed");
        Ok(())
    }
}

/// Launches a fresh WebDriver session for every call.
#[derive(Debug, Clone, Default)]
pub struct FantocciniLauncher {
    options: DriverOptions,
}

impl FantocciniLauncher {
    pub fn new(options: DriverOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl SessionLauncher for FantocciniLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>> {
        let driver = SocieteDriver::new(&self.options).await?;
        Ok(Box::new(driver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn firefox_headless_capabilities() {
        let caps = DriverOptions::default().capabilities();
        assert_eq!(caps["browserName"], json!("firefox"));
        assert_eq!(caps["moz:firefoxOptions"]["args"], json!(["-headless"]));
    }

    #[test]
    fn chrome_headed_has_no_headless_flag() {
        let options = DriverOptions {
            kind: BrowserKind::Chrome,
            endpoint: BrowserKind::Chrome.default_webdriver_url().to_string(),
            headless: false,
        };
        let caps = options.capabilities();
        let args = caps["goog:chromeOptions"]["args"].as_array().unwrap();
        assert!(!args.contains(&json!("--headless")));
    }

    #[tokio::test]
    async fn rejects_malformed_endpoint() {
        let options = DriverOptions {
            endpoint: "not a url".into(),
            ..DriverOptions::default()
        };
        let err = SocieteDriver::new(&options).await.err().unwrap();
        assert!(err.to_string().contains("invalid WebDriver endpoint"));
    }
}
