use crate::assemble::assemble;
use crate::extract::FieldExtractor;
use crate::profile::profile_name;
use crate::record::CompanyRecord;
use societe_common::{Result, SocieteError};
use societe_drivers::societe_browser::{BrowserSession, SessionLauncher};
use tracing::{info, warn};

/// Scrapes profile pages, one fresh browser session per URL.
pub struct ProfileFetcher<L> {
    launcher: L,
    extractor: FieldExtractor,
}

impl<L: SessionLauncher> ProfileFetcher<L> {
    pub fn new(launcher: L, extractor: FieldExtractor) -> Self {
        Self {
            launcher,
            extractor,
        }
    }

    /// Scrape one profile.
    ///
    /// Returns `Ok(None)` when the URL is not a profile URL or the page
    /// cannot be loaded; those are logged and skipped. Failing to start a
    /// browser session is an error. The session is closed on every path
    /// once it has been opened.
    pub async fn fetch_profile(&self, url: &str) -> Result<Option<CompanyRecord>> {
        let Some(profile) = profile_name(url) else {
            warn!(target: "societe.fetch", %url, "can't resolve profile name; skipping");
            return Ok(None);
        };
        info!(target: "societe.fetch", %profile, "scraping profile");

        let session = self
            .launcher
            .launch()
            .await
            .map_err(|e| SocieteError::Launch(format!("{e:#}")))?;
        let mut guard = SessionGuard::new(session);

        let record = match guard.session.as_deref_mut() {
            Some(session) => self.scrape(session, url, &profile).await,
            None => None,
        };

        guard.close(&profile).await;
        Ok(record)
    }

    async fn scrape(
        &self,
        session: &mut dyn BrowserSession,
        url: &str,
        profile: &str,
    ) -> Option<CompanyRecord> {
        if let Err(e) = session.goto(url).await {
            let err = SocieteError::Navigation {
                url: url.to_string(),
                reason: format!("{e:#}"),
            };
            warn!(target: "societe.fetch", %profile, error = %err, "skipping profile");
            return None;
        }
        Some(assemble(session.page(), profile, &self.extractor).await)
    }

    /// Scrape every URL in order, dropping the ones that yield no record.
    pub async fn fetch_profiles<I, S>(&self, urls: I) -> Result<Vec<CompanyRecord>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        for url in urls {
            if let Some(record) = self.fetch_profile(url.as_ref()).await? {
                records.push(record);
            }
        }
        info!(target: "societe.fetch", count = records.len(), "profiles scraped");
        Ok(records)
    }
}

/// Owns an open session until it is closed.
///
/// Dropped without [`close`](Self::close) (cancellation, panic), it hands the
/// session to the current tokio runtime to be closed there.
struct SessionGuard {
    session: Option<Box<dyn BrowserSession>>,
}

impl SessionGuard {
    fn new(session: Box<dyn BrowserSession>) -> Self {
        Self {
            session: Some(session),
        }
    }

    async fn close(mut self, profile: &str) {
        if let Some(session) = self.session.take() {
            if let Err(e) = session.close().await {
                warn!(target: "societe.fetch", %profile, error = %e, "failed to close browser session");
            }
        }
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = session.close().await {
                        warn!(target: "societe.fetch", error = %e, "failed to close abandoned browser session");
                    }
                });
            }
            Err(_) => warn!(target: "societe.fetch", "browser session dropped outside a runtime"),
        }
    }
}
