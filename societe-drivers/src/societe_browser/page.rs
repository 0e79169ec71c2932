use crate::societe_browser::{locator::Selector, session::PageHandle};
use anyhow::Result;
use async_trait::async_trait;
use fantoccini::{error::CmdError, Client};
use std::time::Duration;
use tracing::trace;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Why a text lookup produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The element never appeared within the wait bound.
    #[error("timed out after {waited_ms} ms waiting for {locator}")]
    Timeout { locator: String, waited_ms: u64 },

    /// The page answered that nothing matches.
    #[error("no element matches {locator}")]
    NotFound { locator: String },

    /// The browser failed while answering.
    #[error("driver failure while reading {locator}: {message}")]
    Driver { locator: String, message: String },
}

impl LookupError {
    pub fn locator(&self) -> &str {
        match self {
            LookupError::Timeout { locator, .. }
            | LookupError::NotFound { locator }
            | LookupError::Driver { locator, .. } => locator,
        }
    }

    fn from_cmd(locator: &str, wait: Duration, err: CmdError) -> Self {
        let locator = locator.to_string();
        if matches!(err, CmdError::WaitTimeout) {
            LookupError::Timeout {
                locator,
                waited_ms: wait.as_millis() as u64,
            }
        } else if err.is_no_such_element() {
            LookupError::NotFound { locator }
        } else {
            LookupError::Driver {
                locator,
                message: err.to_string(),
            }
        }
    }
}

/// Page wrapper over a WebDriver client.
pub struct SocietePage {
    pub(crate) client: Client,
}

impl SocietePage {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Navigate to `url` and wait for the load to finish.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.client.goto(url).await.map_err(anyhow::Error::from)
    }
}

#[async_trait]
impl PageHandle for SocietePage {
    async fn text_content(
        &self,
        expression: &str,
        wait: Duration,
    ) -> Result<String, LookupError> {
        let selector = Selector::parse(expression);
        trace!(target: "societe.browser", ?selector, "waiting for element");

        let element = self
            .client
            .wait()
            .at_most(wait)
            .every(POLL_INTERVAL)
            .for_element(selector.as_locator())
            .await
            .map_err(|e| LookupError::from_cmd(expression, wait, e))?;

        element
            .text()
            .await
            .map_err(|e| LookupError::from_cmd(expression, wait, e))
    }
}
