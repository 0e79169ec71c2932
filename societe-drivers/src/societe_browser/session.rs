use crate::societe_browser::page::LookupError;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Read access to a loaded page.
#[async_trait]
pub trait PageHandle: Send + Sync {
    /// Visible text of the first element matching `expression`, waiting at
    /// most `wait` for it to appear. The text is returned as the browser
    /// reports it, untrimmed.
    async fn text_content(&self, expression: &str, wait: Duration)
        -> Result<String, LookupError>;
}

/// One isolated browsing session, used for a single navigation.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    async fn goto(&mut self, url: &str) -> Result<()>;

    fn page(&self) -> &dyn PageHandle;

    /// End the session. Consumes it so it cannot be reused.
    async fn close(self: Box<Self>) -> Result<()>;
}

/// Opens fresh sessions. A failure here is not recoverable for the run.
#[async_trait]
pub trait SessionLauncher: Send + Sync {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>>;
}
