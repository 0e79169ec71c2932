pub mod driver;
#[cfg(any(test, feature = "test-util"))]
pub mod fixture;
pub mod locator;
pub mod page;
pub mod session;

pub use page::LookupError;
pub use session::{BrowserSession, PageHandle, SessionLauncher};
