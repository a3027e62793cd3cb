pub mod scroll;
pub mod webdriver;

#[cfg(test)]
pub(crate) mod fake;

use crate::error::Result;
use std::time::Duration;
use url::Url;

pub use scroll::{ScrollOutcome, ScrollStop, scroll_until_stable};
pub use webdriver::WebDriverSession;

/// The browser operations the stages rely on.
///
/// Implemented over a live WebDriver session, and by an in-memory fake in tests.
#[allow(async_fn_in_trait)]
pub trait Browser {
    /// Navigate to `url` and wait for the document load
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// URL the browser ended up on, after any redirects
    async fn current_url(&mut self) -> Result<Url>;

    /// Rendered markup of the current page
    async fn source(&mut self) -> Result<String>;

    /// Current `document.body.scrollHeight`
    async fn document_height(&mut self) -> Result<u64>;

    /// Scroll the window down by `pixels`
    async fn scroll_by(&mut self, pixels: i64) -> Result<()>;

    /// Click the first element matching `css`; `Ok(false)` when there is none
    async fn click_if_present(&mut self, css: &str) -> Result<bool>;

    /// Poll until an element matching `css` exists, for at most `timeout`.
    ///
    /// Returns whether the element showed up in time.
    async fn wait_for(&mut self, css: &str, timeout: Duration) -> Result<bool>;

    /// End the session
    async fn close(self) -> Result<()>
    where
        Self: Sized;
}
