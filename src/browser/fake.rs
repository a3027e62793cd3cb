use crate::browser::Browser;
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use url::Url;

/// In-memory browser serving canned markup per URL
#[derive(Debug, Default)]
pub struct FakeBrowser {
    pages: HashMap<String, String>,
    failing: HashSet<String>,
    redirects: HashMap<String, String>,
    broken_wait: bool,
    closed: Arc<AtomicBool>,
    heights: VecDeque<u64>,
    last_height: u64,
    present: HashSet<String>,
    current: Option<String>,
    pub visited: Vec<String>,
    pub scrolls: u32,
    pub clicks: Vec<String>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    /// Navigating to `url` fails
    pub fn with_failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    /// Navigating to `from` lands on `to`
    pub fn with_redirect(mut self, from: &str, to: &str) -> Self {
        self.redirects.insert(from.to_string(), to.to_string());
        self
    }

    /// `wait_for` fails with a command error instead of answering
    pub fn with_broken_wait(mut self) -> Self {
        self.broken_wait = true;
        self
    }

    /// Flag set once the browser has been closed
    pub fn closed_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.closed)
    }

    /// Successive `document_height` answers; the last one repeats once exhausted
    pub fn with_heights(mut self, heights: Vec<u64>) -> Self {
        self.heights = heights.into();
        self
    }

    /// `click_if_present` finds an element for `css`
    pub fn with_clickable(mut self, css: &str) -> Self {
        self.present.insert(css.to_string());
        self
    }
}

impl Browser for FakeBrowser {
    async fn goto(&mut self, url: &str) -> Result<()> {
        self.visited.push(url.to_string());
        if self.failing.contains(url) {
            self.current = None;
            return Err(Error::ScriptResult(format!("navigation to {url} failed")));
        }
        let landed = self.redirects.get(url).map_or(url, String::as_str);
        self.current = Some(landed.to_string());
        Ok(())
    }

    async fn current_url(&mut self) -> Result<Url> {
        let current = self
            .current
            .as_deref()
            .ok_or_else(|| Error::ScriptResult("no page loaded".to_string()))?;
        Ok(Url::parse(current)?)
    }

    async fn source(&mut self) -> Result<String> {
        Ok(self
            .current
            .as_ref()
            .and_then(|url| self.pages.get(url))
            .cloned()
            .unwrap_or_else(|| "<html><body></body></html>".to_string()))
    }

    async fn document_height(&mut self) -> Result<u64> {
        if let Some(height) = self.heights.pop_front() {
            self.last_height = height;
        }
        Ok(self.last_height)
    }

    async fn scroll_by(&mut self, _pixels: i64) -> Result<()> {
        self.scrolls += 1;
        Ok(())
    }

    async fn click_if_present(&mut self, css: &str) -> Result<bool> {
        if self.present.contains(css) {
            self.clicks.push(css.to_string());
            return Ok(true);
        }
        Ok(false)
    }

    async fn wait_for(&mut self, _css: &str, _timeout: Duration) -> Result<bool> {
        if self.broken_wait {
            return Err(Error::ScriptResult("session lost while waiting".to_string()));
        }
        Ok(self.current.is_some())
    }

    async fn close(self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
