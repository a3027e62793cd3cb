//! The three pipeline stages.
//!
//! Each stage reads the previous stage's artifact from disk and writes its
//! own, so any stage can be rerun on its own. `run_stage` functions drive an
//! already open [`Browser`]; `run` functions own a WebDriver session for the
//! duration of the stage.

pub mod categories;
pub mod details;
pub mod recipes;

#[cfg(test)]
mod tests;

use crate::browser::Browser;
use crate::error::Result;
use crate::results::ExtractionFailure;
use std::ops::AsyncFnOnce;
use std::time::Duration;
use url::Url;

/// Open a session with `connect`, run `work` on it, and close the session on
/// every exit path. The result of `work` is returned even when closing fails.
pub(crate) async fn with_session<B: Browser, T>(
    connect: impl AsyncFnOnce() -> Result<B>,
    work: impl AsyncFnOnce(&mut B) -> Result<T>,
) -> Result<T> {
    let mut session = connect().await?;
    let result = work(&mut session).await;

    if let Err(e) = session.close().await {
        ::log::warn!("Failed to close WebDriver session: {}", e);
    }
    result
}

/// Wait for `css` unless `timeout` is zero; a timeout is not an error
pub(crate) async fn settle<B: Browser>(
    browser: &mut B,
    css: &str,
    timeout: Duration,
) -> Result<()> {
    if timeout.is_zero() {
        return Ok(());
    }
    if !browser.wait_for(css, timeout).await? {
        ::log::debug!("No `{}` after {:?}, continuing", css, timeout);
    }
    Ok(())
}

/// The URL the browser landed on, which is what relative links resolve
/// against. Falls back to `requested` when the browser cannot report it.
pub(crate) async fn landed_url<B: Browser>(browser: &mut B, requested: &Url) -> Url {
    match browser.current_url().await {
        Ok(url) => {
            if url != *requested {
                ::log::debug!("{} redirected to {}", requested, url);
            }
            url
        }
        Err(e) => {
            ::log::warn!("Could not read current URL after loading {}: {}", requested, e);
            requested.clone()
        }
    }
}

pub(crate) fn log_failures(failures: &[ExtractionFailure]) {
    for failure in failures {
        ::log::warn!("Skipped {}", failure);
    }
}
