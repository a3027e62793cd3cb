use crate::browser::Browser;
use crate::config::ScrollConfig;
use crate::error::Result;

/// Why the scroll loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStop {
    /// Height stayed unchanged for `stall_threshold` consecutive attempts
    Stable,
    /// `max_attempts` reached while the page was still growing
    Capped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOutcome {
    pub attempts: u32,
    pub final_height: u64,
    pub stop: ScrollStop,
}

/// Scroll down until the document stops growing.
///
/// Each attempt scrolls by `step_px`, pauses, and compares the body height to
/// the last one seen. Growth resets the stall counter; an unchanged height
/// increments it. The loop ends once the counter hits `stall_threshold` or
/// after `max_attempts` scrolls in total.
pub async fn scroll_until_stable<B: Browser>(
    browser: &mut B,
    policy: &ScrollConfig,
) -> Result<ScrollOutcome> {
    let mut last_height = browser.document_height().await?;
    let mut stalls = 0;
    let mut attempts = 0;

    while stalls < policy.stall_threshold {
        if attempts >= policy.max_attempts {
            ::log::warn!(
                "Stopped scrolling after {} attempts, page still growing (height {})",
                attempts,
                last_height
            );
            return Ok(ScrollOutcome {
                attempts,
                final_height: last_height,
                stop: ScrollStop::Capped,
            });
        }

        browser.scroll_by(policy.step_px).await?;
        tokio::time::sleep(policy.pause()).await;
        attempts += 1;

        let height = browser.document_height().await?;
        if height > last_height {
            ::log::trace!("Page grew to {} after {} scrolls", height, attempts);
            last_height = height;
            stalls = 0;
        } else {
            stalls += 1;
        }
    }

    ::log::debug!(
        "Page height settled at {} after {} scrolls",
        last_height,
        attempts
    );
    Ok(ScrollOutcome {
        attempts,
        final_height: last_height,
        stop: ScrollStop::Stable,
    })
}
