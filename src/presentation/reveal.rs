//! Delayed result reveal.
//!
//! The resolver answers immediately; this only holds back the display,
//! the way the original screen paused before showing the result.

use std::time::Duration;

use tracing::debug;

use crate::game::Round;

/// Wait `delay`, then hand the round to `on_ready`.
///
/// Returns whatever the callback returns.
pub async fn reveal_after<F, T>(round: Round, delay: Duration, on_ready: F) -> T
where
    F: FnOnce(&Round) -> T,
{
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    debug!(outcome = ?round.outcome, ?delay, "outcome ready");
    on_ready(&round)
}
