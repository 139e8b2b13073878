pub mod config;
pub mod powerline;
pub mod segments;
pub mod themes;
pub mod utils;

pub use config::*;
pub use powerline::*;
pub use segments::*;
pub use themes::*;
pub use utils::*;

use anyhow::Result;
use std::sync::Arc;

/// Generate one prompt string: fire every configured segment concurrently,
/// then join and render them in configured order.
///
/// Segment failures never surface here; a segment that produced nothing is
/// elided from the prompt entirely, separator included.
pub async fn generate_prompt(config: &Config, shell: Shell, ctx: RenderContext) -> Result<String> {
    let ctx = Arc::new(ctx);

    let handles: Vec<_> = config
        .segments
        .iter()
        .cloned()
        .map(|def| {
            let ctx = Arc::clone(&ctx);
            tokio::spawn(segments::collect(def, ctx))
        })
        .collect();

    // join_all preserves the configured order, so the prompt is deterministic
    // no matter which external command finished first.
    let results = futures::future::join_all(handles).await;

    let mut powerline = Powerline::new(shell);
    for result in results {
        match result {
            Ok(Some(chunk)) => powerline.append(chunk.text, chunk.fg, chunk.bg),
            Ok(None) => {}
            Err(err) => debug_with_context("prompt", &format!("segment task failed: {}", err)),
        }
    }

    Ok(powerline.draw())
}
