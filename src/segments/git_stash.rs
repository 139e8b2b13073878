use crate::config::GitStashConfig;
use crate::powerline::Chunk;
use crate::segments::RenderContext;
use crate::utils::resolve_color;
use std::path::Path;
use tokio::process::Command;

/// Number of stash entries in the repository containing the cwd. Silent at
/// zero, outside a repository, or when git itself is unavailable.
pub struct GitStashSegment {
    config: GitStashConfig,
}

impl GitStashSegment {
    pub fn new(config: GitStashConfig) -> Self {
        Self { config }
    }

    pub async fn collect(&self, ctx: &RenderContext) -> Option<Chunk> {
        let count = self.stash_count(&ctx.cwd).await?;
        if count == 0 {
            return None;
        }

        // The count is only spelled out past one stash.
        let text = if count > 1 {
            format!(" {}⚑ ", count)
        } else {
            " ⚑ ".to_string()
        };

        let fg = resolve_color(self.config.colors.fg_color.as_ref(), ctx.theme.git_stash_fg, &ctx.env);
        let bg = resolve_color(self.config.colors.bg_color.as_ref(), ctx.theme.git_stash_bg, &ctx.env);
        Some(Chunk::new(text, fg, bg))
    }

    /// gix does not expose stashes yet, so this shells out to git. A missing
    /// git binary or a non-repository directory yields `None`.
    async fn stash_count(&self, path: &Path) -> Option<usize> {
        let output = Command::new("git")
            .args(["stash", "list"])
            .current_dir(path)
            .output()
            .await
            .ok()?;

        if !output.status.success() {
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).lines().count())
    }
}
