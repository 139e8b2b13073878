use crate::config::GitConfig;
use crate::powerline::Chunk;
use crate::segments::RenderContext;
use crate::utils::{debug_with_context, resolve_color};
use std::path::Path;
use tokio::process::Command;

#[derive(Debug, Clone, Default)]
pub struct GitInfo {
    pub branch: Option<String>,
    pub is_dirty: bool,
}

/// Branch of the repository containing the cwd, with a dirty marker.
/// Silent outside a repository or on a detached HEAD.
pub struct GitSegment {
    config: GitConfig,
}

impl GitSegment {
    pub fn new(config: GitConfig) -> Self {
        Self { config }
    }

    pub async fn collect(&self, ctx: &RenderContext) -> Option<Chunk> {
        let info = self.load_git_info(&ctx.cwd).await?;
        let branch = info.branch?;

        let (fg_default, bg_default) = if info.is_dirty {
            (ctx.theme.git_dirty_fg, ctx.theme.git_dirty_bg)
        } else {
            (ctx.theme.git_clean_fg, ctx.theme.git_clean_bg)
        };

        let marker = if info.is_dirty { " ●" } else { "" };
        let fg = resolve_color(self.config.colors.fg_color.as_ref(), fg_default, &ctx.env);
        let bg = resolve_color(self.config.colors.bg_color.as_ref(), bg_default, &ctx.env);
        Some(Chunk::new(format!(" ⎇ {}{} ", branch, marker), fg, bg))
    }

    /// Load branch and dirtiness for the repository containing `path`, using
    /// gix for ref access. Not being in a repository is not an error.
    async fn load_git_info(&self, path: &Path) -> Option<GitInfo> {
        let repo = match gix::discover(path) {
            Ok(repo) => repo,
            Err(_) => {
                debug_with_context("git", "Not in a git repository");
                return None;
            }
        };

        let mut info = GitInfo::default();

        if let Ok(Some(reference)) = repo.head_ref() {
            let name = reference.name().shorten();
            info.branch = Some(name.to_string());
        }
        drop(repo);

        info.is_dirty = self.is_dirty(path).await;

        debug_with_context(
            "git",
            &format!("Git info: branch={:?}, dirty={}", info.branch, info.is_dirty),
        );

        Some(info)
    }

    /// Dirty check via `git status --porcelain`; gix has no cheap equivalent
    /// of the porcelain status walk yet. Any failure reads as clean.
    async fn is_dirty(&self, path: &Path) -> bool {
        match Command::new("git")
            .args(["status", "--porcelain"])
            .current_dir(path)
            .output()
            .await
        {
            Ok(output) if output.status.success() => !output.stdout.is_empty(),
            _ => false,
        }
    }
}
