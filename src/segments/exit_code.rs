use crate::config::ExitCodeConfig;
use crate::powerline::Chunk;
use crate::segments::RenderContext;
use crate::utils::resolve_color;

/// Exit status of the previous command, passed to the CLI as `--error N`.
/// Silent when the previous command succeeded.
pub struct ExitCodeSegment {
    config: ExitCodeConfig,
}

impl ExitCodeSegment {
    pub fn new(config: ExitCodeConfig) -> Self {
        Self { config }
    }

    pub fn collect(&self, ctx: &RenderContext) -> Option<Chunk> {
        if ctx.exit_code == 0 {
            return None;
        }

        let fg = resolve_color(self.config.colors.fg_color.as_ref(), ctx.theme.cmd_failed_fg, &ctx.env);
        let bg = resolve_color(self.config.colors.bg_color.as_ref(), ctx.theme.cmd_failed_bg, &ctx.env);
        Some(Chunk::new(format!(" {} ", ctx.exit_code), fg, bg))
    }
}
