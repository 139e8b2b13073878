use crate::config::TimeConfig;
use crate::powerline::Chunk;
use crate::segments::RenderContext;
use crate::utils::resolve_color;

/// Current wall-clock time, HH:MM.
pub struct TimeSegment {
    config: TimeConfig,
}

impl TimeSegment {
    pub fn new(config: TimeConfig) -> Self {
        Self { config }
    }

    pub fn collect(&self, ctx: &RenderContext) -> Option<Chunk> {
        let now = chrono::Local::now();
        let fg = resolve_color(self.config.colors.fg_color.as_ref(), ctx.theme.time_fg, &ctx.env);
        let bg = resolve_color(self.config.colors.bg_color.as_ref(), ctx.theme.time_bg, &ctx.env);
        Some(Chunk::new(format!(" {} ", now.format("%H:%M")), fg, bg))
    }
}
