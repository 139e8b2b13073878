use crate::config::CwdConfig;
use crate::powerline::Chunk;
use crate::segments::RenderContext;
use crate::utils::resolve_color;
use std::path::Path;

/// Current working directory, with `$HOME` abbreviated to `~`.
pub struct CwdSegment {
    config: CwdConfig,
}

impl CwdSegment {
    pub fn new(config: CwdConfig) -> Self {
        Self { config }
    }

    pub fn collect(&self, ctx: &RenderContext) -> Option<Chunk> {
        let display = self.format_path(&ctx.cwd, ctx);
        let fg = resolve_color(self.config.colors.fg_color.as_ref(), ctx.theme.path_fg, &ctx.env);
        let bg = resolve_color(self.config.colors.bg_color.as_ref(), ctx.theme.path_bg, &ctx.env);
        Some(Chunk::new(format!(" {} ", display), fg, bg))
    }

    fn format_path(&self, cwd: &Path, ctx: &RenderContext) -> String {
        if self.config.basename_only || ctx.basename_only {
            return cwd
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| cwd.to_string_lossy().into_owned());
        }

        if let Some(home) = ctx.env.get("HOME") {
            match cwd.strip_prefix(home) {
                Ok(rest) if rest.as_os_str().is_empty() => return "~".to_string(),
                Ok(rest) => return format!("~/{}", rest.display()),
                Err(_) => {}
            }
        }

        cwd.to_string_lossy().into_owned()
    }
}
