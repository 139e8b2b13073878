use crate::config::CmdConfig;
use crate::powerline::Chunk;
use crate::segments::RenderContext;
use crate::utils::{debug_with_context, resolve_color};
use serde_json::Value;
use std::process::Stdio;
use tokio::process::Command;

/// Runs an arbitrary user-configured command and renders its trimmed output.
///
/// This segment is deliberately fail-silent: whatever goes wrong with the
/// configured command, the segment disappears from the prompt rather than
/// breaking the render. Prompt generation runs on every interactive prompt
/// draw, so a broken command must never cost the user their shell.
pub struct CmdSegment {
    config: CmdConfig,
}

impl CmdSegment {
    pub fn new(config: CmdConfig) -> Self {
        Self { config }
    }

    pub async fn collect(&self, ctx: &RenderContext) -> Option<Chunk> {
        let output = self.run(ctx).await?;
        let fg = resolve_color(self.config.colors.fg_color.as_ref(), ctx.theme.path_fg, &ctx.env);
        let bg = resolve_color(self.config.colors.bg_color.as_ref(), ctx.theme.path_bg, &ctx.env);
        Some(Chunk::new(format!(" {} ", output), fg, bg))
    }

    /// Run the configured command once and capture its trimmed output.
    ///
    /// All of {not configured, malformed value, empty argv, spawn failure,
    /// non-zero exit, undecodable bytes, empty output} collapse to `None`.
    pub async fn run(&self, ctx: &RenderContext) -> Option<String> {
        let argv = self.argv()?;
        let (program, args) = argv.split_first()?;

        let result = Command::new(program)
            .args(args)
            .current_dir(&ctx.cwd)
            .stdin(Stdio::null())
            .output()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(err) => {
                debug_with_context("cmd", &format!("failed to spawn {:?}: {}", program, err));
                return None;
            }
        };

        if !output.status.success() {
            debug_with_context("cmd", &format!("{:?} exited with {}", program, output.status));
            return None;
        }

        // Child diagnostics on stderr are captured alongside stdout rather
        // than leaking to the terminal.
        let mut bytes = output.stdout;
        bytes.extend_from_slice(&output.stderr);
        let text = String::from_utf8(bytes).ok()?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Interpret the configured `command` value. A string is tokenized with
    /// POSIX shell-word rules (quoting honored, no metacharacters); a string
    /// array is the argv verbatim. Any other shape is treated as a
    /// misconfiguration and yields no argv.
    fn argv(&self) -> Option<Vec<String>> {
        match self.config.command.as_ref()? {
            Value::String(line) => shlex::split(line).filter(|argv| !argv.is_empty()),
            Value::Array(items) => {
                let argv: Option<Vec<String>> = items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect();
                argv.filter(|argv| !argv.is_empty())
            }
            other => {
                debug_with_context("cmd", &format!("unsupported command value: {}", other));
                None
            }
        }
    }
}
