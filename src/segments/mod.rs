pub mod cmd;
pub mod cwd;
pub mod exit_code;
pub mod git;
pub mod git_stash;
pub mod time;

pub use cmd::*;
pub use cwd::*;
pub use exit_code::*;
pub use git::*;
pub use git_stash::*;
pub use time::*;

use crate::config::SegmentDef;
use crate::powerline::Chunk;
use crate::themes::Theme;
use crate::utils::EnvSnapshot;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared read-only inputs for one prompt draw. Captured once at startup and
/// threaded through explicitly so segments never touch ambient global state.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub theme: Theme,
    pub env: EnvSnapshot,
    pub cwd: PathBuf,
    pub exit_code: i32,
    pub basename_only: bool,
}

/// Gather one segment's data and format it as a styled chunk.
///
/// Every failure inside a segment collapses to `None`: a broken segment is
/// elided from the prompt, never an error the renderer has to handle.
pub async fn collect(def: SegmentDef, ctx: Arc<RenderContext>) -> Option<Chunk> {
    match def {
        SegmentDef::Cwd(config) => CwdSegment::new(config).collect(&ctx),
        SegmentDef::Git(config) => GitSegment::new(config).collect(&ctx).await,
        SegmentDef::GitStash(config) => GitStashSegment::new(config).collect(&ctx).await,
        SegmentDef::Cmd(config) => CmdSegment::new(config).collect(&ctx).await,
        SegmentDef::ExitCode(config) => ExitCodeSegment::new(config).collect(&ctx),
        SegmentDef::Time(config) => TimeSegment::new(config).collect(&ctx),
    }
}
