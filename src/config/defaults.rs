use crate::config::*;

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            segments: vec![
                SegmentDef::Cwd(CwdConfig::default()),
                SegmentDef::Git(GitConfig::default()),
                SegmentDef::ExitCode(ExitCodeConfig::default()),
            ],
        }
    }
}
