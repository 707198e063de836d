//! Starter files written by `tl init`.
//!
//! Each template is kept as a working TOML file under `templates/` and handed out with every
//! setting commented out, so a fresh `.tl.toml` changes nothing until the user edits it.

/// Which starter file to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateScope {
    /// A `.tl.toml` for one directory tree, spelling out every default.
    Local,
    /// The per-user `~/.tl.toml` with a few suggested personal settings.
    Global,
}

impl TemplateScope {
    /// The template source as valid, uncommented TOML.
    fn source(self) -> &'static str {
        match self {
            Self::Local => include_str!("../templates/config.toml"),
            Self::Global => include_str!("../templates/config-global.toml"),
        }
    }
}

/// Returns the starter file for `scope` with all settings disabled.
pub fn template(scope: TemplateScope) -> String {
    disable_settings(scope.source())
}

/// Prefixes every setting or table header with `# `; blank lines and comments pass through.
fn disable_settings(source: &str) -> String {
    source
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
