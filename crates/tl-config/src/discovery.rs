//! Locating `.tl.toml` files.
//!
//! Settings for a set of ratings come from every `.tl.toml` between the working directory and
//! the filesystem root, nearest first. A file declaring `root = true` ends the search there;
//! otherwise the per-user `~/.tl.toml` is consulted last.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::parse_config_file;

/// Name of every tl configuration file.
pub const CONFIG_FILENAME: &str = ".tl.toml";

/// Lists the configuration files that apply in `cwd`, highest precedence first.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for dir in cwd.ancestors() {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            continue;
        }
        let ends_search = declares_root(&path);
        found.push(path);
        if ends_search {
            return found;
        }
    }

    if let Some(user) = global_config_path().filter(|p| p.is_file() && !found.contains(p)) {
        found.push(user);
    }
    found
}

/// True if `path` parses and sets `root = true`. Broken files never end the search; loading
/// reports them instead.
fn declares_root(path: &Path) -> bool {
    parse_config_file(path).is_ok_and(|raw| raw.root == Some(true))
}

/// Location of the per-user `~/.tl.toml`, or `None` without a home directory.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// True if `path` is the per-user `~/.tl.toml`.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
