//! Log file setup.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::CliError;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "regform";
const APPLICATION: &str = "regform";

/// Default log file location.
///
/// - Linux: `$XDG_CACHE_HOME/regform/regform.log` or `~/.cache/regform/regform.log`
/// - macOS: `~/Library/Caches/dev.regform.regform/regform.log`
/// - Windows: `C:\Users\<User>\AppData\Local\regform\regform\cache\regform.log`
pub fn default_log_file() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().join("regform.log"))
}

/// Install a file logger at `path`, creating parent directories.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)?;
    log::info!("Logging to {}", path.display());
    Ok(())
}
