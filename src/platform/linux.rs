// LinkVault platform paths for Linux
// Config: ~/.config/linkvault

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for LinkVault on Linux.
/// Uses `$XDG_CONFIG_HOME/linkvault` if set, otherwise `~/.config/linkvault`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("linkvault")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("linkvault")
    }
}
