use std::path::PathBuf;
use tracing::debug;

/// Get the path to the config.json file
/// Looks for config.json in the app directory (parent of the binary's folder),
/// then in the current directory.
pub(super) fn get_config_path() -> PathBuf {
    // Executable is at: app_root/bin/relay-dashboard
    // Config should be at: app_root/config.json
    if let Ok(exe_path) = std::env::current_exe() {
        debug!(path = %exe_path.display(), "Executable path detected");

        if let Some(app_root) = exe_path.parent().and_then(|bin_dir| bin_dir.parent()) {
            let config_path = app_root.join("config.json");
            debug!(path = %config_path.display(), "Looking for config");
            if config_path.exists() {
                return config_path;
            }
        }
    }

    debug!("Falling back to config.json in current directory");
    PathBuf::from("config.json")
}
