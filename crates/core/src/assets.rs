use once_cell::sync::Lazy;
use std::path::PathBuf;

const APP_DIR: &str = "imaginary-friend";

static DEFAULT_DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    dirs::data_local_dir()
        .map(|p| p.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("~/.local/share").join(APP_DIR))
});

/// Location of the application data directory, without touching the disk.
pub fn data_dir_path() -> PathBuf {
    data_dir_from(|key| std::env::var(key).ok())
}

/// Same as [`data_dir_path`], reading `XDG_DATA_HOME` through `lookup`.
pub(crate) fn data_dir_from<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    // XDG_DATA_HOME wins over the platform default
    match lookup("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        Some(xdg_data_home) => PathBuf::from(xdg_data_home).join(APP_DIR),
        None => DEFAULT_DATA_DIR.clone(),
    }
}

/// Returns the application data directory, creating it if needed.
pub fn get_data_dir() -> std::io::Result<PathBuf> {
    let path = data_dir_path();
    std::fs::create_dir_all(&path)?;
    Ok(path)
}
