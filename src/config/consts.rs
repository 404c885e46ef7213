// src/config/consts.rs

// Catalog API
pub const PLAYER_API_PATH: &str = "player_api.php";
pub const PLAYLIST_PATH: &str = "playlist.php";
pub const DEFAULT_PLAYLIST_TYPE: &str = "m3u_plus";
pub const DEFAULT_PLAYLIST_OUTPUT: &str = "ts";
pub const USER_AGENT: &str = concat!("xtream_export/", env!("CARGO_PKG_VERSION"));

// Config
pub const DEFAULT_CONFIG_FILE: &str = "providers.yaml";

// Export
pub const EXPORT_EXT: &str = "csv";
pub const STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";
pub const CATEGORY_NOT_FOUND: &str = "N/A";
