// src/config/consts.rs

// Net config
pub const FETCH_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("contact_scrape/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_URL: &str =
    "https://ai.ncut.edu.tw/app/index.php?Action=mobileloadmod&Type=mobile_rcg_mstr&Nbr=730";

// Store
pub const DEFAULT_STORE_PATH: &str = "contacts.db";

// Extraction
pub const PLACEHOLDER: &str = "N/A";

// Local logs
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const WINDOW_W: f32 = 640.0;
pub const WINDOW_H: f32 = 480.0;
