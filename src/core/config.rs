use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Path of the JSON record holding uploaded file ids
/// Read from FILE_IDS_PATH environment variable
/// Default: file_ids.json
pub static FILE_IDS_PATH: Lazy<String> =
    Lazy::new(|| env::var("FILE_IDS_PATH").unwrap_or_else(|_| "file_ids.json".to_string()));

/// Network configuration
pub mod network {
    use super::Duration;

    /// Timeout for Bot API requests (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Admin configuration
pub mod admin {
    use once_cell::sync::Lazy;
    use std::env;

    /// Parses the raw ADMIN_ID value, logging when it is not an integer
    pub(crate) fn parse_admin_id(raw: &str) -> Option<i64> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                log::warn!("ADMIN_ID has an invalid format ({:?}), it must be an integer", raw);
                None
            }
        }
    }

    /// The single administrator allowed to register files
    /// Read from ADMIN_ID environment variable
    /// None when unset or invalid (nobody is admin)
    pub static ADMIN_ID: Lazy<Option<i64>> =
        Lazy::new(|| env::var("ADMIN_ID").ok().and_then(|raw| parse_admin_id(&raw)));
}

/// Deploy-time defaults for the two downloadable files
pub mod files {
    use once_cell::sync::Lazy;
    use std::env;

    fn non_empty(key: &str) -> Option<String> {
        env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
    }

    /// Pre-seeded file id for the "has POS" answer
    /// Read from POS_YES_FILE_ID environment variable
    pub static POS_YES_FILE_ID: Lazy<Option<String>> = Lazy::new(|| non_empty("POS_YES_FILE_ID"));

    /// Pre-seeded file id for the "no POS" answer
    /// Read from POS_NO_FILE_ID environment variable
    pub static POS_NO_FILE_ID: Lazy<Option<String>> = Lazy::new(|| non_empty("POS_NO_FILE_ID"));

    /// Local archive re-uploaded when no file id is known
    /// Read from POS_YES_FILE_PATH environment variable
    /// Default: pos_yes.zip
    pub static POS_YES_FILE_PATH: Lazy<String> =
        Lazy::new(|| non_empty("POS_YES_FILE_PATH").unwrap_or_else(|| "pos_yes.zip".to_string()));

    /// Local archive re-uploaded when no file id is known
    /// Read from POS_NO_FILE_PATH environment variable
    /// Default: pos_no.zip
    pub static POS_NO_FILE_PATH: Lazy<String> =
        Lazy::new(|| non_empty("POS_NO_FILE_PATH").unwrap_or_else(|| "pos_no.zip".to_string()));
}
