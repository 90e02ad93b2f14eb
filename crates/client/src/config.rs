//! Terminal client configuration.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Settings specific to the terminal front end, separate from the
/// game/runtime settings in [`wheel_runtime::RuntimeConfig`].
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding the cue files.
    pub asset_dir: PathBuf,
    /// Names the per-session log directory. Generated when unset.
    pub session_id: Option<String>,
    /// Ring the terminal bell on score/fail cues.
    pub bell: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            session_id: None,
            bell: false,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `WHEEL_ASSET_DIR` - Cue file directory (default: `assets`)
    /// - `WHEEL_SESSION_ID` - Session identifier for the log directory (default: auto-generated)
    /// - `WHEEL_BELL` - Ring the terminal bell for results (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("WHEEL_ASSET_DIR")
            && !dir.trim().is_empty()
        {
            config.asset_dir = PathBuf::from(dir);
        }

        config.session_id = env::var("WHEEL_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        if let Some(enable) = read_env::<bool>("WHEEL_BELL") {
            config.bell = enable;
        } else if env::var("WHEEL_BELL").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.bell = true;
        }

        config
    }

    /// The configured session id, or `session_<unix seconds>`.
    pub fn session_id(&self) -> String {
        self.session_id.clone().unwrap_or_else(|| {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{timestamp}")
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_session_id_wins() {
        let config = CliConfig {
            session_id: Some("replay-7".into()),
            ..CliConfig::default()
        };
        assert_eq!(config.session_id(), "replay-7");
    }

    #[test]
    fn generated_session_id_is_timestamped() {
        let id = CliConfig::default().session_id();
        let suffix = id.strip_prefix("session_").unwrap();
        assert!(suffix.parse::<u64>().is_ok());
    }
}
