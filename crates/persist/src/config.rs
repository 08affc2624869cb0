//! Runtime configuration from environment variables.
//!
//! | variable | meaning | default |
//! |----------|---------|---------|
//! | `ARCADE_SEED` | RNG seed (u32) | derived from the clock |
//! | `ARCADE_HIGHSCORE_PATH` | snake high-score JSON file | `~/.arcade_snake_high.json` |
//! | `ARCADE_LOG_PATH` | JSON-lines event log | disabled |
//! | `ARCADE_FRAME_MS` | frame poll interval in ms | 16 |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_FRAME_MS: u64 = 16;
pub const HIGHSCORE_FILE_NAME: &str = ".arcade_snake_high.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u32>,
    pub highscore_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub frame_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            highscore_path: default_highscore_path(),
            log_path: None,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable or blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("ARCADE_SEED").and_then(|s| s.parse().ok());

        let highscore_path = non_empty("ARCADE_HIGHSCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_highscore_path);

        let log_path = non_empty("ARCADE_LOG_PATH").map(PathBuf::from);

        let frame_ms = non_empty("ARCADE_FRAME_MS")
            .and_then(|s| s.parse().ok())
            .filter(|ms: &u64| *ms > 0)
            .unwrap_or(DEFAULT_FRAME_MS);

        Self {
            seed,
            highscore_path,
            log_path,
            frame_ms,
        }
    }

    /// Configured seed, or one taken from the wall clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

/// Home directory file, or the working directory when there is no home.
pub fn default_highscore_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(HIGHSCORE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(HIGHSCORE_FILE_NAME))
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    // Fold the high bits in so consecutive launches differ.
    (nanos as u32) ^ ((nanos >> 32) as u32)
}
