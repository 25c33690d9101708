//! Configuration constants for the Lexica game-mode editor
//!
//! This module contains the limits and defaults used when validating
//! custom game modes and when persisting them to local storage.

/// Custom game mode limits
pub mod game_mode {
    /// Number of seconds in one minute of the time-limit field
    pub const SECONDS_PER_MINUTE: u32 = 60;
    /// Shortest accepted time limit in seconds
    pub const MIN_TIME_LIMIT_SECONDS: u32 = 1;
    /// Longest accepted time limit in seconds (30 days)
    pub const MAX_TIME_LIMIT_SECONDS: u32 = 2_592_000;
    /// Minimum length of a game mode label in characters
    pub const MIN_LABEL_LENGTH: usize = 1;
}

/// Local storage defaults
pub mod storage {
    /// Number of background writes allowed to run at once
    pub const DEFAULT_WRITE_WORKERS: usize = 4;
    /// Upper bound accepted for the write worker count
    pub const MAX_WRITE_WORKERS: usize = 64;
    /// File holding the persisted game modes
    pub const STORE_FILE_NAME: &str = "game_modes.json";
    /// Directory created under the platform data directory
    pub const DATA_DIRECTORY_NAME: &str = "Lexica";
}
