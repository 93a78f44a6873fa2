//! Application-level configuration constants.

use log::Level;

// Initial workout values shown on mount
pub const INITIAL_SPEED_KMH: f64 = 5.2;
pub const INITIAL_INCLINE_PCT: f64 = 6.3;
pub const INITIAL_DISTANCE_KM: f64 = 3.7;
pub const INITIAL_CALORIES: u32 = 235;
pub const INITIAL_ELAPSED_SECS: u32 = 42 * 60 + 45;

// Min/Max limits for the sidebar controls
pub const MIN_SPEED_KMH: f64 = 0.0;
pub const MAX_SPEED_KMH: f64 = 20.0;
pub const MAX_INCLINE_PCT: f64 = 15.0;
pub const MAX_DISTANCE_KM: f64 = 42.0;
pub const MAX_CALORIES: u32 = 2000;
pub const MAX_ELAPSED_SECS: u32 = 3600;

// Control steps
pub const DECIMAL_STEP: f64 = 0.1;
pub const ELAPSED_STEP_SECS: u32 = 5;

// Track geometry, in percent of the track width
pub const TRACK_SPAN_PCT: f64 = 80.0;
pub const TRACK_OFFSET_PCT: f64 = 10.0;

// Runner marker
pub const RUNNER_ASSET: &str = "/runner.gif";
pub const RUNNER_ALT: &str = "Running character";
pub const RUNNER_SIZE_PX: u32 = 100;

// Stick figure animation
pub const STRIDE_INTERVAL_MS: u32 = 500;
pub const LIMB_SWING_DEG: f64 = 20.0;

// Query parameter selecting the marker render strategy
pub const RUNNER_QUERY_KEY: &str = "runner";

pub const LOG_LEVEL: Level = Level::Debug;
