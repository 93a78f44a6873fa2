//! Treadmill path simulation.
//!
//! Holds the workout statistics shown on screen, maps speed onto the track
//! and drives the two-frame stride used by the stick-figure runner. The Yew
//! views live in [`components`]; `main.rs` mounts [`components::Page`].

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

pub mod components;
pub mod config;
pub mod hooks;
pub mod utils;

use config::*;
use utils::{format_clock, parse_decimal, parse_leading_int, InputError};

// ──────────────────────────────────────────────────────────────────────────────
// Workout statistics

/// The statistics displayed in the stats panel.
///
/// Every setter clamps to the field's documented range, so a `WorkoutStats`
/// never holds an out-of-range value no matter how it is driven. `time_text`
/// is private and only recomputed when `elapsed_secs` changes; deserializing
/// goes through [`StatsRecord`] and the same setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StatsRecord")]
pub struct WorkoutStats {
    speed: f64,
    incline: f64,
    distance_km: f64,
    calories: u32,
    elapsed_secs: u32,
    time_text: String,
}

impl Default for WorkoutStats {
    fn default() -> Self {
        Self {
            speed: INITIAL_SPEED_KMH,
            incline: INITIAL_INCLINE_PCT,
            distance_km: INITIAL_DISTANCE_KM,
            calories: INITIAL_CALORIES,
            elapsed_secs: INITIAL_ELAPSED_SECS,
            time_text: format_clock(INITIAL_ELAPSED_SECS),
        }
    }
}

/// Wire shape of [`WorkoutStats`]. Any `time_text` in the input is ignored.
#[derive(Deserialize)]
pub struct StatsRecord {
    speed: f64,
    incline: f64,
    distance_km: f64,
    calories: i64,
    elapsed_secs: u32,
}

impl From<StatsRecord> for WorkoutStats {
    fn from(record: StatsRecord) -> Self {
        let mut stats = WorkoutStats::default();
        stats.speed = record.speed.clamp(MIN_SPEED_KMH, MAX_SPEED_KMH);
        stats.incline = record.incline.clamp(0.0, MAX_INCLINE_PCT);
        stats.distance_km = record.distance_km.clamp(0.0, MAX_DISTANCE_KM);
        stats.calories = record.calories.clamp(0, i64::from(MAX_CALORIES)) as u32;
        stats.set_elapsed_secs(record.elapsed_secs);
        stats
    }
}

impl WorkoutStats {
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn incline(&self) -> f64 {
        self.incline
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// "MM:SS" rendering of `elapsed_secs`.
    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    /// Set the speed from a raw control value. Unparseable input keeps the
    /// previous speed.
    pub fn set_speed(&mut self, raw: &str) -> Result<f64, InputError> {
        let value = parse_decimal(raw)
            .inspect_err(|e| warn!("Ignoring speed input: {}", e))?;
        self.speed = value.clamp(MIN_SPEED_KMH, MAX_SPEED_KMH);
        Ok(self.speed)
    }

    /// Set the incline from a raw control value. Unparseable input keeps the
    /// previous incline.
    pub fn set_incline(&mut self, raw: &str) -> Result<f64, InputError> {
        let value = parse_decimal(raw)
            .inspect_err(|e| warn!("Ignoring incline input: {}", e))?;
        self.incline = value.clamp(0.0, MAX_INCLINE_PCT);
        Ok(self.incline)
    }

    /// Set the distance from a raw control value. Unparseable input keeps the
    /// previous distance.
    pub fn set_distance(&mut self, raw: &str) -> Result<f64, InputError> {
        let value = parse_decimal(raw)
            .inspect_err(|e| warn!("Ignoring distance input: {}", e))?;
        self.distance_km = value.clamp(0.0, MAX_DISTANCE_KM);
        Ok(self.distance_km)
    }

    /// Set the calories from a raw field value. Anything without a leading
    /// integer counts as 0.
    pub fn set_calories(&mut self, raw: &str) -> u32 {
        let value = parse_leading_int(raw).unwrap_or_else(|e| {
            debug!("Calories input fell back to 0: {}", e);
            0
        });
        self.calories = value.clamp(0, i64::from(MAX_CALORIES)) as u32;
        self.calories
    }

    /// Set the elapsed time from the raw time slider value.
    pub fn set_elapsed(&mut self, raw: &str) -> Result<u32, InputError> {
        let value = parse_leading_int(raw)
            .inspect_err(|e| warn!("Ignoring time input: {}", e))?;
        let secs = value.clamp(0, i64::from(MAX_ELAPSED_SECS)) as u32;
        self.set_elapsed_secs(secs);
        Ok(self.elapsed_secs)
    }

    /// Set the elapsed time in seconds and refresh the clock text.
    pub fn set_elapsed_secs(&mut self, secs: u32) {
        self.elapsed_secs = secs.min(MAX_ELAPSED_SECS);
        self.time_text = format_clock(self.elapsed_secs);
    }

    /// Apply one control change. Rejected input is logged by the setter and
    /// leaves the field as it was.
    pub fn apply(&mut self, action: StatsAction) {
        match action {
            StatsAction::Speed(raw) => {
                self.set_speed(&raw).ok();
            }
            StatsAction::Incline(raw) => {
                self.set_incline(&raw).ok();
            }
            StatsAction::Distance(raw) => {
                self.set_distance(&raw).ok();
            }
            StatsAction::Calories(raw) => {
                self.set_calories(&raw);
            }
            StatsAction::Elapsed(raw) => {
                self.set_elapsed(&raw).ok();
            }
        }
    }

    /// JSON snapshot used in debug logs.
    pub fn snapshot(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// A change coming from one of the sidebar controls.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsAction {
    Speed(String),
    Incline(String),
    Distance(String),
    Calories(String),
    Elapsed(String),
}

impl Reducible for WorkoutStats {
    type Action = StatsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            return self;
        }
        debug!("Stats updated: {}", next.snapshot());
        Rc::new(next)
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Track mapping

/// Map a speed onto the track, in percent of the track width.
///
/// Linear over [0, 20] km/h onto [0, 80] %. Not clamped: speeds outside the
/// slider range land outside [0, 80].
#[inline]
pub fn track_position(speed_kmh: f64) -> f64 {
    ((speed_kmh - MIN_SPEED_KMH) / (MAX_SPEED_KMH - MIN_SPEED_KMH)) * TRACK_SPAN_PCT
}

/// Where the marker's centre sits once the fixed track offset is added.
#[inline]
pub fn marker_center_pct(speed_kmh: f64) -> f64 {
    track_position(speed_kmh) + TRACK_OFFSET_PCT
}

/// CSS `left` value for the marker. The marker also centres itself with
/// `translateX(-50%)`.
pub fn marker_left_css(speed_kmh: f64) -> String {
    format!(
        "calc({}% + {}%)",
        track_position(speed_kmh),
        TRACK_OFFSET_PCT
    )
}

// ──────────────────────────────────────────────────────────────────────────────
// Sidebar

/// Visibility of the override sidebar. Starts open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self { open: true }
    }
}

impl SidebarState {
    /// Horizontal translation: on screen when open, pushed fully past the
    /// right edge when closed.
    pub fn translation(self) -> &'static str {
        if self.open {
            "translateX(0)"
        } else {
            "translateX(100%)"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    Open,
    Close,
}

impl Reducible for SidebarState {
    type Action = SidebarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = action == SidebarAction::Open;
        if self.open == open {
            return self;
        }
        debug!("Sidebar {}", if open { "opened" } else { "closed" });
        Rc::new(SidebarState { open })
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Stride animation

/// Which of the two limb poses the stick figure shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StridePhase {
    #[default]
    Reach,
    Recover,
}

impl StridePhase {
    pub fn flip(self) -> Self {
        match self {
            StridePhase::Reach => StridePhase::Recover,
            StridePhase::Recover => StridePhase::Reach,
        }
    }

    /// 0 for the initial pose, 1 for the other.
    pub fn index(self) -> u8 {
        match self {
            StridePhase::Reach => 0,
            StridePhase::Recover => 1,
        }
    }
}

/// One timer tick of the stride animation.
pub struct StrideTick;

impl Reducible for StridePhase {
    type Action = StrideTick;

    fn reduce(self: Rc<Self>, _tick: StrideTick) -> Rc<Self> {
        Rc::new(self.flip())
    }
}

/// Rotation of each limb in degrees, positive is clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbPose {
    pub left_arm: f64,
    pub right_arm: f64,
    pub left_leg: f64,
    pub right_leg: f64,
}

impl LimbPose {
    /// Arms swing against the legs on each side, and left against right.
    pub fn for_phase(phase: StridePhase) -> Self {
        let swing = match phase {
            StridePhase::Reach => LIMB_SWING_DEG,
            StridePhase::Recover => -LIMB_SWING_DEG,
        };
        Self {
            left_arm: swing,
            right_arm: -swing,
            left_leg: -swing,
            right_leg: swing,
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Render strategy

/// How the runner marker is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunnerStyle {
    /// Animated image asset, with the override sidebar.
    #[default]
    Image,
    /// Hand-drawn stick figure with swinging limbs, no controls.
    Figure,
}

impl RunnerStyle {
    /// Pick the style from a URL query string such as `?runner=figure`.
    /// Missing or unknown values fall back to the image runner.
    pub fn from_query(query: &str) -> Self {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == RUNNER_QUERY_KEY)
            .map(|(_, value)| match value.to_ascii_lowercase().as_str() {
                "figure" => RunnerStyle::Figure,
                _ => RunnerStyle::Image,
            })
            .unwrap_or_default()
    }
}
