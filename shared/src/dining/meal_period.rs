//! Meal period resolution
//!
//! A [`MealSchedule`] is an ordered table of daily service windows. Times are
//! compared at whole-second precision, inclusive on both ends; windows never
//! cross midnight.

use chrono::{Local, NaiveTime, Timelike};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::MealType;

const TIME_FORMAT: &str = "%H:%M:%S";

/// One daily service window, `[start, end]` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealWindow {
    meal: MealType,
    start: NaiveTime,
    end: NaiveTime,
}

impl MealWindow {
    /// Build a window; `start` must not be after `end`
    pub fn new(meal: MealType, start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        let start = truncate_to_second(start);
        let end = truncate_to_second(end);
        if start > end {
            return Err(AppError::with_message(
                ErrorCode::InvalidMealWindow,
                format!(
                    "{} window starts at {} but ends at {}; windows cannot cross midnight",
                    meal, start, end
                ),
            )
            .with_detail("meal", meal.as_str()));
        }
        Ok(Self { meal, start, end })
    }

    /// Build a window from `HH:MM:SS` bounds
    pub fn parse(meal: MealType, start: &str, end: &str) -> AppResult<Self> {
        Self::new(meal, parse_time_of_day(start)?, parse_time_of_day(end)?)
    }

    /// Parse `HH:MM:SS-HH:MM:SS`
    pub fn parse_range(meal: MealType, range: &str) -> AppResult<Self> {
        let (start, end) = range.split_once('-').ok_or_else(|| {
            AppError::with_message(
                ErrorCode::InvalidMealWindow,
                format!("Expected HH:MM:SS-HH:MM:SS for {}, got '{}'", meal, range),
            )
        })?;
        Self::parse(meal, start.trim(), end.trim())
    }

    pub fn meal(&self) -> MealType {
        self.meal
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        let time = truncate_to_second(time);
        self.start <= time && time <= self.end
    }

    fn overlaps(&self, other: &MealWindow) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Ordered table of meal windows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSchedule {
    windows: Vec<MealWindow>,
}

impl Default for MealSchedule {
    /// Breakfast 07:00-10:00, lunch 12:00-15:00, dinner 18:00-22:00
    fn default() -> Self {
        Self {
            windows: vec![
                MealWindow {
                    meal: MealType::Breakfast,
                    start: hms(7, 0, 0),
                    end: hms(10, 0, 0),
                },
                MealWindow {
                    meal: MealType::Lunch,
                    start: hms(12, 0, 0),
                    end: hms(15, 0, 0),
                },
                MealWindow {
                    meal: MealType::Dinner,
                    start: hms(18, 0, 0),
                    end: hms(22, 0, 0),
                },
            ],
        }
    }
}

impl MealSchedule {
    /// Build a schedule from windows in resolution order.
    ///
    /// Overlapping windows are accepted; the first matching window in table
    /// order wins.
    pub fn new(windows: Vec<MealWindow>) -> Self {
        let schedule = Self { windows };
        for (a, b) in schedule.overlapping_pairs() {
            tracing::warn!(
                first = %a,
                second = %b,
                "Meal windows overlap; {} takes precedence",
                a
            );
        }
        schedule
    }

    pub fn windows(&self) -> &[MealWindow] {
        &self.windows
    }

    /// First window configured for `meal`
    pub fn window(&self, meal: MealType) -> Option<&MealWindow> {
        self.windows.iter().find(|w| w.meal == meal)
    }

    /// Replace (or append) the window for one meal, keeping table order
    pub fn with_window(mut self, window: MealWindow) -> Self {
        match self.windows.iter_mut().find(|w| w.meal == window.meal) {
            Some(slot) => *slot = window,
            None => self.windows.push(window),
        }
        Self::new(self.windows)
    }

    /// Meal pairs whose windows intersect, in table order
    pub fn overlapping_pairs(&self) -> Vec<(MealType, MealType)> {
        let mut pairs = Vec::new();
        for (i, a) in self.windows.iter().enumerate() {
            for b in &self.windows[i + 1..] {
                if a.overlaps(b) {
                    pairs.push((a.meal, b.meal));
                }
            }
        }
        pairs
    }

    /// Meal served at `time`, or `None` between services
    pub fn resolve_at(&self, time: NaiveTime) -> Option<MealType> {
        self.windows
            .iter()
            .find(|w| w.contains(time))
            .map(|w| w.meal)
    }

    /// Whether `time` falls inside `meal`'s window
    pub fn is_within_at(&self, meal: MealType, time: NaiveTime) -> bool {
        self.window(meal).is_some_and(|w| w.contains(time))
    }

    /// Meal served right now (local wall clock)
    pub fn resolve_current_meal_type(&self) -> Option<MealType> {
        self.resolve_at(Local::now().time())
    }

    /// Whether the local wall clock is inside `meal`'s window
    pub fn is_within_meal_period(&self, meal: MealType) -> bool {
        self.is_within_at(meal, Local::now().time())
    }

    /// The next window that starts strictly after `time`, same day
    pub fn next_window_after(&self, time: NaiveTime) -> Option<&MealWindow> {
        let time = truncate_to_second(time);
        self.windows
            .iter()
            .filter(|w| w.start > time)
            .min_by_key(|w| w.start)
    }
}

/// Parse a zero-padded `HH:MM:SS` time of day
pub fn parse_time_of_day(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|e| {
        AppError::with_message(
            ErrorCode::InvalidMealWindow,
            format!("Invalid time of day '{}': {}", value, e),
        )
    })
}

fn truncate_to_second(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

fn hms(hour: u32, min: u32, sec: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, sec).unwrap_or(NaiveTime::MIN)
}
