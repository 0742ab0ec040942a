//! Habit list management and streak computation

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::habits_key;
use crate::error::{HfError, Result};
use crate::storage::{KvStore, KvStoreExt};

/// Day of the tracked week. Ordering is the display order `Mon..Sun`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = HfError;

    /// Accepts the short name case-insensitively, or the full day name.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mon" | "monday" => Ok(Self::Mon),
            "tue" | "tuesday" => Ok(Self::Tue),
            "wed" | "wednesday" => Ok(Self::Wed),
            "thu" | "thursday" => Ok(Self::Thu),
            "fri" | "friday" => Ok(Self::Fri),
            "sat" | "saturday" => Ok(Self::Sat),
            "sun" | "sunday" => Ok(Self::Sun),
            _ => Err(HfError::UnknownDay(s.to_string())),
        }
    }
}

/// One tracked habit: a name, a category, a display color token, and a
/// completion flag per day of the week. The `days` key set is fixed at
/// creation and never shrinks or grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Opaque display token; stored and returned unchanged.
    pub color: String,
    pub days: BTreeMap<Day, bool>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Habit {
    fn new(name: &str, category: &str, color: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            category: category.to_string(),
            color: color.to_string(),
            days: Day::ALL.iter().map(|d| (*d, false)).collect(),
            created_at: Utc::now(),
        }
    }

    pub fn completed(&self, day: Day) -> bool {
        self.days.get(&day).copied().unwrap_or(false)
    }

    /// Length of the trailing run of completed days ending at Sunday.
    ///
    /// Scans `Sun, Sat, .., Mon`: completed days count; incomplete days
    /// before the run starts are skipped; the first incomplete day after
    /// the run has started ends it. A habit completed only early in the
    /// week therefore scores 0. The week anchor is fixed at Sunday, not
    /// the current calendar day.
    pub fn streak(&self) -> u32 {
        let mut count = 0;
        let mut started = false;
        for day in Day::ALL.iter().rev() {
            if self.completed(*day) {
                started = true;
                count += 1;
            } else if started {
                break;
            }
        }
        count
    }
}

/// Habit list of the active user, persisted wholesale under a per-user
/// partition key.
///
/// Every mutation is load-mutate-persist of the full list. With no active
/// user the list is empty and nothing persists. Mutations on absent habit
/// ids are deliberate silent no-ops (reported via the `bool` return), so
/// stale ids from the presentation layer stay benign.
pub struct HabitStore {
    store: Arc<dyn KvStore>,
    user: Option<String>,
    habits: Vec<Habit>,
}

impl HabitStore {
    /// Open the habit store for the given user (or none), loading that
    /// user's partition.
    pub fn open(store: Arc<dyn KvStore>, user: Option<&str>) -> Result<Self> {
        let mut this = Self {
            store,
            user: None,
            habits: Vec::new(),
        };
        this.set_active_user(user)?;
        Ok(this)
    }

    /// Switch partitions, replacing the in-memory list wholesale. Called
    /// on every change of active user so no stale data from a previous
    /// user stays visible.
    pub fn set_active_user(&mut self, user: Option<&str>) -> Result<()> {
        self.user = user.map(str::to_string);
        self.habits = match &self.user {
            Some(phone) => self.load_partition(phone)?,
            None => Vec::new(),
        };
        Ok(())
    }

    /// Habits in insertion order, which is the display order.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, habit_id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == habit_id)
    }

    /// Create a habit with all seven days incomplete and append it.
    pub fn create(&mut self, name: &str, category: &str, color: &str) -> Result<Habit> {
        if name.trim().is_empty() {
            return Err(HfError::Validation("habit name must not be empty".into()));
        }
        if category.trim().is_empty() {
            return Err(HfError::Validation("category must not be empty".into()));
        }

        let habit = Habit::new(name, category, color);
        debug!(id = %habit.id, name, "created habit");
        self.habits.push(habit.clone());
        self.persist()?;
        Ok(habit)
    }

    /// Flip one day's completion flag. Returns `false` (no-op) when no
    /// habit matches the id.
    pub fn toggle_day(&mut self, habit_id: &str, day: Day) -> Result<bool> {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == habit_id) else {
            return Ok(false);
        };
        let flag = habit.days.entry(day).or_insert(false);
        *flag = !*flag;
        self.persist()?;
        Ok(true)
    }

    /// Remove a habit, preserving the order of the rest. Returns `false`
    /// (no-op) when no habit matches the id.
    pub fn delete(&mut self, habit_id: &str) -> Result<bool> {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != habit_id);
        if self.habits.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Drop every habit. Safe and idempotent on an already-empty list.
    pub fn clear_all(&mut self) -> Result<()> {
        self.habits.clear();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        if let Some(phone) = &self.user {
            self.store.put_json(&habits_key(phone), &self.habits)?;
        }
        Ok(())
    }

    // Corrupt partition JSON degrades to an empty list; real storage
    // errors propagate.
    fn load_partition(&self, phone: &str) -> Result<Vec<Habit>> {
        match self.store.get_json::<Vec<Habit>>(&habits_key(phone)) {
            Ok(habits) => Ok(habits.unwrap_or_default()),
            Err(HfError::Serialization(e)) => {
                warn!(phone, error = %e, "corrupt habit partition, starting empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
