//! Group stack, count table and timer table.

use core::fmt;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::value::Value;

/// Label used when a counter or timer call omits one.
pub const DEFAULT_LABEL: &str = "default";

/// One open nesting level.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    /// Formatted label parts given when the group was opened
    pub label: Vec<Value>,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.label.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/// LIFO stack of open groups; its depth drives indentation.
#[derive(Debug, Default)]
pub struct GroupStack(Vec<Group>);

impl GroupStack {
    #[inline]
    pub fn push(&mut self, g: Group) {
        self.0.push(g);
    }
    #[inline]
    pub fn pop(&mut self) -> Option<Group> {
        self.0.pop()
    }
    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Per-label counters. Entries are reset to zero, never removed.
#[derive(Debug, Default)]
pub struct CountTable(HashMap<String, u64>);

impl CountTable {
    /// Bump `label` and return the new count (1 on first use).
    pub fn increment(&mut self, label: &str) -> u64 {
        let n = self.0.entry(label.to_owned()).or_insert(0);
        *n += 1;
        *n
    }

    /// Set an existing counter back to zero. Returns `false` if `label` was never counted.
    pub fn reset(&mut self, label: &str) -> bool {
        self.0.get_mut(label).map(|n| *n = 0).is_some()
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.0.get(label).copied()
    }
}

/// Running timers, at most one per label.
#[derive(Debug, Default)]
pub struct TimerTable(HashMap<String, Instant>);

impl TimerTable {
    /// Start `label` at `now`. A running timer is left untouched and `false` returned.
    pub fn start(&mut self, label: &str, now: Instant) -> bool {
        if self.0.contains_key(label) {
            return false;
        }
        self.0.insert(label.to_owned(), now);
        true
    }

    pub fn elapsed(&self, label: &str, now: Instant) -> Option<Duration> {
        self.0
            .get(label)
            .map(|start| now.saturating_duration_since(*start))
    }

    pub fn end(&mut self, label: &str, now: Instant) -> Option<Duration> {
        self.0
            .remove(label)
            .map(|start| now.saturating_duration_since(start))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }
}

/// Source of instants for the timer table.
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}
