// ABOUTME: Suggestion id generation behind an injectable trait
// ABOUTME: Wall-clock plus random suffix in production, deterministic counters for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Suggestion ids have the shape `{template_id}_{timestamp_millis}_{suffix}`.
//! The template id is recoverable by splitting on the first `_`, which is why
//! catalog ids may not contain one.

use chrono::Utc;
use pierre_meal_core::constants::suggestion_ids::{RANDOM_SUFFIX_LEN, SEPARATOR};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Produces runtime-unique suggestion ids
pub trait IdGenerator: Send + Sync {
    /// Create a new id for a suggestion built from `template_id`
    fn suggestion_id(&self, template_id: &str) -> String;
}

/// Current time in milliseconds plus a random lowercase alphanumeric suffix
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIdGenerator;

impl IdGenerator for TimestampIdGenerator {
    fn suggestion_id(&self, template_id: &str) -> String {
        let millis = Utc::now().timestamp_millis();
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(RANDOM_SUFFIX_LEN)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();
        format!("{template_id}{SEPARATOR}{millis}{SEPARATOR}{suffix}")
    }
}

/// Fixed timestamp plus a monotonically increasing, zero-padded counter
///
/// Output is fully deterministic for a given construction, which keeps tests
/// reproducible while still yielding distinct ids per call.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    timestamp_millis: i64,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator stamping every id with `timestamp_millis`
    #[must_use]
    pub const fn new(timestamp_millis: i64) -> Self {
        Self {
            timestamp_millis,
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn suggestion_id(&self, template_id: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!(
            "{template_id}{SEPARATOR}{}{SEPARATOR}{n:0width$}",
            self.timestamp_millis,
            width = RANDOM_SUFFIX_LEN
        )
    }
}
