/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Timestamp ids for new entities.

use std::time::{SystemTime, UNIX_EPOCH};

/// Hands out millisecond-timestamp ids, bumping by one when two requests
/// land in the same millisecond so ids from one generator never repeat.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: u128,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        self.next_id_at(now)
    }

    /// Id for a clock reading of `now_ms`.
    pub fn next_id_at(&mut self, now_ms: u128) -> String {
        let id = if now_ms > self.last {
            now_ms
        } else {
            self.last + 1
        };
        self.last = id;
        id.to_string()
    }
}
