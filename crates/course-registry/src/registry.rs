// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! In-memory course storage keyed by id.

use crate::model::{Course, CoursePayload};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Owned, lock-guarded store of course records.
///
/// Records are keyed by their server-generated id, so lookup, replacement
/// and removal are O(1) and removal is strictly by key. Every operation
/// takes the lock exactly once, making each CRUD call atomic with respect
/// to concurrent requests. Iteration order of [`list`](Self::list) is
/// unspecified.
pub struct CourseRegistry {
    courses: RwLock<HashMap<String, Course>>,
}

impl CourseRegistry {
    pub fn new() -> Self {
        Self {
            courses: RwLock::new(HashMap::new()),
        }
    }

    /// All stored records, in unspecified order.
    pub async fn list(&self) -> Vec<Course> {
        self.courses.read().await.values().cloned().collect()
    }

    /// Store a new record under a fresh UUID v4 id and return it.
    pub async fn create(&self, payload: CoursePayload) -> Course {
        let course = payload.into_course(Uuid::new_v4().to_string());
        let mut courses = self.courses.write().await;
        courses.insert(course.id.clone(), course.clone());
        course
    }

    /// Record with the given id, if any.
    pub async fn get(&self, id: &str) -> Option<Course> {
        self.courses.read().await.get(id).cloned()
    }

    /// Full replacement of an existing record.
    ///
    /// The stored id is re-stamped onto the replacement, so the identifier
    /// never changes even if the request body supplied a different one.
    /// This is an overwrite, not a merge: fields absent from the payload
    /// take the payload's defaults, not the old record's values. Returns
    /// `None` if no record has this id.
    pub async fn update(&self, id: &str, payload: CoursePayload) -> Option<Course> {
        let mut courses = self.courses.write().await;
        let slot = courses.get_mut(id)?;
        let kept_id = slot.id.clone();
        *slot = payload.into_course(kept_id);
        Some(slot.clone())
    }

    /// Remove the record with the given id, returning its prior value.
    ///
    /// Removal is by key only, never by value equality, so records with
    /// identical contents under other ids are untouched.
    pub async fn remove(&self, id: &str) -> Option<Course> {
        self.courses.write().await.remove(id)
    }
}

impl Default for CourseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
