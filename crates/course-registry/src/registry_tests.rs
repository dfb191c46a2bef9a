// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::CourseRegistry;
use crate::model::CoursePayload;
use std::collections::HashSet;

fn payload(name: &str, level: &str, hours: i64) -> CoursePayload {
    CoursePayload {
        name: name.to_string(),
        duration_label: None,
        level: level.to_string(),
        duration_hours: hours,
    }
}

#[tokio::test]
async fn test_create_then_get() {
    let registry = CourseRegistry::new();

    let created = registry.create(payload("Intro to Systems", "beginner", 40)).await;
    assert!(!created.id.is_empty());

    let fetched = registry.get(&created.id).await.expect("record should exist");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_ids_unique_across_creates() {
    let registry = CourseRegistry::new();

    for i in 0..5 {
        registry.create(payload("Course", "beginner", i)).await;
    }

    let courses = registry.list().await;
    assert_eq!(courses.len(), 5);

    let ids: HashSet<_> = courses.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_update_preserves_id_and_overwrites_all_fields() {
    let registry = CourseRegistry::new();

    let created = registry
        .create(CoursePayload {
            name: "Intro to Systems".to_string(),
            duration_label: Some("40 hours".to_string()),
            level: "beginner".to_string(),
            duration_hours: 40,
        })
        .await;

    // Replacement omits duration_label: full overwrite, not a merge
    let updated = registry
        .update(&created.id, payload("Intro to Systems II", "intermediate", 45))
        .await
        .expect("record should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Intro to Systems II");
    assert_eq!(updated.level, "intermediate");
    assert_eq!(updated.duration_hours, 45);
    assert_eq!(updated.duration_label, None);

    let fetched = registry.get(&created.id).await.expect("record should exist");
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_remove_is_by_key_not_value() {
    let registry = CourseRegistry::new();

    // Two records with identical contents under distinct ids
    let first = registry.create(payload("Twin", "beginner", 10)).await;
    let second = registry.create(payload("Twin", "beginner", 10)).await;
    assert_ne!(first.id, second.id);

    let removed = registry.remove(&first.id).await.expect("record should exist");
    assert_eq!(removed, first);

    // The structurally-equal twin survives
    assert_eq!(registry.get(&second.id).await, Some(second));
    assert_eq!(registry.list().await.len(), 1);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let registry = CourseRegistry::new();

    let created = registry.create(payload("Ephemeral", "beginner", 1)).await;
    registry.remove(&created.id).await.expect("record should exist");

    assert_eq!(registry.get(&created.id).await, None);
}

#[tokio::test]
async fn test_unknown_id_leaves_registry_unchanged() {
    let registry = CourseRegistry::new();
    registry.create(payload("Survivor", "beginner", 5)).await;

    // Syntactically valid but unused UUID
    let unused = "00000000-0000-4000-8000-000000000000";
    assert!(registry.get(unused).await.is_none());
    assert!(registry.update(unused, payload("X", "y", 1)).await.is_none());
    assert!(registry.remove(unused).await.is_none());

    let courses = registry.list().await;
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].name, "Survivor");
}
