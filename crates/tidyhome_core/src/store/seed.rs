//! First-run seed data.

use crate::model::task::{Frequency, Priority, Task};

struct SeedTask {
    id: &'static str,
    title: &'static str,
    priority: Priority,
    frequency: Frequency,
    room: &'static str,
    estimated_minutes: u32,
    is_quick_task: bool,
}

const SEED_TASKS: &[SeedTask] = &[
    SeedTask {
        id: "1",
        title: "Wash the dishes",
        priority: Priority::High,
        frequency: Frequency::Daily,
        room: "kitchen",
        estimated_minutes: 15,
        is_quick_task: true,
    },
    SeedTask {
        id: "2",
        title: "Clean the bathroom sink",
        priority: Priority::Medium,
        frequency: Frequency::Daily,
        room: "bathroom",
        estimated_minutes: 5,
        is_quick_task: true,
    },
    SeedTask {
        id: "3",
        title: "Vacuum the living room",
        priority: Priority::Medium,
        frequency: Frequency::Weekly,
        room: "living-room",
        estimated_minutes: 20,
        is_quick_task: false,
    },
    SeedTask {
        id: "4",
        title: "Tidy the coffee table",
        priority: Priority::High,
        frequency: Frequency::Daily,
        room: "living-room",
        estimated_minutes: 5,
        is_quick_task: true,
    },
    SeedTask {
        id: "5",
        title: "Make the bed",
        priority: Priority::High,
        frequency: Frequency::Daily,
        room: "bedroom",
        estimated_minutes: 3,
        is_quick_task: true,
    },
];

/// Materializes the five sample tasks, all created at `now`.
pub fn seed_tasks(now: i64) -> Vec<Task> {
    SEED_TASKS
        .iter()
        .map(|seed| Task {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            completed: false,
            priority: seed.priority,
            frequency: seed.frequency,
            room: seed.room.to_string(),
            created_at: now,
            completed_at: None,
            estimated_minutes: Some(seed.estimated_minutes),
            is_quick_task: seed.is_quick_task,
        })
        .collect()
}

