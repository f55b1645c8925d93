use tidyhome_core::store::seed::seed_tasks;
use tidyhome_core::{board, project, Frequency, Priority, Selection, Task, TaskFilters};

#[test]
fn seed_projection_orders_by_priority_then_newest() {
    let tasks = seed_with_increasing_created_at();

    let projected = project(&tasks, &TaskFilters::default());
    let ids = ids_of(&projected);
    assert_eq!(ids, vec!["5", "4", "1", "3", "2"]);
}

#[test]
fn simultaneous_seed_keeps_store_order_within_priority() {
    let tasks = seed_tasks(1_700_000_000_000);

    let projected = project(&tasks, &TaskFilters::default());
    let ids = ids_of(&projected);
    assert_eq!(ids, vec!["1", "4", "5", "2", "3"]);
}

#[test]
fn completed_tasks_sink_within_their_priority_group() {
    let mut tasks = seed_with_increasing_created_at();
    tasks[4].toggle_completed(99);

    let projected = project(&tasks, &TaskFilters::default());
    let ids = ids_of(&projected);
    assert_eq!(ids, vec!["4", "1", "5", "3", "2"]);
}

#[test]
fn priority_outranks_completion() {
    let mut tasks = seed_with_increasing_created_at();
    tasks[0].toggle_completed(99);
    tasks[3].toggle_completed(99);
    tasks[4].toggle_completed(99);
    tasks[2].priority = Priority::Low;

    let projected = project(&tasks, &TaskFilters::default());
    let ids = ids_of(&projected);
    assert_eq!(ids, vec!["5", "4", "1", "2", "3"]);
    assert!(projected[0].completed);
}

#[test]
fn equal_keys_sort_newest_first() {
    let mut tasks = seed_tasks(0);
    tasks[1].created_at = 10;
    tasks[2].created_at = 20;

    let projected = project(&tasks, &TaskFilters::default());
    let ids = ids_of(&projected);
    assert_eq!(&ids[3..], &["3", "2"]);
}

#[test]
fn projection_is_idempotent() {
    let mut tasks = seed_with_increasing_created_at();
    tasks[1].toggle_completed(7);
    let filter_sets = [
        TaskFilters::default(),
        TaskFilters {
            quick_mode: true,
            ..TaskFilters::default()
        },
        TaskFilters {
            quick_mode: false,
            room: Selection::Only("living-room".to_string()),
            frequency: Selection::All,
        },
        TaskFilters {
            quick_mode: false,
            room: Selection::All,
            frequency: Selection::Only(Frequency::Daily),
        },
    ];

    for filters in &filter_sets {
        let once = project(&tasks, filters);
        let twice = project(&once, filters);
        assert_eq!(once, twice);
    }
}

#[test]
fn quick_mode_projection_is_subset_of_quick_tasks() {
    let mut tasks = seed_with_increasing_created_at();
    tasks[2].is_quick_task = false;
    tasks[0].is_quick_task = false;

    let mut filters = TaskFilters {
        quick_mode: false,
        room: Selection::Only("kitchen".to_string()),
        frequency: Selection::Only(Frequency::Monthly),
    };
    filters.activate_quick_mode();
    let projected = project(&tasks, &filters);

    assert!(projected.iter().all(|task| task.is_quick_task));
    assert_eq!(ids_of(&projected), vec!["5", "4", "2"]);
}

#[test]
fn unknown_room_filter_yields_empty_list() {
    let tasks = seed_tasks(0);
    let filters = TaskFilters {
        quick_mode: false,
        room: Selection::Only("attic".to_string()),
        frequency: Selection::All,
    };

    let view = board(&tasks, &filters);
    assert!(view.tasks.is_empty());
    assert_eq!(view.stats.percentage, 0);
    assert_eq!(view.remaining_minutes, 0);
}

#[test]
fn board_stats_follow_projected_subset() {
    let mut tasks = seed_with_increasing_created_at();
    tasks[0].toggle_completed(5);
    let mut filters = TaskFilters::default();
    filters.activate_quick_mode();

    let view = board(&tasks, &filters);
    assert_eq!(view.stats.total, 4);
    assert_eq!(view.stats.completed, 1);
    assert_eq!(view.stats.percentage, 25);
    // Quick tasks 2, 4 and 5 remain: 5 + 5 + 3 minutes.
    assert_eq!(view.remaining_minutes, 13);
}

fn seed_with_increasing_created_at() -> Vec<Task> {
    let mut tasks = seed_tasks(0);
    for (index, task) in tasks.iter_mut().enumerate() {
        task.created_at = 1_000 + index as i64;
    }
    tasks
}

fn ids_of(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id.as_str()).collect()
}
