use flowdesk_core::{load_seed, Priority, TaskStatus, SNAPSHOT_VERSION};

#[test]
fn seed_snapshot_is_version_one() {
    let snapshot = load_seed();
    assert_eq!(snapshot.version, SNAPSHOT_VERSION);
    assert_eq!(snapshot.version, 1);
}

#[test]
fn repeated_loads_are_equal_but_independent() {
    let mut first = load_seed();
    let second = load_seed();
    assert_eq!(first, second);

    first.projects[0].title = "mutated".to_string();
    first.tasks.clear();
    first.revenue.monthly.clear();

    let third = load_seed();
    assert_eq!(third, second);
    assert_ne!(third.projects[0].title, "mutated");
    assert!(!third.tasks.is_empty());
}

#[test]
fn sparse_seed_tasks_are_canonicalized() {
    let snapshot = load_seed();

    let sparse = snapshot.tasks.iter().find(|task| task.id == "t8").unwrap();
    assert_eq!(sparse.project, None);
    assert_eq!(sparse.status, TaskStatus::Todo);
    assert_eq!(sparse.priority, Priority::Low);
    assert_eq!(sparse.assignee, "");
    assert_eq!(sparse.completed_at, "");

    let no_priority = snapshot.tasks.iter().find(|task| task.id == "t5").unwrap();
    assert_eq!(no_priority.priority, Priority::Medium);
    assert_eq!(no_priority.prompt, "");
}

#[test]
fn seed_contains_scenario_task() {
    let snapshot = load_seed();
    let task = snapshot.tasks.iter().find(|task| task.id == "t1").unwrap();
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.assignee, "alex");
}

#[test]
fn seed_ids_are_unique_per_collection() {
    let snapshot = load_seed();
    let mut project_ids: Vec<&str> = snapshot.projects.iter().map(|p| p.id.as_str()).collect();
    let mut task_ids: Vec<&str> = snapshot.tasks.iter().map(|t| t.id.as_str()).collect();
    let project_count = project_ids.len();
    let task_count = task_ids.len();
    project_ids.sort_unstable();
    project_ids.dedup();
    task_ids.sort_unstable();
    task_ids.dedup();
    assert_eq!(project_ids.len(), project_count);
    assert_eq!(task_ids.len(), task_count);
}
