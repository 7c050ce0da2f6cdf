use taskdag::errors::GraphError;
use taskdag::graph::TaskRegistry;

#[test]
fn get_or_create_is_idempotent() {
    let mut registry = TaskRegistry::new();
    registry.get_or_create("A");
    registry.get_or_create("A");

    assert_eq!(registry.len(), 1);
}

#[test]
fn removing_an_unknown_task_reports_not_found() {
    let mut registry = TaskRegistry::new();
    let err = registry.remove("ghost").unwrap_err();
    assert!(matches!(err, GraphError::NotFound(name) if name == "ghost"));
}

#[test]
fn removing_an_active_task_is_refused() {
    let mut registry = TaskRegistry::new();
    registry.add_dependency("A", "B").unwrap();
    registry.activate("A").unwrap();

    let err = registry.remove("B").unwrap_err();
    assert!(matches!(err, GraphError::TaskActive(name) if name == "B"));

    // Registry unchanged: both tasks and the edge survive.
    assert_eq!(registry.len(), 2);
    assert!(registry.find("A").unwrap().dependencies().contains("B"));
}

#[test]
fn removal_after_deactivation_prunes_dangling_edges() {
    let mut registry = TaskRegistry::new();
    registry.add_dependency("A", "B").unwrap();
    registry.add_dependency("C", "B").unwrap();
    registry.activate("A").unwrap();
    registry.deactivate("A").unwrap();

    registry.remove("B").unwrap();

    assert!(registry.find("B").is_none());
    assert!(registry.find("A").unwrap().dependencies().is_empty());
    assert!(registry.find("C").unwrap().dependencies().is_empty());
}

#[test]
fn remove_dependency_is_unconditional() {
    let mut registry = TaskRegistry::new();
    registry.add_dependency("A", "B").unwrap();

    registry.remove_dependency("A", "B").unwrap();
    assert!(registry.find("A").unwrap().dependencies().is_empty());

    // Removing an edge that is not present is a no-op, not an error.
    registry.remove_dependency("A", "B").unwrap();

    let err = registry.remove_dependency("ghost", "B").unwrap_err();
    assert!(matches!(err, GraphError::NotFound(_)));
}

#[test]
fn removing_an_edge_reopens_the_reverse_direction() {
    let mut registry = TaskRegistry::new();
    registry.add_dependency("A", "B").unwrap();
    assert!(matches!(
        registry.add_dependency("B", "A"),
        Err(GraphError::WouldCycle { .. })
    ));

    registry.remove_dependency("A", "B").unwrap();
    registry.add_dependency("B", "A").unwrap();

    assert!(registry.find("B").unwrap().dependencies().contains("A"));
}
