use taskdag::errors::GraphError;
use taskdag::graph::TaskRegistry;

fn chain() -> TaskRegistry {
    // A depends on B, B depends on C.
    let mut registry = TaskRegistry::new();
    registry.add_dependency("A", "B").unwrap();
    registry.add_dependency("B", "C").unwrap();
    registry
}

#[test]
fn activation_propagates_to_every_transitive_dependency() {
    let mut registry = chain();
    registry.activate("A").unwrap();

    for name in ["A", "B", "C"] {
        let task = registry.find(name).unwrap();
        assert!(task.is_active(), "{name} should be active");
        assert!(task.requesters().contains("A"), "{name} should carry requester A");
    }
}

#[test]
fn deactivation_of_the_sole_requester_clears_the_chain() {
    let mut registry = chain();
    registry.activate("A").unwrap();
    registry.deactivate("A").unwrap();

    for name in ["A", "B", "C"] {
        let task = registry.find(name).unwrap();
        assert!(!task.is_active(), "{name} should be inactive again");
        assert!(task.requesters().is_empty());
    }
}

#[test]
fn shared_dependency_stays_active_until_both_requesters_withdraw() {
    let mut registry = TaskRegistry::new();
    registry.add_dependency("A", "D").unwrap();
    registry.add_dependency("B", "D").unwrap();

    registry.activate("A").unwrap();
    registry.activate("B").unwrap();

    let d = registry.find("D").unwrap();
    assert!(d.is_active());
    assert_eq!(d.requesters().len(), 2);

    registry.deactivate("A").unwrap();
    let d = registry.find("D").unwrap();
    assert!(d.is_active(), "B's request still holds D active");
    assert!(d.requesters().contains("B"));
    assert!(!registry.find("A").unwrap().is_active());

    registry.deactivate("B").unwrap();
    assert!(!registry.find("D").unwrap().is_active());
}

#[test]
fn reactivation_with_the_same_requester_is_idempotent() {
    let mut registry = chain();
    registry.activate("A").unwrap();
    registry.activate("A").unwrap();

    let a = registry.find("A").unwrap();
    assert!(a.is_active());
    assert_eq!(a.requesters().len(), 1);
    assert_eq!(registry.find("C").unwrap().requesters().len(), 1);
}

#[test]
fn activating_a_middle_task_adds_an_independent_requester() {
    let mut registry = chain();
    registry.activate("A").unwrap();
    registry.activate("B").unwrap();

    // C is held by both A and B; withdrawing A keeps it active.
    let c = registry.find("C").unwrap();
    assert_eq!(c.requesters().len(), 2);

    registry.deactivate("A").unwrap();
    assert!(registry.find("C").unwrap().is_active());
    assert!(!registry.find("A").unwrap().is_active());

    registry.deactivate("B").unwrap();
    assert!(!registry.find("C").unwrap().is_active());
}

#[test]
fn activating_an_unknown_task_reports_not_found() {
    let mut registry = TaskRegistry::new();
    let err = registry.activate("ghost").unwrap_err();
    assert!(matches!(err, GraphError::NotFound(name) if name == "ghost"));

    let err = registry.deactivate("ghost").unwrap_err();
    assert!(matches!(err, GraphError::NotFound(_)));
}

#[test]
fn new_dependency_on_an_active_task_is_activated_immediately() {
    let mut registry = chain();
    registry.activate("A").unwrap();

    // B gains a fresh dependency while the chain is active; the newcomer
    // must inherit every requester recorded against B.
    registry.activate("B").unwrap();
    registry.add_dependency("B", "N").unwrap();

    let n = registry.find("N").unwrap();
    assert!(n.is_active());
    assert!(n.requesters().contains("A"));
    assert!(n.requesters().contains("B"));
}

#[test]
fn deactivation_with_a_different_requester_changes_nothing() {
    let mut registry = chain();
    registry.activate("A").unwrap();

    // B never activated itself; withdrawing "B" from the chain is a no-op
    // for A's request.
    registry.deactivate("B").unwrap();

    assert!(registry.find("B").unwrap().is_active());
    assert!(registry.find("C").unwrap().is_active());
}
