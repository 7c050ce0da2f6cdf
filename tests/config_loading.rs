use std::io::Write;

use taskdag::config;
use taskdag::graph::TaskRegistry;

fn write_seed(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write seed");
    file
}

#[test]
fn seed_file_builds_the_graph_and_activates_tasks() {
    let file = write_seed(
        r#"
[task.app]
after = ["lib_a", "lib_b"]
active = true

[task.lib_a]
after = ["core"]

[task.lib_b]
after = ["core"]

[task.core]
"#,
    );

    let mut registry = TaskRegistry::new();
    config::load_into(&mut registry, file.path()).unwrap();

    assert_eq!(registry.len(), 4);
    assert!(registry.find("app").unwrap().is_active());
    assert!(registry.find("core").unwrap().is_active());
    assert!(registry.find("core").unwrap().requesters().contains("app"));

    let batches = registry.compute_batches().unwrap();
    assert_eq!(batches.len(), 3);
    assert!(batches[0].contains("core"));
    assert!(batches[2].contains("app"));
}

#[test]
fn dependency_only_names_become_placeholders() {
    let file = write_seed(
        r#"
[task.A]
after = ["B"]
"#,
    );

    let mut registry = TaskRegistry::new();
    config::load_into(&mut registry, file.path()).unwrap();

    assert!(registry.find("B").is_some());
}

#[test]
fn cyclic_seed_file_is_rejected_with_context() {
    let file = write_seed(
        r#"
[task.A]
after = ["B"]

[task.B]
after = ["A"]
"#,
    );

    let mut registry = TaskRegistry::new();
    let err = config::load_into(&mut registry, file.path()).unwrap_err();
    let rendered = format!("{err:#}");
    assert!(rendered.contains("would create a cycle"), "got: {rendered}");
}

#[test]
fn invalid_toml_is_rejected_with_context() {
    let file = write_seed("this is not toml [");

    let mut registry = TaskRegistry::new();
    let err = config::load_into(&mut registry, file.path()).unwrap_err();
    let rendered = format!("{err:#}");
    assert!(rendered.contains("parsing TOML"), "got: {rendered}");
}

#[test]
fn missing_seed_file_is_an_error() {
    let mut registry = TaskRegistry::new();
    let err = config::load_into(&mut registry, "/nonexistent/Taskdag.toml").unwrap_err();
    let rendered = format!("{err:#}");
    assert!(rendered.contains("reading seed file"), "got: {rendered}");
}
