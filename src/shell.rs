// src/shell.rs

//! Interactive terminal menu.
//!
//! Everything in here is a thin shell around the engine: prompting, clearing
//! the screen and printing the tables from [`render`](crate::render). Engine
//! errors are printed and the loop continues; nothing here can corrupt the
//! graph.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::graph::TaskRegistry;
use crate::render;

const BANNER_WIDTH: usize = 46;

/// Run the menu loop until the user quits or stdin reaches EOF.
pub fn run(registry: &mut TaskRegistry) -> Result<()> {
    clear_screen();
    print_banner("Tasks Manager");

    loop {
        println!();
        println!("[1] List tasks dependencies.");
        println!("[2] List tasks statuses.");
        println!("[3] List tasks batches.");
        println!("[4] Add or update task.");
        println!("[5] Remove task.");
        println!("[6] Activate task.");
        println!("[7] Deactivate task.");
        println!("[q] Quit.");
        println!();

        let Some(choice) = prompt("What would you like to do? ")? else {
            break;
        };

        match choice.as_str() {
            "1" => list_dependencies(registry),
            "2" => list_statuses(registry),
            "3" => list_batches(registry),
            "4" => add_task(registry)?,
            "5" => remove_task(registry)?,
            "6" => activate_task(registry)?,
            "7" => deactivate_task(registry)?,
            "q" | "Q" => break,
            "" => {}
            other => println!("Unknown choice: {other}"),
        }
    }

    Ok(())
}

fn list_dependencies(registry: &TaskRegistry) {
    print_banner("Tasks Dependencies");
    print_body(registry, render::format_dependencies(registry));
}

fn list_statuses(registry: &TaskRegistry) {
    print_banner("Tasks Statuses");
    print_body(registry, render::format_statuses(registry));
}

fn list_batches(registry: &TaskRegistry) {
    print_banner("Tasks Batches");

    if registry.is_empty() {
        println!("Tasks empty");
        return;
    }

    match registry.compute_batches() {
        Ok(batches) => println!("{}", render::format_batches(&batches)),
        Err(err) => println!("{err}"),
    }
    print_rule();
}

/// Create the named task if needed, then keep prompting for dependencies
/// until a blank line. Rejected edges are reported and skipped; the loop
/// continues so one bad edge does not abort the rest.
fn add_task(registry: &mut TaskRegistry) -> Result<()> {
    let Some(name) = prompt("Add task by name: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        return Ok(());
    }

    if registry.find(&name).is_some() {
        println!("Task '{name}' already exists; updating dependencies.");
    }
    registry.get_or_create(&name);

    loop {
        let Some(dep) = prompt("Add dependency (blank to finish): ")? else {
            break;
        };
        if dep.is_empty() {
            break;
        }

        if let Err(err) = registry.add_dependency(&name, &dep) {
            println!("\tX: {name} -> {dep}, {err}");
        }
    }

    list_dependencies(registry);
    Ok(())
}

fn remove_task(registry: &mut TaskRegistry) -> Result<()> {
    let Some(name) = prompt("Remove task by name: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        return Ok(());
    }

    match registry.remove(&name) {
        Ok(()) => list_dependencies(registry),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn activate_task(registry: &mut TaskRegistry) -> Result<()> {
    let Some(name) = prompt("Activate task by name: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        return Ok(());
    }

    match registry.activate(&name) {
        Ok(()) => list_statuses(registry),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn deactivate_task(registry: &mut TaskRegistry) -> Result<()> {
    let Some(name) = prompt("Deactivate task by name: ")? else {
        return Ok(());
    };
    if name.is_empty() {
        return Ok(());
    }

    match registry.deactivate(&name) {
        Ok(()) => list_statuses(registry),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

/// Print a label and read one trimmed line. `None` means stdin hit EOF, which
/// the menu treats like quitting.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        debug!("stdin closed; leaving shell");
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

fn print_banner(title: &str) {
    println!();
    print_rule();
    println!("\t***  {title:<width$}***", width = BANNER_WIDTH - 8);
    print_rule();
}

fn print_rule() {
    println!("\t{}", "*".repeat(BANNER_WIDTH));
}

fn print_body(registry: &TaskRegistry, body: String) {
    if registry.is_empty() {
        println!("Tasks empty");
        return;
    }
    println!("{body}");
    print_rule();
}

fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
    let _ = io::stdout().flush();
}
