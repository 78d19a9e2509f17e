//! `actionforge history` - Browse saved configurations

use actionforge::prelude::*;
use anyhow::Result;
use uuid::Uuid;

fn open_store() -> Result<JsonFileStore> {
    let config = Config::from_env();
    Ok(JsonFileStore::open(config.history_path)?)
}

pub fn list() -> Result<()> {
    let store = open_store()?;
    let records = store.list()?;

    if records.is_empty() {
        println!("no saved configurations");
        return Ok(());
    }

    for record in records {
        let flags = [
            record.options.cache.then_some("cache"),
            record.options.tests.then_some("tests"),
            record.options.optimize.then_some("optimize"),
        ];
        let flags: Vec<&str> = flags.into_iter().flatten().collect();
        println!(
            "{}  {}  {}  [{}]",
            record.id,
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.label(),
            flags.join(", ")
        );
    }

    Ok(())
}

pub fn show(id: Uuid) -> Result<()> {
    let store = open_store()?;
    let Some(record) = store.get(id)? else {
        eprintln!("note: no configuration with id {id}");
        return Ok(());
    };

    match record.workflow.clone() {
        Some(workflow) => print!("{workflow}"),
        // Older records may predate the workflow snapshot, or the
        // catalogue may have moved on; both stay non-fatal.
        None => match render(&record.selection()) {
            Ok(workflow) => print!("{workflow}"),
            Err(err) => eprintln!("note: {err}"),
        },
    }

    Ok(())
}

pub fn delete(id: Uuid) -> Result<()> {
    let store = open_store()?;
    if store.delete(id)? {
        eprintln!("deleted configuration {id}");
    } else {
        eprintln!("note: no configuration with id {id}");
    }
    Ok(())
}

pub fn clear() -> Result<()> {
    let store = open_store()?;
    store.clear()?;
    eprintln!("history cleared");
    Ok(())
}
