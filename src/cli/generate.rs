//! `actionforge generate` - Render a workflow for a selection

use actionforge::prelude::*;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Everything `generate` needs, resolved from the CLI flags.
#[derive(Debug)]
pub struct GenerateConfig {
    pub selection: Selection,
    pub output: Option<PathBuf>,
    pub check: bool,
    pub copy: bool,
    pub save: bool,
}

pub fn run(config: &GenerateConfig) -> Result<()> {
    let selection = config.selection.normalized();
    if selection.framework != config.selection.framework {
        eprintln!(
            "note: '{}' is not available for {}/{}; using '{}'",
            config.selection.framework,
            selection.language,
            selection.platform,
            selection.framework
        );
    }

    let workflow = render(&selection)?;

    if config.check {
        serde_yaml::from_str::<serde_yaml::Value>(&workflow)
            .context("rendered workflow is not valid YAML")?;
    }

    match &config.output {
        Some(path) => {
            save_workflow(&workflow, path)?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{workflow}"),
    }

    if config.copy {
        if SystemClipboard.copy(&workflow) {
            eprintln!("workflow copied to clipboard");
        } else {
            eprintln!("note: could not copy workflow to clipboard");
        }
    }

    if config.save {
        let app = Config::from_env();
        let store = JsonFileStore::open(app.history_path)?;
        let record =
            store.insert(ConfigDraft::new(selection).with_workflow(Some(workflow.clone())))?;
        eprintln!("saved configuration {}", record.id);
    }

    Ok(())
}

/// Prints the legal platform and framework sets, per language.
pub fn print_supported(language: Option<Language>) {
    let languages: Vec<Language> = match language {
        Some(language) => vec![language],
        None => Language::ALL.to_vec(),
    };

    for language in languages {
        println!("{language}:");
        for &platform in platforms_for(language) {
            let frameworks: Vec<&str> = frameworks_for(language, platform)
                .iter()
                .map(|framework| framework.as_str())
                .collect();
            println!("  {platform}: {}", frameworks.join(", "));
        }
    }
}
