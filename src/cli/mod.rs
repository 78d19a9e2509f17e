//! CLI for actionforge
//!
//! Thin boundary over the library core:
//! - `generate`: render a workflow for a selection
//! - `supported`: show legal platforms and frameworks
//! - `share`: encode/decode shareable configuration tokens
//! - `history`: browse saved configurations
//! - `completions`: generate shell completions

pub mod completions;
pub mod generate;
pub mod history;
pub mod share;

use actionforge::{Framework, Language, OptionSet, Platform, Selection, frameworks_for};
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uuid::Uuid;

/// CLI arguments for actionforge
#[derive(Parser, Debug)]
#[command(name = "actionforge")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a workflow for a selection
    Generate {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Re-parse the rendered document as YAML before emitting
        #[arg(long)]
        check: bool,
        /// Copy the workflow to the system clipboard
        #[arg(long)]
        copy: bool,
        /// Save the configuration to the history
        #[arg(long)]
        save: bool,
    },

    /// Show legal platforms and frameworks
    Supported {
        /// Restrict to one language
        #[arg(short, long, value_enum)]
        language: Option<Language>,
    },

    /// Share configurations as URL-safe tokens
    Share {
        #[command(subcommand)]
        command: ShareCommand,
    },

    /// Browse saved configurations
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: ShellArg,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum ShareCommand {
    /// Encode a selection into a token (or full URL)
    Encode {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Embed the rendered workflow in the token
        #[arg(long)]
        include_workflow: bool,
        /// Emit a full URL on this base instead of a bare token
        #[arg(long)]
        base_url: Option<String>,
        /// Copy the result to the system clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Decode a token (or a URL carrying one)
    Decode {
        /// Token or URL to decode
        token: String,
        /// Print the configuration's workflow instead of its summary
        #[arg(long)]
        render: bool,
    },
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// List saved configurations, most recent first
    List,
    /// Print one saved configuration's workflow
    Show {
        /// Record identity from `history list`
        id: Uuid,
    },
    /// Delete a saved configuration
    Delete {
        /// Record identity from `history list`
        id: Uuid,
    },
    /// Delete every saved configuration
    Clear,
}

/// Selection flags shared by `generate` and `share encode`.
#[derive(clap::Args, Debug)]
struct SelectionArgs {
    /// Source language
    #[arg(short, long, value_enum)]
    language: Language,
    /// Deployment platform
    #[arg(short, long, value_enum)]
    platform: Platform,
    /// Framework or service (defaults to the first legal one)
    #[arg(short, long, value_enum)]
    framework: Option<Framework>,
    /// Skip dependency caching sections
    #[arg(long)]
    no_cache: bool,
    /// Skip the test step
    #[arg(long)]
    no_tests: bool,
    /// Skip optimization steps
    #[arg(long)]
    no_optimize: bool,
}

impl SelectionArgs {
    fn into_selection(self) -> Selection {
        let framework = self
            .framework
            .unwrap_or_else(|| frameworks_for(self.language, self.platform)[0]);
        Selection::new(self.language, self.platform, framework).with_options(
            OptionSet::enabled()
                .with_cache(!self.no_cache)
                .with_tests(!self.no_tests)
                .with_optimize(!self.no_optimize),
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ShellArg {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Parse and execute CLI arguments
pub fn run() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Generate {
            selection,
            output,
            check,
            copy,
            save,
        } => {
            generate::run(&generate::GenerateConfig {
                selection: selection.into_selection(),
                output,
                check,
                copy,
                save,
            })?;
        }
        Command::Supported { language } => {
            generate::print_supported(language);
        }
        Command::Share { command } => match command {
            ShareCommand::Encode {
                selection,
                include_workflow,
                base_url,
                copy,
            } => {
                share::encode_selection(
                    selection.into_selection(),
                    include_workflow,
                    base_url.as_deref(),
                    copy,
                )?;
            }
            ShareCommand::Decode { token, render } => {
                share::decode_token(&token, render)?;
            }
        },
        Command::History { command } => match command {
            HistoryCommand::List => history::list()?,
            HistoryCommand::Show { id } => history::show(id)?,
            HistoryCommand::Delete { id } => history::delete(id)?,
            HistoryCommand::Clear => history::clear()?,
        },
        Command::Completions { shell, output } => {
            use clap_complete::Shell;

            let shell_enum = match shell {
                ShellArg::Bash => Shell::Bash,
                ShellArg::Zsh => Shell::Zsh,
                ShellArg::Fish => Shell::Fish,
                ShellArg::PowerShell => Shell::PowerShell,
            };

            let completions = completions::generate_completions(shell_enum)?;

            if let Some(output_path) = output {
                completions::save_completions(&completions, &output_path)?;
            } else {
                println!("{}", completions);
            }
        }
    }

    Ok(())
}
