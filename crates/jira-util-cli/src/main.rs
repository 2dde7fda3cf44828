// Rust guideline compliant 2026-10-18

//! jira-util CLI Application
//!
//! Command-line interface for provisioning ticket hierarchies.

use clap::{CommandFactory, Parser};
use jira_util_cli::commands::{self, create::CreateArgs, Placement};
use jira_util_cli::{create_formatter, should_use_color, GlobalOptions, OutputFormatter};
use jira_util_core::DEFAULT_ENVIRONMENT;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "jira-util",
    version,
    about = "jira-util: provision ticket hierarchies from a text outline",
    long_about = "jira-util creates deliverables, epics and stories from a line-oriented outline, links them together, and schedules new work into the next sprint or the backlog.",
    after_help = "Examples:\n  jira-util init\n  jira-util get MAR-123\n  jira-util create \"Add login\" --epic MAR-12 --placement next-sprint\n  jira-util file plan.txt --verbose\n  jira-util epics\n"
)]
struct Cli {
    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Config environment section
    #[arg(long, global = true, default_value = DEFAULT_ENVIRONMENT)]
    env: String,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write a template environment section to the config file
    Init {
        /// Replace an existing section of the same name
        #[arg(long)]
        force: bool,
    },

    /// Print a ticket as JSON
    Get {
        /// Ticket key
        key: String,
    },

    /// Create a single ticket
    Create {
        /// Summary of the ticket
        summary: String,

        /// Description of the ticket (defaults to the summary)
        #[arg(long)]
        description: Option<String>,

        /// Issue type (Deliverable, Epic, Story, Task, Spike, Bug)
        #[arg(long)]
        issue_type: Option<String>,

        /// Epic to file the ticket under
        #[arg(long)]
        epic: Option<String>,

        /// Project key
        #[arg(long)]
        project: Option<String>,

        /// Sprint or backlog placement
        #[arg(long, value_enum)]
        placement: Option<Placement>,
    },

    /// Create a ticket hierarchy from an outline file
    File {
        /// Outline file ('-' for stdin)
        path: String,

        /// Print one line per ticket
        #[arg(short, long)]
        verbose: bool,

        /// Project key
        #[arg(long)]
        project: Option<String>,

        /// Sprint or backlog placement for new stories, tasks, spikes and bugs
        #[arg(long, value_enum)]
        placement: Option<Placement>,
    },

    /// List the epics of a project
    Epics {
        /// Project key
        #[arg(long)]
        project: Option<String>,
    },

    /// Manage ticket comments
    Comments {
        #[command(subcommand)]
        action: CommentAction,
    },

    /// Create a ticket through prompts
    Interactive,
}

#[derive(Debug, clap::Subcommand)]
enum CommentAction {
    /// List comments on a ticket
    List {
        /// Ticket key
        key: String,
    },

    /// Add a comment to a ticket
    Add {
        /// Ticket key
        key: String,

        /// Comment text
        body: String,
    },
}

fn run(
    command: Commands,
    options: &GlobalOptions,
    formatter: &dyn OutputFormatter,
) -> anyhow::Result<()> {
    match command {
        Commands::Init { force } => commands::init::execute(options, force),
        Commands::Get { key } => commands::get::execute(options, key, formatter),
        Commands::Create {
            summary,
            description,
            issue_type,
            epic,
            project,
            placement,
        } => commands::create::execute(
            options,
            CreateArgs {
                summary,
                description,
                issue_type,
                epic,
                project,
                placement,
            },
            formatter,
        ),
        Commands::File {
            path,
            verbose,
            project,
            placement,
        } => commands::file::execute(options, path, verbose, project, placement, formatter),
        Commands::Epics { project } => commands::epics::execute(options, project, formatter),
        Commands::Comments { action } => match action {
            CommentAction::List { key } => commands::comments::list(options, key, formatter),
            CommentAction::Add { key, body } => commands::comments::add(options, key, body),
        },
        Commands::Interactive => commands::interactive::execute(options, formatter),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();
    let formatter = create_formatter(cli.json, use_color);

    if let Err(err) = jira_util_cli::logging::init_tracing(&cli.log_level) {
        eprintln!("{}", formatter.format_error(&err));
        return ExitCode::FAILURE;
    }

    let options = GlobalOptions {
        config: cli.config,
        env: cli.env,
        json: cli.json,
        use_color,
    };

    let Some(command) = cli.command else {
        eprintln!("{}", Cli::command().render_help());
        return ExitCode::FAILURE;
    };

    match run(command, &options, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            if options.json {
                println!("{}", formatter.format_error(&err));
            } else {
                eprintln!("{}", formatter.format_error(&err));
            }
            ExitCode::FAILURE
        }
    }
}
