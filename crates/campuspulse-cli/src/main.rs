// Rust guideline compliant 2026-10-16

//! CampusPulse CLI Application
//!
//! Command-line interface for submitting student well-being reports and
//! triaging them.

use campuspulse_app::{AppError, ErrorCode, ErrorEnvelope, ListOptions, RepoContext, SortField};
use campuspulse_cli::commands::{self, submit::SubmitArgs};
use campuspulse_cli::logging::{init_tracing, LogLevel};
use campuspulse_cli::{create_formatter, should_use_color, OutputFormatter};
use campuspulse_core::{Category, OutputFormat, PriorityLevel, Status, StressLevel};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "cpulse",
    version,
    about = "CampusPulse: student well-being reports with automatic triage",
    long_about = "CampusPulse collects student reports about academics, hostels, mental health and facilities, assigns each a priority tier (Normal, Urgent, Critical) at submission, and gives administrators a triage feed.",
    after_help = "Examples:\n  cpulse init\n  cpulse submit \"Broken AC in library common area.\" --category facilities --stress low --student ROLL042\n  cpulse classify \"There was a fire in the lab\" --category facilities --stress low\n  cpulse mine --student ROLL042\n  cpulse feed --priority critical --status pending\n  cpulse set-status iss-a1b 'in progress'\n  cpulse stats\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Display timestamps as absolute UTC times
    #[arg(long, global = true)]
    absolute_time: bool,

    /// Repository root (defaults to the current directory)
    #[arg(long, global = true)]
    repo: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new CampusPulse repository
    Init,

    /// Submit a new report
    Submit {
        /// What happened
        description: String,

        /// Category (academic, hostel, mental-health, facilities)
        #[arg(long)]
        category: Category,

        /// Stress level (low, medium, high)
        #[arg(long)]
        stress: StressLevel,

        /// Student ID of the reporter
        #[arg(long)]
        student: Option<String>,

        /// Hide the student ID from administrators
        #[arg(long)]
        anonymous: bool,

        /// Responsible department
        #[arg(long)]
        department: Option<String>,
    },

    /// Show the priority a report would get, without storing it
    Classify {
        /// Report text
        description: String,

        /// Category (academic, hostel, mental-health, facilities)
        #[arg(long)]
        category: Category,

        /// Stress level (low, medium, high)
        #[arg(long)]
        stress: StressLevel,
    },

    /// Show a student's recent reports
    Mine {
        /// Student ID
        #[arg(long)]
        student: Option<String>,

        /// Maximum number of reports to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the administrator feed
    Feed {
        /// Filter by status
        #[arg(long)]
        status: Option<Status>,

        /// Filter by priority
        #[arg(long)]
        priority: Option<PriorityLevel>,

        /// Filter by category
        #[arg(long)]
        category: Option<Category>,

        /// Filter by stress level
        #[arg(long)]
        stress: Option<StressLevel>,

        /// Filter by department
        #[arg(long)]
        department: Option<String>,

        /// Filter by student ID (anonymous reports never match)
        #[arg(long)]
        student: Option<String>,

        /// Filter by created_at >= timestamp
        #[arg(long)]
        created_after: Option<i64>,

        /// Filter by created_at <= timestamp
        #[arg(long)]
        created_before: Option<i64>,

        /// Sort by field (newest, oldest, priority, status, category, id)
        #[arg(long)]
        sort: Option<SortField>,

        /// Maximum number of issues to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show details of an issue
    Show {
        /// Issue ID (full or partial)
        id: String,
    },

    /// Change the status of an issue
    SetStatus {
        /// Issue ID (full or partial)
        id: String,

        /// New status (pending, in-progress, resolved)
        status: Status,
    },

    /// Show dashboard statistics
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match init_tracing(cli.log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Error: cannot open log file: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let format = resolve_format(&cli);
    let use_color = !cli.no_color && should_use_color();
    let formatter = create_formatter(format, use_color, cli.absolute_time);

    match run(cli, formatter.as_ref()) {
        Ok(Some(output)) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            let envelope = match err.downcast_ref::<AppError>() {
                Some(app_error) => ErrorEnvelope::from_error(app_error),
                None => ErrorEnvelope::new(ErrorCode::InvalidInput, err.to_string()),
            };
            let rendered = formatter.format_error(&envelope);
            if format == OutputFormat::Json {
                println!("{}", rendered);
            } else {
                eprintln!("{}", rendered);
            }
            ExitCode::FAILURE
        }
    }
}

/// Picks the output format: `--format`, then `--json`, then the repository
/// config, then the table default.
fn resolve_format(cli: &Cli) -> OutputFormat {
    if let Some(format) = cli.format {
        return format.into();
    }
    if cli.json {
        return OutputFormat::Json;
    }
    RepoContext::discover(cli.repo.as_deref())
        .and_then(|repo| repo.load_config())
        .map(|config| config.output_format)
        .unwrap_or_default()
}

fn run(cli: Cli, formatter: &dyn OutputFormatter) -> anyhow::Result<Option<String>> {
    let root = cli.repo.as_deref();

    let output = match cli.command {
        Some(Commands::Init) => commands::init::execute(root, formatter)?,
        Some(Commands::Classify {
            description,
            category,
            stress,
        }) => commands::classify::execute(&description, category, stress, formatter),
        Some(Commands::Submit {
            description,
            category,
            stress,
            student,
            anonymous,
            department,
        }) => {
            let repo = RepoContext::discover(root)?;
            let args = SubmitArgs {
                description,
                category,
                stress,
                student,
                anonymous,
                department,
            };
            commands::submit::execute(&repo, args, formatter)?
        }
        Some(Commands::Mine { student, limit }) => {
            let repo = RepoContext::discover(root)?;
            commands::mine::execute(&repo, student, limit, formatter)?
        }
        Some(Commands::Feed {
            status,
            priority,
            category,
            stress,
            department,
            student,
            created_after,
            created_before,
            sort,
            limit,
        }) => {
            let repo = RepoContext::discover(root)?;
            let options = ListOptions {
                status,
                priority,
                category,
                stress_level: stress,
                department,
                student_id: student,
                created_after,
                created_before,
                sort,
                limit,
            };
            commands::feed::execute(&repo, &options, formatter)?
        }
        Some(Commands::Show { id }) => {
            let repo = RepoContext::discover(root)?;
            commands::show::execute(&repo, &id, formatter)?
        }
        Some(Commands::SetStatus { id, status }) => {
            let repo = RepoContext::discover(root)?;
            commands::set_status::execute(&repo, &id, status, formatter)?
        }
        Some(Commands::Stats) => {
            let repo = RepoContext::discover(root)?;
            commands::stats::execute(&repo, formatter)?
        }
        None => {
            println!("Use --help for usage information");
            return Ok(None);
        }
    };

    Ok(Some(output))
}
