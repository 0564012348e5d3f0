use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use channel_tag::cli::{create_next_tag, plan_next_tag, NextTagArgs};
use channel_tag::config::{self, Config};
use channel_tag::domain::BuildRange;
use channel_tag::git::Git2Repository;
use channel_tag::{normalize, ui, Severity, TagIncrementer};

#[derive(Parser)]
#[command(
    name = "channel-tag",
    about = "Normalize and bump release tags of channel packages",
    version
)]
struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Show informational log output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the MAJOR.MINOR.PATCH form of a tag
    Normalize {
        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// Print the tag following TAG
    Bump {
        #[arg(value_name = "TAG")]
        tag: String,

        #[arg(short, long, help = "none, patch, minor, major or an explicit N.N.N")]
        severity: Option<Severity>,

        #[arg(long, help = "Fall back to 1.0.0 when TAG has no version number")]
        create_when_missing: bool,
    },

    /// Derive the next release tag of a repository
    Next {
        #[arg(short = 'C', long, default_value = ".", help = "Repository path")]
        repo: PathBuf,

        #[arg(short, long, help = "none, patch, minor, major or an explicit N.N.N")]
        severity: Option<Severity>,

        #[arg(long, help = "Fall back to 1.0.0 when the latest tag has no version number")]
        create_when_missing: bool,

        #[arg(long, help = "Create the tag on HEAD")]
        create: bool,

        #[arg(long, help = "Preview what would happen without making changes")]
        dry_run: bool,

        #[arg(short, long, help = "Skip confirmation prompts")]
        force: bool,
    },

    /// Check whether a build range only targets supported editor builds
    Compat {
        #[arg(value_name = "RANGE")]
        range: String,

        #[arg(long, help = "Minimum acceptable build (default from config)")]
        minimum: Option<u32>,
    },
}

fn main() {
    let cli = Cli::parse();

    let layer = fmt::layer().compact().with_writer(std::io::stderr);
    let default_level = if cli.verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry().with(layer).with(filter).init();

    if let Err(error) = run(cli) {
        ui::display_error(&format!("{:#}", error));
        exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Normalize { tag } => {
            ui::display_normalized(&tag, &normalize(&tag));
            Ok(())
        }
        Command::Bump {
            tag,
            severity,
            create_when_missing,
        } => {
            let severity = resolve_severity(severity, &config)?;
            let next = TagIncrementer::new()
                .create_when_missing(create_when_missing || config.tagging.create_when_missing)
                .increment(&tag, &severity);

            if let Some(warning) = &next.warning {
                ui::display_boundary_warning(warning);
            }
            ui::display_increment(&tag, &next);
            Ok(())
        }
        Command::Next {
            repo,
            severity,
            create_when_missing,
            create,
            dry_run,
            force,
        } => {
            let args = NextTagArgs {
                severity: resolve_severity(severity, &config)?,
                create_when_missing: create_when_missing || config.tagging.create_when_missing,
            };
            run_next(&repo, &args, create, dry_run, force)
        }
        Command::Compat { range, minimum } => {
            let minimum = minimum.unwrap_or(config.compatibility.minimum_build);
            let compatible = range.parse::<BuildRange>()?.is_compatible(minimum);

            ui::display_compatibility(&range, minimum, compatible);
            if !compatible {
                exit(1);
            }
            Ok(())
        }
    }
}

fn resolve_severity(flag: Option<Severity>, config: &Config) -> Result<Severity> {
    match flag {
        Some(severity) => Ok(severity),
        None => Ok(config.tagging.severity()?),
    }
}

fn run_next(
    path: &Path,
    args: &NextTagArgs,
    create: bool,
    dry_run: bool,
    force: bool,
) -> Result<()> {
    let repo = Git2Repository::open(path)?;
    let plan = plan_next_tag(&repo, args)?;

    for warning in &plan.warnings {
        ui::display_boundary_warning(warning);
    }

    ui::display_status(&format!("Latest release tag: {}", plan.current_tag));
    if let (Some(date), Some(stamp)) = (&plan.release_date, &plan.date_version) {
        ui::display_release_date(date, stamp);
    }
    ui::display_increment(&plan.current_tag, &plan.next);

    if !create {
        return Ok(());
    }

    if dry_run {
        ui::display_status(&format!("Dry run: would create tag {} on HEAD", plan.next.tag));
        return Ok(());
    }

    if !force
        && !plan.head_tags.is_empty()
        && !ui::confirm_action("HEAD is already tagged. Create anyway?")?
    {
        println!("Tag creation cancelled by user.");
        return Ok(());
    }

    if !force && !ui::confirm_tag_creation(&plan.next.tag)? {
        println!("Tag creation cancelled by user.");
        return Ok(());
    }

    let result = create_next_tag(&repo, &plan)?;
    ui::display_success(&format!("Created tag: {} (from {})", result.tag, result.previous));
    ui::display_manual_push_instruction(&result.tag, "origin");

    Ok(())
}
