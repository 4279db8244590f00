//! # Gradebook CLI
//!
//! Loads a classroom dataset and prints scoring reports as JSON.
//!
//! ```text
//! gradebook classroom.json section --section Period1 --group "Unit 1"
//! gradebook classroom.json student --section Period1 --user jdoe
//! gradebook classroom.json snapshot --section Period1 --at 2017-01-05T00:00:00Z
//! gradebook classroom.json updated --section Period1 --gradebook Main \
//!     --last-transfer 2017-01-05T00:00:00Z
//! ```

use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use scoring::dataset::{Dataset, parse_utc};
use scoring::traits::time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
use scoring::{ScoringConfig, ScoringEngine};

/// Score a classroom dataset and print reports as JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Path to the dataset JSON document
    pub dataset: PathBuf,
    /// Evaluate "now"-relative lateness at this RFC 3339 instant instead of the system clock
    #[arg(long, global = true)]
    pub now: Option<String>,
    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
    /// Also write the JSON output to this file
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// One assignment group for every student of a section
    Section {
        #[arg(long)]
        section: String,
        #[arg(long)]
        group: String,
    },
    /// Every assignment group of one student
    Student {
        /// Omit to report assignments of every section
        #[arg(long)]
        section: Option<String>,
        #[arg(long)]
        user: String,
        /// Include per-question breakdowns hidden from students
        #[arg(long)]
        admin: bool,
    },
    /// Section reports as of a past instant
    Snapshot {
        #[arg(long)]
        section: String,
        #[arg(long)]
        at: String,
    },
    /// Rows changed since the last gradebook transfer
    Updated {
        #[arg(long)]
        section: String,
        #[arg(long)]
        gradebook: String,
        #[arg(long)]
        last_transfer: String,
    },
}

/// Runs one command and returns its JSON output.
pub fn run(cli: &Cli, config: ScoringConfig) -> Result<String> {
    let dataset = Dataset::load(&cli.dataset)
        .with_context(|| format!("loading dataset {}", cli.dataset.display()))?;

    let time_provider: Arc<dyn TimeProvider> = match &cli.now {
        Some(now) => Arc::new(FixedTimeProvider::new(parse_utc(now).context("parsing --now")?)),
        None => Arc::new(SystemTimeProvider),
    };
    let engine = ScoringEngine::new(time_provider).with_config(config);

    let assignments = dataset.assignment_refs();
    let submissions = dataset.submission_refs();

    let output = match &cli.command {
        Command::Section { section, group } => {
            let section = dataset.section_by_name(section)?;
            let users = dataset.section_members(section);
            info!(section = %section.name, group = %group, "section report");

            let report = engine.section_report_generator().section_group_results(
                group,
                &assignments,
                section,
                &users,
                &submissions,
            );
            to_json(&report, cli.pretty)?
        }
        Command::Student {
            section,
            user,
            admin,
        } => {
            let section = section
                .as_deref()
                .map(|name| dataset.section_by_name(name))
                .transpose()?;
            let user = dataset.user_by_name(user)?;
            info!(user = %user.user_name, admin, "student report");

            let report = engine.student_report_generator().student_group_results(
                user,
                section,
                &assignments,
                &submissions,
                *admin,
            );
            to_json(&report, cli.pretty)?
        }
        Command::Snapshot { section, at } => {
            let section = dataset.section_by_name(section)?;
            let snapshot_date = parse_utc(at).context("parsing --at")?;
            let users = dataset.section_members(section);
            info!(section = %section.name, %snapshot_date, "snapshot report");

            let report = engine.snapshot_report_generator().group_results_snapshot(
                &assignments,
                &users,
                section,
                &submissions,
                snapshot_date,
            );
            to_json(&report, cli.pretty)?
        }
        Command::Updated {
            section,
            gradebook,
            last_transfer,
        } => {
            let section = dataset.section_by_name(section)?;
            let last_transfer_date = parse_utc(last_transfer).context("parsing --last-transfer")?;
            let users = dataset.section_members(section);

            let report = engine.updated_report_generator().updated_group_results(
                &assignments,
                &users,
                section,
                gradebook,
                last_transfer_date,
                &submissions,
            );
            to_json(&report, cli.pretty)?
        }
    };

    if let Some(path) = &cli.out {
        save_json(&output, path)?;
        info!(path = %path.display(), "saved report");
    }

    Ok(output)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn save_json(json: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    let mut file =
        File::create(path).with_context(|| format!("creating file {}", path.display()))?;
    std::io::Write::write_all(&mut file, json.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
