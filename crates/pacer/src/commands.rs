//! Subcommands of the `pacer` binary.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use pacer_serde::{
    from_xml_reader, to_json_string, to_json_string_pretty, to_xml_string, to_xml_string_pretty,
};
use pacer_tcx::{ActivityGoal, CourseList, TrainingCenterDatabase};
use tracing::{debug, info};

use crate::config::CliConfig;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Decode a document and report what it contains.
    Check {
        /// TCX document to read.
        file: PathBuf,
    },
    /// Decode a document and write it back out as normalized TCX or as JSON.
    Convert {
        /// TCX document to read.
        file: PathBuf,

        /// Output format.
        #[arg(long, value_enum)]
        format: Format,

        /// Output file; standard output when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the activity goals of a document.
    Goals {
        /// TCX document to read.
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Xml,
    Json,
}

pub fn run(config: &CliConfig) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.command {
        Command::Check { file } => {
            let summary = Summary::of(&load(file)?);
            writeln!(out, "{}: {}", file.display(), summary)?;
        }
        Command::Convert {
            file,
            format,
            output,
        } => {
            let rendered = render(&load(file)?, *format, config.pretty)?;
            match output {
                Some(path) => {
                    fs::write(path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(output = %path.display(), ?format, "Document converted");
                }
                None => out.write_all(rendered.as_bytes())?,
            }
        }
        Command::Goals { file } => {
            write_goals(&load(file)?, &mut out)?;
        }
    }

    Ok(())
}

/// Reads and decodes a TCX document from disk.
fn load(path: &Path) -> anyhow::Result<TrainingCenterDatabase> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let database: TrainingCenterDatabase = from_xml_reader(BufReader::new(file))
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    debug!(file = %path.display(), "Document loaded");
    Ok(database)
}

fn render(
    database: &TrainingCenterDatabase,
    format: Format,
    pretty: bool,
) -> anyhow::Result<String> {
    let rendered = match (format, pretty) {
        (Format::Xml, true) => to_xml_string_pretty(database)?,
        (Format::Xml, false) => to_xml_string(database)?,
        (Format::Json, true) => to_json_string_pretty(database)?,
        (Format::Json, false) => to_json_string(database)?,
    };
    Ok(rendered)
}

fn write_goals<W: Write>(database: &TrainingCenterDatabase, out: &mut W) -> io::Result<()> {
    let goals = database.goals();
    if goals.is_empty() {
        return writeln!(out, "no activity goals");
    }
    for goal in goals {
        writeln!(out, "{}", GoalLine(goal))?;
    }
    Ok(())
}

struct GoalLine<'a>(&'a ActivityGoal);

impl fmt::Display for GoalLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let goal = self.0;
        write!(
            f,
            "{} [{} {}] {}/{}",
            goal.name(),
            goal.sport(),
            goal.measure(),
            goal.current(),
            goal.target()
        )?;
        if let Some(period) = goal.period() {
            write!(
                f,
                " {} every {} days from {}",
                period.recurrence(),
                period.days_per_period(),
                period.start_date().format("%Y-%m-%d")
            )?;
        }
        if goal.is_met() {
            f.write_str(" (met)")?;
        }
        Ok(())
    }
}

/// Counts of what a document contains.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub activities: usize,
    pub multi_sport_sessions: usize,
    pub laps: usize,
    pub trackpoints: usize,
    pub courses: usize,
    pub goals: usize,
}

impl Summary {
    pub fn of(database: &TrainingCenterDatabase) -> Self {
        let mut summary = Summary {
            multi_sport_sessions: database
                .activities()
                .map_or(0, |list| list.multi_sport_sessions().len()),
            courses: database.courses().map_or(0, CourseList::len),
            goals: database.goals().len(),
            ..Default::default()
        };
        for activity in database.all_activities() {
            summary.activities += 1;
            summary.laps += activity.laps().len();
            summary.trackpoints += activity
                .laps()
                .iter()
                .map(|lap| lap.trackpoints().count())
                .sum::<usize>();
        }
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} activities ({} multi-sport sessions), {} laps, {} trackpoints, {} courses, {} goals",
            self.activities,
            self.multi_sport_sessions,
            self.laps,
            self.trackpoints,
            self.courses,
            self.goals
        )
    }
}
