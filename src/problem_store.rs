use std::{collections::HashSet, fs::File, io, path::Path};

use anyhow::Context;
use log::info;

use crate::problem::{Contest, Problem};

pub const CSV_HEADER: [&str; 4] = ["contest_type", "contest_id", "problem_id", "link"];

/// Reads a previously written problems file. A missing file is a first
/// run and yields no problems.
pub fn load_problems(path: impl AsRef<Path>) -> anyhow::Result<Vec<Problem>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!("No existing problems at {}, starting fresh", path.display());
            return Ok(vec![]);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to open {}", path.display()));
        }
    };

    let mut reader = csv::Reader::from_reader(file);
    let mut problems = vec![];
    for record in reader.deserialize() {
        let problem: Problem =
            record.with_context(|| format!("malformed problem row in {}", path.display()))?;
        problems.push(problem);
    }
    Ok(problems)
}

/// Truncates `path` and writes the header followed by `problems` in order.
pub fn write_problems(path: impl AsRef<Path>, problems: &[Problem]) -> anyhow::Result<()> {
    let path = path.as_ref();
    // The header is written explicitly so an empty run still produces it.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(CSV_HEADER)?;
    for problem in problems {
        writer
            .serialize(problem)
            .with_context(|| format!("failed to write problem to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

/// Contests that already have at least one recorded problem.
#[derive(Debug, Default)]
pub struct KnownContests {
    contests: HashSet<Contest>,
}

impl KnownContests {
    pub fn from_problems(problems: &[Problem]) -> Self {
        Self {
            contests: problems.iter().map(Problem::contest).collect(),
        }
    }

    pub fn contains(&self, contest: &Contest) -> bool {
        self.contests.contains(contest)
    }

    pub fn len(&self) -> usize {
        self.contests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contests.is_empty()
    }
}
