use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestType {
    Abc,
    Arc,
    Agc,
    Ahc,
}

impl ContestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContestType::Abc => "abc",
            ContestType::Arc => "arc",
            ContestType::Agc => "agc",
            ContestType::Ahc => "ahc",
        }
    }

    /// Matches an already lower-cased three letter prefix.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "abc" => Some(ContestType::Abc),
            "arc" => Some(ContestType::Arc),
            "agc" => Some(ContestType::Agc),
            "ahc" => Some(ContestType::Ahc),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified contest. Also the dedup key: two problems belong to the
/// same contest when both fields match, whatever their problem ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Contest {
    pub contest_type: ContestType,
    pub contest_id: u16,
}

impl std::fmt::Display for Contest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.contest_type, self.contest_id)
    }
}

/// One row of `problems.csv`. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub contest_type: ContestType,
    pub contest_id: u16,
    pub problem_id: String,
    pub link: String,
}

impl Problem {
    pub fn new(contest: Contest, problem_id: String, link: String) -> Self {
        Self {
            contest_type: contest.contest_type,
            contest_id: contest.contest_id,
            problem_id,
            link,
        }
    }

    pub fn contest(&self) -> Contest {
        Contest {
            contest_type: self.contest_type,
            contest_id: self.contest_id,
        }
    }
}

/// Problem letters the desktop client can load from `problems.csv`. It
/// rejects the whole file on anything else, compared case-insensitively.
pub const CLIENT_PROBLEM_IDS: [&str; 9] = ["A", "B", "C", "D", "E", "F", "G", "H", "Ex"];

pub fn is_client_problem_id(problem_id: &str) -> bool {
    CLIENT_PROBLEM_IDS
        .iter()
        .any(|id| id.eq_ignore_ascii_case(problem_id))
}
