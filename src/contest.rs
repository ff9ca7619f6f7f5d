use crate::problem::{Contest, ContestType};

#[derive(Debug, PartialEq, Eq)]
pub enum ClassifyError {
    /// Not one of abc/arc/agc/ahc. Such entries are silently dropped.
    UnknownPrefix(String),
    /// Known prefix but the rest is not a u16.
    InvalidId(String),
}

impl std::fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifyError::UnknownPrefix(name) => {
                write!(f, "{name:?} does not start with a known contest prefix")
            }
            ClassifyError::InvalidId(name) => {
                write!(f, "{name:?} does not end in a valid contest id")
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Maps a folder entry name such as `ABC100` to its contest.
pub fn classify_contest(name: &str) -> Result<Contest, ClassifyError> {
    let lowered = name.trim().to_lowercase();
    let Some((prefix, suffix)) = lowered.split_at_checked(3) else {
        return Err(ClassifyError::UnknownPrefix(name.to_string()));
    };
    let Some(contest_type) = ContestType::from_prefix(prefix) else {
        return Err(ClassifyError::UnknownPrefix(name.to_string()));
    };

    // u16::from_str would also accept a leading '+'.
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClassifyError::InvalidId(name.to_string()));
    }
    let contest_id = suffix
        .parse::<u16>()
        .map_err(|_| ClassifyError::InvalidId(name.to_string()))?;

    Ok(Contest {
        contest_type,
        contest_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contest(contest_type: ContestType, contest_id: u16) -> Contest {
        Contest {
            contest_type,
            contest_id,
        }
    }

    #[test]
    fn known_prefixes_any_case() {
        assert_eq!(classify_contest("ABC100"), Ok(contest(ContestType::Abc, 100)));
        assert_eq!(classify_contest("arc058"), Ok(contest(ContestType::Arc, 58)));
        assert_eq!(classify_contest("AgC001"), Ok(contest(ContestType::Agc, 1)));
        assert_eq!(classify_contest("ahc65535"), Ok(contest(ContestType::Ahc, 65535)));
        assert_eq!(classify_contest("  abc7 "), Ok(contest(ContestType::Abc, 7)));
    }

    #[test]
    fn unknown_prefixes_are_dropped() {
        for name in ["zzz42", "ab", "", "ABD100", "xmascon2020", "é1"] {
            assert!(
                matches!(classify_contest(name), Err(ClassifyError::UnknownPrefix(_))),
                "{name}"
            );
        }
    }

    #[test]
    fn bad_ids_are_rejected() {
        for name in ["abc", "abc65536", "abc-1", "abc+1", "abc12a", "arc 12", "agc１"] {
            assert!(
                matches!(classify_contest(name), Err(ClassifyError::InvalidId(_))),
                "{name}"
            );
        }
    }
}
