use scraper::{Html, Selector};

use crate::{
    problem::{Contest, Problem},
    scrape_error::ScrapeError,
    text_manipulators::first_link,
};

pub const PROBLEM_ROW_SELECTOR: &str = "div.dig-Table-row";

/// Parses a contest folder page into one problem per table row.
///
/// The first matching row is always the column header and is skipped.
/// Every other row must carry a link; one that doesn't fails the whole
/// contest so that a half-read contest never reaches the CSV.
pub fn extract_problems(html: &str, contest: Contest) -> Result<Vec<Problem>, ScrapeError> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse(PROBLEM_ROW_SELECTOR).unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let mut problems = vec![];
    for (index, row) in document.select(&row_selector).skip(1).enumerate() {
        let (problem_id, link) =
            first_link(row, &anchor_selector).ok_or(ScrapeError::MissingAnchor { row: index + 1 })?;
        problems.push(Problem::new(contest, problem_id, link));
    }
    Ok(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::ContestType;

    const ABC100: Contest = Contest {
        contest_type: ContestType::Abc,
        contest_id: 100,
    };

    #[test]
    fn header_row_is_skipped() {
        let html = r#"<div class="dig-Table-row"><a href="/sort">Name</a></div>
            <div class="dig-Table-row"><a href="/abc100/a">A</a></div>
            <div class="dig-Table-row"><a href="/abc100/b">B</a></div>"#;
        let problems = extract_problems(html, ABC100).unwrap();
        assert_eq!(
            problems,
            vec![
                Problem::new(ABC100, "A".to_string(), "/abc100/a".to_string()),
                Problem::new(ABC100, "B".to_string(), "/abc100/b".to_string()),
            ]
        );
    }

    #[test]
    fn header_only_page_is_empty() {
        let html = r#"<div class="dig-Table-row"><span>Name</span></div>"#;
        assert_eq!(extract_problems(html, ABC100), Ok(vec![]));
        assert_eq!(extract_problems("", ABC100), Ok(vec![]));
    }

    #[test]
    fn row_without_anchor_fails_contest() {
        let html = r#"<div class="dig-Table-row">Name</div>
            <div class="dig-Table-row"><a href="/abc100/a">A</a></div>
            <div class="dig-Table-row"><span>B</span></div>"#;
        assert_eq!(
            extract_problems(html, ABC100),
            Err(ScrapeError::MissingAnchor { row: 2 })
        );
    }
}
