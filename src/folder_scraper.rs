use scraper::{Html, Selector};

use crate::text_manipulators::first_link;

pub const FOLDER_ROW_SELECTOR: &str = "div.dig-Table-row";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: String,
    pub url: String,
}

/// Lists `(name, href)` for every folder row, in document order.
///
/// A name seen twice keeps its first position but takes the href of the
/// last occurrence. Rows without a usable anchor are skipped, so markup
/// changes degrade to an empty or partial list rather than an error.
pub fn collect_contest_links(html: &str) -> Vec<FolderEntry> {
    let document = Html::parse_document(html);
    let body_selector = Selector::parse("div.dig-Table-body").unwrap();
    let row_selector = Selector::parse(FOLDER_ROW_SELECTOR).unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let rows: Vec<_> = match document.select(&body_selector).next() {
        Some(body) => body.select(&row_selector).collect(),
        None => document.select(&row_selector).collect(),
    };

    let mut entries: Vec<FolderEntry> = Vec::with_capacity(rows.len());
    for row in rows {
        let Some((name, url)) = first_link(row, &anchor_selector) else {
            continue;
        };
        match entries.iter_mut().find(|entry| entry.name == name) {
            Some(existing) => existing.url = url,
            None => entries.push(FolderEntry { name, url }),
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder_page(rows: &[(&str, &str)]) -> String {
        let rows: String = rows
            .iter()
            .map(|(name, href)| {
                format!(
                    r#"<div class="dig-Table-row"><div class="cell"><a href="{href}"><span>{name}</span></a></div></div>"#
                )
            })
            .collect();
        format!(
            r#"<html><body><div class="dig-Table"><div class="dig-Table-header"><div class="dig-Table-row"><a href="/sort">Name</a></div></div><div class="dig-Table-body">{rows}</div></div></body></html>"#
        )
    }

    #[test]
    fn collects_rows_in_document_order() {
        let html = folder_page(&[("ABC100", "/contest/abc100"), ("ARC058", "/contest/arc058")]);
        assert_eq!(
            collect_contest_links(&html),
            vec![
                FolderEntry {
                    name: "ABC100".to_string(),
                    url: "/contest/abc100".to_string()
                },
                FolderEntry {
                    name: "ARC058".to_string(),
                    url: "/contest/arc058".to_string()
                },
            ]
        );
    }

    #[test]
    fn duplicate_names_collapse_to_last_href() {
        let html = folder_page(&[
            ("ABC100", "/old"),
            ("AGC001", "/agc001"),
            ("ABC100", "/new"),
            ("AGC001", "/agc001"),
        ]);
        let entries = collect_contest_links(&html);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "ABC100");
        assert_eq!(entries[0].url, "/new");
        assert_eq!(entries[1].name, "AGC001");
    }

    #[test]
    fn rows_without_links_are_ignored() {
        let html = r#"<div class="dig-Table-body">
            <div class="dig-Table-row">empty</div>
            <div class="dig-Table-row"><a>no href</a></div>
            <div class="dig-Table-row"><a href="/ahc001">AHC001</a></div>
        </div>"#;
        let entries = collect_contest_links(html);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "AHC001");
    }

    #[test]
    fn unrelated_markup_gives_nothing() {
        assert!(collect_contest_links("<html><body><p>moved</p></body></html>").is_empty());
    }
}
