use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use crate::error::LocateError;
use crate::process::raw_table::RawTable;

/// Finds the table that belongs to `section_title` / `subsection_title` and
/// returns its cells as strings.
///
/// - the first `h1` whose trimmed text matches `section_title`
/// - then the first following sibling `h2` matching `subsection_title`,
///   stopping at the next `h1`
/// - then the first following sibling `table`
///
/// Heading matches are case-insensitive.
pub fn locate(
    document: &Html,
    section_title: &str,
    subsection_title: &str,
) -> Result<RawTable, LocateError> {
    let h1 = find_h1(document, section_title)?;
    let h2 = find_h2(h1, section_title, subsection_title)?;
    let table = find_table(h2, subsection_title)?;
    parse_table(table, subsection_title)
}

fn find_h1<'a>(document: &'a Html, title: &str) -> Result<ElementRef<'a>, LocateError> {
    let selector = Selector::parse("h1").expect("h1 selector should parse");
    document
        .select(&selector)
        .find(|h| heading_matches(h, title))
        .ok_or_else(|| LocateError::SectionNotFound {
            title: title.to_string(),
        })
}

fn find_h2<'a>(
    h1: ElementRef<'a>,
    section: &str,
    title: &str,
) -> Result<ElementRef<'a>, LocateError> {
    for sibling in h1.next_siblings().filter_map(ElementRef::wrap) {
        match sibling.value().name() {
            // a new top-level section: the subsection we want is not in ours
            "h1" => break,
            "h2" if heading_matches(&sibling, title) => return Ok(sibling),
            _ => {}
        }
    }
    Err(LocateError::SubsectionNotFound {
        section: section.to_string(),
        title: title.to_string(),
    })
}

fn find_table<'a>(h2: ElementRef<'a>, title: &str) -> Result<ElementRef<'a>, LocateError> {
    h2.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "table")
        .ok_or_else(|| LocateError::TableNotFound {
            title: title.to_string(),
        })
}

/// First `tr` supplies the header (`th` cells); every later `tr` with at
/// least one `td` is a data row.
fn parse_table(table: ElementRef<'_>, title: &str) -> Result<RawTable, LocateError> {
    let tr = Selector::parse("tr").expect("tr selector should parse");
    let th = Selector::parse("th").expect("th selector should parse");
    let td = Selector::parse("td").expect("td selector should parse");

    let mut trs = table.select(&tr);
    let headers: Vec<String> = trs
        .next()
        .map(|row| row.select(&th).map(|c| cell_text(&c)).collect())
        .unwrap_or_default();

    if headers.is_empty() {
        return Err(LocateError::EmptyHeader {
            title: title.to_string(),
        });
    }

    let mut rows = Vec::new();
    for (idx, row) in trs.enumerate() {
        let cells: Vec<String> = row.select(&td).map(|c| cell_text(&c)).collect();
        if cells.is_empty() {
            trace!(row = idx + 1, "skipping row without data cells");
            continue;
        }
        rows.push(cells);
    }

    debug!(
        columns = headers.len(),
        rows = rows.len(),
        subsection = title,
        "located table"
    );
    Ok(RawTable { headers, rows })
}

fn heading_matches(el: &ElementRef<'_>, title: &str) -> bool {
    cell_text(el).to_lowercase() == title.trim().to_lowercase()
}

fn cell_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    const THREE_ROWS: &str = r#"
        <h1>Game X</h1>
        <p>intro text</p>
        <h2>Mode Y</h2>
        <table>
          <tr><th> A </th><th>B</th></tr>
          <tr><td>1</td><td> one </td></tr>
          <tr><td>2</td><td>two</td></tr>
          <tr><td>3</td><td>three</td></tr>
        </table>
    "#;

    #[test]
    fn returns_rows_in_document_order() {
        let table = locate(&doc(THREE_ROWS), "Game X", "Mode Y").unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["1".to_string(), "one".to_string()],
                vec!["2".to_string(), "two".to_string()],
                vec!["3".to_string(), "three".to_string()],
            ]
        );
    }

    #[test]
    fn titles_match_trimmed_and_case_insensitive() {
        let html = doc(
            r#"<h1>
                 CALL of duty: Game X
               </h1>
               <h2>  mode y </h2>
               <table><tr><th>A</th></tr><tr><td>1</td></tr></table>"#,
        );
        let table = locate(&html, "Call of Duty: Game X", "Mode Y").unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn first_matching_section_wins() {
        let html = doc(
            r#"<h1>Game X</h1><h2>Mode Y</h2>
               <table><tr><th>A</th></tr><tr><td>first</td></tr></table>
               <h1>Game X</h1><h2>Mode Y</h2>
               <table><tr><th>A</th></tr><tr><td>second</td></tr></table>"#,
        );
        let table = locate(&html, "Game X", "Mode Y").unwrap();
        assert_eq!(table.rows, vec![vec!["first".to_string()]]);
    }

    #[test]
    fn missing_section() {
        let err = locate(&doc(THREE_ROWS), "Game Z", "Mode Y").unwrap_err();
        assert_eq!(
            err,
            LocateError::SectionNotFound {
                title: "Game Z".into()
            }
        );
    }

    #[test]
    fn subsection_search_stops_at_next_section() {
        let html = doc(
            r#"<h1>Game X</h1><h2>Other</h2>
               <table><tr><th>A</th></tr><tr><td>x</td></tr></table>
               <h1>Game W</h1><h2>Mode Y</h2>
               <table><tr><th>A</th></tr><tr><td>w</td></tr></table>"#,
        );
        let err = locate(&html, "Game X", "Mode Y").unwrap_err();
        assert!(matches!(err, LocateError::SubsectionNotFound { .. }));

        // the same subsection is still reachable under its own section
        let table = locate(&html, "Game W", "Mode Y").unwrap();
        assert_eq!(table.rows, vec![vec!["w".to_string()]]);
    }

    #[test]
    fn missing_table() {
        let html = doc("<h1>Game X</h1><h2>Mode Y</h2><p>nothing here</p>");
        let err = locate(&html, "Game X", "Mode Y").unwrap_err();
        assert_eq!(
            err,
            LocateError::TableNotFound {
                title: "Mode Y".into()
            }
        );
    }

    #[test]
    fn header_without_th_cells_is_empty() {
        let html = doc(
            "<h1>Game X</h1><h2>Mode Y</h2><table><tr><td>1</td></tr><tr><td>2</td></tr></table>",
        );
        let err = locate(&html, "Game X", "Mode Y").unwrap_err();
        assert!(matches!(err, LocateError::EmptyHeader { .. }));
    }

    #[test]
    fn rows_without_cells_are_skipped() {
        let html = doc(
            r#"<h1>Game X</h1><h2>Mode Y</h2>
               <table>
                 <thead><tr><th>A</th><th>B</th></tr></thead>
                 <tbody>
                   <tr></tr>
                   <tr><td>1</td><td>2</td></tr>
                   <tr><th>stray</th></tr>
                   <tr><td>3</td></tr>
                 </tbody>
               </table>"#,
        );
        let table = locate(&html, "Game X", "Mode Y").unwrap();
        // short rows are kept here; the decoder reports them
        assert_eq!(
            table.rows,
            vec![
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string()],
            ]
        );
    }
}
