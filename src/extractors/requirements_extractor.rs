//! Requirements table extraction

use crate::document::{text_of, DocumentPage};
use crate::record::Requirements;

use super::{find_section, HeadingLabel};

/// Two-cell rows of the first table after the "Requirements" heading.
///
/// The first row is the table header and is skipped. Repeated keys keep
/// their first position and take the last value.
pub fn extract_requirements(page: &DocumentPage) -> Requirements {
    let table = match find_section(page, HeadingLabel::Requirements)
        .and_then(|heading| page.next_of_kind(heading, "table"))
    {
        Some(table) => table,
        None => return Requirements::new(),
    };

    page.children_of_kind(table, "tr")
        .into_iter()
        .skip(1)
        .filter_map(|row| match page.children_of_kind(row, "td").as_slice() {
            [key, value] => Some((text_of(key).trim().to_string(), text_of(value).trim().to_string())),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirements(html: &str) -> Requirements {
        extract_requirements(&DocumentPage::parse_str(html).unwrap())
    }

    #[test]
    fn test_rows_after_header() {
        let html = r#"
        <h2>Requirements</h2>
        <table>
            <thead><tr><th>Requirement</th><th>Value</th></tr></thead>
            <tbody>
                <tr><td> Minimum supported client </td><td>Windows 2000 Professional [desktop apps only]</td></tr>
                <tr><td>DLL</td><td>Kernel32.dll</td></tr>
            </tbody>
        </table>
        "#;
        let result = requirements(html);
        let rows: Vec<(&str, &str)> = result.iter().collect();

        assert_eq!(
            rows,
            vec![
                ("Minimum supported client", "Windows 2000 Professional [desktop apps only]"),
                ("DLL", "Kernel32.dll"),
            ]
        );
    }

    #[test]
    fn test_first_row_skipped_even_with_data_cells() {
        let html = r#"
        <h2>Requirements</h2>
        <table>
            <tr><td>Header</td><td>winuser.h</td></tr>
            <tr><td>Library</td><td>User32.lib</td></tr>
        </table>
        "#;
        let result = requirements(html);
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("Header"), None);
        assert_eq!(result.get("Library"), Some("User32.lib"));
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let html = r#"
        <h2>Requirements</h2>
        <table>
            <tr><th>Requirement</th><th>Value</th></tr>
            <tr><td>Header</td><td>fileapi.h</td></tr>
            <tr><td>DLL</td><td>Kernel32.dll</td></tr>
            <tr><td>Header</td><td>windows.h</td></tr>
            <tr><td>Ignored</td><td>three</td><td>cells</td></tr>
        </table>
        "#;
        let result = requirements(html);
        let rows: Vec<(&str, &str)> = result.iter().collect();

        assert_eq!(rows, vec![("Header", "windows.h"), ("DLL", "Kernel32.dll")]);
    }

    #[test]
    fn test_table_before_heading_is_ignored() {
        let html = r#"
        <table><tr><th>a</th></tr><tr><td>Header</td><td>x.h</td></tr></table>
        <h2>Requirements</h2>
        <p>None.</p>
        "#;
        assert!(requirements(html).is_empty());
    }

    #[test]
    fn test_no_heading() {
        assert!(requirements("<table><tr><td>a</td><td>b</td></tr></table>").is_empty());
    }
}
