//! Console and JSON output for an assembled record
//!
//! The summary table truncates long fields; every other section is printed
//! in full.

use serde::Serialize;

use crate::record::{DocumentationRecord, Parameter};

pub const DESCRIPTION_LIMIT: usize = 150;
pub const SYNTAX_LIMIT: usize = 80;
pub const RETURN_VALUE_LIMIT: usize = 100;
pub const ELLIPSIS: &str = "...";

const BANNER: &str = r"
    _    ____ ___   ____              ___           _       _     _
   / \  |  _ \_ _| |  _ \  ___   ___ |_ _|_ __  ___(_) __ _| |__ | |_
  / _ \ | |_) | |  | | | |/ _ \ / __| | || '_ \/ __| |/ _` | '_ \| __|
 / ___ \|  __/| |  | |_| | (_) | (__  | || | | \__ \ | (_| | | | | |_
/_/   \_\_|  |___| |____/ \___/ \___||___|_| |_|___/_|\__, |_| |_|\__|
                                                      |___/
";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Emit ANSI styling
    pub color: bool,
}

/// Cut `text` to `limit` characters and append [`ELLIPSIS`] when it is longer.
///
/// Counts `char`s, not bytes. The ellipsis is not part of the limit.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let prefix: String = text.chars().take(limit).collect();
        format!("{prefix}{ELLIPSIS}")
    } else {
        text.to_string()
    }
}

pub fn banner(options: &RenderOptions) -> String {
    style(BANNER, "1;36", options)
}

/// Human-readable report for `symbol`
pub fn render_text(symbol: &str, record: &DocumentationRecord, url: &str, options: &RenderOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!("\nDetails for '{symbol}':\n"));

    let summary = vec![
        vec!["Function".to_string(), symbol.to_string()],
        vec!["Description".to_string(), truncate(&record.description, DESCRIPTION_LIMIT)],
        vec!["Syntax".to_string(), truncate(&record.syntax, SYNTAX_LIMIT)],
        vec!["Return Value".to_string(), truncate(&record.return_value, RETURN_VALUE_LIMIT)],
    ];
    out.push_str(&draw_table(&FANCY_GRID, &["Attribute", "Details"], &summary));

    out.push_str(&format!("\nFull Documentation: {}\n", style(url, "4;34", options)));

    if !record.parameters.is_empty() {
        let rows: Vec<Vec<String>> = record
            .parameters
            .iter()
            .map(|Parameter { name, description }| vec![name.clone(), description.clone()])
            .collect();
        out.push_str("\nParameters:\n");
        out.push_str(&draw_table(&ASCII_GRID, &["Parameter", "Description"], &rows));
    }

    out.push_str(&format!("\nReturn Value:\n{}\n", record.return_value));
    out.push_str(&format!("\nRemarks:\n{}\n", record.remarks));

    if !record.requirements.is_empty() {
        out.push_str("\nRequirements:\n");
        for (key, value) in record.requirements.iter() {
            out.push_str(&format!("- {key}: {value}\n"));
        }
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    symbol: &'a str,
    url: &'a str,
    record: &'a DocumentationRecord,
}

/// Untruncated record as pretty-printed JSON
pub fn render_json(symbol: &str, record: &DocumentationRecord, url: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport { symbol, url, record })
}

fn style(text: &str, sgr: &str, options: &RenderOptions) -> String {
    if options.color {
        format!("\x1b[{sgr}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Characters for one horizontal rule: left edge, fill, column joint, right edge
struct Rule(char, char, char, char);

struct GridStyle {
    top: Rule,
    below_header: Rule,
    between_rows: Rule,
    bottom: Rule,
    vertical: char,
}

const FANCY_GRID: GridStyle = GridStyle {
    top: Rule('╒', '═', '╤', '╕'),
    below_header: Rule('╞', '═', '╪', '╡'),
    between_rows: Rule('├', '─', '┼', '┤'),
    bottom: Rule('╘', '═', '╧', '╛'),
    vertical: '│',
};

const ASCII_GRID: GridStyle = GridStyle {
    top: Rule('+', '-', '+', '+'),
    below_header: Rule('+', '=', '+', '+'),
    between_rows: Rule('+', '-', '+', '+'),
    bottom: Rule('+', '-', '+', '+'),
    vertical: '|',
};

/// Draw a bordered table. Cells may span several lines.
fn draw_table(grid: &GridStyle, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            let cell_width = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            widths[i] = widths[i].max(cell_width);
        }
    }

    let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut out = String::new();
    out.push_str(&draw_rule(&grid.top, &widths));
    out.push_str(&draw_row(grid.vertical, &header_row, &widths));
    out.push_str(&draw_rule(&grid.below_header, &widths));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str(&draw_rule(&grid.between_rows, &widths));
        }
        out.push_str(&draw_row(grid.vertical, row, &widths));
    }
    out.push_str(&draw_rule(&grid.bottom, &widths));
    out
}

fn draw_rule(rule: &Rule, widths: &[usize]) -> String {
    let Rule(left, fill, joint, right) = *rule;
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("{left}{}{right}\n", segments.join(joint.to_string().as_str()))
}

fn draw_row(vertical: char, cells: &[String], widths: &[usize]) -> String {
    let cell_lines: Vec<Vec<&str>> = widths
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let lines: Vec<&str> = cells.get(i).map(|c| c.lines().collect()).unwrap_or_default();
            if lines.is_empty() {
                vec![""]
            } else {
                lines
            }
        })
        .collect();
    let height = cell_lines.iter().map(Vec::len).max().unwrap_or(1);

    let mut out = String::new();
    for line in 0..height {
        out.push(vertical);
        for (column, width) in widths.iter().enumerate() {
            let text = cell_lines[column].get(line).copied().unwrap_or("");
            let pad = width - text.chars().count();
            out.push_str(&format!(" {text}{} {vertical}", " ".repeat(pad)));
        }
        out.push('\n');
    }
    out
}
