use serde::Serialize;

use crate::cli::OutputFormat;

pub mod table;

/// Rows shown for the table format, in column order.
#[derive(Debug, Clone)]
pub struct TableView {
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize>(
    value: &T,
    table: &TableView,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(table)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize>(
    value: &T,
    table: &TableView,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render(value, table, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table(view: &TableView) -> String {
    if view.rows.is_empty() {
        return String::from("(no rows)");
    }
    let options = table::TableOptions {
        max_width: terminal_width(),
    };
    table::render_table(view.headers, &view.rows, options)
}

fn terminal_width() -> Option<usize> {
    std::env::var("COLUMNS").ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{TableView, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        name: &'static str,
        methods: usize,
    }

    fn view() -> TableView {
        TableView {
            headers: &["interface", "methods"],
            rows: vec![vec!["Cache".to_string(), "3".to_string()]],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            name: "Cache",
            methods: 3,
        };
        let out = render(&value, &view(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["name"], "Cache");
        assert_eq!(parsed["methods"], 3);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            name: "Cache",
            methods: 3,
        };
        let out = render(&value, &view(), OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["name"], "Cache");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_uses_view_columns() {
        let value = Example {
            name: "ignored",
            methods: 0,
        };
        let out = render(&value, &view(), OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("interface"));
        assert!(lines[0].contains("methods"));
        assert!(lines[2].starts_with("Cache"));
        assert!(!out.contains("ignored"));
    }

    #[test]
    fn empty_table_has_placeholder() {
        let empty = TableView {
            headers: &["interface"],
            rows: Vec::new(),
        };
        let out = render(&(), &empty, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
