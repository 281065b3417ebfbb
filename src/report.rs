use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::edge_ast::{CategorySets, Edge, GraphIndex, NodeCategory};

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Box-drawn table of the edge sequence followed by the category members.
///
/// `first` differs from `#` only for repeated edges, which highlight paths
/// can never address.
pub fn render_table(index: &GraphIndex) -> String {
    let header = ["#", "from", "label", "to", "first"];
    let rows: Vec<[String; 5]> = index
        .edges
        .edges()
        .iter()
        .map(|e| {
            let first = index.edges.first(&e.key()).unwrap_or(e.index);
            [
                e.index.to_string(),
                e.from.clone(),
                e.label.clone(),
                e.to.clone(),
                first.to_string(),
            ]
        })
        .collect();

    let mut widths = header.map(display_width);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(display_width(cell));
        }
    }

    let mut out = String::new();
    out.push_str(&rule(&widths, '┌', '┬', '┐'));
    out.push_str(&row_line(&widths, &header.map(str::to_string)));
    out.push_str(&rule(&widths, '├', '┼', '┤'));
    for row in &rows {
        out.push_str(&row_line(&widths, row));
    }
    out.push_str(&rule(&widths, '└', '┴', '┘'));

    let name_width = NodeCategory::ALL
        .iter()
        .map(|c| c.class_name().len() + 1)
        .max()
        .unwrap_or(0);
    for category in NodeCategory::ALL {
        let name = format!("{}:", category.class_name());
        let members = index.categories.members(category).join(", ");
        let line = format!("{name:<name_width$} {members}");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn rule(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}\n", segments.join(&mid.to_string()))
}

fn row_line(widths: &[usize], cells: &[String]) -> String {
    let mut line = String::from("│");
    for (w, cell) in widths.iter().zip(cells) {
        let pad = w - display_width(cell);
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('│');
    }
    line.push('\n');
    line
}

#[derive(Serialize)]
struct JsonReport<'a> {
    edges: &'a [Edge],
    categories: &'a CategorySets,
}

pub fn render_json(index: &GraphIndex, pretty: bool) -> serde_json::Result<String> {
    let report = JsonReport {
        edges: index.edges.edges(),
        categories: &index.categories,
    };
    if pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::PrefixClassifier;
    use crate::edge_parser::index_graph;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_width_counts_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn table_for_scenario() {
        let index = index_graph(
            "S1-->|go|D1\nD1-->|yes|E1\nD1-->|no|S1\n",
            &PrefixClassifier::default(),
        );
        let expected = "\
┌───┬──────┬───────┬────┬───────┐
│ # │ from │ label │ to │ first │
├───┼──────┼───────┼────┼───────┤
│ 0 │ S1   │ go    │ D1 │ 0     │
│ 1 │ D1   │ yes   │ E1 │ 1     │
│ 2 │ D1   │ no    │ S1 │ 2     │
└───┴──────┴───────┴────┴───────┘
start:    S1
decision: D1
ending:   E1
";
        assert_eq!(render_table(&index), expected);
    }

    #[test]
    fn table_marks_duplicate_first_index() {
        let index = index_graph("A-->|x|B\nA-->|x|B\n", &PrefixClassifier::default());
        let table = render_table(&index);
        assert!(table.contains("│ 1 │ A    │ x     │ B  │ 0     │"));
        assert!(table.ends_with("start:\ndecision:\nending:\n"));
    }

    #[test]
    fn table_pads_wide_labels() {
        let index = index_graph("A-->|日本|B\n", &PrefixClassifier::default());
        let table = render_table(&index);
        assert!(table.contains("│ 0 │ A    │ 日本  │ B  │ 0     │"));
    }

    #[test]
    fn json_report() {
        let index = index_graph("S1-->|go|E1\n", &PrefixClassifier::default());
        let json = render_json(&index, false).unwrap();
        assert_eq!(
            json,
            r#"{"edges":[{"from":"S1","label":"go","to":"E1","index":0}],"categories":{"start":["S1"],"decision":[],"ending":["E1"]}}"#
        );
    }
}
