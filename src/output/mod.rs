//! Writing search results to the terminal.

use std::io::{self, Write};

use colored::Colorize;
use treeseek::search::MatchPath;
use treeseek::tree::PATH_SEPARATOR;

use crate::application::data::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct MatchPrinter {
    format: OutputFormat,
    colorize: bool,
}

impl MatchPrinter {
    pub fn new(format: OutputFormat, colorize: bool) -> Self {
        Self { format, colorize }
    }

    pub fn write(&self, out: &mut impl Write, matches: &[MatchPath]) -> io::Result<()> {
        match self.format {
            OutputFormat::Lines => {
                for path in matches {
                    writeln!(out, "{}", self.render_line(path))?;
                }
            }
            OutputFormat::List => {
                let items = matches
                    .iter()
                    .map(|path| quote(&path.to_string()))
                    .collect::<Vec<_>>();
                writeln!(out, "[{}]", items.join(", "))?;
            }
        }
        out.flush()
    }

    fn render_line(&self, path: &MatchPath) -> String {
        if !self.colorize {
            return path.to_string();
        }

        let directories = path
            .directories()
            .iter()
            .map(|directory| format!("{directory}{PATH_SEPARATOR}").dimmed().to_string())
            .collect::<String>();
        format!("{directories}{}", path.file_name().green().bold())
    }
}

/// Quotes a path the way Python's `repr` quotes a string: single quotes,
/// unless the text holds a single quote and no double quote.
fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(delimiter);
    for character in text.chars() {
        match character {
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '\\' => quoted.push_str("\\\\"),
            _ if character == delimiter => {
                quoted.push('\\');
                quoted.push(character);
            }
            _ => quoted.push(character),
        }
    }
    quoted.push(delimiter);
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use treeseek::search::search_matches;
    use treeseek::tree::TreeNode;

    fn sample_matches() -> Vec<MatchPath> {
        let tree = TreeNode::new()
            .with_child("x", TreeNode::new().with_file("a.txt"))
            .with_child("y", TreeNode::new().with_file("a.txt"));
        search_matches(&tree, "a.txt")
    }

    fn render(printer: MatchPrinter, matches: &[MatchPath]) -> String {
        let mut buffer = Vec::new();
        printer.write(&mut buffer, matches).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn lines_format_prints_one_path_per_line() {
        let printer = MatchPrinter::new(OutputFormat::Lines, false);
        assert_eq!(render(printer, &sample_matches()), "x/a.txt\ny/a.txt\n");
    }

    #[test]
    fn lines_format_prints_nothing_without_matches() {
        let printer = MatchPrinter::new(OutputFormat::Lines, false);
        assert_eq!(render(printer, &[]), "");
    }

    #[test]
    fn list_format_quotes_paths() {
        let printer = MatchPrinter::new(OutputFormat::List, false);
        assert_eq!(
            render(printer, &sample_matches()),
            "['x/a.txt', 'y/a.txt']\n"
        );
    }

    #[test]
    fn list_format_switches_quotes_around_apostrophes() {
        let tree = TreeNode::new().with_child("it's", TreeNode::new().with_file("a.txt"));
        let printer = MatchPrinter::new(OutputFormat::List, false);
        assert_eq!(
            render(printer, &search_matches(&tree, "a.txt")),
            "[\"it's/a.txt\"]\n"
        );
    }

    #[test]
    fn quote_escapes_like_python_repr() {
        assert_eq!(quote("plain"), "'plain'");
        assert_eq!(quote(r"back\slash"), r"'back\\slash'");
        assert_eq!(quote(r#"both'and""#), r#"'both\'and"'"#);
        assert_eq!(quote("line\nbreak"), r"'line\nbreak'");
    }

    #[test]
    fn list_format_prints_empty_list() {
        let printer = MatchPrinter::new(OutputFormat::List, true);
        assert_eq!(render(printer, &[]), "[]\n");
    }

    #[test]
    fn colored_lines_keep_path_text() {
        colored::control::set_override(true);
        let printer = MatchPrinter::new(OutputFormat::Lines, true);
        let output = render(printer, &sample_matches());

        assert!(output.contains("x/"));
        assert!(output.contains("a.txt"));
        assert!(output.contains('\u{1b}'));
    }
}
