//! Text rendering of a placement and the run report.
//!
//! Pure formatting over read-only values: nothing here touches the engine.

use crate::ga::Candidate;
use std::fmt::Write as _;

/// Title art shown on the left of the report.
pub const BANNER: &str = r"
 _   _        ___
| \ | |      / _ \ _   _  ___  ___ _ __  ___
|  \| |_____| | | | | | |/ _ \/ _ \ '_ \/ __|
| |\  |_____| |_| | |_| |  __/  __/ | | \__ \
|_| \_|      \__\_\\__,_|\___|\___|_| |_|___/
";

const RESET: &str = "\x1b[0m";
const BG_WHITE: &str = "\x1b[47m";
const BG_BLACK: &str = "\x1b[40m";
const FG_RED: &str = "\x1b[31m";
const FG_LIGHT_RED: &str = "\x1b[91m";
const QUEEN: char = '♛';

/// Width of one report column.
pub const REPORT_COLUMN_WIDTH: usize = 65;

/// How board cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardStyle {
    /// ANSI background colours with a red queen glyph.
    #[default]
    Ansi,
    /// Plain ASCII: blank light cells, ` . ` dark cells, ` Q ` queens.
    Plain,
}

impl BoardStyle {
    fn cell(self, dark: bool, queen: bool) -> String {
        match self {
            BoardStyle::Plain => match (queen, dark) {
                (true, _) => " Q ".to_string(),
                (false, true) => " . ".to_string(),
                (false, false) => "   ".to_string(),
            },
            BoardStyle::Ansi => {
                let bg = if dark { BG_BLACK } else { BG_WHITE };
                if queen {
                    let fg = if dark { FG_LIGHT_RED } else { FG_RED };
                    format!("{bg} {fg}{QUEEN} {RESET}")
                } else {
                    format!("{bg}   {RESET}")
                }
            }
        }
    }
}

/// Renders `placement` as an N×N board.
///
/// Cell `(row, col)` is dark when `row + col` is odd; the queen of each row
/// sits in column `placement[row]`.
pub fn render_board(placement: &[usize], style: BoardStyle) -> String {
    let n = placement.len();
    let line = format!("{}+", "+---".repeat(n));

    let mut out = String::new();
    out.push_str(&line);
    out.push('\n');
    for (row, &queen_col) in placement.iter().enumerate() {
        let cells: Vec<String> = (0..n)
            .map(|col| style.cell((row + col) % 2 == 1, col == queen_col))
            .collect();
        let _ = writeln!(out, "|{}|", cells.join("|"));
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Textual summary of a run followed by the board of `best`.
pub fn summary(best: &Candidate, target_fitness: usize, generation: usize, style: BoardStyle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Best placement: {:?}", best.placement());
    let _ = writeln!(out, "Best fitness: {}/{}", best.fitness(), target_fitness);
    let _ = writeln!(out, "Best candidate generation: {}", best.generation_born());
    let _ = writeln!(out, "Generation: {generation}");
    out.push('\n');
    out.push_str(&render_board(best.placement(), style));
    out
}

/// Lays two text blocks next to each other.
///
/// Leading and trailing blank lines of `left` are dropped, the shorter block
/// is padded with blank lines, and each left line is padded to `width`
/// characters. The result is framed by two 100-dash rules.
pub fn side_by_side(left: &str, right: &str, width: usize) -> String {
    let left: Vec<&str> = left.trim_matches('\n').lines().collect();
    let right: Vec<&str> = right.lines().collect();
    let rows = left.len().max(right.len());
    let rule = "-".repeat(100);

    let mut out = String::new();
    let _ = writeln!(out, "{rule}\n");
    for i in 0..rows {
        let l = left.get(i).copied().unwrap_or("");
        let r = right.get(i).copied().unwrap_or("");
        let _ = writeln!(out, "{l:<width$}{r}");
    }
    let _ = writeln!(out, "{rule}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_four_queens_board() {
        let board = render_board(&[1, 3, 0, 2], BoardStyle::Plain);
        let expected = "\
+---+---+---+---+
|   | Q |   | . |
+---+---+---+---+
| . |   | . | Q |
+---+---+---+---+
| Q | . |   | . |
+---+---+---+---+
| . |   | Q |   |
+---+---+---+---+
";
        assert_eq!(board, expected);
    }

    #[test]
    fn test_board_dimensions() {
        let board = render_board(&[0, 2, 4, 1, 3], BoardStyle::Plain);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 2 * 5 + 1);
        assert!(lines.iter().all(|l| l.len() == 4 * 5 + 1));
        assert_eq!(board.matches('Q').count(), 5);
    }

    #[test]
    fn test_ansi_board_colors_alternate() {
        let board = render_board(&[0, 0], BoardStyle::Ansi);
        let rows: Vec<&str> = board.lines().filter(|l| l.starts_with('|')).collect();
        // row 0: queen on light, dark empty; row 1: queen on dark, light empty
        assert!(rows[0].starts_with(&format!("|{BG_WHITE} {FG_RED}{QUEEN}")));
        assert!(rows[0].contains(&format!("{BG_BLACK}   {RESET}")));
        assert!(rows[1].starts_with(&format!("|{BG_BLACK} {FG_LIGHT_RED}{QUEEN}")));
        assert_eq!(board.matches(QUEEN).count(), 2);
    }

    #[test]
    fn test_summary_lines() {
        let best = Candidate::new(vec![1, 3, 0, 2], 7);
        let text = summary(&best, 12, 9, BoardStyle::Plain);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Best placement: [1, 3, 0, 2]");
        assert_eq!(lines[1], "Best fitness: 12/12");
        assert_eq!(lines[2], "Best candidate generation: 7");
        assert_eq!(lines[3], "Generation: 9");
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with("+---"));
    }

    #[test]
    fn test_side_by_side_pads_shorter_block() {
        let text = side_by_side("\nab\ncd\n", "1\n2\n3", 4);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "-".repeat(100));
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "ab  1");
        assert_eq!(lines[3], "cd  2");
        assert_eq!(lines[4], "    3");
        assert_eq!(lines[5], "-".repeat(100));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_side_by_side_with_banner() {
        let text = side_by_side(BANNER, "Duration: 1ms", REPORT_COLUMN_WIDTH);
        assert!(text.lines().nth(2).unwrap().ends_with("Duration: 1ms"));
        assert_eq!(text.lines().count(), 2 + 5 + 1);
    }
}
