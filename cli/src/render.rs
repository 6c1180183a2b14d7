//! ASCII board rendering.

use hex_core::{HexBoard, Marker};

const CONNECTOR: &str = r" \ /";
const LAST_CONNECTOR: &str = r" \";

fn lead_space(rows_in: usize) -> String {
    "  ".repeat(rows_in)
}

fn cell_char(marker: Marker) -> char {
    match marker {
        Marker::Empty => '.',
        Marker::X => 'X',
        Marker::O => 'O',
    }
}

/// Draw the board the way it is shown between moves: a column legend,
/// one cell line per row with `___` spacers, and ` \ /` connector
/// lines showing the diagonal adjacencies. Each row is indented two
/// spaces more than the previous to suggest the rhombus.
pub fn render(board: &HexBoard) -> String {
    let n = board.edge_len();
    let mut out = String::new();

    // column legend
    out.push_str("  1");
    for col in 2..=n {
        if col < 10 {
            out.push_str("   ");
        } else {
            out.push_str("  ");
        }
        out.push_str(&col.to_string());
    }
    out.push('\n');

    for row in 1..=n {
        if row < 10 {
            out.push_str(&lead_space(row - 1));
        } else {
            out.push_str(&lead_space(row - 2));
            out.push(' ');
        }
        out.push_str(&row.to_string());
        out.push(' ');

        for col in 1..=n {
            let idx = (row - 1) * n + (col - 1);
            out.push(cell_char(board.marker_at(idx)));
            if col < n {
                out.push_str("___");
            }
        }
        out.push('\n');

        if row != n {
            out.push_str(&lead_space(row));
            for _ in 0..(n - 1) {
                out.push_str(CONNECTOR);
            }
            out.push_str(LAST_CONNECTOR);
            out.push('\n');
        } else {
            out.push_str("\n\n");
        }
    }

    out
}
