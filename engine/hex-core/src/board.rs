//! The Hex board: geometry, borders, and play bookkeeping.
//!
//! The board composes a [`Graph`] rather than extending it. Rows and
//! columns are 1-based everywhere a human sees them; linear cell
//! indices are 0-based and run left-to-right, top-to-bottom.

use std::fmt;
use std::io::{BufRead, Write};

use crate::graph::{Graph, GraphFileError};

/// The owner of a cell, or `Empty`.
///
/// The numeric encoding is load-bearing: the board-graph file format
/// serializes markers as 0/1/2.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Marker {
    Empty = 0,
    /// Connects the top row to the bottom row.
    X = 1,
    /// Connects the left column to the right column.
    O = 2,
}

impl Marker {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Marker> {
        match value {
            0 => Some(Marker::Empty),
            1 => Some(Marker::X),
            2 => Some(Marker::O),
            _ => None,
        }
    }

    /// The other player.
    ///
    /// # Panics
    ///
    /// Panics on `Empty`; only player markers have an opponent.
    pub fn opponent(self) -> Marker {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
            Marker::Empty => panic!("Marker::Empty has no opponent"),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Marker::Empty
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Marker::Empty => '.',
            Marker::X => 'X',
            Marker::O => 'O',
        };
        write!(f, "{}", c)
    }
}

/// A 1-based board coordinate as typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCol {
    pub row: usize,
    pub col: usize,
}

impl RowCol {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for RowCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} col {}", self.row, self.col)
    }
}

/// One played move, kept for display and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub side: Marker,
    pub row: usize,
    pub col: usize,
}

/// Errors constructing or mutating a board.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board edge length must be positive and odd, got {0}")]
    InvalidEdgeLen(usize),

    #[error("{rc} is outside the board (1..={edge_len})")]
    OutOfRange { rc: RowCol, edge_len: usize },

    #[error("{rc} is already occupied")]
    Occupied { rc: RowCol },

    #[error("cannot place Marker::Empty as a move")]
    EmptySide,

    #[error("board file holds {nodes} nodes, which is not an odd-edge square")]
    NotAHexBoard { nodes: usize },

    #[error(transparent)]
    GraphFile(#[from] GraphFileError),
}

/// The N×N rhombic Hex board.
///
/// Holds the adjacency graph (which carries the marker table), the
/// four border sets, the incrementally maintained empty-cell list,
/// and the move history. All of it is allocated at construction;
/// play only mutates markers, the empty list, and the history.
#[derive(Debug, Clone)]
pub struct HexBoard {
    edge_len: usize,
    cell_count: usize,
    graph: Graph,
    // index 0 = X (top/bottom rows), index 1 = O (left/right columns)
    start_borders: [Vec<usize>; 2],
    finish_borders: [Vec<usize>; 2],
    empty_cells: Vec<usize>,
    move_history: Vec<Move>,
    move_count: usize,
}

fn side_index(side: Marker) -> usize {
    match side {
        Marker::X => 0,
        Marker::O => 1,
        Marker::Empty => panic!("Marker::Empty owns no border"),
    }
}

impl HexBoard {
    /// Build a board with the given edge length.
    ///
    /// The game requires an odd board to rule out a draw by symmetry,
    /// so even or zero lengths are configuration errors.
    pub fn new(edge_len: usize) -> Result<Self, BoardError> {
        if edge_len == 0 || edge_len % 2 == 0 {
            return Err(BoardError::InvalidEdgeLen(edge_len));
        }

        let cell_count = edge_len * edge_len;
        let mut board = Self {
            edge_len,
            cell_count,
            graph: Graph::with_nodes(cell_count),
            start_borders: [Vec::new(), Vec::new()],
            finish_borders: [Vec::new(), Vec::new()],
            empty_cells: (0..cell_count).collect(),
            move_history: Vec::with_capacity(cell_count),
            move_count: 0,
        };
        board.define_borders();
        board.add_adjacency();
        Ok(board)
    }

    /// Rebuild a board around a graph loaded from the board-graph
    /// format. The edge length is inferred from the node count, the
    /// empty list from the marker table. Move history is not part of
    /// the format and starts empty.
    pub fn from_graph(graph: Graph) -> Result<Self, BoardError> {
        let nodes = graph.node_count();
        let edge_len = (1..).find(|n| n * n >= nodes).unwrap_or(0);
        if edge_len == 0 || edge_len * edge_len != nodes || edge_len % 2 == 0 {
            return Err(BoardError::NotAHexBoard { nodes });
        }

        let empty_cells: Vec<usize> =
            (0..nodes).filter(|&i| graph.marker(i).is_empty()).collect();
        let move_count = nodes - empty_cells.len();

        let mut board = Self {
            edge_len,
            cell_count: nodes,
            graph,
            start_borders: [Vec::new(), Vec::new()],
            finish_borders: [Vec::new(), Vec::new()],
            empty_cells,
            move_history: Vec::with_capacity(nodes),
            move_count,
        };
        board.define_borders();
        Ok(board)
    }

    /// Write the adjacency and markers in the board-graph format.
    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        self.graph.write_to(w)
    }

    /// Read a board back from the board-graph format.
    pub fn read_from<R: BufRead>(r: R) -> Result<Self, BoardError> {
        Self::from_graph(Graph::read_from(r)?)
    }

    pub fn edge_len(&self) -> usize {
        self.edge_len
    }

    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Convert a 1-based coordinate to a linear cell index.
    pub fn index_of(&self, rc: RowCol) -> Result<usize, BoardError> {
        if rc.row == 0 || rc.col == 0 || rc.row > self.edge_len || rc.col > self.edge_len {
            return Err(BoardError::OutOfRange {
                rc,
                edge_len: self.edge_len,
            });
        }
        Ok((rc.row - 1) * self.edge_len + (rc.col - 1))
    }

    /// Convert a linear cell index back to a 1-based coordinate.
    pub fn row_col_of(&self, index: usize) -> RowCol {
        debug_assert!(index < self.cell_count);
        RowCol::new(index / self.edge_len + 1, index % self.edge_len + 1)
    }

    pub fn marker_at(&self, index: usize) -> Marker {
        self.graph.marker(index)
    }

    pub fn marker_at_rc(&self, rc: RowCol) -> Result<Marker, BoardError> {
        Ok(self.graph.marker(self.index_of(rc)?))
    }

    /// Raw marker write used by the move selector's simulations. Does
    /// not touch the empty list; real moves go through [`place`].
    ///
    /// [`place`]: HexBoard::place
    pub fn set_marker_at(&mut self, index: usize, marker: Marker) {
        self.graph.set_marker(index, marker);
    }

    /// Currently empty cells, in a stable order: ascending at game
    /// start, never reordered by play.
    pub fn empty_cells(&self) -> &[usize] {
        &self.empty_cells
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells.is_empty()
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// True when `rc` is on the board and the cell is empty.
    pub fn is_valid_move(&self, rc: RowCol) -> bool {
        match self.index_of(rc) {
            Ok(idx) => self.marker_at(idx).is_empty(),
            Err(_) => false,
        }
    }

    /// Commit a real move: set the marker, drop the cell from the
    /// empty list, record it in the history, bump the ply counter.
    pub fn place(&mut self, side: Marker, rc: RowCol) -> Result<(), BoardError> {
        if side.is_empty() {
            return Err(BoardError::EmptySide);
        }
        let idx = self.index_of(rc)?;
        if !self.marker_at(idx).is_empty() {
            return Err(BoardError::Occupied { rc });
        }

        self.graph.set_marker(idx, side);
        let pos = self
            .empty_cells
            .iter()
            .position(|&c| c == idx)
            .expect("empty marker implies membership in the empty list");
        self.empty_cells.remove(pos);
        self.move_history.push(Move {
            side,
            row: rc.row,
            col: rc.col,
        });
        self.move_count += 1;
        Ok(())
    }

    /// Reset every cell on the empty list to `Empty`.
    ///
    /// The move selector uses the real marker table as simulation
    /// scratch; this is the bulk restore it runs before returning.
    pub fn reset_empty_cells(&mut self) {
        for i in 0..self.empty_cells.len() {
            let idx = self.empty_cells[i];
            self.graph.set_marker(idx, Marker::Empty);
        }
    }

    /// Cells of `side`'s start border (top row for X, left column
    /// for O).
    pub fn start_border(&self, side: Marker) -> &[usize] {
        &self.start_borders[side_index(side)]
    }

    /// Cells of `side`'s finish border (bottom row for X, right
    /// column for O).
    pub fn finish_border(&self, side: Marker) -> &[usize] {
        &self.finish_borders[side_index(side)]
    }

    /// Constant-time membership test for `side`'s start border.
    /// Equivalent to scanning [`start_border`], which the detector
    /// does once per frontier step.
    ///
    /// [`start_border`]: HexBoard::start_border
    pub fn is_on_start_border(&self, index: usize, side: Marker) -> bool {
        match side {
            Marker::X => index < self.edge_len,
            Marker::O => index % self.edge_len == 0,
            Marker::Empty => panic!("Marker::Empty owns no border"),
        }
    }

    fn define_borders(&mut self) {
        let n = self.edge_len;
        // X runs top to bottom
        self.start_borders[0] = (0..n).collect();
        self.finish_borders[0] = ((n * (n - 1))..(n * n)).collect();
        // O runs left to right
        self.start_borders[1] = (0..n).map(|r| r * n).collect();
        self.finish_borders[1] = (0..n).map(|r| r * n + n - 1).collect();
    }

    // Index arithmetic helper for adjacency construction; rows and
    // cols here are 1-based to match the layout rule.
    fn li(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.edge_len + (col - 1)
    }

    /// Add the six-neighbor Hex lattice edges.
    ///
    /// Each node appends its own complete neighbor list, so every
    /// undirected pair ends up with two reciprocal directed edges.
    /// The per-node insertion order is fixed: it drives the
    /// connectivity detector's deterministic tie-breaking and the
    /// byte-for-byte content of a board-graph dump.
    fn add_adjacency(&mut self) {
        let n = self.edge_len;
        if n == 1 {
            return;
        }

        // 4 corners: 2 or 3 edges per node
        // upper left
        self.push_edge(self.li(1, 1), self.li(2, 1));
        self.push_edge(self.li(1, 1), self.li(1, 2));
        // upper right
        self.push_edge(self.li(1, n), self.li(1, n - 1));
        self.push_edge(self.li(1, n), self.li(2, n));
        self.push_edge(self.li(1, n), self.li(2, n - 1));
        // lower right
        self.push_edge(self.li(n, n), self.li(n, n - 1));
        self.push_edge(self.li(n, n), self.li(n - 1, n));
        // lower left
        self.push_edge(self.li(n, 1), self.li(n - 1, 1));
        self.push_edge(self.li(n, 1), self.li(n, 2));
        self.push_edge(self.li(n, 1), self.li(n - 1, 2));

        // top and bottom borders (excluding corners): 4 edges per node
        for c in 2..n {
            let r = 1;
            self.push_edge(self.li(r, c), self.li(r, c - 1));
            self.push_edge(self.li(r, c), self.li(r, c + 1));
            self.push_edge(self.li(r, c), self.li(r + 1, c - 1));
            self.push_edge(self.li(r, c), self.li(r + 1, c));

            let r = n;
            self.push_edge(self.li(r, c), self.li(r, c - 1));
            self.push_edge(self.li(r, c), self.li(r, c + 1));
            self.push_edge(self.li(r, c), self.li(r - 1, c));
            self.push_edge(self.li(r, c), self.li(r - 1, c + 1));
        }

        // left and right borders (excluding corners): 4 edges per node
        for r in 2..n {
            let c = 1;
            self.push_edge(self.li(r, c), self.li(r - 1, c));
            self.push_edge(self.li(r, c), self.li(r - 1, c + 1));
            self.push_edge(self.li(r, c), self.li(r, c + 1));
            self.push_edge(self.li(r, c), self.li(r + 1, c));

            let c = n;
            self.push_edge(self.li(r, c), self.li(r - 1, c));
            self.push_edge(self.li(r, c), self.li(r, c - 1));
            self.push_edge(self.li(r, c), self.li(r + 1, c - 1));
            self.push_edge(self.li(r, c), self.li(r + 1, c));
        }

        // interior cells: 6 edges per node
        for r in 2..n {
            for c in 2..n {
                self.push_edge(self.li(r, c), self.li(r - 1, c + 1));
                self.push_edge(self.li(r, c), self.li(r, c + 1));
                self.push_edge(self.li(r, c), self.li(r + 1, c));
                self.push_edge(self.li(r, c), self.li(r + 1, c - 1));
                self.push_edge(self.li(r, c), self.li(r, c - 1));
                self.push_edge(self.li(r, c), self.li(r - 1, c));
            }
        }
    }

    fn push_edge(&mut self, from: usize, to: usize) {
        self.graph.add_edge(from, to);
    }
}
