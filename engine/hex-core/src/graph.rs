//! Adjacency graph with per-node marker data.
//!
//! The graph is a dense vector of edge lists parallel to a marker
//! table. Nothing in here knows about Hex geometry; the board module
//! decides which edges exist. Neighbor enumeration follows insertion
//! order, and the connectivity detector depends on that ordering for
//! deterministic tie-breaking.

use std::io::{BufRead, Write};

use crate::board::Marker;

/// A directed edge out of some node.
///
/// The cost field is carried for the board-graph file format; the move
/// engine never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub cost: i32,
}

/// Adjacency lists plus the marker stored at each node.
///
/// Edges are directional. The board builder adds every node's own
/// neighbor list, so the finished graph is symmetric: `v` appears in
/// `u`'s list exactly when `u` appears in `v`'s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    edges: Vec<Vec<Edge>>,
    markers: Vec<Marker>,
}

impl Graph {
    /// Create a graph with `n` nodes, no edges, all markers `Empty`.
    pub fn with_nodes(n: usize) -> Self {
        Self {
            edges: vec![Vec::new(); n],
            markers: vec![Marker::Empty; n],
        }
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Append an edge `from -> to` with the default cost of 1.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.add_edge_with_cost(from, to, 1);
    }

    /// Append an edge `from -> to` with an explicit cost.
    pub fn add_edge_with_cost(&mut self, from: usize, to: usize, cost: i32) {
        self.edges[from].push(Edge { to, cost });
    }

    /// All outgoing edges of `node`, in insertion order.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = &Edge> {
        self.edges[node].iter()
    }

    /// Neighbor indices of `node` whose cell holds `marker`.
    pub fn neighbors_matching(
        &self,
        node: usize,
        marker: Marker,
    ) -> impl Iterator<Item = usize> + '_ {
        self.edges[node]
            .iter()
            .filter(move |e| self.markers[e.to] == marker)
            .map(|e| e.to)
    }

    /// Append into `out` the neighbors of `node` that hold `marker`
    /// and are not in `excluded`.
    ///
    /// The caller owns `out` so the connectivity detector's inner loop
    /// never allocates. `excluded` is scanned linearly; for a Hex
    /// board the list tops out at half the cells and the edge lists at
    /// six entries, so this stays cheap.
    pub fn neighbors_matching_into(
        &self,
        node: usize,
        marker: Marker,
        excluded: &[usize],
        out: &mut Vec<usize>,
    ) {
        for e in &self.edges[node] {
            if self.markers[e.to] == marker && !excluded.contains(&e.to) {
                out.push(e.to);
            }
        }
    }

    pub fn marker(&self, node: usize) -> Marker {
        self.markers[node]
    }

    pub fn set_marker(&mut self, node: usize, marker: Marker) {
        self.markers[node] = marker;
    }

    /// Write the graph in the line-oriented board-graph format:
    ///
    /// ```text
    /// size 25
    /// node 0
    ///     data 0
    ///     edge 1 1
    ///     edge 5 1
    /// node 1
    ///     ...
    /// ```
    ///
    /// Markers serialize as their numeric encoding (0/1/2). Edges are
    /// directional in the format, so a symmetric graph writes two
    /// reciprocal lines per undirected edge.
    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(w, "size {}", self.node_count())?;
        for (node, edges) in self.edges.iter().enumerate() {
            writeln!(w, "node {}", node)?;
            writeln!(w, "    data {}", self.markers[node].as_u8())?;
            for e in edges {
                writeln!(w, "    edge {} {}", e.to, e.cost)?;
            }
        }
        Ok(())
    }

    /// Read a graph in the board-graph format.
    ///
    /// Nodes may appear in any order and lines may carry leading or
    /// trailing whitespace. A `size` line is optional; when present it
    /// must match the number of nodes actually read.
    pub fn read_from<R: BufRead>(r: R) -> Result<Graph, GraphFileError> {
        let mut graph = Graph {
            edges: Vec::new(),
            markers: Vec::new(),
        };
        let mut declared_size: Option<usize> = None;
        let mut current: Option<usize> = None;
        let mut nodes_seen = 0usize;

        for (idx, line) in r.lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let mut words = line.split_whitespace();
            let Some(leader) = words.next() else {
                continue; // blank line
            };

            let malformed = || GraphFileError::MalformedLine {
                line_no,
                line: line.trim().to_string(),
            };

            match leader {
                "size" => {
                    let n: usize = words.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
                    declared_size = Some(n);
                }
                "node" => {
                    let id: usize = words.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
                    graph.ensure_node(id);
                    current = Some(id);
                    nodes_seen += 1;
                }
                "data" => {
                    let node = current.ok_or(GraphFileError::DataBeforeNode { line_no })?;
                    let raw: u8 = words.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
                    let marker = Marker::from_u8(raw)
                        .ok_or(GraphFileError::BadMarker { line_no, value: raw })?;
                    graph.markers[node] = marker;
                }
                "edge" => {
                    let node = current.ok_or(GraphFileError::DataBeforeNode { line_no })?;
                    let to: usize = words.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
                    let cost: i32 = words.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
                    graph.ensure_node(to);
                    graph.edges[node].push(Edge { to, cost });
                }
                _ => return Err(malformed()),
            }
        }

        if let Some(declared) = declared_size {
            if declared != nodes_seen {
                return Err(GraphFileError::SizeMismatch {
                    declared,
                    actual: nodes_seen,
                });
            }
        }

        Ok(graph)
    }

    fn ensure_node(&mut self, id: usize) {
        if id >= self.edges.len() {
            self.edges.resize_with(id + 1, Vec::new);
            self.markers.resize(id + 1, Marker::Empty);
        }
    }
}

/// Errors reading the board-graph text format.
#[derive(Debug, thiserror::Error)]
pub enum GraphFileError {
    #[error("I/O error reading board graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed line {line_no}: {line:?}")]
    MalformedLine { line_no: usize, line: String },

    #[error("line {line_no}: data or edge before any node line")]
    DataBeforeNode { line_no: usize },

    #[error("line {line_no}: invalid marker value {value}, expected 0, 1, or 2")]
    BadMarker { line_no: usize, value: u8 },

    #[error("size line declares {declared} nodes but the file defines {actual}")]
    SizeMismatch { declared: usize, actual: usize },
}
