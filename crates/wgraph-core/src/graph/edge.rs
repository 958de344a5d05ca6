use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// An undirected weighted edge between two vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    v: usize,
    w: usize,
    weight: f64,
}

impl Edge {
    pub fn new(v: usize, w: usize, weight: f64) -> Self {
        Self { v, w, weight }
    }

    /// Either endpoint of the edge
    pub fn either(&self) -> usize {
        self.v
    }

    /// The endpoint that is not `vertex`.
    /// For a self-loop both endpoints are the same vertex.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.v {
            self.w
        } else {
            self.v
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Order two edges by weight only
    pub fn cmp_weight(&self, other: &Edge) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }

    /// Endpoints with the smaller vertex first
    pub fn endpoints(&self) -> (usize, usize) {
        if self.v <= self.w {
            (self.v, self.w)
        } else {
            (self.w, self.v)
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}-{}:({})}}", self.v, self.w, self.weight)
    }
}

/// A weighted edge from one vertex to another
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectedEdge {
    from: usize,
    to: usize,
    weight: f64,
}

impl DirectedEdge {
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}->{}:({})}}", self.from, self.to, self.weight)
    }
}
