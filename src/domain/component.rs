//! Connected components over an undirected product graph.
//!
//! Used to rebuild groups from legacy pairwise links. Edges are treated as
//! undirected and deduplicated, so symmetric link tables and one-directional
//! dumps produce the same components.

use std::collections::{BTreeMap, BTreeSet};

use super::id::ProductId;

/// Undirected adjacency built from product pairs.
///
/// Backed by ordered collections so traversal order, and therefore the
/// component order, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    neighbors: BTreeMap<ProductId, BTreeSet<ProductId>>,
    edges: usize,
}

impl Adjacency {
    /// Create an empty adjacency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an adjacency from `(a, b)` pairs.
    pub fn from_edges(edges: impl IntoIterator<Item = (ProductId, ProductId)>) -> Self {
        let mut adjacency = Self::new();
        for (a, b) in edges {
            adjacency.add_edge(a, b);
        }
        adjacency
    }

    /// Insert an undirected edge. Returns false when the edge was already known.
    ///
    /// A self edge registers the product as a vertex without connecting it
    /// to anything.
    pub fn add_edge(&mut self, a: ProductId, b: ProductId) -> bool {
        if a == b {
            self.neighbors.entry(a).or_default();
            return false;
        }
        let inserted = self.neighbors.entry(a).or_default().insert(b);
        self.neighbors.entry(b).or_default().insert(a);
        if inserted {
            self.edges += 1;
        }
        inserted
    }

    /// Number of distinct vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Neighbors of `product`, ascending.
    pub fn neighbors(&self, product: ProductId) -> impl Iterator<Item = ProductId> + '_ {
        self.neighbors
            .get(&product)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Partition the vertices into connected components.
    ///
    /// Iterative depth-first traversal; no recursion, so long chains cannot
    /// overflow the stack. Components are returned in order of their smallest
    /// member and each component is sorted ascending.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<ProductId>> {
        let mut visited: BTreeSet<ProductId> = BTreeSet::new();
        let mut components = Vec::new();

        for &start in self.neighbors.keys() {
            if !visited.insert(start) {
                continue;
            }

            let mut component = Vec::new();
            let mut stack = vec![start];
            while let Some(product) = stack.pop() {
                component.push(product);
                for next in self.neighbors(product) {
                    if visited.insert(next) {
                        stack.push(next);
                    }
                }
            }

            component.sort_unstable();
            components.push(component);
        }

        components
    }
}

/// Connected components of the graph described by `edges`.
///
/// Convenience wrapper over [`Adjacency::components`]. Single-vertex
/// components are included; callers decide what to do with them.
#[must_use]
pub fn connected_components(
    edges: impl IntoIterator<Item = (ProductId, ProductId)>,
) -> Vec<Vec<ProductId>> {
    Adjacency::from_edges(edges).components()
}
