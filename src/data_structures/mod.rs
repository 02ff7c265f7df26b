/// The graph store searched by the algorithms in this crate.
pub mod graph;
