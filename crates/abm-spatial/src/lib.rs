//! `abm-spatial` — neighbor search for the `rust_abm` framework.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`neighbors`] | `NeighborIndex` — R-tree over a position snapshot       |
//!
//! Both models rebuild the index once per tick from the start-of-tick
//! positions, then answer every agent's fixed-radius query against that
//! immutable snapshot.

pub mod neighbors;


pub use neighbors::NeighborIndex;
