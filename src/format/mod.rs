//! Text export formats.

pub mod dot;

pub use dot::DotWriter;
