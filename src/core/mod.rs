//! Core-Domänentypen: Bézier-Geometrie und Kontrollpunkt-Kette.

pub mod bezier;
pub mod curve_chain;

pub use bezier::{casteljau_point, sample_segment};
pub use curve_chain::{segments, CurveChain, POINTS_PER_SEGMENT};
