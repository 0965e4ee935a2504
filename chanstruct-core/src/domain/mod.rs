//! Domain types for the structural decomposition.
//!
//! Every entity is a plain struct with fixed, mandatory fields. Cross-entity
//! references (stroke → pivot, marker → pivot, segment → stroke range) are
//! integer indices into the owning flat list, never owning pointers.

pub mod bar;
pub mod divergence;
pub mod fractal;
pub mod marker;
pub mod pivot;
pub mod segment;
pub mod stroke;

pub use bar::{Bar, BarError, BarSeries};
pub use divergence::DivergenceFlag;
pub use fractal::{Fractal, FractalKind};
pub use marker::{MarkerLabel, TurningPointMarker};
pub use pivot::{Pivot, PivotClass, PivotLevel};
pub use segment::Segment;
pub use stroke::{Direction, Stroke};
