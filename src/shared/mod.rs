//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die reine Kurven-Geometrie und die Laufzeit-Optionen, die
//! zwischen Kommando-Engine und Host-Anwendung geteilt werden, um
//! direkte Abhängigkeiten zu vermeiden.

pub mod curve_geometry;
pub mod options;

pub use options::SketchOptions;
pub use options::{CONTINUOUS_MIN_SAMPLE_SPACING, DELETE_RADIUS};
