//! Core-Domänentypen: Kurven, Spatial-Index, Szenen-Registry.

pub mod curve;
pub mod spatial;
pub mod world;

pub use curve::{CurveHandle, CurveObject, SketchCurve};
pub use spatial::{ControlPointIndex, SpatialMatch};
pub use world::{CurveId, SketchWorld};
