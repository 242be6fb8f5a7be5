//! VR Sketch Engine Library.
//! Kommando-Engine und Kurven-Geometrie als Library exportiert für Tests und Einbettung.

pub mod commands;
pub mod core;
pub mod shared;

pub use commands::{
    AddControlPointCommand, AddControlPointContinuousCommand, Command, CommandError,
    CommandInvoker, DeleteControlPointCommand, DeleteControlPointsByRadiusCommand,
    OversketchCommand, PopulateGapCommand, SimplifyCommand,
};
pub use core::{
    ControlPointIndex, CurveHandle, CurveId, CurveObject, SketchCurve, SketchWorld, SpatialMatch,
};
pub use shared::SketchOptions;
