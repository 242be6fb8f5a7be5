//! Oversketch: zieht eine Kurve in Richtung eines Referenz-Freihandzugs.

use glam::Vec3;

use crate::core::curve::{CurveHandle, CurveObject};
use crate::shared::curve_geometry::attract_to_stroke;

use super::{require_positive, Command, CommandError};

/// Verformt die Zielkurve in Richtung der Referenzkurve.
///
/// Execute wendet `attract_to_stroke` auf den jeweils aktuellen Stand
/// beider Kurven an; Undo stellt die Sicherung vom Konstruktionszeitpunkt
/// wieder her. Beide Kurven dürfen auf dasselbe Objekt zeigen.
pub struct OversketchCommand {
    curve: CurveHandle,
    stroke: CurveHandle,
    distance_scaling: f32,
    affected_range: f32,
    backup: Vec<Vec3>,
}

impl OversketchCommand {
    /// Erstellt das Kommando und sichert den aktuellen Stand der Zielkurve.
    ///
    /// Abgelehnt werden eine leere Referenzkurve sowie nicht-positives oder
    /// nicht-endliches `distance_scaling`. `affected_range <= 0` ist
    /// zulässig und lässt die Zielkurve unverändert.
    pub fn new(
        curve: CurveHandle,
        stroke: CurveHandle,
        distance_scaling: f32,
        affected_range: f32,
    ) -> Result<Self, CommandError> {
        if stroke.borrow().control_point_count() == 0 {
            return Err(CommandError::EmptyReferenceCurve);
        }
        require_positive("distance_scaling", distance_scaling)?;

        let backup = curve.borrow().control_points();
        Ok(Self {
            curve,
            stroke,
            distance_scaling,
            affected_range,
            backup,
        })
    }
}

impl Command for OversketchCommand {
    fn execute(&mut self) -> bool {
        let current = self.curve.borrow().control_points();
        let stroke = self.stroke.borrow().control_points();
        let attracted = attract_to_stroke(
            &current,
            &stroke,
            self.distance_scaling,
            self.affected_range,
        );

        log::info!(
            "Oversketch: {} Punkte in Richtung von {} Referenzpunkten gezogen",
            attracted.len(),
            stroke.len()
        );
        self.curve.borrow_mut().set_control_points(attracted);
        true
    }

    fn undo(&mut self) {
        self.curve.borrow_mut().set_control_points(self.backup.clone());
    }
}
