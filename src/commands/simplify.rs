//! Ausdünnen einer Kurve nach Ramer-Douglas-Peucker.

use glam::Vec3;

use crate::core::curve::{CurveHandle, CurveObject};
use crate::shared::curve_geometry::simplify_polyline;

use super::{require_positive, Command, CommandError};

/// Entfernt Kontrollpunkte, deren Sehnen-Distanz unter `tolerance` bleibt.
///
/// Execute wendet `simplify_polyline` auf den aktuellen Stand der Kurve an;
/// Undo stellt die Sicherung vom Konstruktionszeitpunkt wieder her.
pub struct SimplifyCommand {
    curve: CurveHandle,
    tolerance: f32,
    backup: Vec<Vec3>,
}

impl SimplifyCommand {
    /// Erstellt das Kommando und sichert den aktuellen Stand der Kurve.
    ///
    /// Nicht-positive oder nicht-endliche `tolerance` wird abgelehnt.
    pub fn new(curve: CurveHandle, tolerance: f32) -> Result<Self, CommandError> {
        require_positive("tolerance", tolerance)?;

        let backup = curve.borrow().control_points();
        Ok(Self {
            curve,
            tolerance,
            backup,
        })
    }
}

impl Command for SimplifyCommand {
    fn execute(&mut self) -> bool {
        let current = self.curve.borrow().control_points();
        let simplified = simplify_polyline(&current, self.tolerance);

        log::info!(
            "Simplify: {} -> {} Kontrollpunkte",
            current.len(),
            simplified.len()
        );
        self.curve.borrow_mut().set_control_points(simplified);
        true
    }

    fn undo(&mut self) {
        self.curve.borrow_mut().set_control_points(self.backup.clone());
    }
}
