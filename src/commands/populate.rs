//! Auffüllen zu großer Lücken zwischen Kontrollpunkten.

use glam::Vec3;

use crate::core::curve::{CurveHandle, CurveObject};
use crate::shared::curve_geometry::fill_gaps;

use super::{require_positive, Command, CommandError};

/// Füllt Lücken über `min_spacing` mit gleichmäßig verteilten Punkten auf.
///
/// Execute wendet `fill_gaps` auf den aktuellen Stand der Kurve an; Undo
/// stellt die Sicherung vom Konstruktionszeitpunkt wieder her.
pub struct PopulateGapCommand {
    curve: CurveHandle,
    min_spacing: f32,
    backup: Vec<Vec3>,
}

impl PopulateGapCommand {
    /// Erstellt das Kommando und sichert den aktuellen Stand der Kurve.
    ///
    /// Nicht-positives oder nicht-endliches `min_spacing` wird abgelehnt.
    pub fn new(curve: CurveHandle, min_spacing: f32) -> Result<Self, CommandError> {
        require_positive("min_spacing", min_spacing)?;

        let backup = curve.borrow().control_points();
        Ok(Self {
            curve,
            min_spacing,
            backup,
        })
    }
}

impl Command for PopulateGapCommand {
    fn execute(&mut self) -> bool {
        let current = self.curve.borrow().control_points();
        let filled = fill_gaps(&current, self.min_spacing);

        log::info!(
            "Populate: {} -> {} Kontrollpunkte",
            current.len(),
            filled.len()
        );
        self.curve.borrow_mut().set_control_points(filled);
        true
    }

    fn undo(&mut self) {
        self.curve.borrow_mut().set_control_points(self.backup.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curve::SketchCurve;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rejects_non_positive_spacing() {
        let curve = SketchCurve::shared_with_points(vec![Vec3::ZERO, Vec3::ONE]);

        let result = PopulateGapCommand::new(curve, -1.0);

        assert!(matches!(
            result.err(),
            Some(CommandError::InvalidParameter {
                name: "min_spacing",
                ..
            })
        ));
    }

    #[test]
    fn execute_fills_the_gap_and_undo_removes_the_inserts() {
        let original = vec![Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 3.0)];
        let curve = SketchCurve::shared_with_points(original.clone());

        let mut command = PopulateGapCommand::new(curve.clone(), 1.0).unwrap();

        assert!(command.execute());
        {
            let curve = curve.borrow();
            let points = curve.points();
            assert_eq!(points.len(), 4);
            assert_eq!(points[0], original[0]);
            assert_eq!(points[3], original[1]);
            assert_abs_diff_eq!(points[1].z, 1.0, epsilon = 1e-5);
            assert_abs_diff_eq!(points[2].z, 2.0, epsilon = 1e-5);
        }

        command.undo();
        assert_eq!(curve.borrow().points(), original.as_slice());
    }

    #[test]
    fn dense_curve_keeps_its_point_count() {
        let original = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.5),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        let curve = SketchCurve::shared_with_points(original.clone());

        let mut command = PopulateGapCommand::new(curve.clone(), 1.0).unwrap();

        assert!(command.execute());
        assert_eq!(curve.borrow().points(), original.as_slice());
    }

    #[test]
    fn empty_curve_does_not_crash() {
        let curve = SketchCurve::shared();

        let mut command = PopulateGapCommand::new(curve.clone(), 1.0).unwrap();

        assert!(command.execute());
        assert_eq!(curve.borrow().control_point_count(), 0);
    }
}
