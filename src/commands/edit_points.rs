//! Punktweise Editier-Kommandos für das interaktive Zeichnen.

use glam::Vec3;

use crate::core::curve::{CurveHandle, CurveObject};
use crate::core::spatial::ControlPointIndex;

use super::Command;

/// Hängt einen Kontrollpunkt ans Ende der Kurve an.
pub struct AddControlPointCommand {
    curve: CurveHandle,
    point: Vec3,
    backup: Vec<Vec3>,
}

impl AddControlPointCommand {
    /// Erstellt das Kommando und sichert den aktuellen Stand der Kurve.
    pub fn new(curve: CurveHandle, point: Vec3) -> Self {
        let backup = curve.borrow().control_points();
        Self {
            curve,
            point,
            backup,
        }
    }
}

impl Command for AddControlPointCommand {
    fn execute(&mut self) -> bool {
        let mut points = self.curve.borrow().control_points();
        points.push(self.point);
        self.curve.borrow_mut().set_control_points(points);
        true
    }

    fn undo(&mut self) {
        self.curve.borrow_mut().set_control_points(self.backup.clone());
    }
}

/// Hängt einen Kontrollpunkt nur an, wenn er weit genug vom letzten liegt.
///
/// Filter für das Zeichnen bei gehaltenem Trigger: Posen näher als
/// `min_spacing` am letzten Punkt werden verworfen, damit die Kurve beim
/// Stillhalten des Controllers nicht zum Punkthaufen degeneriert. Der
/// Vergleich ist strikt, ein Punkt exakt auf `min_spacing` wird verworfen.
/// `execute` meldet den verworfenen Fall als wirkungslos.
pub struct AddControlPointContinuousCommand {
    curve: CurveHandle,
    point: Vec3,
    min_spacing: f32,
    backup: Vec<Vec3>,
}

impl AddControlPointContinuousCommand {
    /// Erstellt das Kommando und sichert den aktuellen Stand der Kurve.
    pub fn new(curve: CurveHandle, point: Vec3, min_spacing: f32) -> Self {
        let backup = curve.borrow().control_points();
        Self {
            curve,
            point,
            min_spacing,
            backup,
        }
    }
}

impl Command for AddControlPointContinuousCommand {
    fn execute(&mut self) -> bool {
        let mut points = self.curve.borrow().control_points();
        let far_enough = points
            .last()
            .map_or(true, |last| last.distance(self.point) > self.min_spacing);
        if !far_enough {
            log::debug!(
                "Kontrollpunkt verworfen, Abstand zum letzten Punkt <= {}",
                self.min_spacing
            );
            return false;
        }

        points.push(self.point);
        self.curve.borrow_mut().set_control_points(points);
        true
    }

    fn undo(&mut self) {
        self.curve.borrow_mut().set_control_points(self.backup.clone());
    }
}

/// Entfernt den letzten Kontrollpunkt der Kurve.
pub struct DeleteControlPointCommand {
    curve: CurveHandle,
    backup: Vec<Vec3>,
}

impl DeleteControlPointCommand {
    /// Erstellt das Kommando und sichert den aktuellen Stand der Kurve.
    pub fn new(curve: CurveHandle) -> Self {
        let backup = curve.borrow().control_points();
        Self { curve, backup }
    }
}

impl Command for DeleteControlPointCommand {
    fn execute(&mut self) -> bool {
        let mut points = self.curve.borrow().control_points();
        if points.pop().is_none() {
            return false;
        }

        self.curve.borrow_mut().set_control_points(points);
        true
    }

    fn undo(&mut self) {
        self.curve.borrow_mut().set_control_points(self.backup.clone());
    }
}

/// Entfernt alle Kontrollpunkte innerhalb eines Radius um ein Zentrum.
///
/// Die Treffer liefert ein kd-Index über den aktuellen Punktstand, auch
/// mitten aus der Kurve. Verbleibende Punkte behalten ihre Reihenfolge,
/// die Kurve bleibt ein zusammenhängendes Objekt.
pub struct DeleteControlPointsByRadiusCommand {
    curve: CurveHandle,
    center: Vec3,
    radius: f32,
    backup: Vec<Vec3>,
}

impl DeleteControlPointsByRadiusCommand {
    /// Erstellt das Kommando und sichert den aktuellen Stand der Kurve.
    pub fn new(curve: CurveHandle, center: Vec3, radius: f32) -> Self {
        let backup = curve.borrow().control_points();
        Self {
            curve,
            center,
            radius,
            backup,
        }
    }
}

impl Command for DeleteControlPointsByRadiusCommand {
    fn execute(&mut self) -> bool {
        let points = self.curve.borrow().control_points();
        let index = ControlPointIndex::from_points(&points);
        let matches = index.within_radius(self.center, self.radius);
        if matches.is_empty() {
            return false;
        }

        let mut doomed = vec![false; points.len()];
        for hit in &matches {
            doomed[hit.index] = true;
        }
        let remaining: Vec<Vec3> = points
            .iter()
            .zip(doomed.iter())
            .filter_map(|(&point, &gone)| (!gone).then_some(point))
            .collect();

        log::info!(
            "{} Kontrollpunkte im Radius {} entfernt",
            matches.len(),
            self.radius
        );
        self.curve.borrow_mut().set_control_points(remaining);
        true
    }

    fn undo(&mut self) {
        self.curve.borrow_mut().set_control_points(self.backup.clone());
    }
}
