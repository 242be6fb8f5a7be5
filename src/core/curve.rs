//! Kurven-Domäne: das `CurveObject`-Interface und die Referenz-Implementierung.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

/// Schnittstelle zwischen Kommando-Engine und Host-Anwendung.
///
/// Die Engine konsumiert ausschließlich diese drei Operationen. Mesh-Aufbau,
/// Rendering und Szenen-Verwaltung bleiben Sache des Hosts; die Engine
/// verlässt sich nur darauf, dass nach `set_control_points` die visuelle
/// Geometrie der Implementierung aktuell ist.
pub trait CurveObject {
    /// Gibt eine Kopie der Kontrollpunkt-Sequenz zurück.
    fn control_points(&self) -> Vec<Vec3>;

    /// Ersetzt die komplette Kontrollpunkt-Sequenz.
    fn set_control_points(&mut self, points: Vec<Vec3>);

    /// Anzahl der Kontrollpunkte.
    fn control_point_count(&self) -> usize;
}

/// Geteilter Handle auf ein Kurven-Objekt.
///
/// `Rc<RefCell<..>>` statt `Arc<Mutex<..>>`: die Engine arbeitet strikt
/// single-threaded, der Handle-Typ macht das beim Einbetten erzwingbar.
pub type CurveHandle = Rc<RefCell<dyn CurveObject>>;

/// Referenz-Implementierung einer Freihand-Kurve.
///
/// Hält die Kontrollpunkte als flache Sequenz. `geometry_version` zählt
/// jede Geometrie-Änderung mit und vertritt den Mesh-Rebuild, den eine
/// Host-Implementierung an dieser Stelle anstoßen würde.
#[derive(Debug, Clone, Default)]
pub struct SketchCurve {
    control_points: Vec<Vec3>,
    geometry_version: u64,
}

impl SketchCurve {
    /// Erstellt eine leere Kurve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine Kurve mit vorgegebenen Kontrollpunkten.
    pub fn with_points(points: Vec<Vec3>) -> Self {
        Self {
            control_points: points,
            geometry_version: 0,
        }
    }

    /// Erstellt eine leere Kurve hinter einem geteilten Handle.
    pub fn shared() -> Rc<RefCell<SketchCurve>> {
        Rc::new(RefCell::new(SketchCurve::new()))
    }

    /// Erstellt eine Kurve mit Kontrollpunkten hinter einem geteilten Handle.
    pub fn shared_with_points(points: Vec<Vec3>) -> Rc<RefCell<SketchCurve>> {
        Rc::new(RefCell::new(SketchCurve::with_points(points)))
    }

    /// Hängt einen Kontrollpunkt ans Ende an (Direktbearbeitung ohne Undo).
    pub fn append_control_point(&mut self, point: Vec3) {
        self.control_points.push(point);
        self.geometry_version += 1;
    }

    /// Entfernt den letzten Kontrollpunkt (Direktbearbeitung ohne Undo).
    pub fn remove_last_control_point(&mut self) -> Option<Vec3> {
        let removed = self.control_points.pop();
        if removed.is_some() {
            self.geometry_version += 1;
        }
        removed
    }

    /// Lesender Zugriff auf die Punkte ohne Kopie.
    pub fn points(&self) -> &[Vec3] {
        &self.control_points
    }

    /// Anzahl der bisherigen Geometrie-Neuaufbauten.
    pub fn geometry_version(&self) -> u64 {
        self.geometry_version
    }
}

impl CurveObject for SketchCurve {
    fn control_points(&self) -> Vec<Vec3> {
        self.control_points.clone()
    }

    fn set_control_points(&mut self, points: Vec<Vec3>) {
        self.control_points = points;
        self.geometry_version += 1;
    }

    fn control_point_count(&self) -> usize {
        self.control_points.len()
    }
}
