//! Spatial-Index (KD-Tree) für schnelle Kontrollpunkt-Abfragen.

use glam::Vec3;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Index des Punkts in der indexierten Sequenz
    pub index: usize,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über der Kontrollpunkt-Sequenz einer Kurve.
///
/// Wird für Radius-Löschen und Host-seitiges Picking gebraucht; nach jeder
/// Kurvenänderung neu aufbauen, der Index hält keine Referenz auf die Kurve.
#[derive(Debug, Clone)]
pub struct ControlPointIndex {
    tree: KdTree<f64, 3>,
    len: usize,
}

impl ControlPointIndex {
    /// Baut einen neuen Index über die übergebenen Punkte.
    pub fn from_points(points: &[Vec3]) -> Self {
        let entries: Vec<[f64; 3]> = points
            .iter()
            .map(|p| [p.x as f64, p.y as f64, p.z as f64])
            .collect();

        Self {
            tree: (&entries).into(),
            len: points.len(),
        }
    }

    /// Gibt die Anzahl indexierter Punkte zurück.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Gibt `true` zurück, wenn keine Punkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Findet den Punkt mit der geringsten Distanz zur Query-Position.
    pub fn nearest(&self, query: Vec3) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64, query.z as f64]);

        Some(SpatialMatch {
            index: result.item as usize,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet alle Punkte innerhalb eines Radius um die Query-Position,
    /// aufsteigend nach Distanz sortiert.
    pub fn within_radius(&self, query: Vec3, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(
                &[query.x as f64, query.y as f64, query.z as f64],
                (radius * radius) as f64,
            )
            .into_iter()
            .map(|entry| SpatialMatch {
                index: entry.item as usize,
                distance: (entry.distance as f32).sqrt(),
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}
