//! Reine Geometrie-Funktionen für Skizzen-Polylines.
//!
//! Layer-neutral: wird von `commands` und von Host-Anwendungen importiert,
//! ohne Zirkel-Abhängigkeiten zu erzeugen. Alle Funktionen sind total:
//! degenerierte Eingaben liefern die Eingabe unverändert zurück.
//! Parameter-Validierung (Vorzeichen, Endlichkeit) findet auf der
//! Kommando-Ebene statt.

use glam::Vec3;

/// Zieht jeden Punkt von `points` in Richtung der Referenz-Polyline `stroke`.
///
/// Pro Punkt `d` summiert sich der Versatz über alle Stroke-Punkte `o` mit
/// `|o - d| <= affected_range` als `(o - d) / distance_scaling^(|o - d|²)`,
/// geteilt durch die Anzahl aller Stroke-Punkte. Das Gewicht fällt also
/// exponentiell mit dem Distanz-Quadrat ab: nahe Stroke-Punkte ziehen stark,
/// ferne kaum. Kein Snapping, jeder Punkt wird unabhängig versetzt.
///
/// `distance_scaling` wird > 1 erwartet (je näher an 1, desto stärker der
/// Zug); `affected_range <= 0` sowie ein leerer Stroke lassen die Eingabe
/// unverändert.
pub fn attract_to_stroke(
    points: &[Vec3],
    stroke: &[Vec3],
    distance_scaling: f32,
    affected_range: f32,
) -> Vec<Vec3> {
    if stroke.is_empty() || affected_range <= 0.0 {
        return points.to_vec();
    }

    let range_sq = affected_range * affected_range;
    let stroke_count = stroke.len() as f32;

    points
        .iter()
        .map(|&point| {
            let mut pull = Vec3::ZERO;
            for &anchor in stroke {
                let offset = anchor - point;
                let dist_sq = offset.length_squared();
                if dist_sq <= range_sq {
                    pull += offset / distance_scaling.powf(dist_sq);
                }
            }
            point + pull / stroke_count
        })
        .collect()
}

/// Füllt Lücken zwischen aufeinanderfolgenden Punkten mit Zwischenpunkten.
///
/// Übersteigt der Abstand eines Punktpaars `min_spacing`, werden
/// `floor(abstand / min_spacing) - 1` Punkte eingefügt, exakt `min_spacing`
/// auseinander, vom ersten Punkt des Paars aus gemessen (beide Endpunkte
/// bleiben erhalten, kein eingefügter Punkt erreicht den zweiten).
/// Paare mit Abstand <= `min_spacing` bleiben unberührt.
pub fn fill_gaps(points: &[Vec3], min_spacing: f32) -> Vec<Vec3> {
    if points.len() < 2 || min_spacing <= 0.0 {
        return points.to_vec();
    }

    let mut result = Vec::with_capacity(points.len());

    for pair in points.windows(2) {
        let (first, second) = (pair[0], pair[1]);
        result.push(first);

        let gap = first.distance(second);
        if gap > min_spacing {
            let steps = (gap / min_spacing).floor() as usize;
            let step = (second - first) * (min_spacing / gap);
            for k in 1..steps {
                result.push(first + step * k as f32);
            }
        }
    }

    // Endpunkt immer exakt übernehmen
    result.push(*points.last().unwrap());
    result
}

/// Vereinfacht eine Polyline nach Ramer-Douglas-Peucker.
///
/// Behält pro Teilstück den Punkt mit der größten Sehnen-Distanz, falls sie
/// `tolerance` überschreitet, und rekursiert auf beide Hälften; sonst
/// kollabiert das Teilstück auf seine Endpunkte. Erster und letzter Punkt
/// bleiben immer erhalten. Weniger als 3 Punkte werden unverändert
/// zurückgegeben.
pub fn simplify_polyline(points: &[Vec3], tolerance: f32) -> Vec<Vec3> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;
    mark_kept_points(points, tolerance, 0, points.len() - 1, &mut keep);

    points
        .iter()
        .zip(keep.iter())
        .filter_map(|(&point, &kept)| kept.then_some(point))
        .collect()
}

/// Rekursiver Simplify-Schritt über den Indexbereich `first..=last`.
fn mark_kept_points(
    points: &[Vec3],
    tolerance: f32,
    first: usize,
    last: usize,
    keep: &mut [bool],
) {
    if last <= first + 1 {
        return;
    }

    // Bei Gleichstand gewinnt der niedrigste Index (strikter Vergleich)
    let mut max_distance = 0.0f32;
    let mut max_index = first + 1;
    for i in (first + 1)..last {
        let distance = perpendicular_distance(points[i], points[first], points[last]);
        if distance > max_distance {
            max_distance = distance;
            max_index = i;
        }
    }

    if max_distance > tolerance {
        keep[max_index] = true;
        mark_kept_points(points, tolerance, first, max_index, keep);
        mark_kept_points(points, tolerance, max_index, last, keep);
    }
}

/// Abstand eines Punkts zur Gerade durch `chord_start` und `chord_end`.
///
/// Fallen die Sehnen-Endpunkte (nahezu) zusammen, wird auf den
/// Punkt-zu-Punkt-Abstand zurückgefallen.
pub fn perpendicular_distance(point: Vec3, chord_start: Vec3, chord_end: Vec3) -> f32 {
    let chord = chord_end - chord_start;
    let len_sq = chord.length_squared();
    if len_sq < 1e-12 {
        return point.distance(chord_start);
    }
    (point - chord_start).cross(chord).length() / len_sq.sqrt()
}
