//! Zentrale Konfiguration für die Sketch-Engine.
//!
//! `SketchOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Zeichnen ────────────────────────────────────────────────────────

/// Mindestabstand (Meter) zum letzten Kontrollpunkt beim kontinuierlichen
/// Zeichnen; Controller-Posen darunter werden verworfen.
pub const CONTINUOUS_MIN_SAMPLE_SPACING: f32 = 0.02;
/// Radius (Meter) des Radiergummis beim Löschen per Controller-Position.
pub const DELETE_RADIUS: f32 = 0.1;
/// Pick-Radius (Meter) für Nächster-Punkt-Abfragen.
pub const PICK_RADIUS: f32 = 0.05;

// ── Oversketch ──────────────────────────────────────────────────────

/// Basis der Distanz-Gewichtung; je näher an 1, desto stärker der Zug.
pub const OVERSKETCH_DISTANCE_SCALING: f32 = 2.0;
/// Wirkradius (Meter): Referenzpunkte außerhalb ziehen nicht.
pub const OVERSKETCH_AFFECTED_RANGE: f32 = 1.0;

// ── Nachbearbeitung ─────────────────────────────────────────────────

/// Maximal erlaubte Lücke (Meter) zwischen Kontrollpunkten beim Auffüllen.
pub const POPULATE_MIN_SPACING: f32 = 0.05;
/// Sehnen-Toleranz (Meter) beim Ausdünnen.
pub const SIMPLIFY_TOLERANCE: f32 = 0.01;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird als `vr_sketch_engine.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchOptions {
    // ── Zeichnen ────────────────────────────────────────────────
    /// Mindestabstand zum letzten Kontrollpunkt beim kontinuierlichen Zeichnen
    pub continuous_min_sample_spacing: f32,
    /// Radiergummi-Radius für das Löschen per Controller-Position
    pub delete_radius: f32,
    /// Pick-Radius für Nächster-Punkt-Abfragen
    #[serde(default = "default_pick_radius")]
    pub pick_radius: f32,

    // ── Oversketch ──────────────────────────────────────────────
    /// Basis der Distanz-Gewichtung beim Oversketch
    pub oversketch_distance_scaling: f32,
    /// Wirkradius des Oversketch
    pub oversketch_affected_range: f32,

    // ── Nachbearbeitung ─────────────────────────────────────────
    /// Maximal erlaubte Lücke beim Auffüllen
    pub populate_min_spacing: f32,
    /// Sehnen-Toleranz beim Ausdünnen
    pub simplify_tolerance: f32,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            continuous_min_sample_spacing: CONTINUOUS_MIN_SAMPLE_SPACING,
            delete_radius: DELETE_RADIUS,
            pick_radius: PICK_RADIUS,

            oversketch_distance_scaling: OVERSKETCH_DISTANCE_SCALING,
            oversketch_affected_range: OVERSKETCH_AFFECTED_RANGE,

            populate_min_spacing: POPULATE_MIN_SPACING,
            simplify_tolerance: SIMPLIFY_TOLERANCE,
        }
    }
}

/// Serde-Default für `pick_radius` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_pick_radius() -> f32 {
    PICK_RADIUS
}

impl SketchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("vr_sketch_engine"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("vr_sketch_engine.toml")
    }
}
