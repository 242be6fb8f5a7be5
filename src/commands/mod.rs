//! Kommando-Engine: reversible Kurven-Operationen mit Undo/Redo-Historie.
//!
//! Jedes Kommando bindet sich bei der Konstruktion an seine Kurve(n), zieht
//! dort sofort einen tiefen Snapshot der Kontrollpunkte und validiert seine
//! Parameter. `execute` berechnet die neue Sequenz und setzt sie über das
//! `CurveObject`-Interface, `undo` stellt den Snapshot wieder her, `redo`
//! führt `execute` erneut aus. Kommandos konsumieren ausschließlich das
//! `CurveObject`-Interface, nie die Registry oder Host-Interna.

pub mod edit_points;
pub mod invoker;
pub mod oversketch;
pub mod populate;
pub mod simplify;

pub use edit_points::{
    AddControlPointCommand, AddControlPointContinuousCommand, DeleteControlPointCommand,
    DeleteControlPointsByRadiusCommand,
};
pub use invoker::CommandInvoker;
pub use oversketch::OversketchCommand;
pub use populate::PopulateGapCommand;
pub use simplify::SimplifyCommand;

use thiserror::Error;

/// Fehler bei der Konstruktion eines Kommandos.
///
/// Tritt ausschließlich vor der ersten Mutation auf: ein abgelehntes
/// Kommando hat die Kurve nie berührt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// Oversketch teilt durch die Anzahl der Referenzpunkte und braucht
    /// deshalb mindestens einen.
    #[error("Referenzkurve ist leer, Oversketch braucht mindestens einen Kontrollpunkt")]
    EmptyReferenceCurve,

    /// Skalarer Parameter außerhalb des gültigen Bereichs.
    #[error("Ungültiger Parameter {name} = {value} (erwartet: {expected})")]
    InvalidParameter {
        /// Parametername wie im Konstruktor
        name: &'static str,
        /// Übergebener Wert
        value: f32,
        /// Beschreibung des gültigen Bereichs
        expected: &'static str,
    },
}

/// Prüft einen Skalar auf "endlich und größer null".
///
/// Gemeinsame Validierung aller Kommando-Konstruktoren mit
/// Abstands- oder Toleranz-Parametern.
pub(crate) fn require_positive(
    name: &'static str,
    value: f32,
) -> Result<(), CommandError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CommandError::InvalidParameter {
            name,
            value,
            expected: "endlich und > 0",
        })
    }
}

/// Gemeinsamer Vertrag aller reversiblen Kurven-Operationen.
///
/// Implementierungen garantieren: der Undo-Zustand wurde **vor** jeder
/// Mutation als tiefe Kopie gesichert, `undo` ist reines Wiederherstellen
/// und nie eine Neuberechnung.
pub trait Command {
    /// Führt die Operation aus.
    ///
    /// Gibt `true` zurück, wenn sie eine Wirkung hatte. Die drei
    /// Geometrie-Kommandos setzen immer neu; bedingte Kommandos wie
    /// das kontinuierliche Zeichnen melden ausgelassene Punkte mit `false`.
    fn execute(&mut self) -> bool;

    /// Stellt den bei der Konstruktion gesicherten Zustand exakt wieder her.
    fn undo(&mut self);

    /// Wiederholt die Operation nach einem Undo.
    ///
    /// Deterministisch identisch zum ursprünglichen `execute`, weil `undo`
    /// unmittelbar zuvor den exakten Vorzustand wiederhergestellt hat.
    fn redo(&mut self) -> bool {
        self.execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_positive_accepts_normal_values() {
        assert!(require_positive("tolerance", 0.1).is_ok());
        assert!(require_positive("tolerance", 1000.0).is_ok());
    }

    #[test]
    fn require_positive_rejects_zero_negative_and_non_finite() {
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = require_positive("spacing", bad).unwrap_err();
            match err {
                CommandError::InvalidParameter { name, .. } => assert_eq!(name, "spacing"),
                other => panic!("unerwarteter Fehler: {other:?}"),
            }
        }
    }

    #[test]
    fn command_error_messages_name_the_parameter() {
        let err = CommandError::InvalidParameter {
            name: "min_spacing",
            value: -2.0,
            expected: "endlich und > 0",
        };

        assert!(err.to_string().contains("min_spacing"));
        assert!(err.to_string().contains("-2"));
    }
}
