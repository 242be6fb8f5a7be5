//! In-Session-Registry aller lebenden Kurven.
//!
//! Explizite Komponente statt Szenen-Singleton: die Kommando-Engine kennt
//! diese Registry **nicht**. Kommandos stellen ausschließlich
//! Punkt-Sequenzen wieder her; ob eine leer gewordene Kurve aus der Szene
//! genommen oder später wiederhergestellt wird, entscheidet die einbettende
//! Anwendung über diese Registry.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::core::curve::{CurveHandle, SketchCurve};

/// Eindeutige Registry-ID einer Kurve (nicht identisch mit Host-Objekt-IDs).
pub type CurveId = u64;

/// Registry der lebenden Kurven einer Sketching-Session.
///
/// Gelöschte Kurven wandern in einen Papierkorb und bleiben über ihre ID
/// wiederherstellbar, solange die Session läuft. Iteration folgt der
/// Registrierungsreihenfolge (deterministisch).
#[derive(Default)]
pub struct SketchWorld {
    live: IndexMap<CurveId, CurveHandle>,
    deleted: IndexMap<CurveId, CurveHandle>,
    next_id: CurveId,
}

impl SketchWorld {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen bestehenden Kurven-Handle und vergibt eine ID.
    pub fn register(&mut self, curve: CurveHandle) -> CurveId {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id, curve);
        id
    }

    /// Erstellt eine neue leere `SketchCurve` und registriert sie.
    pub fn create_curve(&mut self) -> (CurveId, Rc<RefCell<SketchCurve>>) {
        let curve = SketchCurve::shared();
        let id = self.register(curve.clone());
        (id, curve)
    }

    /// Verschiebt eine lebende Kurve in den Papierkorb.
    ///
    /// Gibt `false` zurück, wenn die ID nicht auf eine lebende Kurve zeigt.
    pub fn destroy(&mut self, id: CurveId) -> bool {
        match self.live.shift_remove(&id) {
            Some(curve) => {
                self.deleted.insert(id, curve);
                true
            }
            None => false,
        }
    }

    /// Holt eine Kurve aus dem Papierkorb zurück.
    ///
    /// Die Kurve rückt dabei ans Ende der Registrierungsreihenfolge.
    /// Gibt `false` zurück, wenn die ID nicht im Papierkorb liegt.
    pub fn restore(&mut self, id: CurveId) -> bool {
        match self.deleted.shift_remove(&id) {
            Some(curve) => {
                self.live.insert(id, curve);
                true
            }
            None => false,
        }
    }

    /// Gibt zurück, ob die ID im Papierkorb liegt.
    pub fn is_deleted(&self, id: CurveId) -> bool {
        self.deleted.contains_key(&id)
    }

    /// Gibt den Handle einer lebenden Kurve zurück (falls vorhanden).
    pub fn get(&self, id: CurveId) -> Option<&CurveHandle> {
        self.live.get(&id)
    }

    /// Iteriert über alle lebenden Kurven in Registrierungsreihenfolge.
    pub fn live_curves(&self) -> impl Iterator<Item = (CurveId, &CurveHandle)> {
        self.live.iter().map(|(id, curve)| (*id, curve))
    }

    /// Anzahl der lebenden Kurven.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Gibt zurück, ob keine lebende Kurve registriert ist.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
