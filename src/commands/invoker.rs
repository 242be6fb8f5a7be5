//! Lineare Undo/Redo-Historie über ausgeführten Kommandos.

use super::Command;

/// Kommando-Historie mit Cursor.
///
/// `cursor` zählt die aktuell angewendeten Kommandos (`0..=history.len()`).
/// Alles unterhalb des Cursors ist angewendet, alles ab dem Cursor wartet
/// nach einem Undo auf Redo und wird beim nächsten ausgeführten Kommando
/// verworfen (lineare Historie, kein Verzweigen oder Zusammenfassen).
#[derive(Default)]
pub struct CommandInvoker {
    history: Vec<Box<dyn Command>>,
    cursor: usize,
}

impl CommandInvoker {
    /// Erstellt eine leere Historie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Führt ein Kommando aus und nimmt es in die Historie auf.
    ///
    /// Kommandos ohne Wirkung (`execute` liefert `false`) werden nicht
    /// aufgenommen und lassen auch wartende Redo-Kommandos unberührt:
    /// ein Undo auf ein wirkungsloses Kommando wäre ein sichtbares Nichts.
    /// Der Rückgabewert reicht die Wirkung an den Aufrufer durch.
    pub fn execute_command(&mut self, command: impl Command + 'static) -> bool {
        let mut command: Box<dyn Command> = Box::new(command);
        let had_effect = command.execute();

        if had_effect {
            if self.cursor < self.history.len() {
                log::debug!(
                    "{} wartende Redo-Kommandos verworfen",
                    self.history.len() - self.cursor
                );
            }
            self.history.truncate(self.cursor);
            self.history.push(command);
            self.cursor += 1;
        } else {
            log::debug!("Kommando ohne Wirkung, nicht in die Historie aufgenommen");
        }

        had_effect
    }

    /// Macht das zuletzt angewendete Kommando rückgängig.
    ///
    /// Am Anfang der Historie ein stiller No-op, nie ein Fehler.
    pub fn undo(&mut self) {
        if self.cursor == 0 {
            log::debug!("Undo: nichts zu tun");
            return;
        }

        self.cursor -= 1;
        self.history[self.cursor].undo();
        log::info!(
            "Undo ausgeführt ({} von {} Kommandos aktiv)",
            self.cursor,
            self.history.len()
        );
    }

    /// Wiederholt das zuletzt rückgängig gemachte Kommando.
    ///
    /// Am Ende der Historie ein stiller No-op, nie ein Fehler.
    pub fn redo(&mut self) {
        if self.cursor == self.history.len() {
            log::debug!("Redo: nichts zu tun");
            return;
        }

        self.history[self.cursor].redo();
        self.cursor += 1;
        log::info!(
            "Redo ausgeführt ({} von {} Kommandos aktiv)",
            self.cursor,
            self.history.len()
        );
    }

    /// Prüft, ob ein Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft, ob ein Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.history.len()
    }

    /// Anzahl der Kommandos in der Historie (angewendet plus Redo-fähig).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Gibt zurück, ob die Historie leer ist.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Verwirft die komplette Historie, etwa beim Wechsel der Szene.
    pub fn clear(&mut self) {
        self.history.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Protokolliert execute/undo-Aufrufe, um Reihenfolge und Dispatch
    /// der Historie zu prüfen.
    struct ProbeCommand {
        journal: Rc<RefCell<Vec<String>>>,
        tag: &'static str,
        effective: bool,
    }

    impl ProbeCommand {
        fn new(journal: &Rc<RefCell<Vec<String>>>, tag: &'static str) -> Self {
            Self {
                journal: journal.clone(),
                tag,
                effective: true,
            }
        }

        fn without_effect(journal: &Rc<RefCell<Vec<String>>>, tag: &'static str) -> Self {
            Self {
                journal: journal.clone(),
                tag,
                effective: false,
            }
        }
    }

    impl Command for ProbeCommand {
        fn execute(&mut self) -> bool {
            self.journal.borrow_mut().push(format!("exec {}", self.tag));
            self.effective
        }

        fn undo(&mut self) {
            self.journal.borrow_mut().push(format!("undo {}", self.tag));
        }
    }

    fn new_journal() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn empty_invoker_cannot_undo_or_redo() {
        let mut invoker = CommandInvoker::new();

        assert!(!invoker.can_undo());
        assert!(!invoker.can_redo());
        assert!(invoker.is_empty());

        // Stille No-ops, kein Panic
        invoker.undo();
        invoker.redo();
    }

    #[test]
    fn execute_records_and_enables_undo() {
        let journal = new_journal();
        let mut invoker = CommandInvoker::new();

        assert!(invoker.execute_command(ProbeCommand::new(&journal, "a")));
        assert!(invoker.execute_command(ProbeCommand::new(&journal, "b")));

        assert_eq!(invoker.len(), 2);
        assert!(invoker.can_undo());
        assert!(!invoker.can_redo());
        assert_eq!(*journal.borrow(), vec!["exec a", "exec b"]);
    }

    #[test]
    fn undo_walks_backwards_in_execution_order() {
        let journal = new_journal();
        let mut invoker = CommandInvoker::new();
        invoker.execute_command(ProbeCommand::new(&journal, "a"));
        invoker.execute_command(ProbeCommand::new(&journal, "b"));

        invoker.undo();
        invoker.undo();
        invoker.undo(); // Anfang erreicht: No-op

        assert_eq!(
            *journal.borrow(),
            vec!["exec a", "exec b", "undo b", "undo a"]
        );
        assert!(!invoker.can_undo());
        assert!(invoker.can_redo());
    }

    #[test]
    fn redo_replays_via_execute() {
        let journal = new_journal();
        let mut invoker = CommandInvoker::new();
        invoker.execute_command(ProbeCommand::new(&journal, "a"));
        invoker.execute_command(ProbeCommand::new(&journal, "b"));
        invoker.undo();
        invoker.undo();

        invoker.redo();
        invoker.redo();
        invoker.redo(); // Ende erreicht: No-op

        assert_eq!(
            *journal.borrow(),
            vec![
                "exec a", "exec b", "undo b", "undo a", "exec a", "exec b"
            ]
        );
        assert!(!invoker.can_redo());
        assert!(invoker.can_undo());
    }

    #[test]
    fn execute_after_undo_discards_pending_redo() {
        let journal = new_journal();
        let mut invoker = CommandInvoker::new();
        invoker.execute_command(ProbeCommand::new(&journal, "a"));
        invoker.execute_command(ProbeCommand::new(&journal, "b"));
        invoker.undo();

        invoker.execute_command(ProbeCommand::new(&journal, "c"));

        assert_eq!(invoker.len(), 2);
        assert!(!invoker.can_redo());

        // Redo nach Verwurf bleibt ein No-op, kein zweites "exec b"
        invoker.redo();
        assert_eq!(
            *journal.borrow(),
            vec!["exec a", "exec b", "undo b", "exec c"]
        );
    }

    #[test]
    fn ineffective_command_is_not_recorded() {
        let journal = new_journal();
        let mut invoker = CommandInvoker::new();
        invoker.execute_command(ProbeCommand::new(&journal, "a"));
        invoker.undo();

        let had_effect = invoker.execute_command(ProbeCommand::without_effect(&journal, "x"));

        assert!(!had_effect);
        assert_eq!(invoker.len(), 1);
        // Redo-Historie bleibt erhalten, das wirkungslose Kommando hat
        // nichts verworfen
        assert!(invoker.can_redo());

        invoker.redo();
        assert_eq!(
            *journal.borrow(),
            vec!["exec a", "undo a", "exec x", "exec a"]
        );
    }

    #[test]
    fn clear_resets_the_history() {
        let journal = new_journal();
        let mut invoker = CommandInvoker::new();
        invoker.execute_command(ProbeCommand::new(&journal, "a"));
        invoker.undo();

        invoker.clear();

        assert!(invoker.is_empty());
        assert!(!invoker.can_undo());
        assert!(!invoker.can_redo());
    }
}
