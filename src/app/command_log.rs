//! Begrenzter Verlauf ausgeführter Editor-Commands.
//!
//! Aufeinanderfolgende Verschiebungen desselben Kontrollpunkts (ein Drag)
//! werden zu einem Eintrag mit der letzten Zielposition zusammengefasst.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    ///
    /// Ein `MoveControlPoint` für denselben Punkt wie der letzte Eintrag ersetzt
    /// diesen. Ist das Log voll, wird die ältere Hälfte verworfen.
    pub fn record(&mut self, command: AppCommand) {
        if let (
            Some(AppCommand::MoveControlPoint { id: last_id, pos }),
            AppCommand::MoveControlPoint { id, pos: new_pos },
        ) = (self.entries.last_mut(), &command)
        {
            if last_id == id {
                *pos = *new_pos;
                return;
            }
        }

        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
