// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Notepad state: a persisted list of free-text notes.
//!
//! There is no explicit save step; every edit overwrites the note in place
//! and the caller rewrites the persisted list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single note. `content` is an opaque text blob the core never
/// interprets; only the editor widget renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Millisecond-timestamp string from creation time.
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The notes list plus the active editing selection.
#[derive(Debug, Clone, Default)]
pub struct NotesState {
    /// Ordered list, newest-first at creation.
    pub notes: Vec<Note>,
    /// Id of the note loaded into the editing fields.
    pub active: Option<String>,
    /// Title field contents for the active note.
    pub title_input: String,
}

impl NotesState {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            active: None,
            title_input: String::new(),
        }
    }

    pub fn active_note(&self) -> Option<&Note> {
        let id = self.active.as_deref()?;
        self.notes.iter().find(|n| n.id == id)
    }

    fn active_note_mut(&mut self) -> Option<&mut Note> {
        let id = self.active.clone()?;
        self.notes.iter_mut().find(|n| n.id == id)
    }

    /// Prepend a new placeholder note and select it. Returns the new id.
    pub fn create(&mut self, now: DateTime<Utc>) -> String {
        let note = Note {
            id: now.timestamp_millis().to_string(),
            title: "Untitled Note".to_string(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        };
        let id = note.id.clone();
        self.title_input = note.title.clone();
        self.notes.insert(0, note);
        self.active = Some(id.clone());
        id
    }

    /// Load a note into the editing fields.
    pub fn select(&mut self, id: &str) {
        if let Some(note) = self.notes.iter().find(|n| n.id == id) {
            self.title_input = note.title.clone();
            self.active = Some(note.id.clone());
        }
    }

    /// Title field edited: commit straight into the active note.
    pub fn edit_title(&mut self, title: String, now: DateTime<Utc>) {
        self.title_input = title.clone();
        if let Some(note) = self.active_note_mut() {
            note.title = title;
            note.updated_at = now;
        }
    }

    /// Editor contents changed: commit straight into the active note.
    pub fn edit_content(&mut self, content: String, now: DateTime<Utc>) {
        if let Some(note) = self.active_note_mut() {
            note.content = content;
            note.updated_at = now;
        }
    }

    /// Remove a note by id; clears the editing fields if it was active.
    pub fn delete(&mut self, id: &str) {
        self.notes.retain(|n| n.id != id);
        if self.active.as_deref() == Some(id) {
            self.active = None;
            self.title_input.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stamp(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    #[test]
    fn test_create_prepends_and_selects() {
        let mut notes = NotesState::default();
        let first = notes.create(stamp(1));
        let second = notes.create(stamp(2));

        assert_eq!(notes.notes.len(), 2);
        assert_eq!(notes.notes[0].id, second);
        assert_eq!(notes.notes[1].id, first);
        assert_eq!(notes.active.as_deref(), Some(second.as_str()));
        assert_eq!(notes.title_input, "Untitled Note");
        assert_eq!(second, stamp(2).timestamp_millis().to_string());
    }

    #[test]
    fn test_select_loads_editing_fields() {
        let mut notes = NotesState::default();
        let id = notes.create(stamp(1));
        notes.edit_title("Groceries".into(), stamp(2));
        notes.create(stamp(3));

        notes.select(&id);
        assert_eq!(notes.active.as_deref(), Some(id.as_str()));
        assert_eq!(notes.title_input, "Groceries");
    }

    #[test]
    fn test_edits_commit_continuously() {
        let mut notes = NotesState::default();
        notes.create(stamp(1));
        notes.edit_title("Plan".into(), stamp(2));
        notes.edit_content("- write tests".into(), stamp(3));

        let note = notes.active_note().unwrap();
        assert_eq!(note.title, "Plan");
        assert_eq!(note.content, "- write tests");
        assert_eq!(note.created_at, stamp(1));
        assert_eq!(note.updated_at, stamp(3));
    }

    #[test]
    fn test_delete_active_clears_selection() {
        let mut notes = NotesState::default();
        let id = notes.create(stamp(1));
        notes.edit_title("Doomed".into(), stamp(2));

        notes.delete(&id);
        assert!(notes.notes.iter().all(|n| n.id != id));
        assert!(notes.active.is_none());
        assert!(notes.title_input.is_empty());
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let mut notes = NotesState::default();
        let first = notes.create(stamp(1));
        let second = notes.create(stamp(2));

        notes.delete(&first);
        assert_eq!(notes.active.as_deref(), Some(second.as_str()));
        assert_eq!(notes.notes.len(), 1);
    }

    #[test]
    fn test_edits_without_selection_are_ignored() {
        let mut notes = NotesState::default();
        notes.edit_title("Nowhere".into(), stamp(1));
        notes.edit_content("lost".into(), stamp(1));
        assert!(notes.notes.is_empty());
    }
}
