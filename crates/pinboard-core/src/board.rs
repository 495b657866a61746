//! Sticky-note board: the collection of positioned items the layout
//! utilities operate on.

use crate::canvas::{CanvasSizing, Positioned, canvas_size};
use crate::grid::{snap_to_grid, snap_to_grid_jittered};
use kurbo::{Point, Size};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Board loading/saving errors.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// A single sticky note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickyNote {
    pub id: Uuid,
    /// Top-left corner in canvas coordinates.
    pub position: Point,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl StickyNote {
    /// Create a note with a fresh ID.
    pub fn new(text: impl Into<String>, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            text: text.into(),
            color: None,
        }
    }
}

impl Positioned for StickyNote {
    fn position(&self) -> Point {
        self.position
    }
}

/// All notes on a board, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub notes: Vec<StickyNote>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if the board has no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Place a new note near `at`, snapped to the grid with a little scatter.
    pub fn add_note<R: Rng>(
        &mut self,
        text: impl Into<String>,
        at: Point,
        grid_size: f64,
        rng: &mut R,
    ) -> Uuid {
        let position = snap_to_grid_jittered(at, grid_size, false, rng);
        let note = StickyNote::new(text, position);
        let id = note.id;
        log::debug!("added note {} at ({:.1}, {:.1})", id, position.x, position.y);
        self.notes.push(note);
        id
    }

    /// Look up a note by ID.
    pub fn note(&self, id: Uuid) -> Option<&StickyNote> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Drop a note at `to`, snapped exactly to the grid.
    /// Returns false if the note doesn't exist.
    pub fn move_note(&mut self, id: Uuid, to: Point, grid_size: f64) -> bool {
        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.position = snap_to_grid(to, grid_size).point;
                true
            }
            None => false,
        }
    }

    /// Remove a note by ID.
    pub fn remove_note(&mut self, id: Uuid) -> Option<StickyNote> {
        let index = self.notes.iter().position(|n| n.id == id)?;
        Some(self.notes.remove(index))
    }

    /// Re-snap every note to a (possibly new) grid size, e.g. after a
    /// breakpoint change. Unless `immediate`, notes are scattered inside
    /// their cells like freshly added ones.
    pub fn snap_all<R: Rng>(&mut self, grid_size: f64, immediate: bool, rng: &mut R) {
        for note in &mut self.notes {
            note.position = snap_to_grid_jittered(note.position, grid_size, immediate, rng);
        }
        log::debug!("re-snapped {} notes to a {}px grid", self.notes.len(), grid_size);
    }

    /// Canvas size needed to show every note.
    pub fn canvas_size(&self, sizing: &CanvasSizing) -> Size {
        canvas_size(&self.notes, sizing)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> BoardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BoardError::Serialization(e.to_string()))
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> BoardResult<Self> {
        serde_json::from_str(json).map_err(|e| BoardError::Serialization(e.to_string()))
    }

    /// Read a board file.
    pub fn load(path: &Path) -> BoardResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| BoardError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json).map_err(|e| match e {
            BoardError::Serialization(msg) => {
                BoardError::Serialization(format!("Failed to parse {}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Write a board file.
    pub fn save(&self, path: &Path) -> BoardResult<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .map_err(|e| BoardError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_add_note_snaps_near_cell() {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(5);
        let id = board.add_note("hello", Point::new(118.0, 83.0), 40.0, &mut rng);

        let note = board.note(id).unwrap();
        assert_eq!(note.text, "hello");
        // Cell (120, 80) with at most 3px of scatter
        assert!((note.position.x - 120.0).abs() <= 3.0);
        assert!((note.position.y - 80.0).abs() <= 3.0);
    }

    #[test]
    fn test_move_note_snaps_exactly() {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(5);
        let id = board.add_note("a", Point::ZERO, 40.0, &mut rng);

        assert!(board.move_note(id, Point::new(233.0, 419.0), 40.0));
        assert_eq!(board.note(id).unwrap().position, Point::new(240.0, 400.0));
        assert!(!board.move_note(Uuid::new_v4(), Point::ZERO, 40.0));
    }

    #[test]
    fn test_remove_note() {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(5);
        let a = board.add_note("a", Point::ZERO, 40.0, &mut rng);
        let b = board.add_note("b", Point::new(400.0, 0.0), 40.0, &mut rng);

        let removed = board.remove_note(a).unwrap();
        assert_eq!(removed.text, "a");
        assert_eq!(board.len(), 1);
        assert!(board.note(b).is_some());
        assert!(board.remove_note(a).is_none());
    }

    #[test]
    fn test_canvas_size_follows_notes() {
        let mut board = Board::new();
        assert_eq!(board.canvas_size(&CanvasSizing::default()), Size::new(1200.0, 800.0));

        board.notes.push(StickyNote::new("far", Point::new(1000.0, 700.0)));
        assert_eq!(board.canvas_size(&CanvasSizing::default()), Size::new(1600.0, 1300.0));
    }

    #[test]
    fn test_snap_all_immediate() {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(5);
        board.notes.push(StickyNote::new("a", Point::new(17.0, 33.0)));
        board.notes.push(StickyNote::new("b", Point::new(-4.0, 96.0)));
        board.snap_all(10.0, true, &mut rng);
        assert_eq!(board.notes[0].position, Point::new(20.0, 30.0));
        assert_eq!(board.notes[1].position, Point::new(0.0, 100.0));
    }

    #[test]
    fn test_snap_all_scattered() {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(11);
        board.notes.push(StickyNote::new("a", Point::new(118.0, 83.0)));
        board.notes.push(StickyNote::new("b", Point::new(118.0, 83.0)));
        board.snap_all(40.0, false, &mut rng);
        for note in &board.notes {
            assert!((note.position.x - 120.0).abs() <= 3.0);
            assert!((note.position.y - 80.0).abs() <= 3.0);
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let mut board = Board::new();
        let mut note = StickyNote::new("groceries", Point::new(80.0, 120.0));
        note.color = Some("#ffeb3b".to_string());
        board.notes.push(note);

        let json = board.to_json().unwrap();
        let restored = Board::from_json(&json).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = Board::from_json("{ not json").unwrap_err();
        assert!(matches!(err, BoardError::Serialization(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");

        let mut board = Board::new();
        board.notes.push(StickyNote::new("persisted", Point::new(40.0, 40.0)));
        board.save(&path).unwrap();

        let loaded = Board::load(&path).unwrap();
        assert_eq!(loaded, board);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Board::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, BoardError::Io(_)));
    }
}
