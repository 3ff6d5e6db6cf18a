use serde::{Deserialize, Serialize};

use crate::util::time;

/// The editor owns the current content and is the only producer of
/// [`Snapshot`] values.
#[derive(Debug, Default)]
pub struct Editor {
    content: String,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current content. Always reflects the most recent
    /// [`Editor::set_content`] or [`Editor::restore`] call.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the current content. Overwrite semantics, not append.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Captures the current content by value into a new, independent
    /// snapshot. Later edits never alter a snapshot already taken.
    pub fn create_snapshot(&self) -> Snapshot {
        Snapshot {
            content: self.content.clone(),
            taken_at: time::timestamp_secs(),
        }
    }

    /// Sets the current content to the snapshot's captured value,
    /// overwriting whatever was there.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.content = snapshot.content.clone();
    }
}

/// An immutable capture of editor content at a point in time.
///
/// Snapshots expose no mutators; the only way to mint one is
/// [`Editor::create_snapshot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    content: String,
    taken_at: u64,
}

impl Snapshot {
    /// The captured content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// When the capture was taken, in seconds since the UNIX epoch.
    pub fn taken_at(&self) -> u64 {
        self.taken_at
    }
}
