//! Players and the turn-ordered roster.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One contestant: an id, a display name, and a running score.
///
/// Ids start at 1 and follow creation order. A blank name defaults to
/// `player{id}`. The score starts at 0 and is touched only by judgment
/// resolution and by a restart's score reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique id, assigned in creation order starting at 1.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Running score.
    pub score: i64,
}

impl Player {
    /// Creates a player with a zero score.
    ///
    /// A name that is empty after trimming is replaced with `player{id}`.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            format!("player{id}")
        } else {
            name
        };

        Self { id, name, score: 0 }
    }
}

/// Pending name slots edited before the game starts.
///
/// Slots can be added, removed, and retyped freely; ids do not exist yet.
/// [`RosterDraft::build`] turns the surviving slots into a [`Roster`] in
/// slot order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RosterDraft {
    slots: Vec<String>,
}

impl RosterDraft {
    /// Creates a draft with a single empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![String::new()],
        }
    }

    /// Creates a draft pre-filled with `names`, one slot each.
    #[must_use]
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots: Vec<String> = names.into_iter().map(Into::into).collect();
        if slots.is_empty() {
            Self::new()
        } else {
            Self { slots }
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the draft has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot text at `index`, if any.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// Iterates over the slot texts in order.
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    /// Appends an empty slot and returns its index.
    pub fn add_slot(&mut self) -> usize {
        self.slots.push(String::new());
        self.slots.len() - 1
    }

    /// Removes the slot at `index`; out-of-range indices are ignored.
    pub fn remove_slot(&mut self, index: usize) {
        if index < self.slots.len() {
            self.slots.remove(index);
        }
    }

    /// Appends `ch` to the slot at `index`; out-of-range indices are ignored.
    pub fn push_char(&mut self, index: usize, ch: char) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.push(ch);
        }
    }

    /// Removes the last character of the slot at `index`, if any.
    pub fn pop_char(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.pop();
        }
    }

    /// Builds the roster from the surviving slots, assigning ids in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft has no slots.
    pub fn build(&self) -> Result<Roster> {
        Roster::from_names(self.slots.iter().cloned())
    }
}

/// The turn-ordered list of players.
///
/// Built once from the pending name slots when the game starts; the list
/// and its order are preserved for the rest of the session (restarts only
/// reset scores).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Builds a roster from name slots, assigning ids 1, 2, 3, … in order.
    ///
    /// # Errors
    ///
    /// Returns an error if `names` is empty: a game needs at least one
    /// player before it can start.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(i as u32 + 1, name))
            .collect();

        if players.is_empty() {
            anyhow::bail!("Add at least one player before starting");
        }

        Ok(Self { players })
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The player at `index` (turn order), if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Mutable access to the player at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Iterates over players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Resets every score to 0, preserving the players and their order.
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
    }
}
