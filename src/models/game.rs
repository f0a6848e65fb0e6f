//! Game state: lifecycle, turn order, and the reveal/judge cycle.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::{Board, CellRef, Player, RevealStep, Roster};

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No board installed; the roster screen is shown.
    Setup,
    /// A board is installed and cells can be played.
    Playing,
}

/// The host's call on a revealed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The current player answered correctly.
    Correct,
    /// The current player answered incorrectly.
    Incorrect,
}

/// What happened when a cell was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The clue now shows its question.
    QuestionShown,
    /// The clue now shows its answer; a judgment is pending.
    AnswerShown,
    /// The clue had already been played; nothing changed.
    Ignored,
    /// A judgment is still pending elsewhere; the reveal was refused and
    /// no state changed.
    JudgmentPending,
}

/// Record of a resolved judgment, for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgment {
    /// The cell the judgment applied to.
    pub cell: CellRef,
    /// The verdict that was applied.
    pub verdict: Verdict,
    /// The clue's point value.
    pub value: i64,
    /// Id of the player the verdict was judged against.
    pub player_id: u32,
}

/// All game state: the roster, the board, whose turn it is, and the one
/// pending judgment slot.
///
/// The current player is an index into the roster (always valid; the
/// roster never shrinks once the game exists). Advancing the turn wraps
/// from the last player back to the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    phase: GamePhase,
    board: Option<Board>,
    roster: Roster,
    current: usize,
    pending: Option<CellRef>,
}

impl Game {
    /// Creates a game in the `Setup` phase with a fixed roster.
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        Self {
            phase: GamePhase::Setup,
            board: None,
            roster,
            current: 0,
            pending: None,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The installed board, if the game is playing.
    #[must_use]
    pub const fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// The roster, in turn order.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Index of the current player in the roster.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        // The index stays in bounds: `start` resets it and `advance_turn`
        // wraps it modulo the roster length.
        self.roster
            .get(self.current)
            .expect("current player index in bounds")
    }

    /// The cell awaiting a correct/incorrect call, if any.
    #[must_use]
    pub const fn pending_judgment(&self) -> Option<CellRef> {
        self.pending
    }

    /// Installs an acquired board and begins play.
    ///
    /// The current player becomes the first roster entry. Acquisition
    /// happens before this call; a failed acquisition never reaches the
    /// game, so the board is only ever installed whole.
    pub fn start(&mut self, board: Board) {
        self.board = Some(board);
        self.current = 0;
        self.pending = None;
        self.phase = GamePhase::Playing;
    }

    /// Activates the clue at `cell`, stepping its display state.
    ///
    /// `Hidden` clues show their question, `Question` clues show their
    /// answer and open a pending judgment, and `Answer` clues ignore the
    /// activation. While a judgment is pending every reveal is refused
    /// with [`RevealOutcome::JudgmentPending`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not playing or `cell` is off the
    /// board.
    pub fn reveal(&mut self, cell: CellRef) -> Result<RevealOutcome> {
        if self.phase != GamePhase::Playing {
            anyhow::bail!("Cannot reveal a clue before the game has started");
        }
        if self.pending.is_some() {
            return Ok(RevealOutcome::JudgmentPending);
        }

        let board = self.board.as_mut().expect("playing games have a board");
        let Some(clue) = board.clue_at_mut(cell) else {
            anyhow::bail!(
                "Cell (column {}, row {}) is outside the board",
                cell.column,
                cell.row
            );
        };

        Ok(match clue.advance() {
            RevealStep::QuestionShown => RevealOutcome::QuestionShown,
            RevealStep::AnswerShown => {
                self.pending = Some(cell);
                RevealOutcome::AnswerShown
            }
            RevealStep::AlreadyAnswered => RevealOutcome::Ignored,
        })
    }

    /// Resolves the pending judgment.
    ///
    /// `Correct` adds the clue's row value to the current player's score
    /// and keeps the turn. `Incorrect` leaves scores alone and passes the
    /// turn to the next player, wrapping from last to first. Either way
    /// the pending slot is consumed, so a clue is judged exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if no judgment is pending.
    pub fn judge(&mut self, verdict: Verdict) -> Result<Judgment> {
        let Some(cell) = self.pending.take() else {
            anyhow::bail!("No answer is awaiting judgment");
        };

        let value = Board::row_value(cell.row);
        let player_id = self.current_player().id;

        match verdict {
            Verdict::Correct => {
                let player = self
                    .roster
                    .get_mut(self.current)
                    .expect("current player index in bounds");
                player.score += value;
            }
            Verdict::Incorrect => {
                self.advance_turn();
            }
        }

        Ok(Judgment {
            cell,
            verdict,
            value,
            player_id,
        })
    }

    /// Clears the board and zeroes every score, keeping the roster and
    /// its order. The game returns to `Setup` until a fresh board is
    /// installed with [`Game::start`].
    pub fn clear_same_players(&mut self) {
        self.board = None;
        self.pending = None;
        self.roster.reset_scores();
        self.phase = GamePhase::Setup;
    }

    /// Moves the current-player pointer to the next roster entry,
    /// wrapping from the last player back to the first.
    fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.roster.len();
    }
}
