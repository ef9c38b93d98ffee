//! # Drill Session Module
//!
//! The note-guessing game, headless. A session owns a neck, a current
//! target note, and the marking to display: one random position of the
//! target while guessing, or every position of it after a wrong answer.

use rand::Rng;

use crate::error::NeckError;
use crate::marking::Marking;
use crate::neck::Neck;
use crate::note::Note;

/// The result of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Right answer; the session has already advanced to a new target.
    Correct,
    /// Wrong answer; the marking now reveals every position of the
    /// target, which stays in place for another try.
    Incorrect,
}

/// An interactive note-recognition drill over one neck.
#[derive(Debug, Clone)]
pub struct DrillSession {
    neck: Neck,
    target: Note,
    marking: Marking,
}

impl DrillSession {
    /// Start a session and pick the first target.
    pub fn new<R: Rng>(neck: Neck, rng: &mut R) -> Result<Self, NeckError> {
        let mut session = Self {
            neck,
            target: Note::A,
            marking: Vec::new(),
        };
        session.advance(rng)?;
        Ok(session)
    }

    pub fn neck(&self) -> &Neck {
        &self.neck
    }

    /// The note the player is being asked to name.
    pub fn target(&self) -> Note {
        self.target
    }

    /// What the front end should highlight right now.
    pub fn marking(&self) -> &Marking {
        &self.marking
    }

    /// Pick a new random target and mark one random position of it.
    ///
    /// Targets are drawn from the notes actually present on the neck, so
    /// short necks never ask for a note the player cannot find.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> Result<(), NeckError> {
        let present: Vec<Note> = Note::CHROMATIC
            .into_iter()
            .filter(|&note| !self.neck.positions_of(note).is_empty())
            .collect();
        // A valid neck holds at least three distinct notes per string.
        let target = present[rng.gen_range(0..present.len())];
        let mark = self.neck.mark_random(target, rng)?;
        self.target = target;
        self.marking = vec![mark];
        Ok(())
    }

    /// Check a guess against the target.
    ///
    /// A correct guess advances to the next target; a wrong one reveals
    /// every position of the current target and leaves it standing.
    pub fn guess<R: Rng>(&mut self, guess: Note, rng: &mut R) -> Result<GuessOutcome, NeckError> {
        if guess == self.target {
            self.advance(rng)?;
            Ok(GuessOutcome::Correct)
        } else {
            self.marking = self.neck.mark_all(self.target);
            Ok(GuessOutcome::Incorrect)
        }
    }
}
