use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Outcome of submitting a guess
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input failed validation with the error that was already pending.
    NoChange,
    /// Input failed validation and was recorded as the pending error.
    Rejected(InputError),
    TooLow,
    TooHigh,
    Won,
    Lost,
}

impl GuessOutcome {
    /// Whether this outcome could have caused an update to the session
    pub const fn has_update(self) -> bool {
        use GuessOutcome::*;
        match self {
            NoChange => false,
            Rejected(_) => true,
            TooLow => true,
            TooHigh => true,
            Won => true,
            Lost => true,
        }
    }

    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::TooLow | Self::TooHigh | Self::Won | Self::Lost)
    }
}

/// A single play-through, from drawing the secret to winning or losing.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    difficulty: Difficulty,
    secret: Number,
    max_attempts: Number,
    attempts_used: Number,
    state: SessionState,
    history: Vec<GuessRecord>,
    started: bool,
    pending_error: Option<InputError>,
    input: String,
    feedback: Option<Feedback>,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, generator: impl SecretGenerator) -> Self {
        let secret = generator.generate();
        log::debug!("new session: {}", difficulty);
        log::trace!("secret: {}", secret);
        Self {
            difficulty,
            secret,
            max_attempts: difficulty.attempt_budget(),
            attempts_used: 0,
            state: Default::default(),
            history: Vec::new(),
            started: false,
            pending_error: None,
            input: String::new(),
            feedback: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn max_attempts(&self) -> Number {
        self.max_attempts
    }

    pub fn attempts_used(&self) -> Number {
        self.attempts_used
    }

    pub fn attempts_remaining(&self) -> Number {
        self.max_attempts.saturating_sub(self.attempts_used)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Whether a guess has been accepted, which locks the difficulty.
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn pending_error(&self) -> Option<InputError> {
        self.pending_error
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// The secret, available only once the session is finished.
    pub fn revealed_secret(&self) -> Option<Number> {
        self.state.is_finished().then_some(self.secret)
    }

    /// Changes the difficulty, returning `false` when play has already begun.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.started {
            log::debug!("difficulty locked, ignoring {}", difficulty);
            return false;
        }

        self.difficulty = difficulty;
        self.max_attempts = difficulty.attempt_budget();
        log::debug!("difficulty: {}", difficulty);
        true
    }

    pub fn on_input_change(&mut self, input: String) {
        self.input = input;
        self.pending_error = None;
    }

    /// Submits the held input buffer.
    pub fn submit_input(&mut self) -> Result<GuessOutcome> {
        let input = core::mem::take(&mut self.input);
        let outcome = self.submit_guess(&input);
        if !matches!(outcome, Ok(accepted) if accepted.is_accepted()) {
            self.input = input;
        }
        outcome
    }

    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome> {
        self.check_playing()?;

        let guess = match validate_guess(raw) {
            Ok(guess) => guess,
            Err(err) if self.pending_error == Some(err) => {
                log::trace!("rejected {:?} again: {}", raw, err);
                return Ok(GuessOutcome::NoChange);
            }
            Err(err) => {
                log::trace!("rejected {:?}: {}", raw, err);
                self.pending_error = Some(err);
                return Ok(GuessOutcome::Rejected(err));
            }
        };

        self.pending_error = None;
        self.started = true;
        self.attempts_used += 1;

        let verdict = Verdict::classify(guess, self.secret);
        self.history.push(GuessRecord {
            value: guess,
            verdict,
        });
        log::trace!("guess #{}: {} -> {:?}", self.attempts_used, guess, verdict);

        let outcome = if verdict.is_correct() {
            self.end_session(true);
            self.feedback = Some(Feedback::Won {
                attempts: self.attempts_used,
            });
            GuessOutcome::Won
        } else if self.attempts_used >= self.max_attempts {
            self.end_session(false);
            self.feedback = Some(Feedback::Lost {
                secret: self.secret,
            });
            GuessOutcome::Lost
        } else {
            let remaining = self.attempts_remaining();
            if matches!(verdict, Verdict::High) {
                self.feedback = Some(Feedback::TooHigh { remaining });
                GuessOutcome::TooHigh
            } else {
                self.feedback = Some(Feedback::TooLow { remaining });
                GuessOutcome::TooLow
            }
        };

        self.input.clear();
        Ok(outcome)
    }

    /// Starts over with a new secret, keeping the chosen difficulty.
    pub fn restart(&mut self, generator: impl SecretGenerator) {
        *self = Self::new(self.difficulty, generator);
    }

    fn end_session(&mut self, won: bool) {
        self.state = if won {
            SessionState::Won
        } else {
            SessionState::Lost
        };
        log::debug!(
            "session ended: {:?} after {} of {}",
            self.state,
            self.attempts_used,
            self.max_attempts
        );
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
