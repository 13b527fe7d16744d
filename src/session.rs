use std::fmt;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::RadicalCatalog;
use crate::config::QuizConfig;
use crate::quiz::{OPTION_COUNT, QuizRound, generate_round};
use crate::random::Randomness;
use crate::view::{Phase, Progress, SessionView};

/// Default length of the reveal window.
pub const DEFAULT_REVEAL_DELAY: Duration =
    Duration::from_millis(crate::config::DEFAULT_REVEAL_DELAY_MS);

/// Identifies the round whose reveal window a host timer is waiting on.
///
/// A ticket is only honoured while it matches the session's armed timer; resets and earlier
/// advances make it stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvanceTicket {
    round: u64,
}

/// Returned by a successful pick. The host schedules [`QuizSession::advance`] after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub ticket: AdvanceTicket,
    pub delay: Duration,
    /// Whether the picked option was the correct meaning.
    pub correct: bool,
}

/// Outcome of delivering an [`AdvanceTicket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A new radical is being asked.
    Drew,
    /// The pool is empty; the session is exhausted until reset.
    Exhausted,
    /// The ticket no longer matches the armed timer. Nothing changed.
    Stale,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("option {picked} was already picked for this round")]
    AlreadyRevealed { picked: usize },
    #[error("option index {index} is out of range for {count} options")]
    OptionOutOfRange { index: usize, count: usize },
    #[error("every radical has been seen; reset to start over")]
    Exhausted,
}

/// Host-provided yes/no confirmation shown before a reset.
pub trait ResetPrompt {
    fn confirm_reset(&mut self) -> bool;
}

impl<F: FnMut() -> bool> ResetPrompt for F {
    fn confirm_reset(&mut self) -> bool {
        self()
    }
}

/// Hands `fire` to a host timer and returns its handle.
///
/// When the host cannot schedule it, `fire` runs at once so the session never stays revealed.
pub fn schedule_advance<F, H, E>(fire: F, schedule: impl FnOnce(F) -> Result<H, E>) -> Option<H>
where
    F: FnOnce() + Clone,
    E: fmt::Debug,
{
    match schedule(fire.clone()) {
        Ok(handle) => Some(handle),
        Err(error) => {
            log::error!("failed to schedule the end of the reveal, advancing now: {error:?}");
            fire();
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RevealTimer {
    ticket: AdvanceTicket,
}

/// Quiz over the radical catalog, asking each radical once until the pool runs dry.
#[derive(Debug)]
pub struct QuizSession<'c, R = StdRng> {
    catalog: &'c RadicalCatalog,
    rng: R,
    reveal_delay: Duration,
    /// Undrawn catalog indices.
    pool: Vec<usize>,
    current: Option<QuizRound>,
    picked: Option<usize>,
    timer: Option<RevealTimer>,
    /// Bumped on every draw so tickets from earlier rounds never match.
    round: u64,
}

impl<'c> QuizSession<'c, StdRng> {
    /// Starts a session seeded from `config.seed`, or from entropy when unset.
    pub fn from_config(catalog: &'c RadicalCatalog, config: &QuizConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self::new(catalog, rng).with_reveal_delay(config.reveal_delay())
    }
}

impl<'c, R: Randomness> QuizSession<'c, R> {
    /// Fills the pool with every catalog index and draws the first radical.
    pub fn new(catalog: &'c RadicalCatalog, rng: R) -> Self {
        let mut session = Self {
            catalog,
            rng,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            pool: Vec::new(),
            current: None,
            picked: None,
            timer: None,
            round: 0,
        };
        session.restart();
        session
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    /// Records the answer and arms the reveal timer.
    ///
    /// # Errors
    /// * [`SessionError::Exhausted`] when there is no radical to answer.
    /// * [`SessionError::AlreadyRevealed`] when this round was already answered.
    /// * [`SessionError::OptionOutOfRange`] when `option_index` is not a button.
    ///
    /// A rejected pick leaves the session untouched.
    pub fn pick(&mut self, option_index: usize) -> Result<Reveal, SessionError> {
        let Some(round) = &self.current else {
            log::warn!("pick {option_index} rejected: session exhausted");
            return Err(SessionError::Exhausted);
        };

        if let Some(picked) = self.picked {
            log::warn!("pick {option_index} rejected: option {picked} already picked");
            return Err(SessionError::AlreadyRevealed { picked });
        }

        let Some(correct) = round.is_correct(option_index) else {
            log::warn!("pick {option_index} rejected: out of range");
            return Err(SessionError::OptionOutOfRange {
                index: option_index,
                count: OPTION_COUNT,
            });
        };

        let ticket = AdvanceTicket { round: self.round };
        self.picked = Some(option_index);
        self.timer = Some(RevealTimer { ticket });

        log::debug!(
            "radical #{} answered with option {option_index} ({})",
            round.radical_index + 1,
            if correct { "correct" } else { "wrong" }
        );

        Ok(Reveal {
            ticket,
            delay: self.reveal_delay,
            correct,
        })
    }

    /// Ends the reveal window identified by `ticket`.
    ///
    /// Draws the next radical, or moves to the exhausted phase when none remain.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> Advance {
        match self.timer {
            Some(timer) if timer.ticket == ticket => {}
            _ => {
                log::debug!("ignoring stale advance for round {}", ticket.round);
                return Advance::Stale;
            }
        }

        self.timer = None;
        self.picked = None;

        if self.pool.is_empty() {
            self.current = None;
            log::info!("all {} radicals seen", self.catalog.len());
            return Advance::Exhausted;
        }

        self.draw_next();
        Advance::Drew
    }

    /// Starts over with the full pool, cancelling any pending reveal timer.
    pub fn reset(&mut self) {
        if let Some(timer) = self.timer.take() {
            log::debug!("cancelled pending advance for round {}", timer.ticket.round);
        }

        log::info!("resetting quiz after {} radicals", self.progress());
        self.restart();
    }

    /// Resets only if `prompt` confirms. Returns whether the reset happened.
    pub fn request_reset<P: ResetPrompt + ?Sized>(&mut self, prompt: &mut P) -> bool {
        if !prompt.confirm_reset() {
            log::debug!("reset declined");
            return false;
        }

        self.reset();
        true
    }

    fn restart(&mut self) {
        self.pool = (0..self.catalog.len()).collect();
        self.picked = None;
        self.timer = None;
        self.draw_next();
    }

    /// Moves a uniformly chosen pool entry into the current round.
    ///
    /// Callers guarantee the pool is non-empty.
    fn draw_next(&mut self) {
        debug_assert!(!self.pool.is_empty(), "draw from an empty pool");

        let position = self.rng.index_below(self.pool.len());
        let radical_index = self.pool.remove(position);

        self.round += 1;
        self.current = Some(generate_round(&mut self.rng, self.catalog, radical_index));
        self.picked = None;

        log::debug!(
            "drew radical #{} ({} left in pool)",
            radical_index + 1,
            self.pool.len()
        );
    }
}

impl<R> QuizSession<'_, R> {
    pub fn phase(&self) -> Phase {
        match (&self.current, self.picked) {
            (None, _) => Phase::Exhausted,
            (Some(_), Some(_)) => Phase::Revealed,
            (Some(_), None) => Phase::Asking,
        }
    }

    pub fn current(&self) -> Option<&QuizRound> {
        self.current.as_ref()
    }

    pub fn picked(&self) -> Option<usize> {
        self.picked
    }

    pub fn is_revealed(&self) -> bool {
        self.picked.is_some()
    }

    /// Ticket of the armed reveal timer, if a pick is waiting to advance.
    pub fn pending_advance(&self) -> Option<AdvanceTicket> {
        self.timer.map(|timer| timer.ticket)
    }

    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    /// Number of radicals answered since the last reset.
    pub fn progress(&self) -> usize {
        self.total() - self.remaining()
    }

    /// Radicals not yet answered: the undrawn pool plus the radical being asked.
    pub fn remaining(&self) -> usize {
        let asking = usize::from(self.current.is_some() && self.picked.is_none());
        self.pool.len() + asking
    }

    /// Indices still waiting to be answered, in ascending order.
    pub fn remaining_indices(&self) -> Vec<usize> {
        let mut indices = self.pool.clone();
        if let (Some(round), None) = (&self.current, self.picked) {
            indices.push(round.radical_index);
            indices.sort_unstable();
        }
        indices
    }

    /// Size of the undrawn pool.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn view(&self) -> SessionView {
        SessionView::new(
            self.current.as_ref(),
            self.picked,
            Progress {
                seen: self.progress(),
                total: self.total(),
            },
        )
    }
}
