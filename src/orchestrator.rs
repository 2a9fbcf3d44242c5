//! Game and match orchestration.
//!
//! This module runs knight's Isolation games between [`Player`]s under a per-turn
//! time limit, and runs whole matches of such games in parallel. It manages:
//! - Turn management (request an action, wait, validate, apply)
//! - Forfeits for players that time out, play illegally or panic
//! - Match scheduling across a rayon thread pool
//!
//! # Turn Flow
//!
//! ```text
//! [Spawn worker] -> player publishes into ActionSlot (any number of times)
//!   -> [Deadline or worker returns] -> [Close slot, take last action]
//!   -> [Validate] -> [Apply] -> [Check terminal] -> next turn ...
//! ```
//!
//! Workers are never joined after a timeout. A searching player notices the
//! closed slot at its next depth boundary and exits on its own, so a stranded
//! worker runs for at most the rest of the depth it was in. With at most eight
//! jumps per position that depth costs up to about eight times everything the
//! worker did before the deadline; during the placement plies, where the root
//! offers every open cell, the depth in progress is usually shallow. Stranded
//! workers share the CPU with later turns and with other games of a match.

use std::fmt;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::agent::{AIType, ActionSlot, Player};
use crate::error::{Error, Result};
use crate::game_repr::{Action, GameState, Isolation, PlayerId};

/// Default per-turn time limit
pub const TIME_LIMIT: Duration = Duration::from_millis(150);

/// Plies of random play shared by both games of a fair round
pub const FAIR_OPENING_PLIES: u32 = 2;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The loser had no legal action on its turn
    Normal,
    /// The loser published nothing before the deadline
    Timeout,
    /// The loser published an action that was not legal
    InvalidMove,
    /// The loser's worker thread panicked
    Exception,
}

impl Status {
    pub fn is_forfeit(&self) -> bool {
        *self != Status::Normal
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Normal => "normal",
            Status::Timeout => "timeout",
            Status::InvalidMove => "invalid move",
            Status::Exception => "exception",
        };
        f.write_str(name)
    }
}

/// Complete record of a finished game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub initial_state: Isolation,
    pub final_state: Isolation,
    /// Actions applied after `initial_state`, in order
    pub history: Vec<Action>,
    pub winner: PlayerId,
    pub status: Status,
}

impl GameRecord {
    pub fn loser(&self) -> PlayerId {
        self.winner.opponent()
    }

    pub fn ply_count(&self) -> u32 {
        self.final_state.ply_count()
    }
}

/// What came back from one turn's worker
enum TurnOutcome {
    Action(Action),
    Forfeit(Status),
}

/// Run `player` on its own thread for at most `time_limit` and collect the
/// last action it published.
fn request_action(player: &Arc<dyn Player>, state: &Isolation, time_limit: Duration) -> Result<TurnOutcome> {
    let slot = ActionSlot::new();
    let (done_tx, done_rx) = mpsc::channel::<()>();

    let worker = Arc::clone(player);
    let worker_slot = slot.clone();
    let worker_state = *state;

    thread::Builder::new()
        .name(format!("{}-ply-{}", player.name(), state.ply_count()))
        .spawn(move || {
            worker.get_action(&worker_state, &worker_slot);
            // The receiver is gone if the turn already timed out
            let _ = done_tx.send(());
        })
        .map_err(|source| Error::Spawn { source })?;

    let waited = done_rx.recv_timeout(time_limit);
    let action = slot.take();

    let outcome = match (waited, action) {
        // A panicking worker drops the sender without sending
        (Err(RecvTimeoutError::Disconnected), _) => TurnOutcome::Forfeit(Status::Exception),
        (_, None) => TurnOutcome::Forfeit(Status::Timeout),
        (_, Some(action)) => TurnOutcome::Action(action),
    };
    Ok(outcome)
}

/// Play one game from `initial_state`. `agents[0]` moves on even plies,
/// `agents[1]` on odd plies.
pub fn play_game(agents: [Arc<dyn Player>; 2], initial_state: Isolation, time_limit: Duration) -> Result<GameRecord> {
    let started = Instant::now();
    let mut state = initial_state;
    let mut history = Vec::new();

    let (winner, status) = loop {
        let mover = state.player();
        if state.is_terminal() {
            break (mover.opponent(), Status::Normal);
        }

        let player = &agents[mover.index()];
        let action = match request_action(player, &state, time_limit)? {
            TurnOutcome::Action(action) => action,
            TurnOutcome::Forfeit(status) => {
                warn!("{} ({mover}) forfeits at ply {}: {status}", player.name(), state.ply_count());
                break (mover.opponent(), status);
            }
        };

        match state.try_result(action) {
            Ok(next) => {
                debug!("{} ({mover}) plays {action}", player.name());
                history.push(action);
                state = next;
            }
            Err(err) => {
                warn!("{} ({mover}) forfeits: {err}", player.name());
                break (mover.opponent(), Status::InvalidMove);
            }
        }
    };

    info!(
        "{} ({winner}) beats {} after {} plies ({status}) in {:.2?}",
        agents[winner.index()].name(),
        agents[winner.opponent().index()].name(),
        state.ply_count(),
        started.elapsed()
    );

    Ok(GameRecord {
        initial_state,
        final_state: state,
        history,
        winner,
        status,
    })
}

/// Position after `plies` uniformly random actions from the empty board
pub fn random_opening<R: Rng + ?Sized>(rng: &mut R, plies: u32) -> Isolation {
    let mut state = Isolation::new();
    for _ in 0..plies {
        match state.actions().choose(rng) {
            Some(&action) => state = state.result(action),
            None => break,
        }
    }
    state
}

/// Match configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Each round is two games, one with the agent in each seat
    pub rounds: usize,
    pub time_limit: Duration,
    /// Start both games of a round from the same random opening
    pub fair_matches: bool,
    /// Games played in parallel
    pub processes: usize,
    /// Seed for fair-match openings; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            time_limit: TIME_LIMIT,
            fair_matches: false,
            processes: num_cpus::get(),
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<()> {
        let problem = if self.rounds == 0 {
            Some("rounds must be at least 1")
        } else if self.time_limit.is_zero() {
            Some("time limit must be positive")
        } else if self.processes == 0 {
            Some("processes must be at least 1")
        } else {
            None
        };

        match problem {
            Some(message) => Err(Error::InvalidConfiguration {
                message: message.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn total_games(&self) -> usize {
        self.rounds * 2
    }
}

/// One scheduled game of a match
#[derive(Debug, Clone, Copy)]
struct GameSpec {
    round: usize,
    agent_seat: PlayerId,
    initial_state: Isolation,
}

/// One finished game of a match, seen from the agent's side
#[derive(Debug, Clone)]
pub struct MatchGame {
    pub round: usize,
    pub agent_seat: PlayerId,
    pub record: GameRecord,
}

impl MatchGame {
    pub fn agent_won(&self) -> bool {
        self.record.winner == self.agent_seat
    }
}

/// Results of a match between the agent and one opponent
#[derive(Debug, Clone)]
pub struct MatchSummary {
    pub agent: AIType,
    pub opponent: AIType,
    /// Games ordered by round, agent first in the first game of each round
    pub games: Vec<MatchGame>,
}

impl MatchSummary {
    pub fn wins(&self) -> usize {
        self.games.iter().filter(|game| game.agent_won()).count()
    }

    pub fn losses(&self) -> usize {
        self.games.len() - self.wins()
    }

    /// Games the agent lost by forfeit
    pub fn forfeits(&self) -> usize {
        self.games
            .iter()
            .filter(|game| !game.agent_won() && game.record.status.is_forfeit())
            .count()
    }

    /// Fraction of games won by the agent, in `[0, 1]`
    pub fn win_rate(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        self.wins() as f64 / self.games.len() as f64
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}: won {} of {} games ({:.1}%), {} lost by forfeit",
            self.agent.display_name(),
            self.opponent.display_name(),
            self.wins(),
            self.games.len(),
            self.win_rate() * 100.0,
            self.forfeits()
        )
    }
}

fn schedule(config: &MatchConfig) -> Vec<GameSpec> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut games = Vec::with_capacity(config.total_games());
    for round in 0..config.rounds {
        let initial_state = if config.fair_matches {
            random_opening(&mut rng, FAIR_OPENING_PLIES)
        } else {
            Isolation::new()
        };

        for agent_seat in [PlayerId::First, PlayerId::Second] {
            games.push(GameSpec {
                round,
                agent_seat,
                initial_state,
            });
        }
    }
    games
}

fn play_scheduled(spec: GameSpec, agent: AIType, opponent: AIType, time_limit: Duration) -> Result<MatchGame> {
    let mut agents = [
        opponent.create_player(PlayerId::First),
        opponent.create_player(PlayerId::Second),
    ];
    agents[spec.agent_seat.index()] = agent.create_player(spec.agent_seat);

    let record = play_game(agents, spec.initial_state, time_limit)?;
    Ok(MatchGame {
        round: spec.round,
        agent_seat: spec.agent_seat,
        record,
    })
}

/// Play `config.rounds` rounds of `agent` against `opponent`
pub fn run_matches(config: &MatchConfig, agent: AIType, opponent: AIType) -> Result<MatchSummary> {
    config.validate()?;

    info!(
        "Running {} games: {} vs {} ({} ms per turn, fair matches: {})",
        config.total_games(),
        agent.display_name(),
        opponent.display_name(),
        config.time_limit.as_millis(),
        config.fair_matches
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.processes)
        .thread_name(|index| format!("match-{index}"))
        .build()?;

    let specs = schedule(config);
    let time_limit = config.time_limit;
    let games = pool.install(|| {
        specs
            .into_par_iter()
            .map(|spec| play_scheduled(spec, agent, opponent, time_limit))
            .collect::<Result<Vec<_>>>()
    })?;

    let summary = MatchSummary { agent, opponent, games };
    info!("{summary}");
    Ok(summary)
}
