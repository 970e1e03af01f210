//! Fixed-depth minimax with alpha-beta pruning, and the root move driver.

use std::ops::{Deref, DerefMut};

use chess_core::{Color, Move, MoveError, RulesEngine};
use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::eval::{material_score, outcome_score};
use crate::score::Score;

/// A move played on the rules engine for as long as this guard lives.
///
/// Dropping the guard takes the move back, so every exit from a search node
/// (normal return, cutoff or `?`) leaves the game as it found it.
pub struct AppliedMove<'a, R: RulesEngine + ?Sized> {
    rules: &'a mut R,
}

impl<'a, R: RulesEngine + ?Sized> AppliedMove<'a, R> {
    pub fn apply(rules: &'a mut R, mv: Move) -> Result<Self, MoveError> {
        rules.apply_move(mv)?;
        Ok(Self { rules })
    }
}

impl<R: RulesEngine + ?Sized> Deref for AppliedMove<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.rules
    }
}

impl<R: RulesEngine + ?Sized> DerefMut for AppliedMove<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.rules
    }
}

impl<R: RulesEngine + ?Sized> Drop for AppliedMove<'_, R> {
    fn drop(&mut self) {
        self.rules.undo_last_move();
    }
}

/// Minimax value of the position `depth` plies deep, from `bot`'s point of view.
///
/// Maximizing layers raise `alpha`, minimizing layers lower `beta`, and a node
/// stops looking at siblings once `beta <= alpha`. With the full window
/// (`Score::Loss`, `Score::Win`) the result equals unpruned minimax.
/// `nodes` counts every position visited.
pub fn search<R: RulesEngine + ?Sized>(
    rules: &mut R,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    bot: Color,
    nodes: &mut u64,
) -> Result<Score, MoveError> {
    *nodes += 1;

    // Game over is checked once per node, before the depth cutoff.
    if rules.is_game_over() {
        return Ok(outcome_score(rules, bot));
    }
    if depth == 0 {
        return Ok(material_score(rules, bot));
    }

    let mut best = if maximizing { Score::Loss } else { Score::Win };

    for mv in rules.legal_moves(None) {
        let score = {
            let mut child = AppliedMove::apply(&mut *rules, mv)?;
            search(&mut *child, depth - 1, alpha, beta, !maximizing, bot, nodes)?
        };

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }

    Ok(best)
}

/// Outcome of the root search, before the move is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootDecision {
    pub mv: Move,
    pub score: Score,
    /// True when no move beat `Score::Loss` and the first legal move was taken.
    pub fallback: bool,
    pub nodes: u64,
}

/// Searches every root move and picks the strictly best one for `bot`.
///
/// Ties go to the move enumerated first. Returns `None` when the side to move
/// has no legal moves. The game is left unchanged.
pub fn decide<R: RulesEngine + ?Sized>(
    rules: &mut R,
    bot: Color,
    config: &SearchConfig,
) -> Result<Option<RootDecision>, MoveError> {
    let mut moves = rules.legal_moves(None);
    if moves.is_empty() {
        return Ok(None);
    }
    if config.canonical_order {
        moves.sort_by_key(|m| (m.from, m.to, m.promo));
    }

    let mut nodes = 0u64;
    let mut best: Option<(Move, Score)> = None;
    let mut best_score = Score::Loss;

    for &mv in &moves {
        let score = {
            let mut child = AppliedMove::apply(&mut *rules, mv)?;
            search(
                &mut *child,
                config.depth.saturating_sub(1),
                Score::Loss,
                Score::Win,
                false,
                bot,
                &mut nodes,
            )?
        };
        debug!(%mv, %score, "root move scored");

        if score > best_score {
            best_score = score;
            best = Some((mv, score));
        }
    }

    let decision = match best {
        Some((mv, score)) => RootDecision {
            mv,
            score,
            fallback: false,
            nodes,
        },
        None => {
            warn!(candidates = moves.len(), "every move loses, playing the first legal one");
            RootDecision {
                mv: moves[0],
                score: Score::Loss,
                fallback: true,
                nodes,
            }
        }
    };
    Ok(Some(decision))
}

/// Picks the bot's move and plays it on `rules`.
///
/// `Ok(None)` means the side to move has no legal moves and nothing was
/// played. Unlike [`search`], a successful call leaves the chosen move applied.
pub fn choose_bot_move<R: RulesEngine + ?Sized>(
    rules: &mut R,
    bot: Color,
    config: &SearchConfig,
) -> Result<Option<Move>, MoveError> {
    let decision = decide(rules, bot, config)?;
    commit(rules, decision, config)
}

/// Plays a root decision on `rules`, if there is one.
pub(crate) fn commit<R: RulesEngine + ?Sized>(
    rules: &mut R,
    decision: Option<RootDecision>,
    config: &SearchConfig,
) -> Result<Option<Move>, MoveError> {
    let Some(decision) = decision else {
        info!("no legal moves for the bot");
        return Ok(None);
    };
    rules.apply_move(decision.mv)?;
    info!(
        mv = %decision.mv,
        score = %decision.score,
        nodes = decision.nodes,
        depth = config.depth,
        "bot move chosen"
    );
    Ok(Some(decision.mv))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
