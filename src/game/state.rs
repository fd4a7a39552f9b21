//! Authoritative Spider session state.
//!
//! `GameState` owns every card in play:
//! - `tableau`: one `Pile` per column
//! - `stock`: cards waiting to be dealt, top of stock last
//! - `completed`: retired King-to-Ace runs
//! - `moves`: the move log backing undo/redo
//!
//! It is mutated only through `deal_row`, `move_stack`, `undo`, `redo`
//! (or `apply`, which dispatches to them). Every mutation is validated
//! first; rejected requests return `false` and leave the state untouched.
//!
//! ## Usage
//!
//! ```
//! use spider_engine::core::{GameRng, SpiderConfig};
//! use spider_engine::game::GameState;
//!
//! let mut rng = GameRng::new(42);
//! let mut game = GameState::new(SpiderConfig::new(), &mut rng).unwrap();
//!
//! assert_eq!(game.stock().len(), 50);
//! assert!(game.deal_row());
//! assert_eq!(game.stock().len(), 40);
//! assert!(game.undo());
//! assert_eq!(game.stock().len(), 50);
//! ```

use log::{debug, error, trace};
use rustc_hash::FxHashSet;

use super::intent::Intent;
use crate::cards::{build_deck, shuffle, Card, Suit};
use crate::core::{ConfigError, PileError, RandomSource, SpiderConfig};
use crate::history::{CollectedRun, MoveLog, MoveRecord};
use crate::rules;
use crate::zones::Pile;

/// A Spider Solitaire session.
#[derive(Clone, Debug)]
pub struct GameState {
    config: SpiderConfig,
    tableau: Vec<Pile>,
    stock: Vec<Card>,
    completed: Vec<Vec<Card>>,
    moves: MoveLog,
}

impl GameState {
    /// Shuffle a fresh deck with `rng` and deal the opening layout.
    ///
    /// Each column gets its share of the initial deal with only the
    /// last-dealt card face-up. Everything left over becomes the stock.
    pub fn new<R>(config: SpiderConfig, rng: &mut R) -> Result<Self, ConfigError>
    where
        R: RandomSource + ?Sized,
    {
        config.validate()?;

        let deck = shuffle(build_deck(config.suits, config.decks), rng);
        let mut draw = deck.into_iter();

        let tableau: Vec<Pile> = config
            .initial_deal_counts()
            .into_iter()
            .map(|count| {
                Pile::from_cards(draw.by_ref().take(count).enumerate().map(|(row, card)| {
                    if row + 1 == count {
                        card.face_up()
                    } else {
                        card.face_down()
                    }
                }))
            })
            .collect();

        let stock: Vec<Card> = draw.map(Card::face_down).collect();

        debug!(
            "dealt {} columns, {} cards in stock ({} suits, {} decks)",
            config.columns,
            stock.len(),
            config.suits.count(),
            config.decks
        );

        Ok(Self {
            config,
            tableau,
            stock,
            completed: Vec::new(),
            moves: MoveLog::new(),
        })
    }

    /// Build a game from an explicit layout.
    ///
    /// Used by hosts that restore a specific position and by tests. The
    /// stock is listed bottom to top; its last card is dealt first. Stock
    /// cards are turned face-down.
    pub fn from_parts(
        config: SpiderConfig,
        tableau: Vec<Pile>,
        stock: Vec<Card>,
    ) -> Result<Self, ConfigError> {
        if config.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if config.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        if tableau.len() != config.columns {
            return Err(ConfigError::ColumnMismatch {
                expected: config.columns,
                actual: tableau.len(),
            });
        }

        Ok(Self {
            config,
            tableau,
            stock: stock.into_iter().map(Card::face_down).collect(),
            completed: Vec::new(),
            moves: MoveLog::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SpiderConfig {
        &self.config
    }

    /// Number of tableau columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.config.columns
    }

    #[must_use]
    pub fn tableau(&self) -> &[Pile] {
        &self.tableau
    }

    /// One tableau column, if `col` is in range.
    #[must_use]
    pub fn pile(&self, col: usize) -> Option<&Pile> {
        self.tableau.get(col)
    }

    /// Stock, bottom to top.
    #[must_use]
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    /// Retired runs in retirement order, each King first.
    #[must_use]
    pub fn completed(&self) -> &[Vec<Card>] {
        &self.completed
    }

    /// Suit of each retired run.
    pub fn completed_suits(&self) -> impl Iterator<Item = Suit> + '_ {
        self.completed
            .iter()
            .filter_map(|run| run.first().map(Card::suit))
    }

    #[must_use]
    pub fn moves(&self) -> &MoveLog {
        &self.moves
    }

    /// Cards across tableau, stock, and completed runs.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.tableau.iter().map(Pile::len).sum::<usize>()
            + self.stock.len()
            + self.completed.iter().map(Vec::len).sum::<usize>()
    }

    /// True if no card id appears twice anywhere in the game.
    #[must_use]
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.tableau
            .iter()
            .flat_map(|pile| pile.cards().iter())
            .chain(self.stock.iter())
            .chain(self.completed.iter().flatten())
            .all(|card| seen.insert(card.id()))
    }

    // === Dealing ===

    /// True if every column has a card and the stock covers a full row.
    #[must_use]
    pub fn can_deal_row(&self) -> bool {
        self.tableau.iter().all(|pile| !pile.is_empty()) && self.stock.len() >= self.columns()
    }

    /// Deal one face-up stock card onto each column.
    ///
    /// Returns `false` and changes nothing if `can_deal_row` is false.
    pub fn deal_row(&mut self) -> bool {
        match self.apply_deal() {
            Some(record) => {
                self.moves.record(record);
                true
            }
            None => false,
        }
    }

    fn apply_deal(&mut self) -> Option<MoveRecord> {
        if !self.can_deal_row() {
            trace!("deal rejected: stock {} cards", self.stock.len());
            return None;
        }

        // Top of stock goes to column 0
        let start = self.stock.len() - self.columns();
        let row = self.stock.split_off(start);
        let dealt: Vec<Card> = row.into_iter().rev().map(rules::flip_card).collect();
        for (pile, card) in self.tableau.iter_mut().zip(&dealt) {
            pile.push(*card);
        }

        debug!("dealt a row, {} cards left in stock", self.stock.len());
        Some(MoveRecord::deal(dealt))
    }

    // === Moving ===

    /// Would moving the top `count` cards of `from` onto `to` be legal?
    #[must_use]
    pub fn can_move_stack(&self, from: usize, count: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        match (self.tableau.get(from), self.tableau.get(to)) {
            (Some(source), Some(target)) => rules::can_move_stack(source, count, target),
            _ => false,
        }
    }

    /// Move the top `count` cards of `from` onto `to`.
    ///
    /// On success, flips a newly exposed face-down card on `from`, then
    /// retires a completed run from `to` if the move finished one.
    pub fn move_stack(&mut self, from: usize, count: usize, to: usize) -> bool {
        if !self.can_move_stack(from, count, to) {
            trace!("move rejected: {count} from {from} to {to}");
            return false;
        }

        match self.apply_move(from, count, to) {
            Ok(record) => {
                self.moves.record(record);
                true
            }
            Err(err) => {
                error!("validated move failed: {err}");
                false
            }
        }
    }

    /// Commit a move that `can_move_stack` accepted.
    ///
    /// The only fallible step is the first one, so an error leaves the
    /// state untouched.
    fn apply_move(&mut self, from: usize, count: usize, to: usize) -> Result<MoveRecord, PileError> {
        let cards = self.tableau[from].take_descending_run(count)?;

        let flipped = if rules::should_flip_top_card(&self.tableau[from]) {
            self.tableau[from].flip_top()
        } else {
            None
        };

        self.tableau[to].push_many(cards.iter().copied());
        debug!("moved {count} from {from} to {to}");

        let collected = match self.retire_run(to) {
            Some(run) => Some(CollectedRun {
                cards: run,
                revealed: self.tableau[to].flip_top(),
            }),
            None => None,
        };

        Ok(MoveRecord::stack_move(from, to, cards, flipped).with_collected(collected))
    }

    /// Retire a completed run from the top of `col`, if there is one.
    ///
    /// The retirement is logged as its own action, so it can be undone
    /// like a deal or a move. The card under the run is left as it is.
    pub fn try_collect_complete_sequence(&mut self, col: usize) -> bool {
        match self.apply_collect(col) {
            Some(record) => {
                self.moves.record(record);
                true
            }
            None => false,
        }
    }

    fn apply_collect(&mut self, col: usize) -> Option<MoveRecord> {
        let cards = self.retire_run(col)?;
        Some(MoveRecord::Collect {
            column: col,
            run: CollectedRun {
                cards,
                revealed: None,
            },
        })
    }

    fn retire_run(&mut self, col: usize) -> Option<Vec<Card>> {
        let run = self.tableau.get_mut(col)?.collect_complete_sequence()?;
        self.completed.push(run.clone());
        debug!(
            "collected a run from column {col}, {} of {} complete",
            self.completed.len(),
            self.config.sequences_to_win()
        );
        Some(run)
    }

    /// True once every possible King-to-Ace run has been retired.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.completed.len() == self.config.sequences_to_win()
    }

    // === Undo / Redo ===

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.moves.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.moves.can_redo()
    }

    /// Reverse the latest action, including any run it retired.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.moves.last().cloned() else {
            trace!("undo rejected: nothing to undo");
            return false;
        };

        // Revert on a copy so a failure cannot leave a half-undone state
        let mut next = self.clone();
        if let Err(err) = next.revert(&record) {
            error!("cannot undo {record:?}: {err}");
            return false;
        }
        next.moves.take_undo();
        *self = next;

        let kind = match record {
            MoveRecord::Deal { .. } => "deal",
            MoveRecord::Move { .. } => "move",
            MoveRecord::Collect { .. } => "collection",
        };
        debug!("undid {kind}");
        true
    }

    fn revert(&mut self, record: &MoveRecord) -> Result<(), PileError> {
        match record {
            MoveRecord::Deal { cards } => {
                if cards.len() != self.tableau.len() {
                    return Err(PileError::InvalidCount {
                        count: cards.len(),
                        len: self.tableau.len(),
                    });
                }
                for (pile, dealt) in self.tableau.iter_mut().zip(cards.iter()).rev() {
                    let card = pile.pop_many(1)?.remove(0);
                    if card.id() != dealt.id() {
                        return Err(PileError::InvalidRun { count: 1 });
                    }
                    self.stock.push(card.face_down());
                }
            }
            MoveRecord::Move {
                from,
                to,
                count,
                cards,
                flipped,
                collected,
            } => {
                let (from, to, count) = (*from, *to, *count);
                if from >= self.tableau.len() || to >= self.tableau.len() {
                    return Err(PileError::InvalidCount { count, len: 0 });
                }

                if let Some(run) = collected {
                    self.restore_run(to, run)?;
                }

                let returned = self.tableau[to].pop_many(count)?;
                if !returned.iter().map(Card::id).eq(cards.iter().map(Card::id)) {
                    return Err(PileError::InvalidRun { count });
                }
                if flipped.is_some() {
                    self.tableau[from].conceal_top();
                }
                self.tableau[from].push_many(returned);
            }
            MoveRecord::Collect { column, run } => {
                if *column >= self.tableau.len() {
                    return Err(PileError::InvalidCount { count: run.cards.len(), len: 0 });
                }
                self.restore_run(*column, run)?;
            }
        }
        Ok(())
    }

    /// Put a retired run back on top of `col`.
    fn restore_run(&mut self, col: usize, run: &CollectedRun) -> Result<(), PileError> {
        if run.revealed.is_some() {
            self.tableau[col].conceal_top();
        }
        if self.completed.pop().as_ref() != Some(&run.cards) {
            return Err(PileError::InvalidRun { count: run.cards.len() });
        }
        self.tableau[col].push_many(run.cards.iter().copied());
        Ok(())
    }

    /// Re-apply the latest undone action.
    pub fn redo(&mut self) -> bool {
        let Some(record) = self.moves.take_redo() else {
            trace!("redo rejected: nothing to redo");
            return false;
        };

        let redone = match record {
            MoveRecord::Deal { .. } => self.apply_deal(),
            MoveRecord::Move { from, to, count, .. } => {
                if self.can_move_stack(from, count, to) {
                    self.apply_move(from, count, to).ok()
                } else {
                    None
                }
            }
            MoveRecord::Collect { column, .. } => self.apply_collect(column),
        };

        match redone {
            Some(applied) => {
                self.moves.record_redone(applied);
                debug!("redid an action, {} left to redo", self.moves.redo_len());
                true
            }
            None => {
                error!("cannot redo {record:?}");
                self.moves.restore_redo(record);
                false
            }
        }
    }

    // === Intents ===

    /// Dispatch an input-layer intent. Returns whether anything changed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        trace!("applying {intent}");
        match intent {
            Intent::Deal => self.deal_row(),
            Intent::Move { from, count, to } => self.move_stack(from, count, to),
            Intent::Undo => self.undo(),
            Intent::Redo => self.redo(),
        }
    }

    /// Every legal move, by source column, then longest run first, then
    /// destination column.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Intent> {
        let columns = self.columns();
        let mut moves = Vec::new();

        for (from, pile) in self.tableau.iter().enumerate() {
            for count in (1..=pile.max_movable_run_length()).rev() {
                for to in (0..columns).filter(|&to| to != from) {
                    if rules::can_move_stack(pile, count, &self.tableau[to]) {
                        moves.push(Intent::move_stack(from, count, to));
                    }
                }
            }
        }

        moves
    }
}
