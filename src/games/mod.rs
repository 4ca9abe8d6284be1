//! Board games shipped with the portal
//!
//! Each game is pure turn logic behind the [`BoardGame`] trait. A
//! [`BoardGameSession`] wraps one in a window of its own and runs it on the
//! display the launcher hands over.

mod board;
mod connect_four;
mod othello;
mod screen;
mod session;
mod tictactoe;

use std::sync::Arc;

use egui::Color32;
use enum_map::{Enum, EnumMap};

pub use board::BoardLayout;
pub use connect_four::ConnectFour;
pub use othello::Othello;
pub use screen::GameScreen;
pub use session::BoardGameSession;
pub use tictactoe::TicTacToe;

use crate::menu::lifecycle::{Factory, Launchable};

/// The two sides of a board game; `One` always opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the opposite player
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// State of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    Won(Player),
    Draw,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

/// How pieces are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceStyle {
    /// X for player one, O for player two
    Marks,
    /// Filled discs in one color per player
    Discs { one: Color32, two: Color32 },
}

/// Wins per player and draws, kept across rounds of one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    wins: EnumMap<Player, u32>,
    draws: u32,
}

impl Scoreboard {
    /// Counts a finished round; `Playing` is ignored
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(player) => self.wins[player] += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Playing => {}
        }
    }

    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player]
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }
}

/// Turn-based game on a rectangular board
pub trait BoardGame {
    /// Name shown in the window caption
    fn name(&self) -> &'static str;

    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// Owner of the cell, if occupied
    fn piece(&self, row: usize, col: usize) -> Option<Player>;

    /// Plays the current player's move at the cell
    ///
    /// Returns false if the move is illegal or the round is over; the state
    /// is then unchanged.
    fn play(&mut self, row: usize, col: usize) -> bool;

    /// Player whose turn it is
    fn current_player(&self) -> Player;

    fn outcome(&self) -> Outcome;

    /// Clears the board for a new round
    fn reset(&mut self);

    /// Display name of a player
    fn player_name(&self, player: Player) -> &'static str;

    fn piece_style(&self) -> PieceStyle {
        PieceStyle::Marks
    }
}

/// Factory launching a fresh `G` in its own session
pub fn factory<G>() -> Factory
where
    G: BoardGame + Default + 'static,
{
    Arc::new(|| Ok(Box::new(BoardGameSession::new(G::default())) as Box<dyn Launchable>))
}

/// Length of the run of `player`'s pieces through (`row`, `col`) along
/// direction (`dr`, `dc`), counting both ways
pub(crate) fn run_length<G: BoardGame + ?Sized>(
    game: &G,
    player: Player,
    (row, col): (usize, usize),
    (dr, dc): (isize, isize),
) -> usize {
    let walk = |sign: isize| {
        let mut count = 0;
        let (mut r, mut c) = (row as isize, col as isize);
        loop {
            r += dr * sign;
            c += dc * sign;
            if r < 0 || c < 0 || r >= game.rows() as isize || c >= game.cols() as isize {
                break;
            }
            if game.piece(r as usize, c as usize) != Some(player) {
                break;
            }
            count += 1;
        }
        count
    };

    1 + walk(1) + walk(-1)
}

/// The four line directions a run can take
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoreboard_records_rounds() {
        let mut scores = Scoreboard::default();
        scores.record(Outcome::Won(Player::Two));
        scores.record(Outcome::Won(Player::Two));
        scores.record(Outcome::Draw);
        scores.record(Outcome::Playing);

        assert_eq!(scores.wins(Player::One), 0);
        assert_eq!(scores.wins(Player::Two), 2);
        assert_eq!(scores.draws(), 1);
    }

    #[test]
    fn test_factories_build_fresh_sessions() {
        let make = factory::<TicTacToe>();
        assert!(make().is_ok());
        assert!(make().is_ok());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().opponent(), Player::Two);
    }
}
