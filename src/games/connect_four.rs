use egui::Color32;

use super::{BoardGame, DIRECTIONS, Outcome, PieceStyle, Player, run_length};

const ROWS: usize = 6;
const COLS: usize = 7;
const CONNECT: usize = 4;

/// Four in a row on a 6x7 board; pieces drop to the lowest free row
#[derive(Debug, Clone)]
pub struct ConnectFour {
    /// Indexed as [row][col], row 0 at the top
    board: [[Option<Player>; COLS]; ROWS],
    current_player: Player,
    outcome: Outcome,
}

impl ConnectFour {
    pub fn new() -> Self {
        Self {
            board: [[None; COLS]; ROWS],
            current_player: Player::One,
            outcome: Outcome::Playing,
        }
    }

    /// Row a piece dropped into `col` would land on
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.board[row][col].is_none())
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardGame for ConnectFour {
    fn name(&self) -> &'static str {
        "Connect Four"
    }

    fn rows(&self) -> usize {
        ROWS
    }

    fn cols(&self) -> usize {
        COLS
    }

    fn piece(&self, row: usize, col: usize) -> Option<Player> {
        self.board.get(row)?.get(col).copied().flatten()
    }

    /// Drops into `col`; the row only picks the column
    fn play(&mut self, _row: usize, col: usize) -> bool {
        if self.outcome.is_over() || col >= COLS {
            return false;
        }
        let Some(row) = self.landing_row(col) else {
            return false;
        };

        let player = self.current_player;
        self.board[row][col] = Some(player);

        if DIRECTIONS
            .iter()
            .any(|&dir| run_length(self, player, (row, col), dir) >= CONNECT)
        {
            self.outcome = Outcome::Won(player);
        } else if self.board[0].iter().all(Option::is_some) {
            self.outcome = Outcome::Draw;
        } else {
            self.current_player = player.opponent();
        }

        true
    }

    fn current_player(&self) -> Player {
        self.current_player
    }

    fn outcome(&self) -> Outcome {
        self.outcome
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn player_name(&self, player: Player) -> &'static str {
        match player {
            Player::One => "Red",
            Player::Two => "Yellow",
        }
    }

    fn piece_style(&self) -> PieceStyle {
        PieceStyle::Discs {
            one: Color32::from_rgb(220, 50, 50),
            two: Color32::from_rgb(240, 200, 40),
        }
    }
}
