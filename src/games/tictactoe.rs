use super::{BoardGame, DIRECTIONS, Outcome, Player, run_length};

const SIZE: usize = 3;

/// Three in a row on a 3x3 board
#[derive(Debug, Clone)]
pub struct TicTacToe {
    /// Indexed as [row][col]
    board: [[Option<Player>; SIZE]; SIZE],
    current_player: Player,
    outcome: Outcome,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            board: [[None; SIZE]; SIZE],
            current_player: Player::One,
            outcome: Outcome::Playing,
        }
    }

    fn is_board_full(&self) -> bool {
        self.board.iter().flatten().all(Option::is_some)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardGame for TicTacToe {
    fn name(&self) -> &'static str {
        "Tic Tac Toe"
    }

    fn rows(&self) -> usize {
        SIZE
    }

    fn cols(&self) -> usize {
        SIZE
    }

    fn piece(&self, row: usize, col: usize) -> Option<Player> {
        self.board.get(row)?.get(col).copied().flatten()
    }

    fn play(&mut self, row: usize, col: usize) -> bool {
        if self.outcome.is_over() || row >= SIZE || col >= SIZE {
            return false;
        }
        if self.board[row][col].is_some() {
            return false;
        }

        let player = self.current_player;
        self.board[row][col] = Some(player);

        if DIRECTIONS
            .iter()
            .any(|&dir| run_length(self, player, (row, col), dir) >= SIZE)
        {
            self.outcome = Outcome::Won(player);
        } else if self.is_board_full() {
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
            Player::One => "X",
            Player::Two => "O",
        }
    }
}
