use egui::Color32;

use super::{BoardGame, Outcome, PieceStyle, Player};

const SIZE: usize = 8;

/// All eight neighbours
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Othello on an 8x8 board; a move must outflank at least one disc
#[derive(Debug, Clone)]
pub struct Othello {
    board: [[Option<Player>; SIZE]; SIZE],
    current_player: Player,
    outcome: Outcome,
}

impl Othello {
    /// Standard opening: two discs each on the centre diagonals, black to move
    pub fn new() -> Self {
        let mut board = [[None; SIZE]; SIZE];
        board[3][3] = Some(Player::Two);
        board[4][4] = Some(Player::Two);
        board[3][4] = Some(Player::One);
        board[4][3] = Some(Player::One);

        Self {
            board,
            current_player: Player::One,
            outcome: Outcome::Playing,
        }
    }

    /// Discs `player` would flip by playing at the cell
    pub fn flips(&self, row: usize, col: usize, player: Player) -> Vec<(usize, usize)> {
        if row >= SIZE || col >= SIZE || self.board[row][col].is_some() {
            return Vec::new();
        }

        let mut flipped = Vec::new();
        for (dr, dc) in NEIGHBOURS {
            let mut line = Vec::new();
            let (mut r, mut c) = (row as isize + dr, col as isize + dc);
            while let Some(cell) = self.cell(r, c) {
                match cell {
                    Some(p) if p == player.opponent() => line.push((r as usize, c as usize)),
                    Some(_) => {
                        flipped.append(&mut line);
                        break;
                    }
                    None => break,
                }
                r += dr;
                c += dc;
            }
        }
        flipped
    }

    /// Whether `player` has any legal move
    pub fn has_move(&self, player: Player) -> bool {
        (0..SIZE).any(|row| (0..SIZE).any(|col| !self.flips(row, col, player).is_empty()))
    }

    /// Discs on the board for `player`
    pub fn count(&self, player: Player) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(player))
            .count()
    }

    fn cell(&self, row: isize, col: isize) -> Option<Option<Player>> {
        if row < 0 || col < 0 {
            return None;
        }
        self.board.get(row as usize)?.get(col as usize).copied()
    }

    /// Hands the turn over, passing when the opponent is stuck
    fn advance_turn(&mut self) {
        let next = self.current_player.opponent();
        if self.has_move(next) {
            self.current_player = next;
        } else if !self.has_move(self.current_player) {
            self.outcome = match self.count(Player::One).cmp(&self.count(Player::Two)) {
                std::cmp::Ordering::Greater => Outcome::Won(Player::One),
                std::cmp::Ordering::Less => Outcome::Won(Player::Two),
                std::cmp::Ordering::Equal => Outcome::Draw,
            };
        }
    }
}

impl Default for Othello {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardGame for Othello {
    fn name(&self) -> &'static str {
        "Othello"
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
        if self.outcome.is_over() {
            return false;
        }

        let player = self.current_player;
        let flipped = self.flips(row, col, player);
        if flipped.is_empty() {
            return false;
        }

        self.board[row][col] = Some(player);
        for (r, c) in flipped {
            self.board[r][c] = Some(player);
        }
        self.advance_turn();

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
            Player::One => "Black",
            Player::Two => "White",
        }
    }

    fn piece_style(&self) -> PieceStyle {
        PieceStyle::Discs {
            one: Color32::from_rgb(20, 20, 20),
            two: Color32::from_rgb(245, 245, 245),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board(current_player: Player) -> Othello {
        Othello {
            board: [[None; SIZE]; SIZE],
            current_player,
            outcome: Outcome::Playing,
        }
    }

    #[test]
    fn test_opening_moves() {
        let game = Othello::new();
        let legal: Vec<_> = (0..SIZE)
            .flat_map(|r| (0..SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| !game.flips(r, c, Player::One).is_empty())
            .collect();

        assert_eq!(legal, vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
    }

    #[test]
    fn test_move_flips_outflanked_discs() {
        let mut game = Othello::new();
        assert!(game.play(2, 3));

        assert_eq!(game.piece(3, 3), Some(Player::One));
        assert_eq!(game.count(Player::One), 4);
        assert_eq!(game.count(Player::Two), 1);
        assert_eq!(game.current_player(), Player::Two);
    }

    #[test]
    fn test_move_without_flip_rejected() {
        let mut game = Othello::new();
        assert!(!game.play(0, 0));
        assert!(!game.play(3, 3));
        assert!(!game.play(8, 0));
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn test_stuck_player_passes() {
        let mut game = empty_board(Player::One);
        game.board[0][0] = Some(Player::One);
        game.board[0][1] = Some(Player::Two);
        game.board[7][0] = Some(Player::One);
        game.board[7][1] = Some(Player::Two);

        assert!(game.play(0, 2));
        // White has nothing to outflank, so black moves again
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.outcome(), Outcome::Playing);
        assert!(game.play(7, 2));
    }

    #[test]
    fn test_disc_count_decides_when_nobody_can_move() {
        let mut game = empty_board(Player::One);
        game.board[0][0] = Some(Player::One);
        game.board[0][1] = Some(Player::Two);
        game.board[5][5] = Some(Player::Two);
        game.board[5][6] = Some(Player::Two);

        assert!(game.play(0, 2));
        assert_eq!(game.count(Player::One), 3);
        assert_eq!(game.count(Player::Two), 2);
        assert_eq!(game.outcome(), Outcome::Won(Player::One));
        assert!(!game.play(1, 1));
    }

    #[test]
    fn test_equal_discs_draw() {
        let mut game = empty_board(Player::One);
        game.board[0][0] = Some(Player::One);
        game.board[0][1] = Some(Player::Two);
        for col in 3..6 {
            game.board[7][col] = Some(Player::Two);
        }

        assert!(game.play(0, 2));
        assert_eq!(game.outcome(), Outcome::Draw);
    }
}
