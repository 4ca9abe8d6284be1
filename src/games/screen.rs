//! Board game screen: input handling and frame composition
//!
//! Kept free of window and GPU state so a round can be played and drawn in
//! tests.

use egui::{Align2, Color32, Rect, pos2, vec2};
use tracing::info;

use super::{BoardGame, BoardLayout, Outcome, PieceStyle, Player, Scoreboard};
use crate::app::input::{InputEvent, KeyCode};
use crate::app::renderer::command::DrawList;

/// Session window size in logical pixels
pub const SESSION_SIZE: u32 = 900;

const BACKGROUND: Color32 = Color32::from_rgb(0, 166, 160);
const BOARD: Color32 = Color32::from_rgb(0, 110, 105);
const GRID: Color32 = Color32::from_rgb(230, 230, 230);
const TEXT: Color32 = Color32::from_rgb(40, 40, 40);
const MARK: Color32 = Color32::WHITE;

const STATUS_Y: f32 = 60.0;
const SCORE_Y: f32 = 850.0;
const BOARD_TOP: f32 = 120.0;
const BOARD_BOTTOM: f32 = 800.0;
const GRID_WIDTH: f32 = 4.0;

/// What the session should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// Nothing visible changed
    None,
    /// The board changed; draw a new frame
    Redraw,
    /// Leave the session and return to the launcher
    Exit,
}

/// One game plus its scores, laid out on a fixed-size window
pub struct GameScreen<G> {
    game: G,
    scores: Scoreboard,
    layout: BoardLayout,
}

impl<G: BoardGame> GameScreen<G> {
    pub fn new(game: G) -> Self {
        let area = Rect::from_min_max(
            pos2(40.0, BOARD_TOP),
            pos2(SESSION_SIZE as f32 - 40.0, BOARD_BOTTOM),
        );
        let layout = BoardLayout::fit(game.rows(), game.cols(), area);

        Self {
            game,
            scores: Scoreboard::default(),
            layout,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Applies one input event
    pub fn handle(&mut self, event: &InputEvent) -> ScreenAction {
        match event {
            InputEvent::Quit | InputEvent::KeyPress { key: KeyCode::Escape } => ScreenAction::Exit,
            InputEvent::KeyPress { key: KeyCode::R } => {
                self.game.reset();
                ScreenAction::Redraw
            }
            InputEvent::KeyPress { .. } => ScreenAction::None,
            InputEvent::Press { pos } => self.press(*pos),
        }
    }

    fn press(&mut self, pos: [f32; 2]) -> ScreenAction {
        if self.game.outcome().is_over() {
            self.game.reset();
            return ScreenAction::Redraw;
        }

        let Some((row, col)) = self.layout.screen_to_cell(pos) else {
            return ScreenAction::None;
        };
        if !self.game.play(row, col) {
            return ScreenAction::None;
        }

        let outcome = self.game.outcome();
        if outcome.is_over() {
            self.scores.record(outcome);
            match outcome {
                Outcome::Won(player) => {
                    info!(game = self.game.name(), winner = self.game.player_name(player), "Round won")
                }
                _ => info!(game = self.game.name(), "Round drawn"),
            }
        }
        ScreenAction::Redraw
    }

    /// Status line above the board
    pub fn status(&self) -> String {
        match self.game.outcome() {
            Outcome::Playing => {
                format!("{} to move", self.game.player_name(self.game.current_player()))
            }
            Outcome::Won(player) => {
                format!("{} wins! Click to play again", self.game.player_name(player))
            }
            Outcome::Draw => "Draw! Click to play again".to_string(),
        }
    }

    /// Score line below the board
    pub fn score_line(&self) -> String {
        format!(
            "{} {}  |  {} {}  |  Draws {}",
            self.game.player_name(Player::One),
            self.scores.wins(Player::One),
            self.game.player_name(Player::Two),
            self.scores.wins(Player::Two),
            self.scores.draws(),
        )
    }

    /// Builds the draw list for one frame
    pub fn compose(&self) -> DrawList {
        let mut list = DrawList::new(BACKGROUND);
        let center_x = SESSION_SIZE as f32 / 2.0;

        list.text(self.status(), pos2(center_x, STATUS_Y), Align2::CENTER_CENTER, 40.0, TEXT);

        list.fill_rect(self.layout.bounds(), BOARD, 8.0);
        for (from, to) in self.layout.grid_lines() {
            list.line(from, to, GRID_WIDTH, GRID);
        }

        let style = self.game.piece_style();
        for row in 0..self.game.rows() {
            for col in 0..self.game.cols() {
                if let Some(player) = self.game.piece(row, col) {
                    self.compose_piece(&mut list, style, player, row, col);
                }
            }
        }

        list.text(self.score_line(), pos2(center_x, SCORE_Y), Align2::CENTER_CENTER, 24.0, TEXT);
        list
    }

    fn compose_piece(&self, list: &mut DrawList, style: PieceStyle, player: Player, row: usize, col: usize) {
        let center = self.layout.cell_center(row, col);
        let cell = self.layout.cell_size;

        match (style, player) {
            (PieceStyle::Marks, Player::One) => {
                let half = cell * 0.3;
                list.line(center - vec2(half, half), center + vec2(half, half), 8.0, MARK);
                list.line(center + vec2(half, -half), center + vec2(-half, half), 8.0, MARK);
            }
            (PieceStyle::Marks, Player::Two) => {
                list.circle(center, cell * 0.3, None, Some((8.0, MARK)));
            }
            (PieceStyle::Discs { one, two }, _) => {
                let fill = if player == Player::One { one } else { two };
                list.circle(center, cell * 0.4, Some(fill), Some((2.0, TEXT)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::renderer::command::DrawCommand;
    use crate::games::{ConnectFour, Othello, TicTacToe};

    fn press_cell<G: BoardGame>(screen: &mut GameScreen<G>, row: usize, col: usize) -> ScreenAction {
        let center = screen.layout().cell_center(row, col);
        screen.handle(&InputEvent::Press { pos: [center.x, center.y] })
    }

    #[test]
    fn test_click_plays_the_cell_under_the_pointer() {
        let mut screen = GameScreen::new(TicTacToe::new());
        assert_eq!(press_cell(&mut screen, 1, 2), ScreenAction::Redraw);
        assert_eq!(screen.game().piece(1, 2), Some(Player::One));
        assert_eq!(screen.status(), "O to move");
    }

    #[test]
    fn test_click_outside_board_is_ignored() {
        let mut screen = GameScreen::new(TicTacToe::new());
        assert_eq!(
            screen.handle(&InputEvent::Press { pos: [5.0, 5.0] }),
            ScreenAction::None
        );
    }

    #[test]
    fn test_scores_persist_across_rounds() {
        let mut screen = GameScreen::new(TicTacToe::new());
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            press_cell(&mut screen, row, col);
        }
        assert_eq!(screen.game().outcome(), Outcome::Won(Player::One));
        assert_eq!(screen.status(), "X wins! Click to play again");

        // The next click starts a new round instead of playing
        press_cell(&mut screen, 2, 2);
        assert_eq!(screen.game().outcome(), Outcome::Playing);
        assert_eq!(screen.game().piece(2, 2), None);
        assert_eq!(screen.scores().wins(Player::One), 1);
        assert_eq!(screen.score_line(), "X 1  |  O 0  |  Draws 0");
    }

    #[test]
    fn test_escape_and_close_exit() {
        let mut screen = GameScreen::new(Othello::new());
        assert_eq!(
            screen.handle(&InputEvent::KeyPress { key: KeyCode::Escape }),
            ScreenAction::Exit
        );
        assert_eq!(screen.handle(&InputEvent::Quit), ScreenAction::Exit);
    }

    #[test]
    fn test_connect_four_click_anywhere_in_column() {
        let mut screen = GameScreen::new(ConnectFour::new());
        assert_eq!(press_cell(&mut screen, 0, 4), ScreenAction::Redraw);
        assert_eq!(screen.game().piece(5, 4), Some(Player::One));
    }

    #[test]
    fn test_compose_draws_every_piece() {
        let screen = GameScreen::new(Othello::new());
        let list = screen.compose();

        let discs = list
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Circle { fill: Some(_), .. }))
            .count();
        assert_eq!(discs, 4);
        assert_eq!(list.texts().next(), Some("Black to move"));
    }

    #[test]
    fn test_board_fits_window() {
        for layout in [
            *GameScreen::new(TicTacToe::new()).layout(),
            *GameScreen::new(ConnectFour::new()).layout(),
            *GameScreen::new(Othello::new()).layout(),
        ] {
            let bounds = layout.bounds().shrink(0.5);
            assert!(bounds.min.x >= 0.0 && bounds.max.x <= SESSION_SIZE as f32);
            assert!(bounds.min.y >= BOARD_TOP && bounds.max.y <= BOARD_BOTTOM);
        }
    }
}
