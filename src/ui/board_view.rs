//! Board rendering for the Freedom GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Bitboard, Board, Player, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Side length of the board last drawn
    dim: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            board_rect: Rect::NOTHING,
            dim: 10,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked empty cell, if any.
    ///
    /// `live` holds the stones of each player that currently form a live four.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        to_move: Player,
        last_move: Option<Pos>,
        live: [Bitboard; 2],
        accepts_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board filling the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.dim = board.dim();
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / self.dim as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board, live);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        let mut clicked_pos = None;

        if accepts_input {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                if board.is_empty(board_pos) {
                    let center = self.board_to_screen(board_pos);
                    let radius = self.cell_size * STONE_RADIUS_RATIO;
                    painter.circle_filled(center, radius, hover_stone(to_move == Player::One));

                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = self.dim as f32 * self.cell_size;

        for i in 0..=self.dim {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw row and column indices, matching the `row,col` notation in logs
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..self.dim {
            let center = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;

            let pos = Pos2::new(self.board_rect.min.x + center, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, i.to_string(), font.clone(), GRID_LINE);

            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, self.board_rect.min.y + center);
            painter.text(pos, egui::Align2::CENTER_CENTER, i.to_string(), font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board, live: [Bitboard; 2]) {
        for player in Player::BOTH {
            let plane = board.plane(player);
            for idx in plane.iter_ones() {
                let pos = Pos::from_index(idx, self.dim);
                self.draw_stone(painter, pos, player);
                if live[player.index()].get(idx) {
                    self.draw_live_ring(painter, pos);
                }
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match player {
            Player::Two => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Player::One => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
        }
    }

    fn draw_live_ring(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        painter.circle_stroke(center, radius, Stroke::new(3.0, LIVE_HIGHLIGHT));
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Convert screen coordinates to the cell under them
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col, self.dim) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Centre of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
