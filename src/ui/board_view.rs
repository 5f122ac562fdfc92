//! Board rendering for the Othello GUI

use crate::{Board, Disc, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board.
///
/// Unlike a go-style board, Othello discs sit inside the cells, so the
/// grid lines run along cell borders and all coordinate math works on
/// cell centers.
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Disc,
        last_move: Option<Pos>,
        legal_moves: &[Pos],
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        // Draw grid lines
        self.draw_grid(&painter);

        // Draw coordinate labels
        self.draw_coordinates(&painter);

        // Draw placed discs
        self.draw_discs(&painter, board);

        // Draw legal move hints
        if !game_over {
            self.draw_legal_hints(&painter, legal_moves);
        }

        // Draw last move marker
        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = legal_moves.contains(&board_pos);

                    self.draw_hover_preview(&painter, board_pos, current_turn, is_valid);

                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 8x8 cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw coordinate labels (A-H, 1-8)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        // Column labels (A-H) above the board
        for col in 0..BOARD_SIZE {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + (col as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + 10.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        // Row labels (1-8) left of the board
        for row in 0..BOARD_SIZE {
            let y = self.board_rect.min.y + BOARD_MARGIN + (row as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + 10.0, y);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{}", row + 1),
                font.clone(),
                GRID_LINE,
            );
        }
    }

    /// Draw all placed discs
    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let disc = board.get(pos);

                if disc != Disc::Empty {
                    self.draw_disc(painter, pos, disc);
                }
            }
        }
    }

    /// Draw a single disc with visual polish
    fn draw_disc(&self, painter: &Painter, pos: Pos, disc: Disc) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        match disc {
            Disc::Black => {
                // Shadow
                let shadow_offset = Vec2::new(2.0, 2.0);
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );

                // Main disc
                painter.circle_filled(center, radius, BLACK_DISC);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    BLACK_DISC_HIGHLIGHT,
                );
            }
            Disc::White => {
                // Shadow
                let shadow_offset = Vec2::new(2.0, 2.0);
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );

                // Main disc
                painter.circle_filled(center, radius, WHITE_DISC);

                // Inner shadow for depth
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_DISC_SHADOW),
                );
            }
            Disc::Empty => {}
        }
    }

    /// Draw small dots on every cell the side to move may play
    fn draw_legal_hints(&self, painter: &Painter, legal_moves: &[Pos]) {
        let radius = self.cell_size * LEGAL_HINT_RADIUS_RATIO;
        for &pos in legal_moves {
            let center = self.board_to_screen(pos);
            painter.circle_filled(center, radius, legal_hint());
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Disc, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        let color = if is_valid {
            match turn {
                Disc::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Disc::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Disc::Empty => return,
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if col >= 0 && col < BOARD_SIZE as i32 && row >= 0 && row < BOARD_SIZE as i32 {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
