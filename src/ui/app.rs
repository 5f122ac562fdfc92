//! Main application for the Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState, NewGameConfig, Phase};
use super::theme::*;
use crate::history::HistoryStore;
use crate::rules::GameOutcome;
use crate::Disc;

/// Main Othello application
pub struct OthelloApp {
    state: GameState,
    board_view: BoardView,
    history: HistoryStore,
    show_debug: bool,
    /// Depth used for the next new game (and applied live to the session)
    depth_setting: u8,
}

impl Default for OthelloApp {
    fn default() -> Self {
        Self {
            state: GameState::new(NewGameConfig::default()),
            board_view: BoardView::default(),
            history: HistoryStore::default(),
            show_debug: true,
            depth_setting: NewGameConfig::default().ai_depth,
        }
    }
}

impl OthelloApp {
    /// Create a new app with default settings
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self, mode: GameMode, first_to_move: Disc) {
        self.state.reset(NewGameConfig {
            mode,
            first_to_move,
            ai_depth: self.depth_setting,
        });
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (You: Black, first)").clicked() {
                        self.new_game(
                            GameMode::HumanVsAi {
                                human_color: Disc::Black,
                            },
                            Disc::Black,
                        );
                        ui.close_menu();
                    }
                    if ui.button("New Game (You: White, AI first)").clicked() {
                        self.new_game(
                            GameMode::HumanVsAi {
                                human_color: Disc::White,
                            },
                            Disc::Black,
                        );
                        ui.close_menu();
                    }
                    if ui.button("New Game (You: White, you first)").clicked() {
                        self.new_game(
                            GameMode::HumanVsAi {
                                human_color: Disc::White,
                            },
                            Disc::White,
                        );
                        ui.close_menu();
                    }
                    if ui.button("New Game (AI vs AI)").clicked() {
                        self.new_game(GameMode::SelfPlay, Disc::Black);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("AI", |ui| {
                    ui.label("Search depth");
                    if ui
                        .add(egui::Slider::new(&mut self.depth_setting, 1..=10))
                        .changed()
                    {
                        self.state.ai_depth = self.depth_setting;
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::HumanVsAi { human_color } => format!(
                            "You: {}",
                            if human_color == Disc::Black { "Black" } else { "White" }
                        ),
                        GameMode::SelfPlay => "AI vs AI".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("●○")
                    .size(20.0)
                    .color(egui::Color32::from_rgb(180, 180, 185)),
            );
            ui.add_space(4.0);
            ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Reversi").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.current_turn == Disc::Black;
            let (disc_char, color_name, accent) = if is_black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let disc_color = if is_black {
                    TEXT_PRIMARY
                } else {
                    egui::Color32::from_rgb(30, 30, 35)
                };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    disc_char,
                    egui::FontId::proportional(28.0),
                    disc_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = match self.state.phase() {
                        Phase::GameOver => ("Game Over", RESULT_HIGHLIGHT),
                        Phase::ComputerThinking => {
                            if self.state.is_ai_thinking() {
                                ("AI thinking...", STATUS_BUSY)
                            } else {
                                ("AI to move", STATUS_BUSY)
                            }
                        }
                        Phase::AwaitingHumanMove => ("Your turn", STATUS_OK),
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));

                    if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        ui.label(
                            RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                    }
                });
            });
        });
    }

    /// Render the disc count card
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let (black, white) = self.state.disc_counts();

            ui.horizontal(|ui| {
                ui.label(RichText::new("●").size(18.0).color(egui::Color32::from_rgb(60, 60, 65)));
                ui.label(RichText::new(format!("{}", black)).size(18.0).strong().color(TEXT_PRIMARY));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{}", white)).size(18.0).strong().color(TEXT_PRIMARY),
                    );
                    ui.label(
                        RichText::new("○").size(18.0).color(egui::Color32::from_rgb(200, 200, 205)),
                    );
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if ui
                        .add(
                            egui::Label::new(RichText::new("↩ Undo").size(12.0).color(TEXT_PRIMARY))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        self.state.undo();
                    }
                });
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Move #{}", self.state.move_history.len()))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            });
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("depth {}", result.depth))
                                    .size(11.0)
                                    .strong()
                                    .color(STATUS_OK),
                            );
                            ui.label(
                                RichText::new(format!("Score: {}", result.score))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("{}ms", result.time_ms))
                                        .size(10.0)
                                        .color(TEXT_SECONDARY),
                                );
                                ui.label(
                                    RichText::new(format!("{} nodes", result.nodes))
                                        .size(10.0)
                                        .color(TEXT_MUTED),
                                );
                            });
                        });
                    });

                    if let Some(pos) = result.best_move {
                        let col = (b'A' + pos.col) as char;
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("→ {}{}", col, pos.row + 1))
                                .size(12.0)
                                .strong()
                                .color(RESULT_HIGHLIGHT),
                        );
                    }
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let (headline, symbol, accent) = match outcome {
            GameOutcome::BlackWins => ("BLACK", "●", egui::Color32::from_rgb(70, 70, 75)),
            GameOutcome::WhiteWins => ("WHITE", "○", egui::Color32::from_rgb(220, 220, 225)),
            GameOutcome::Draw => ("DRAW", "●○", egui::Color32::from_rgb(160, 165, 175)),
        };
        let (black, white) = self.state.disc_counts();

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 60.0);
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                            if outcome != GameOutcome::Draw {
                                ui.label(RichText::new("WINS!").size(14.0).color(RESULT_HIGHLIGHT));
                            }
                        });
                    });

                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} - {}", black, white))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let legal_moves = if self.state.phase() == Phase::AwaitingHumanMove {
                self.state.current_legal_moves()
            } else {
                Vec::new()
            };

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn,
                self.state.last_move,
                &legal_moves,
                self.state.game_over.is_some(),
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place_disc(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game, keeping the current mode
            if i.key_pressed(egui::Key::N) {
                let mode = self.state.mode;
                self.new_game(mode, Disc::Black);
            }
        });
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Handle keyboard input
        self.handle_input(ctx);

        // Check AI result
        self.state.check_ai_result();

        // Start AI thinking if needed
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none()
        {
            self.state.start_ai_thinking();
        }

        // Persist finished games
        if let Some(record) = self.state.take_game_record() {
            if let Err(err) = self.history.append(record) {
                log::warn!("failed to save game record: {}", err);
            }
        }

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Request repaint while a search is in flight
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
