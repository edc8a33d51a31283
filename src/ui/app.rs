//! Main application for the Freedom GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::{BoardSize, Player};
use crate::eval::EvalTerm;
use crate::game::{Command, GameMode, GameSettings, Outcome, Seat};
use crate::search::{Algorithm, Difficulty};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

const ABOUT_TEXT: &str = "Freedom is a two-player abstract strategy board game invented by \
Veljko Cirovic and Nebojsa Sankovic in 2010. It is played with black and white stones on a \
square board and is related to Go-Moku and Slimetrail.\n\n\
Board: 10x10 by default. Beginners can try 8x8; 6x6 is also available.\n\n\
Objective: finish with more live rows than your opponent. A row is live when it is a \
horizontal, vertical or diagonal line of exactly 4 stones of the same colour.\n\n\
Play: White moves first. Players take turns placing a stone on any empty cell. The last \
player may pass on the final turn, leaving the last cell empty, if placing a stone would \
reduce their score.\n\n\
Rules from https://boardgamegeek.com/boardgame/100480/freedom";

fn player_name(player: Player) -> &'static str {
    match player {
        Player::One => "WHITE",
        Player::Two => "BLACK",
    }
}

/// Main Freedom application
pub struct FreedomApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
    show_about: bool,
}

impl Default for FreedomApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameSettings::default()),
            board_view: BoardView::default(),
            show_debug: false,
            show_about: false,
        }
    }
}

impl FreedomApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    for mode in GameMode::ALL {
                        if ui.button(format!("New {} Game", mode.label())).clicked() {
                            self.state.apply(Command::NewGame(mode));
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("About").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Options", |ui| self.render_options_menu(ui));

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.state.game.settings().mode.label());
                });
            });
        });
    }

    fn render_options_menu(&mut self, ui: &mut egui::Ui) {
        let settings = *self.state.game.settings();
        let mut command = None;

        for (algorithm, label) in [(Algorithm::Minimax, "Minimax"), (Algorithm::AlphaBeta, "Alpha-Beta")] {
            if ui
                .radio(settings.algorithm == algorithm, format!("Computer Algorithm {label}"))
                .clicked()
            {
                command = Some(Command::SetAlgorithm(algorithm));
            }
        }
        ui.separator();

        for size in BoardSize::ALL {
            if ui.radio(settings.size == size, format!("Board Size {size}")).clicked() {
                command = Some(Command::SetBoardSize(size));
            }
        }
        ui.separator();

        for difficulty in Difficulty::ALL {
            if ui
                .radio(settings.difficulty == difficulty, format!("Difficulty {difficulty:?}"))
                .clicked()
            {
                command = Some(Command::SetDifficulty(difficulty));
            }
        }
        ui.separator();

        for term in EvalTerm::ALL {
            let mut enabled = settings.weights.is_enabled(term);
            if ui
                .checkbox(&mut enabled, format!("Evaluation Function {}", term.label()))
                .clicked()
            {
                command = Some(Command::ToggleTerm(term));
            }
        }
        if ui.button("Evaluation Function Use All Criteria").clicked() {
            command = Some(Command::EnableAllTerms);
        }
        if ui.button("Evaluation Function Use No Criteria").clicked() {
            command = Some(Command::DisableAllTerms);
        }

        if let Some(command) = command {
            self.state.apply(command);
            ui.close_menu();
        }
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_settings_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.game.outcome().copied() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("FREEDOM").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let size = self.state.game.settings().size;
            ui.label(RichText::new(format!("{size} board")).size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let to_move = self.state.game.to_move();
            let (fill, ink) = match to_move {
                Player::One => (WHITE_STONE, BLACK_STONE),
                Player::Two => (BLACK_STONE, WHITE_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    to_move.symbol(),
                    egui::FontId::proportional(20.0),
                    ink,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player_name(to_move)).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (format!("Computer thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_BUSY)
                    } else if self.state.game.is_over() {
                        ("Game Over".to_string(), LIVE_HIGHLIGHT)
                    } else if self.state.game.seat(to_move) == Seat::Human {
                        (
                            format!("Your turn ({:.0}s)", self.state.move_timer.elapsed().as_secs_f32()),
                            STATUS_OK,
                        )
                    } else {
                        ("Computer to move".to_string(), STATUS_BUSY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("LIVE FOURS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let scores = self.state.game.scores();
            for player in Player::BOTH {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player_name(player)).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(scores[player.index()].to_string())
                                .size(16.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                    });
                });
            }

            ui.add_space(6.0);
            let board = self.state.game.board();
            ui.label(
                RichText::new(format!(
                    "Move #{} - {} empty",
                    self.state.game.history().len(),
                    board.empty_count()
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_settings_card(&self, ui: &mut egui::Ui) {
        let settings = self.state.game.settings();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("COMPUTER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            let algorithm = match settings.algorithm {
                Algorithm::Minimax => "Minimax",
                Algorithm::AlphaBeta => "Alpha-Beta",
            };
            ui.label(RichText::new(format!("{algorithm}, {:?}", settings.difficulty)).size(12.0).color(TEXT_PRIMARY));

            let terms: Vec<&str> = EvalTerm::ALL
                .iter()
                .filter(|t| settings.weights.is_enabled(**t))
                .map(|t| t.label())
                .collect();
            let terms = if terms.is_empty() {
                "Random moves".to_string()
            } else {
                terms.join(", ")
            };
            ui.label(RichText::new(terms).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = self.state.game.last_result() {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(result.search_type.label())
                                    .size(11.0)
                                    .strong()
                                    .color(STATUS_OK),
                            );
                            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("Depth: {}", result.depth)).size(10.0).color(TEXT_SECONDARY));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                                ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                                ui.label(RichText::new(format!("{} cutoffs", result.cutoffs)).size(10.0).color(TEXT_MUTED));
                            });
                        });
                    });

                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("-> {}", result.best_move))
                            .size(12.0)
                            .strong()
                            .color(LIVE_HIGHLIGHT),
                    );
                    if let Some(wall) = self.state.move_timer.last_ai_time() {
                        ui.label(
                            RichText::new(format!("Turn wall time: {:.2}s", wall.as_secs_f32()))
                                .size(10.0)
                                .color(TEXT_MUTED),
                        );
                    }
                } else {
                    ui.label(RichText::new("No computer move yet").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: &Outcome) {
        let headline = match outcome.winner {
            Some(player) => format!("{} WINS!", player_name(player)),
            None => "DRAW".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!(
                            "White {} - {} Black",
                            outcome.score(Player::One),
                            outcome.score(Player::Two)
                        ))
                        .size(13.0)
                        .color(TEXT_SECONDARY),
                    );
                    if let Some(player) = outcome.passed {
                        ui.label(
                            RichText::new(format!("{} passed on the last cell", player_name(player)))
                                .size(11.0)
                                .color(TEXT_MUTED),
                        );
                    }

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(
                                RichText::new("New Game (N)").size(14.0).strong().color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click());
                            if ui.add(label).clicked() {
                                self.state.restart();
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(STATUS_ALERT));
            });
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("About Freedom")
            .open(&mut self.show_about)
            .collapsible(false)
            .resizable(false)
            .default_width(480.0)
            .show(ctx, |ui| {
                ui.label(ABOUT_TEXT);
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let live = self.state.live_stones();
                let clicked = self.board_view.show(
                    ui,
                    self.state.game.board(),
                    self.state.game.to_move(),
                    self.state.game.last_move(),
                    live,
                    self.state.accepts_input(),
                );

                if let Some(pos) = clicked {
                    self.state.try_play(pos);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, new_game) =
            ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::N)));

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if new_game {
            self.state.restart();
        }
    }
}

impl eframe::App for FreedomApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        self.state.start_ai_thinking();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_about(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        } else if self.state.game.is_human_turn() {
            // keep the move timer ticking
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
