//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::config::{FirstMove, GameConfig};
use crate::error::GameError;
use crate::session::Status;
use crate::{Difficulty, Stone};

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl GomokuApp {
    /// Create the app and start the first game from `config`
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Result<Self, GameError> {
        Ok(Self {
            state: GameState::new(config)?,
            board_view: BoardView::default(),
            show_debug: false,
        })
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.start();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let session = self.state.session();
                    ui.label(format!(
                        "{} - You: {}",
                        self.state.difficulty(),
                        session.human_color().name()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and settings
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                Self::render_title(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_settings_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                let status = self.state.session().status();
                if status != Status::Ongoing {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, status);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title(ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("\u{25CF}\u{25CB}").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row against the AI").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let session = self.state.session();
        let turn = session.current_color();

        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                let fill = if turn == Stone::Black { BLACK_STONE } else { WHITE_STONE };
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.painter().circle_stroke(rect.center(), 20.0, egui::Stroke::new(1.0, TEXT_MUTED));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = turn.name().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let (text, color) = if session.is_over() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if self.state.is_ai_thinking() {
                        ("AI thinking...".to_string(), STATUS_WAIT)
                    } else {
                        ("Your turn".to_string(), STATUS_OK)
                    };
                    ui.label(RichText::new(text).size(12.0).color(color));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", session.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the settings applied by the next Start
    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SETTINGS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let settings = &mut self.state.settings;
            egui::ComboBox::from_label("Difficulty")
                .selected_text(settings.difficulty.name())
                .show_ui(ui, |ui| {
                    for difficulty in Difficulty::ALL {
                        let name = difficulty.name();
                        ui.selectable_value(&mut settings.difficulty, difficulty, name);
                    }
                });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("First").color(TEXT_SECONDARY));
                ui.radio_value(&mut settings.first_move, FirstMove::Human, "You");
                ui.radio_value(&mut settings.first_move, FirstMove::Ai, "AI");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("You play").color(TEXT_SECONDARY));
                ui.radio_value(&mut settings.human_color, Stone::Black, "Black");
                ui.radio_value(&mut settings.human_color, Stone::White, "White");
            });

            ui.add_space(8.0);
            if ui.button(RichText::new("Start").strong()).clicked() {
                self.state.start();
            }
        });
    }

    /// Render the last AI decision and the pattern evaluation of both sides
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match &self.state.last_ai_result {
                Some(result) => {
                    let branch = result
                        .search_type
                        .map_or_else(|| "None".to_string(), |t| format!("{t:?}"));
                    ui.label(RichText::new(branch).size(11.0).strong().color(STATUS_OK));
                    ui.label(
                        RichText::new(format!(
                            "Score {:.1} | {} candidates | {}ms",
                            result.score, result.candidates, result.time_ms
                        ))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                    );
                    if let Some(mv) = result.best_move {
                        let text = RichText::new(format!("-> {}", mv.pos));
                        ui.label(text.size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                }
                None => {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            }

            if let Some(remaining) = self.state.ai_remaining() {
                ui.label(
                    RichText::new(format!("Next AI move in {}ms", remaining.as_millis()))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }

            let (black, white) = self.state.evaluations();
            ui.add_space(4.0);
            let text = RichText::new(format!("Eval black {black} / white {white}"));
            ui.label(text.size(10.0).color(TEXT_SECONDARY));
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, status: Status) {
        let human = self.state.session().human_color();
        let (headline, detail) = match status {
            Status::Won(winner) if winner == human => {
                ("YOU WIN", format!("{} made five", winner.name()))
            }
            Status::Won(winner) => ("AI WINS", format!("{} made five", winner.name())),
            _ => ("DRAW", "The board is full".to_string()),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(10.0);
                    if ui.button(RichText::new("New Game").strong()).clicked() {
                        self.state.start();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let session = self.state.session();
            let input = self.state.is_human_turn().then(|| session.human_color());

            let clicked = self.board_view.show(
                ui,
                session.board(),
                input,
                session.last_move().map(|mv| mv.pos),
                session.winning_line(),
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place_stone(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle_debug) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::D)));
        if new_game {
            self.state.start();
        }
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Play the pending AI move once its delay has passed
        self.state.update();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if let Some(remaining) = self.state.ai_remaining() {
            ctx.request_repaint_after(remaining);
        }
    }
}
