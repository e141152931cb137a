//! Gomoku GUI
//!
//! Play five-in-a-row against the heuristic AI.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gomoku::ui::GomokuApp;
use gomoku::{Difficulty, FirstMove, GameConfig, Stone};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML config file; defaults are used when it does not exist
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,
    /// Board edge length
    #[arg(long)]
    size: Option<usize>,
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,
    /// Color played by the human; the AI takes the other one
    #[arg(long, value_enum)]
    human_color: Option<ColorArg>,
    /// Let the AI place the first stone
    #[arg(long)]
    ai_first: bool,
    /// Seed for the AI's random choices
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    Black,
    White,
}

impl Cli {
    fn apply(&self, config: &mut GameConfig) {
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(color) = self.human_color {
            config.human_color = match color {
                ColorArg::Black => Stone::Black,
                ColorArg::White => Stone::White,
            };
        }
        if self.ai_first {
            config.first_move = FirstMove::Ai;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = GameConfig::load_or_default(&cli.config)?;
    cli.apply(&mut config);
    config.validate()?;
    log::info!(
        "starting {}x{} game, difficulty {}, human plays {}",
        config.board_size,
        config.board_size,
        config.difficulty,
        config.human_color.name()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([760.0, 560.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)?))),
    )?;
    Ok(())
}
