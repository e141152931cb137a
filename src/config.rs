//! Game configuration, loadable from TOML

use std::path::Path;

use crate::board::{Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::ConfigError;
use crate::search::Difficulty;

/// Who places the first stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstMove {
    #[default]
    Human,
    Ai,
}

/// Settings supplied once at game start.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board edge length
    pub board_size: usize,
    pub difficulty: Difficulty,
    /// The AI plays the other color
    pub human_color: Stone,
    pub first_move: FirstMove,
    /// Seed for the AI's random source; random when absent
    pub seed: Option<u64>,
    /// Display delay before the AI answers a human move
    pub ai_delay_ms: u64,
    /// Display delay before the AI's opening move
    pub ai_opening_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: BOARD_SIZE,
            difficulty: Difficulty::Easy,
            human_color: Stone::Black,
            first_move: FirstMove::Human,
            seed: None,
            ai_delay_ms: 160,
            ai_opening_delay_ms: 200,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.human_color == Stone::Empty {
            return Err(ConfigError::Validation(
                "human_color must be black or white".into(),
            ));
        }
        Ok(())
    }

    pub fn ai_color(&self) -> Stone {
        self.human_color.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board_size, 15);
        assert_eq!(config.ai_color(), Stone::White);
    }

    #[test]
    fn test_parse_partial_toml_uses_defaults() {
        let config = GameConfig::parse(
            r#"
            difficulty = "hard"
            human_color = "white"
            first_move = "ai"
            seed = 1234
            "#,
        )
        .unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.human_color, Stone::White);
        assert_eq!(config.ai_color(), Stone::Black);
        assert_eq!(config.first_move, FirstMove::Ai);
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.board_size, 15);
        assert_eq!(config.ai_delay_ms, 160);
    }

    #[test]
    fn test_parse_rejects_bad_board_size() {
        let err = GameConfig::parse("board_size = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_parse_rejects_empty_human_color() {
        let err = GameConfig::parse(r#"human_color = "empty""#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_difficulty() {
        let err = GameConfig::parse(r#"difficulty = "insane""#).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = std::env::temp_dir().join("gomoku-config-that-does-not-exist.toml");
        let config = GameConfig::load_or_default(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("gomoku-config-{}.toml", std::process::id()));
        std::fs::write(&path, "board_size = 9\ndifficulty = \"medium\"\n").unwrap();
        let config = GameConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.board_size, 9);
        assert_eq!(config.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let path = std::env::temp_dir().join("gomoku-missing-config-file.toml");
        let err = GameConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
