use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::FirstPlayerMode;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

pub type ConsoleConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(file_path: &str) -> ConsoleConfigManager {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.display.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: FirstPlayerMode,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub clear_screen: bool,
    pub show_move_guide: bool,
    pub human_symbol: char,
    pub computer_symbol: char,
    pub empty_symbol: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            show_move_guide: true,
            human_symbol: 'X',
            computer_symbol: 'O',
            empty_symbol: '-',
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        let symbols = [self.human_symbol, self.computer_symbol, self.empty_symbol];
        if symbols.iter().any(|symbol| symbol.is_whitespace()) {
            return Err("board symbols must not be whitespace".to_string());
        }
        if self.human_symbol == self.computer_symbol
            || self.human_symbol == self.empty_symbol
            || self.computer_symbol == self.empty_symbol
        {
            return Err("human, computer and empty symbols must differ".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub use_prefix: bool,
}
