use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_engine::tictactoe::Difficulty;

pub const CONFIG_FILE_NAME: &str = "tictactoe_arena_config.yaml";
pub const MAX_GAMES: u32 = 10_000;

pub fn get_default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, ArenaConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub x_difficulty: Difficulty,
    pub o_difficulty: Difficulty,
    pub games: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            x_difficulty: Difficulty::Medium,
            o_difficulty: Difficulty::Hard,
            games: 100,
            seed: None,
        }
    }
}

impl Validate for ArenaConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 || self.games > MAX_GAMES {
            return Err(format!(
                "games must be between 1 and {}, got {}",
                MAX_GAMES, self.games
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let random_number: u32 = rand::random();
        let file_name = format!("temp_tictactoe_arena_config_{}.yaml", random_number);
        std::env::temp_dir().join(file_name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = ArenaConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: ArenaConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let config = ArenaConfig {
            x_difficulty: Difficulty::Easy,
            o_difficulty: Difficulty::Hard,
            games: 12,
            seed: Some(77),
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(&file_path);
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let stored = FileContentConfigProvider::new(file_path.clone())
            .get_config_content()
            .unwrap()
            .unwrap();
        assert!(stored.contains("x_difficulty: easy"));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), ArenaConfig::default());
    }

    #[test]
    fn test_seed_is_optional_in_yaml() {
        let serializer = YamlConfigSerializer::new();
        let yaml = "x_difficulty: hard\no_difficulty: easy\ngames: 3\n";
        let config: ArenaConfig = serializer.deserialize(yaml).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.x_difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_validate_games_range() {
        let mut config = ArenaConfig::default();
        assert!(config.validate().is_ok());
        config.games = 0;
        assert!(config.validate().is_err());
        config.games = MAX_GAMES + 1;
        assert!(config.validate().is_err());
    }
}
