//! Runtime configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings that select how a session is bootstrapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Fixed generation seed; a random one is drawn when unset.
    pub seed: Option<u64>,
    /// Number of participants to place on the board.
    pub players: u32,
    /// Debug override that reveals the whole board to every participant.
    pub show_full_map: bool,
    /// Directory holding `config.toml` and `rooms.toml`.
    pub data_dir: PathBuf,
}

impl RuntimeConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "crates/game/content/data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_SEED` - Generation seed (default: random)
    /// - `DUNGEON_PLAYERS` - Participant count (default: 1, minimum: 1)
    /// - `DUNGEON_SHOW_FULL_MAP` - Reveal the whole board (default: false)
    /// - `CONTENT_DATA_DIR` - Content directory (default: crates/game/content/data)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.seed = read_var::<u64>(&lookup, "DUNGEON_SEED");

        if let Some(players) = read_var::<u32>(&lookup, "DUNGEON_PLAYERS") {
            config.players = players.max(1);
        }

        if let Some(value) = lookup("DUNGEON_SHOW_FULL_MAP") {
            match parse_flag(&value) {
                Some(show) => config.show_full_map = show,
                None => tracing::warn!(
                    "Ignoring DUNGEON_SHOW_FULL_MAP={:?}; expected 1/0, true/false, yes/no or on/off",
                    value
                ),
            }
        }

        if let Some(dir) = lookup("CONTENT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            players: 1,
            show_full_map: false,
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = lookup(key)?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!("Ignoring unparsable {}={:?}", key, value);
            None
        }
    }
}

/// Boolean switch. A variable set without a value counts as on.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> RuntimeConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn unset_variables_keep_defaults() {
        assert_eq!(config_from(&[]), RuntimeConfig::default());
    }

    #[test]
    fn numeric_variables_are_parsed_and_clamped() {
        let config = config_from(&[
            ("DUNGEON_SEED", "42"),
            ("DUNGEON_PLAYERS", "0"),
            ("CONTENT_DATA_DIR", "/srv/dungeon"),
        ]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.players, 1);
        assert_eq!(config.data_dir, PathBuf::from("/srv/dungeon"));

        let config = config_from(&[("DUNGEON_SEED", "soon"), ("DUNGEON_PLAYERS", " 3 ")]);
        assert_eq!(config.seed, None);
        assert_eq!(config.players, 3);
    }

    #[test]
    fn full_map_flag_honors_off_values() {
        for off in ["0", "false", "no", "OFF"] {
            assert!(
                !config_from(&[("DUNGEON_SHOW_FULL_MAP", off)]).show_full_map,
                "{off}"
            );
        }
        for on in ["", "1", "true", "Yes", "on"] {
            assert!(
                config_from(&[("DUNGEON_SHOW_FULL_MAP", on)]).show_full_map,
                "{on:?}"
            );
        }
        assert!(!config_from(&[("DUNGEON_SHOW_FULL_MAP", "maybe")]).show_full_map);
    }
}
