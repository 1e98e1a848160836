//! Session configuration for the CLI.
//!
//! Values resolve from defaults, then a TOML file named by
//! `TABLESTAKES_CONFIG`, then `TABLESTAKES_*` environment variables. Command
//! line flags are applied on top by the individual commands. Every field
//! remembers where its value came from so `cfg` can report it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::str::FromStr;
use tablestakes_ai::ADVISOR_NAMES;
use tablestakes_engine::config::{OddChipPolicy, TableConfig};
use tablestakes_engine::game::MAX_CHIPS_IN_PLAY;
use thiserror::Error;

pub const CONFIG_ENV: &str = "TABLESTAKES_CONFIG";

/// Advisor name that seats one personality per participant.
pub const MIXED_ADVISOR: &str = "mixed";

pub const MAX_PLAYERS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub players: usize,
    pub seed: Option<u64>,
    pub advisor: String,
    pub advisory_timeout_ms: u64,
    pub odd_chip_policy: OddChipPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: 1_000,
            small_blind: 5,
            big_blind: 10,
            players: 4,
            seed: None,
            advisor: "baseline".into(),
            advisory_timeout_ms: 2_000,
            odd_chip_policy: OddChipPolicy::Discard,
        }
    }
}

impl Config {
    /// Engine table settings for these values.
    pub fn table_config(&self) -> TableConfig {
        let mut table = TableConfig::with_blinds(self.small_blind, self.big_blind)
            .odd_chip_policy(self.odd_chip_policy);
        table.seed = self.seed;
        table
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub players: ValueSource,
    pub seed: ValueSource,
    pub advisor: ValueSource,
    pub advisory_timeout_ms: ValueSource,
    pub odd_chip_policy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            players: ValueSource::Default,
            seed: ValueSource::Default,
            advisor: ValueSource::Default,
            advisory_timeout_ms: ValueSource::Default,
            odd_chip_policy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolve against the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(|key| std::env::var(key).ok())
}

/// Resolve with `env` standing in for the process environment.
pub fn resolve<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env(CONFIG_ENV).filter(|p| !p.is_empty()) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        apply_file(f, &mut cfg, &mut sources);
    }

    let var = |name: &str| env(&format!("TABLESTAKES_{name}")).filter(|v| !v.trim().is_empty());

    if let Some(v) = var("STARTING_STACK") {
        cfg.starting_stack = parse_env("starting_stack", &v)?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(v) = var("SMALL_BLIND") {
        cfg.small_blind = parse_env("small_blind", &v)?;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = var("BIG_BLIND") {
        cfg.big_blind = parse_env("big_blind", &v)?;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = var("PLAYERS") {
        cfg.players = parse_env("players", &v)?;
        sources.players = ValueSource::Env;
    }
    if let Some(v) = var("SEED") {
        cfg.seed = Some(parse_env("seed", &v)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = var("ADVISOR") {
        cfg.advisor = v.trim().to_ascii_lowercase();
        sources.advisor = ValueSource::Env;
    }
    if let Some(v) = var("ADVISORY_TIMEOUT_MS") {
        cfg.advisory_timeout_ms = parse_env("advisory_timeout_ms", &v)?;
        sources.advisory_timeout_ms = ValueSource::Env;
    }
    if let Some(v) = var("ODD_CHIP_POLICY") {
        cfg.odd_chip_policy = parse_policy(&v)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid odd_chip_policy: {v}")))?;
        sources.odd_chip_policy = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    advisor: Option<String>,
    #[serde(default)]
    advisory_timeout_ms: Option<u64>,
    #[serde(default)]
    odd_chip_policy: Option<OddChipPolicy>,
}

fn apply_file(f: FileConfig, cfg: &mut Config, sources: &mut ConfigSources) {
    if let Some(v) = f.starting_stack {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::File;
    }
    if let Some(v) = f.small_blind {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::File;
    }
    if let Some(v) = f.big_blind {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::File;
    }
    if let Some(v) = f.players {
        cfg.players = v;
        sources.players = ValueSource::File;
    }
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::File;
    }
    if let Some(v) = f.advisor {
        cfg.advisor = v.trim().to_ascii_lowercase();
        sources.advisor = ValueSource::File;
    }
    if let Some(v) = f.advisory_timeout_ms {
        cfg.advisory_timeout_ms = v;
        sources.advisory_timeout_ms = ValueSource::File;
    }
    if let Some(v) = f.odd_chip_policy {
        cfg.odd_chip_policy = v;
        sources.odd_chip_policy = ValueSource::File;
    }
}

fn parse_env<T: FromStr>(field: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {field}: {raw}")))
}

fn parse_policy(raw: &str) -> Option<OddChipPolicy> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "discard" => Some(OddChipPolicy::Discard),
        "closest_to_button" => Some(OddChipPolicy::ClosestToButton),
        _ => None,
    }
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if !(2..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between 2 and {MAX_PLAYERS}"
        )));
    }
    if u64::from(cfg.starting_stack) * cfg.players as u64 > MAX_CHIPS_IN_PLAY {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_stack x players must not exceed {MAX_CHIPS_IN_PLAY}"
        )));
    }
    if cfg.advisory_timeout_ms == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: advisory_timeout_ms must be >0".into(),
        ));
    }
    if cfg.advisor != MIXED_ADVISOR && !ADVISOR_NAMES.contains(&cfg.advisor.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown advisor {:?}",
            cfg.advisor
        )));
    }
    cfg.table_config()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let resolved = resolve(env_of(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.seed, ValueSource::Default);
        assert_eq!(resolved.sources.advisor, ValueSource::Default);
    }

    #[test]
    fn env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7\nplayers = 6\nodd_chip_policy = \"closest_to_button\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let resolved = resolve(env_of(&[
            (CONFIG_ENV, path.as_str()),
            ("TABLESTAKES_SEED", "99"),
            ("TABLESTAKES_ADVISOR", "Aggressive"),
        ]))
        .unwrap();
        let cfg = &resolved.config;
        assert_eq!(cfg.seed, Some(99));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(cfg.players, 6);
        assert_eq!(resolved.sources.players, ValueSource::File);
        assert_eq!(cfg.odd_chip_policy, OddChipPolicy::ClosestToButton);
        assert_eq!(cfg.advisor, "aggressive");
        assert_eq!(resolved.sources.starting_stack, ValueSource::Default);
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            ("TABLESTAKES_SEED", "abc"),
            ("TABLESTAKES_PLAYERS", "1"),
            ("TABLESTAKES_PLAYERS", "11"),
            ("TABLESTAKES_STARTING_STACK", "0"),
            ("TABLESTAKES_SMALL_BLIND", "0"),
            ("TABLESTAKES_ADVISOR", "oracle"),
            ("TABLESTAKES_ODD_CHIP_POLICY", "round_up"),
            ("TABLESTAKES_ADVISORY_TIMEOUT_MS", "0"),
        ];
        for (key, value) in bad {
            assert!(
                matches!(resolve(env_of(&[(key, value)])), Err(ConfigError::Invalid(_))),
                "{key}={value} should be rejected"
            );
        }
        let inverted = resolve(env_of(&[
            ("TABLESTAKES_SMALL_BLIND", "20"),
            ("TABLESTAKES_BIG_BLIND", "10"),
        ]));
        assert!(inverted.is_err());
    }

    #[test]
    fn rejects_tables_with_more_chips_than_a_pot_can_hold() {
        let huge = resolve(env_of(&[
            ("TABLESTAKES_STARTING_STACK", "1000000000"),
            ("TABLESTAKES_PLAYERS", "5"),
        ]));
        assert!(matches!(huge, Err(ConfigError::Invalid(msg)) if msg.contains("starting_stack x players")));

        let fits = resolve(env_of(&[
            ("TABLESTAKES_STARTING_STACK", "1000000000"),
            ("TABLESTAKES_PLAYERS", "4"),
        ]));
        assert!(fits.is_ok());
    }

    #[test]
    fn unknown_file_keys_are_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "level = 3").unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert!(matches!(
            resolve(env_of(&[(CONFIG_ENV, path.as_str())])),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = resolve(env_of(&[(CONFIG_ENV, "/nonexistent/tablestakes.toml")]));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn mixed_advisor_is_accepted() {
        let resolved = resolve(env_of(&[("TABLESTAKES_ADVISOR", "mixed")])).unwrap();
        assert_eq!(resolved.config.advisor, MIXED_ADVISOR);
    }

    #[test]
    fn table_config_carries_stakes_and_seed() {
        let cfg = Config {
            seed: Some(4),
            odd_chip_policy: OddChipPolicy::ClosestToButton,
            ..Config::default()
        };
        let table = cfg.table_config();
        assert_eq!((table.small_blind, table.big_blind), (5, 10));
        assert_eq!(table.seed, Some(4));
        assert_eq!(table.odd_chip_policy, OddChipPolicy::ClosestToButton);
    }
}
