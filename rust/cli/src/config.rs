use pineapple_engine::game::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub chooser: String,
    pub think_time_ms: u64,
    pub fantasyland: bool,
    pub players: usize,
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
    pub seed: ValueSource,
    pub chooser: ValueSource,
    pub think_time_ms: ValueSource,
    pub fantasyland: ValueSource,
    pub players: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            chooser: ValueSource::Default,
            think_time_ms: ValueSource::Default,
            fantasyland: ValueSource::Default,
            players: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            chooser: "baseline".into(),
            think_time_ms: 1000,
            fantasyland: true,
            players: 2,
        }
    }
}

impl Config {
    /// Engine settings for one session; `seed` on the command line wins.
    pub fn game_config(&self, seed: Option<u64>) -> GameConfig {
        GameConfig {
            seed: seed.or(self.seed),
            think_time_ms: Some(self.think_time_ms),
            fantasyland: self.fantasyland,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("PINEAPPLE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.chooser {
            cfg.chooser = v;
            sources.chooser = ValueSource::File;
        }
        if let Some(v) = f.think_time_ms {
            cfg.think_time_ms = v;
            sources.think_time_ms = ValueSource::File;
        }
        if let Some(v) = f.fantasyland {
            cfg.fantasyland = v;
            sources.fantasyland = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("PINEAPPLE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(chooser) = std::env::var("PINEAPPLE_CHOOSER")
        && !chooser.is_empty()
    {
        cfg.chooser = chooser;
        sources.chooser = ValueSource::Env;
    }
    if let Ok(ms) = std::env::var("PINEAPPLE_THINK_MS")
        && !ms.is_empty()
    {
        cfg.think_time_ms = ms
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid think time: {}", ms)))?;
        sources.think_time_ms = ValueSource::Env;
    }
    if let Ok(fl) = std::env::var("PINEAPPLE_FANTASYLAND")
        && !fl.is_empty()
    {
        cfg.fantasyland = parse_bool(&fl)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid fantasyland flag: {}", fl)))?;
        sources.fantasyland = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    chooser: Option<String>,
    #[serde(default)]
    think_time_ms: Option<u64>,
    #[serde(default)]
    fantasyland: Option<bool>,
    #[serde(default)]
    players: Option<usize>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.chooser.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: chooser must not be empty".into(),
        ));
    }
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
