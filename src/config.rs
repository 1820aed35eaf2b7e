use std::env;
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/analyze";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub width: u32,
    pub height: u32,
    /// Directory the scene snapshot is written into.
    pub out_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
            width: 800,
            height: 300,
            out_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Defaults overlaid with `MOOD_JOURNAL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but reading variables through `lookup`.
    /// Unparseable or empty values leave the default in place.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Config::default();

        if let Some(endpoint) = non_empty(lookup("MOOD_JOURNAL_ENDPOINT")) {
            cfg.endpoint = endpoint;
        }

        if let Some(secs) = parse_positive::<u64>(lookup("MOOD_JOURNAL_TIMEOUT_SECS")) {
            cfg.timeout_secs = secs;
        }

        if let Some(width) = parse_positive::<u32>(lookup("MOOD_JOURNAL_WIDTH")) {
            cfg.width = width;
        }

        if let Some(height) = parse_positive::<u32>(lookup("MOOD_JOURNAL_HEIGHT")) {
            cfg.height = height;
        }

        if let Some(dir) = non_empty(lookup("MOOD_JOURNAL_OUT_DIR")) {
            cfg.out_dir = PathBuf::from(dir);
        }

        cfg
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_positive<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    value?
        .trim()
        .parse::<T>()
        .ok()
        .filter(|v| *v > T::default())
}
