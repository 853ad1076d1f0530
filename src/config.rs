use std::{env, fmt, str::FromStr};

use crate::error::{MazeError, Result};

pub const ENV_ROWS: &str = "RUSTY_MAZE_ROWS";
pub const ENV_COLUMNS: &str = "RUSTY_MAZE_COLUMNS";
pub const ENV_SEED: &str = "RUSTY_MAZE_SEED";
pub const ENV_FORMAT: &str = "RUSTY_MAZE_FORMAT";

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLUMNS: usize = 20;

/// Format de sortie de la ligne de commande.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Ascii,
    Json,
}

impl FromStr for OutputFormat {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Ok(OutputFormat::Ascii),
            "json" => Ok(OutputFormat::Json),
            other => Err(MazeError::InvalidConfiguration(format!(
                "Unknown output format: {other}. Must be 'ascii' or 'json'"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Ascii => f.write_str("ascii"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub columns: usize,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            seed: None,
            format: OutputFormat::default(),
        }
    }
}

impl GeneratorConfig {
    /// Lit la configuration depuis l'environnement.
    ///
    /// Une variable absente ou vide garde la valeur par défaut ; une valeur
    /// illisible est une erreur.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(rows) = read_env(ENV_ROWS)? {
            config.rows = rows;
        }
        if let Some(columns) = read_env(ENV_COLUMNS)? {
            config.columns = columns;
        }
        config.seed = read_env(ENV_SEED)?;
        if let Some(format) = read_env(ENV_FORMAT)? {
            config.format = format;
        }

        Ok(config)
    }

    /// Refuse les dimensions nulles avant toute génération.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

fn read_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| MazeError::InvalidConfiguration(format!("{key}={value:?}: {e}"))),
        _ => Ok(None),
    }
}
