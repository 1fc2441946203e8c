use anyhow::{anyhow, Result};
use std::{io::ErrorKind, path::Path, path::PathBuf};

const CONFIG_PATH_REL_HOME: &str = ".config/poopbot/config.toml";
const STATE_PATH_REL_HOME: &str = ".config/poopbot/poop_data.json";
const TOKEN_ENV_VAR: &str = "DISCORD_TOKEN";

/// The one channel in which trigger phrases are counted.
pub const DEFAULT_TRIGGER_CHANNEL_ID: u64 = 1362956137271529602;

/// Load a `.env` file from the working directory if there is one.
pub fn load_dotenv() -> Result<()> {
    dotenv_outcome(dotenvy::dotenv())
}

// A missing .env is fine; the token may come from the real environment.
fn dotenv_outcome<T>(result: std::result::Result<T, dotenvy::Error>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(anyhow!("Could not load .env file: {}", e)),
    }
}

/// Bot configuration
pub struct Config {
    pub discord_token: String,
    pub general: General,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct General {
    pub trigger_channel_id: u64,
    /// Overrides the default location of the counter file
    pub state_path: Option<PathBuf>,
    pub leaderboard_limit: usize,
}

impl Default for General {
    fn default() -> Self {
        Self {
            trigger_channel_id: DEFAULT_TRIGGER_CHANNEL_ID,
            state_path: None,
            leaderboard_limit: crate::leaderboard::DEFAULT_LIMIT,
        }
    }
}

/// On-disk layout of the optional configuration file
#[derive(Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    general: General,
}

impl Config {
    fn config_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|p| p.join(CONFIG_PATH_REL_HOME))
            .ok_or(anyhow!("Could not find home directory"))
    }

    pub async fn load() -> Result<Self> {
        let discord_token = Self::token(std::env::var(TOKEN_ENV_VAR).ok())?;
        let path = Self::config_path()?;

        // The configuration file is optional.  Everything in it has a default.
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(anyhow!(
                    "Could not read configuration at `{}`: {}",
                    path.to_string_lossy(),
                    e
                ))
            }
        };

        Self::parse(discord_token, &contents, &path)
    }

    fn token(value: Option<String>) -> Result<String> {
        match value {
            Some(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(anyhow!(
                "Please set the {} environment variable by running:\nexport {}=your_token_here",
                TOKEN_ENV_VAR,
                TOKEN_ENV_VAR
            )),
        }
    }

    fn parse(discord_token: String, contents: &str, path: &Path) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| {
            anyhow!(
                "Could not parse configuration at `{}`: {}",
                path.to_string_lossy(),
                e
            )
        })?;

        Ok(Self {
            discord_token,
            general: file.general,
        })
    }

    /// Where the counters are persisted
    pub fn state_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.general.state_path {
            return Ok(path.clone());
        }

        dirs::home_dir()
            .map(|p| p.join(STATE_PATH_REL_HOME))
            .ok_or(anyhow!("Could not find home directory"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<Config> {
        Config::parse("token".to_owned(), contents, Path::new("config.toml"))
    }

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.general.trigger_channel_id, DEFAULT_TRIGGER_CHANNEL_ID);
        assert_eq!(cfg.general.leaderboard_limit, 10);
        assert!(cfg.general.state_path.is_none());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let cfg = parse("[general]\ntrigger_channel_id = 42\n").unwrap();
        assert_eq!(cfg.general.trigger_channel_id, 42);
        assert_eq!(cfg.general.leaderboard_limit, 10);
    }

    #[test]
    fn state_path_override() {
        let cfg = parse("[general]\nstate_path = \"/tmp/poops.json\"\n").unwrap();
        assert_eq!(cfg.state_path().unwrap(), PathBuf::from("/tmp/poops.json"));
    }

    #[test]
    fn malformed_file_names_path() {
        let err = parse("[general\n").err().unwrap();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn missing_dotenv_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        assert!(dotenv_outcome(dotenvy::from_path(dir.path().join(".env"))).is_ok());
    }

    #[test]
    fn malformed_dotenv_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "POOPBOT_TEST_VALUE=\"unterminated\n").unwrap();

        let err = dotenv_outcome(dotenvy::from_path(&path)).err().unwrap();
        assert!(err.to_string().contains(".env"));
    }

    #[test]
    fn missing_token_is_fatal() {
        let err = Config::token(None).err().unwrap();
        assert!(err.to_string().contains("export DISCORD_TOKEN="));
        assert!(Config::token(Some("   ".to_owned())).is_err());
        assert_eq!(Config::token(Some("abc".to_owned())).unwrap(), "abc");
    }
}
