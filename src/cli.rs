// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::ClientConfig;

/// Terminal chat client for the natural-language property search service.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "property-chat", version, about)]
pub struct Cli {
    /// Base URL of the search service
    #[arg(long, env = "PROPERTY_CHAT_BASE_URL")]
    pub base_url: Option<String>,

    /// YAML config file (defaults to ./property-chat.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for property-chat.log
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Log at debug level
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Flags that were given win over the loaded file.
    pub fn apply(&self, config: &mut ClientConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(log_dir) = &self.log_dir {
            config.log_dir = log_dir.clone();
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = Some(timeout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keep_config() {
        let mut config = ClientConfig {
            base_url: "http://10.0.0.5:8083".to_string(),
            request_timeout_secs: Some(9),
            ..ClientConfig::default()
        };
        Cli::default().apply(&mut config);
        assert_eq!(config.base_url, "http://10.0.0.5:8083");
        assert_eq!(config.request_timeout_secs, Some(9));
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["property-chat", "-c", "chat.yml", "--log-dir", "/tmp/pc", "--debug"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("chat.yml")));
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/pc")));
        assert!(cli.debug);
        assert_eq!(cli.timeout, None);

        assert!(Cli::try_parse_from(["property-chat", "--timeout", "soon"]).is_err());
    }
}
