use clap::Parser;
use std::path::PathBuf;

/// WeatherNow - current conditions and a five-day forecast in the terminal
#[derive(Parser, Debug)]
#[command(name = "weathernow")]
#[command(about = "Current weather and five-day forecast from Open-Meteo", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep preferences and history in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// City to look up right after startup
    pub city: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["weathernow"]);
        assert!(cli.config.is_none());
        assert!(!cli.ephemeral);
        assert!(cli.city.is_none());
    }

    #[test]
    fn test_city_and_flags() {
        let cli = Cli::parse_from(["weathernow", "--ephemeral", "-v", "--config", "/tmp/w.toml", "Paris"]);
        assert!(cli.ephemeral);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/w.toml")));
        assert_eq!(cli.city.as_deref(), Some("Paris"));
    }
}
