use anyhow::{bail, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "Vacuum Rust",
    about = "Grid cleaning-agent planners implemented in Rust.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(help = "Planner to run: depth-first or uniform-cost")]
    pub mode: String,

    #[arg(help = "Path to the world file")]
    pub world_path: String,

    #[arg(long, help = "Path to a YAML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Path to write a JSON result record")]
    pub output: Option<String>,

    #[arg(
        long,
        help = "Skip successors that move into walls or off the grid",
        default_value_t = false
    )]
    pub filter_illegal: bool,

    #[arg(
        long,
        help = "Suppress the diagnostic echo of the parsed world",
        default_value_t = false
    )]
    pub quiet_echo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: String,
    pub world_path: String,
    pub output_path: Option<String>,
    pub filter_illegal: bool,
    pub echo_world: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: String::new(),
            world_path: String::new(),
            output_path: None,
            filter_illegal: false,
            echo_world: true,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Command-line arguments win over config-file values; the two
    /// positional arguments always come from the command line.
    pub fn override_from_command_line(mut self, cli: &Cli) -> Result<Config> {
        self.mode = cli.mode.clone();
        self.world_path = cli.world_path.clone();
        if cli.output.is_some() {
            self.output_path = cli.output.clone();
        }
        if cli.filter_illegal {
            self.filter_illegal = true;
        }
        if cli.quiet_echo {
            self.echo_world = false;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        match self.mode.as_str() {
            "depth-first" | "uniform-cost" => {}
            other => bail!("unknown planner mode: {other}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_modes() {
        let mut config = Config {
            mode: "depth-first".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
        config.mode = "uniform-cost".to_string();
        assert!(config.validate().is_ok());
        config.mode = "a-star".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_yaml_with_defaults() {
        let config = Config::from_yaml_str("filter_illegal: true\n").unwrap();
        assert!(config.filter_illegal);
        assert!(config.echo_world);
        assert!(config.output_path.is_none());
    }

    #[test]
    fn test_command_line_overrides() {
        let cli = Cli {
            mode: "uniform-cost".to_string(),
            world_path: "worlds/test1.txt".to_string(),
            config: None,
            output: Some("result.json".to_string()),
            filter_illegal: false,
            quiet_echo: true,
        };
        let config = Config::from_yaml_str("filter_illegal: true\n")
            .unwrap()
            .override_from_command_line(&cli)
            .unwrap();
        assert_eq!(config.mode, "uniform-cost");
        assert_eq!(config.world_path, "worlds/test1.txt");
        assert_eq!(config.output_path.as_deref(), Some("result.json"));
        assert!(config.filter_illegal);
        assert!(!config.echo_world);
        assert!(config.validate().is_ok());
    }
}
