use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use zici_config::Config;
use zici_config::fetch::FetchConfig;

#[derive(Parser, Debug)]
#[command(name = "zici", about = "Pinyin dictionary fetcher and character list tools")]
pub struct Cli {
    /// JSON config file; unset fields come from ZICI_* variables or defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Query the dictionary API for every pinyin of the lookup table
    Fetch(FetchArgs),
    /// Join the character list into a single line, in place
    Merge(MergeArgs),
    /// Extract distinct hanzi from a draft into the character list
    Extract(ExtractArgs),
    /// Print the new characters of a school term
    Chars(CharsArgs),
    /// Print the compass direction of a screen offset
    Direction(DirectionArgs),
}

#[derive(Args, Debug, Default)]
pub struct FetchArgs {
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[arg(long)]
    pub output: Option<PathBuf>,
    #[arg(long)]
    pub api_url: Option<String>,
    #[arg(long)]
    pub timeout_seconds: Option<u64>,
    /// Pause between requests
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl FetchArgs {
    /// Flags win over the loaded config
    pub fn apply(self, mut config: FetchConfig) -> FetchConfig {
        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(api_url) = self.api_url {
            config.api_url = api_url;
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(delay) = self.delay_ms {
            config.request_delay_ms = delay;
        }
        config
    }
}

#[derive(Args, Debug)]
pub struct MergeArgs {
    pub path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CharsArgs {
    /// Grade, 1 to 6
    #[arg(long)]
    pub grade: usize,
    /// Term within the grade, 1 or 2
    #[arg(long)]
    pub term: usize,
    /// Term list file, one term per line
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DirectionArgs {
    #[arg(allow_negative_numbers = true)]
    pub x: i32,
    #[arg(allow_negative_numbers = true)]
    pub y: i32,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => {
                tracing::info!("Loading config from {}", path.display());
                Ok(Config::from_file(path)?)
            }
            None => Ok(Config::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_flags_override_config() {
        let cli = Cli::parse_from([
            "zici",
            "fetch",
            "--input",
            "table.json",
            "--api-url",
            "http://localhost:1/api",
            "--delay-ms",
            "0",
        ]);
        let Command::Fetch(args) = cli.command else {
            panic!("expected fetch");
        };
        let base = FetchConfig::new();
        let output = base.output_path.clone();
        let config = args.apply(base);

        assert_eq!(config.input_path, PathBuf::from("table.json"));
        assert_eq!(config.api_url, "http://localhost:1/api");
        assert_eq!(config.request_delay_ms, 0);
        assert_eq!(config.output_path, output);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let base = FetchConfig::new();
        let config = FetchArgs::default().apply(base.clone());
        assert_eq!(config.api_url, base.api_url);
        assert_eq!(config.timeout_seconds, base.timeout_seconds);
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["zici", "merge", "--config", "zici.json", "chars.txt"]);
        assert_eq!(cli.config, Some(PathBuf::from("zici.json")));
        match cli.command {
            Command::Merge(args) => assert_eq!(args.path, Some(PathBuf::from("chars.txt"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_chars_args() {
        let cli = Cli::parse_from(["zici", "chars", "--grade", "3", "--term", "2"]);
        match cli.command {
            Command::Chars(args) => {
                assert_eq!((args.grade, args.term), (3, 2));
                assert_eq!(args.file, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_direction_accepts_negative_offsets() {
        let cli = Cli::parse_from(["zici", "direction", "-3", "5"]);
        match cli.command {
            Command::Direction(args) => assert_eq!((args.x, args.y), (-3, 5)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
