use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zici_core::TermChars;
use zici_core::direction::Direction;

pub mod cli;

use self::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    match cli.command {
        Command::Fetch(args) => {
            let fetch = args.apply(config.fetch);
            zici_core::fetch_all(&fetch)
                .await
                .context("Pinyin fetch failed")?;
        }
        Command::Merge(args) => {
            let path = args.path.unwrap_or(config.chars.chars_file);
            zici_core::text::merge_lines(&path).context("Merging lines failed")?;
        }
        Command::Extract(args) => {
            let input = args.input.unwrap_or(config.chars.draft_file);
            let output = args.output.unwrap_or(config.chars.chars_file);
            zici_core::text::extract_chars(&input, &output)
                .context("Character extraction failed")?;
        }
        Command::Chars(args) => {
            let terms = match args.file.or(config.chars.terms_file) {
                Some(path) => TermChars::load(&path).context("Loading term lists failed")?,
                None => TermChars::embedded(),
            };
            let chars = terms.get(args.grade, args.term);
            if chars.is_empty() {
                tracing::warn!("No characters for grade {} term {}", args.grade, args.term);
            }
            println!("{}", chars.iter().collect::<String>());
        }
        Command::Direction(args) => {
            println!("{}", Direction::from_offset(args.x, args.y));
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
