use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use omniconv::config::Config;

use crate::logging;

mod chars;
mod convert;
mod search;

/// Converts numbers and text between encodings, and steps through regex
/// matches in a file.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Path to a TOML config file. Defaults to `omniconv.toml` in the
    /// current directory, if there is one.
    #[clap(long, global = true)]
    config: Option<PathBuf>,
    /// Log more. Repeat for even more detail.
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// The category of command to run.
    #[clap(subcommand)]
    category: Category,
}

impl Cli {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        logging::init(self.verbose)?;
        let config = self.load_config()?;
        self.category.run(&config)
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                Config::load_from_dir(cwd)?
            }
        };
        Ok(config)
    }
}

/// The category of command to run.
#[derive(Subcommand)]
enum Category {
    #[clap(about = "Runs conversions on a value.")]
    Convert(convert::Convert),
    #[clap(about = "Prints the character count of a value.")]
    Chars(chars::Chars),
    #[clap(about = "Searches a file and steps through the matches.")]
    Search(search::Search),
}

impl Category {
    fn run(&self, config: &Config) -> anyhow::Result<()> {
        match self {
            Category::Convert(convert) => convert.run(config),
            Category::Chars(chars) => {
                chars.run();
                Ok(())
            }
            Category::Search(search) => search.run(config),
        }
    }
}
