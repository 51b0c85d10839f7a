use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use omniconv::{
    config::Config,
    document::FixedLocator,
    memory::MemDocument,
    navigator::MatchNavigator,
    scan::TextScanner,
    text::LineIndex,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Step {
    Next,
    Prev,
}

/// Searches a file for a regex, selects the first match, then performs
/// each `--step` in turn.
#[derive(Parser)]
pub(super) struct Search {
    /// Path to the file to search.
    #[clap(index = 1)]
    file: PathBuf,
    /// The regex to search for.
    #[clap(index = 2)]
    pattern: String,
    /// Moves to the next or previous match. May be repeated.
    #[clap(long = "step", value_enum)]
    steps: Vec<Step>,
    /// Prints every match with its line and column range.
    #[clap(long)]
    list: bool,
}

impl Search {
    pub(super) fn run(&self, config: &Config) -> anyhow::Result<()> {
        let text = std::fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;
        let mut locator = FixedLocator::new(MemDocument::new(text));
        let mut navigator = MatchNavigator::new(TextScanner::new(config.search.scan_options()));
        navigator
            .scanner()
            .try_compile(&self.pattern)
            .with_context(|| format!("Invalid pattern {:?}", self.pattern))?;

        let count = navigator.search_document(&self.pattern, &mut locator);
        println!("{count} matches");
        if self.list {
            print_matches(&navigator);
        }
        report(&navigator, &locator);

        for step in &self.steps {
            match step {
                Step::Next => navigator.next(&mut locator),
                Step::Prev => navigator.prev(&mut locator),
            };
            report(&navigator, &locator);
        }
        Ok(())
    }
}

fn print_matches(navigator: &MatchNavigator) {
    let Some(snapshot) = navigator.snapshot() else {
        return;
    };
    let index = LineIndex::new(snapshot);
    for (i, span) in navigator.matches().iter().enumerate() {
        println!(
            "  {}: {} - {}",
            i + 1,
            index.position(span.start()),
            index.position(span.end())
        );
    }
}

fn report(navigator: &MatchNavigator, locator: &FixedLocator<MemDocument>) {
    let Some(info) = navigator.current_match_info() else {
        return;
    };
    log::debug!("selection request: {:?}", navigator.last_outcome());
    let document = locator.document();
    match (
        document.and_then(MemDocument::selection),
        document.and_then(MemDocument::selected_text),
    ) {
        (Some(range), Some(text)) => println!("{info}: {range} {text:?}"),
        _ => println!("{info}: no selection"),
    }
}
