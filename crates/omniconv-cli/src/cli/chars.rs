use clap::Parser;
use omniconv::chain::char_stats;

/// Prints the character count of a value, as `N chars`.
#[derive(Parser)]
pub(super) struct Chars {
    /// The text to measure.
    #[clap(index = 1)]
    input: String,
}

impl Chars {
    pub(super) fn run(&self) {
        println!("{}", char_stats(&self.input));
    }
}
