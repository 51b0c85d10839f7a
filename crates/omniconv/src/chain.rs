//! Running conversions one after another, optionally feeding each result
//! into the next conversion.

use crate::{
    convert::{Conversion, ConvertError},
    text::char_count,
};

/// The state of an interactive conversion session.
///
/// In chain mode a conversion reads the previous result instead of the
/// user's input, as long as that result was a successful conversion. Error
/// results are never used as input.
#[derive(Debug, Clone, Default)]
pub struct ConverterSession {
    chain: bool,
    last: Option<Result<String, ConvertError>>,
}

impl ConverterSession {
    #[must_use]
    pub fn new(chain: bool) -> Self {
        Self { chain, last: None }
    }

    #[must_use]
    pub fn chain(&self) -> bool {
        self.chain
    }

    pub fn set_chain(&mut self, chain: bool) {
        self.chain = chain;
    }

    /// The most recent result, if any conversion has run.
    #[must_use]
    pub fn last(&self) -> Option<&Result<String, ConvertError>> {
        self.last.as_ref()
    }

    /// The input the next conversion would read.
    #[must_use]
    pub fn effective_input<'a>(&'a self, field_input: &'a str) -> &'a str {
        match &self.last {
            Some(Ok(previous)) if self.chain => previous,
            _ => field_input,
        }
    }

    /// Runs `conversion` and records its result.
    ///
    /// Does nothing and returns `None` when there is no input to convert.
    pub fn run(
        &mut self,
        conversion: Conversion,
        field_input: &str,
    ) -> Option<&Result<String, ConvertError>> {
        let input = self.effective_input(field_input);
        if input.is_empty() {
            return None;
        }
        let result = conversion.run(input);
        log::debug!("{conversion} on {input:?}: {result:?}");
        self.last = Some(result);
        self.last.as_ref()
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// The character count shown next to an input field.
#[must_use]
pub fn char_stats(text: &str) -> String {
    format!("{} chars", char_count(text))
}
