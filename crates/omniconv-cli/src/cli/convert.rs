use clap::Parser;
use omniconv::{chain::ConverterSession, config::Config, convert::Conversion};

/// Runs one or more conversions on a value, printing each result.
#[derive(Parser)]
pub(super) struct Convert {
    /// The value to convert.
    #[clap(index = 1)]
    input: String,
    /// A conversion to run: dec-to-hex, hex-to-dec, hex-to-base58,
    /// base58-to-hex, string-to-base64, base64-to-string or endian-swap.
    /// May be repeated; conversions run in the order given.
    #[clap(short = 'a', long = "action", required = true)]
    actions: Vec<Conversion>,
    /// Feed each successful result into the next conversion.
    #[clap(long)]
    chain: bool,
}

impl Convert {
    pub(super) fn run(&self, config: &Config) -> anyhow::Result<()> {
        let mut session = ConverterSession::new(self.chain || config.convert.chain);
        for &action in &self.actions {
            match session.run(action, &self.input) {
                Some(Ok(output)) => println!("{}: {output}", action.label()),
                Some(Err(err)) => println!("{}: {err}", action.label()),
                None => log::warn!("Nothing to convert for {action}"),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_parse_by_name() {
        let cmd = Convert::try_parse_from([
            "convert",
            "255",
            "-a",
            "dec-to-hex",
            "--action",
            "hex-to-base58",
            "--chain",
        ])
        .unwrap();
        assert_eq!(cmd.actions, [Conversion::DecToHex, Conversion::HexToBase58]);
        assert!(cmd.chain);
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(Convert::try_parse_from(["convert", "1", "-a", "dec-to-oct"]).is_err());
        assert!(Convert::try_parse_from(["convert", "1"]).is_err());
    }
}
