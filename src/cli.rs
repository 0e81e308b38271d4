use clap::Parser;

/// Mastermind CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of pegs in the secret code
    #[arg(short = 'l', long = "length", default_value_t = 4,
          value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub code_length: usize,

    /// Number of peg colors; pegs are digits in 0..colors
    #[arg(short = 'c', long = "colors", default_value_t = 6,
          value_parser = clap::value_parser!(u8).range(2..=10))]
    pub colors: u8,

    /// Number of turns before the game is lost
    #[arg(short = 'm', long = "max-turns", default_value_t = 10,
          value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_turns: usize,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mastermind"]).unwrap();
        assert_eq!(cli.code_length, 4);
        assert_eq!(cli.colors, 6);
        assert_eq!(cli.max_turns, 10);
    }

    #[test]
    fn test_custom_values() {
        let cli =
            Cli::try_parse_from(["mastermind", "--length", "5", "--colors", "8", "-m", "12"])
                .unwrap();
        assert_eq!(cli.code_length, 5);
        assert_eq!(cli.colors, 8);
        assert_eq!(cli.max_turns, 12);
    }

    #[test]
    fn test_colors_must_stay_single_digit() {
        assert!(Cli::try_parse_from(["mastermind", "--colors", "11"]).is_err());
        assert!(Cli::try_parse_from(["mastermind", "--colors", "1"]).is_err());
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(Cli::try_parse_from(["mastermind", "--length", "0"]).is_err());
    }

    #[test]
    fn test_cli_structure() {
        // Verify the struct can be built and read back directly
        let cli = Cli {
            code_length: 4,
            colors: 6,
            max_turns: 10,
        };
        assert_eq!(cli.code_length, 4);
    }
}
