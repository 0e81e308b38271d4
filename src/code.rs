use std::io::{self, BufRead};

use log::debug;
use rand::Rng;

/// A code is an ordered row of pegs, each peg a digit in `0..colors`.
pub type Code = Vec<u8>;

pub fn is_valid_code(code: &[u8], length: usize, colors: u8) -> bool {
    code.len() == length && code.iter().all(|&peg| peg < colors)
}

/// Digits concatenated with no separator, the way the player typed them.
pub fn format_code(code: &[u8]) -> String {
    code.iter().map(|peg| peg.to_string()).collect()
}

/// Draws a fresh secret, each peg picked uniformly and independently.
/// Repetition is allowed, as in the board game.
pub fn generate_code(length: usize, colors: u8) -> Code {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| rng.gen_range(0..colors)).collect()
}

/// Reads one line and converts it digit-by-digit into a `Code`.
///
/// A blank line is an empty code, not an error. Any non-digit character
/// fails the whole line. Length and peg range are the caller's problem.
/// A closed stream surfaces as an `UnexpectedEof` I/O error.
pub fn read_code<R: BufRead>(reader: &mut R) -> anyhow::Result<Code> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }

    line.trim()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) => Ok(digit as u8),
            None => Err(anyhow::anyhow!("'{c}' is not a digit")),
        })
        .collect()
}

/// Prompts until the player enters a code that passes validation.
///
/// Unreadable or invalid attempts are dropped without comment and the
/// prompt repeats. I/O errors (including end of input) propagate.
pub fn read_valid_code<R: BufRead>(
    reader: &mut R,
    length: usize,
    colors: u8,
) -> anyhow::Result<Code> {
    loop {
        println!("Votre proposition ({length} chiffres entre 0 et {}) :", colors - 1);
        let code = match read_code(reader) {
            Ok(code) => code,
            Err(err) if err.is::<io::Error>() => return Err(err),
            Err(err) => {
                debug!("discarding unreadable input: {err}");
                continue;
            }
        };
        if is_valid_code(&code, length, colors) {
            return Ok(code);
        }
        debug!("discarding invalid code: {code:?}");
    }
}
