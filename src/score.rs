/// Per-turn result: `black` pegs are exact matches, `white` pegs are the
/// right color in the wrong place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

/// Compares a guess to the secret, Mastermind rules.
///
/// Each secret peg can be consumed by at most one guess peg, so a color the
/// secret holds once never yields more than one white no matter how often it
/// is guessed. Exact matches are consumed before white counting.
pub fn score_guess(guess: &[u8], secret: &[u8]) -> Score {
    let mut remaining: Vec<Option<u8>> = secret.iter().copied().map(Some).collect();
    let mut black = 0;

    // First pass: blacks
    for (i, &peg) in guess.iter().enumerate() {
        if secret.get(i) == Some(&peg) {
            black += 1;
            remaining[i] = None; // Mark as used
        }
    }

    // Second pass: whites, against whatever the blacks left over
    let mut white = 0;
    for (i, &peg) in guess.iter().enumerate() {
        if secret.get(i) == Some(&peg) {
            continue;
        }
        if let Some(pos) = remaining.iter().position(|&p| p == Some(peg)) {
            remaining[pos] = None; // Mark as used
            white += 1;
        }
    }

    Score { black, white }
}
