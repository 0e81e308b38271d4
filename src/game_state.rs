use std::io::BufRead;

use log::{debug, info};

use crate::code::{format_code, generate_code, read_valid_code};
use crate::history::{record, render_history, HistoryEntry};
use crate::score::{score_guess, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// Decides the fate of the current turn. A full-black score wins even when
/// it lands on the very last turn.
pub fn check_game_state(
    turn: usize,
    score: Score,
    max_turns: usize,
    code_length: usize,
) -> GameState {
    if score.black == code_length {
        GameState::Won
    } else if turn >= max_turns {
        GameState::Lost
    } else {
        GameState::Playing
    }
}

fn win_message(turn: usize) -> String {
    format!("Bravo, vous avez gagné en {turn} tour(s) !")
}

fn loss_message(secret: &[u8]) -> String {
    format!(
        "Dommage, vous avez perdu... Le code était {}.",
        format_code(secret)
    )
}

/// Runs one session against a known secret.
///
/// Generic over the reader so tests can script a whole game with a
/// `Cursor`. Each turn reads a validated guess, scores and records it,
/// reprints the history, and stops on `Won` or `Lost`. Nothing is read
/// after a terminal state; a dead input stream aborts the session with
/// the underlying error.
pub fn game_loop<R: BufRead>(
    secret: &[u8],
    colors: u8,
    max_turns: usize,
    reader: &mut R,
) -> anyhow::Result<GameState> {
    let mut history: Vec<HistoryEntry> = Vec::new();
    let mut turn = 1;

    loop {
        let guess = read_valid_code(reader, secret.len(), colors)?;
        let score = score_guess(&guess, secret);
        record(&mut history, guess, score);
        print!("{}", render_history(&history));

        match check_game_state(turn, score, max_turns, secret.len()) {
            GameState::Won => {
                info!("player won on turn {turn}");
                println!("{}", win_message(turn));
                return Ok(GameState::Won);
            }
            GameState::Lost => {
                info!("player lost after {turn} turns");
                println!("{}", loss_message(secret));
                return Ok(GameState::Lost);
            }
            GameState::Playing => turn += 1,
        }
    }
}

/// Banner, fresh secret, then the loop.
pub fn play<R: BufRead>(
    length: usize,
    colors: u8,
    max_turns: usize,
    reader: &mut R,
) -> anyhow::Result<GameState> {
    println!(
        "Devinez le code secret : {length} chiffres entre 0 et {}, {max_turns} tours maximum.",
        colors - 1
    );
    let secret = generate_code(length, colors);
    debug!("secret drawn: {}", format_code(&secret));
    game_loop(&secret, colors, max_turns, reader)
}
