use std::io;
use std::process;

use mastermind::cli::parse_cli;
use mastermind::play;

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    if let Err(e) = play(cli.code_length, cli.colors, cli.max_turns, &mut reader) {
        eprintln!("La partie s'est interrompue : {e}");
        process::exit(1);
    }
}
