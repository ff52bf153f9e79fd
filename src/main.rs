use log::{error, info};
use std::io;
use std::process::ExitCode;
use wordle_helper::cli::{CliInterface, parse_cli};
use wordle_helper::logging;
use wordle_helper::tui::TuiInterface;
use wordle_helper::{EMBEDDED_WORDBANK, game_loop, load_wordbank_from_file, load_wordbank_from_str};

fn main() -> ExitCode {
    let cli = parse_cli();

    // The TUI owns the screen, so its logs go to a file unless told otherwise.
    let log_path = match (&cli.log_file, cli.tui) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => logging::default_log_path(),
        (None, false) => None,
    };
    if let Err(e) = logging::init(log_path.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
    }

    let wordbank = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path),
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    let wordbank = match wordbank {
        Ok(words) => words,
        Err(e) => {
            error!("Word bank unavailable: {e}");
            eprintln!("Failed to load word bank: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.tui {
        info!("Starting TUI");
        let mut interface = match TuiInterface::new(cli.alternates) {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&wordbank, &mut interface);
    } else {
        info!("Starting line interface");
        let stdin = io::stdin();
        let mut interface =
            CliInterface::new(stdin.lock(), io::stdout()).with_alternates(cli.alternates);
        game_loop(&wordbank, &mut interface);
    }
    ExitCode::SUCCESS
}
