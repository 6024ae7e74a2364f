use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use fizz_engine::{EngineConfig, EngineError, EngineResult, GameEngine, SessionResult};
use fizz_store::{MemoryStore, SessionRepository};

/// Run a timed session against a game file.
///
/// The session lives in a store and every engine operation runs inside
/// `update_session`, the same read-modify-write bracket a server-side
/// collaborator would use.
pub fn run(file: &Path, duration: u32, seed: Option<u64>) -> Result<(), String> {
    let game = super::load_game(file)?;

    let mut config = EngineConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut engine = GameEngine::with_config(config);

    let store = MemoryStore::new();
    let session = engine
        .start_session(&game, duration)
        .map_err(|e| e.to_string())?;
    let id = session.id();
    store.create_session(session).map_err(|e| e.to_string())?;

    println!(
        "Playing '{}' for {duration} seconds. Type the word(s) for each number \
         (or the number itself when no rule matches); 'quit' ends early.",
        game.name()
    );

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        let drawn: EngineResult<(i64, i64)> = store
            .update_session(id, |s| {
                let number = engine.request_number(s)?;
                Ok((number, s.remaining_secs(Utc::now())))
            })
            .map_err(|e| e.to_string())?;

        let (number, remaining) = match drawn {
            Ok(pair) => pair,
            Err(EngineError::SessionEnded(reason)) => {
                println!("{reason}.");
                break;
            }
            Err(EngineError::NoNumbersRemaining { .. }) => {
                println!("Every number in the range has been played.");
                store
                    .update_session(id, |s| engine.end_session(s))
                    .map_err(|e| e.to_string())?;
                break;
            }
            Err(e) => return Err(e.to_string()),
        };

        print!("[{remaining:>4}s] {number} > ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        input.clear();
        let read = stdin
            .lock()
            .read_line(&mut input)
            .map_err(|e| e.to_string())?;
        let answer = input.trim().to_string();
        if read == 0 || answer.eq_ignore_ascii_case("quit") {
            store
                .update_session(id, |s| engine.end_session(s))
                .map_err(|e| e.to_string())?;
            break;
        }

        let outcome = store
            .update_session(id, |s| engine.submit_answer(s, &answer))
            .map_err(|e| e.to_string())?;
        match outcome {
            Ok(outcome) if outcome.correct => println!("  {}", "correct".green()),
            Ok(outcome) => {
                println!("  {}: the answer was {}", "wrong".red(), outcome.expected);
            }
            Err(EngineError::SessionEnded(reason)) => {
                println!("{reason}.");
                break;
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    let result = store
        .update_session(id, |s| engine.result(s))
        .map_err(|e| e.to_string())?;
    print_result(&result);
    Ok(())
}

fn print_result(result: &SessionResult) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Answered", "Correct", "Incorrect", "Accuracy"]);
    table.add_row(vec![
        result.total_answers.to_string(),
        result.correct_count.to_string(),
        result.incorrect_count.to_string(),
        format!("{}%", result.accuracy),
    ]);

    println!();
    println!("Session result:");
    println!("{table}");
}
