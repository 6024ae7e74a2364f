use std::path::Path;

use fizz_engine::compute_answer;

pub fn run(number: i64, file: &Path) -> Result<(), String> {
    let game = super::load_game(file)?;
    let answer = compute_answer(number, game.rules()).map_err(|e| e.to_string())?;
    println!("{answer}");
    Ok(())
}
