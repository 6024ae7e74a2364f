pub mod answer;
pub mod check;
pub mod new;
pub mod play;

use std::path::Path;

use fizz_engine::Game;

/// Load a game definition file. Rule validation runs again during
/// deserialization, so a hand-edited file cannot bypass it.
fn load_game(path: &Path) -> Result<Game, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|e| format!("{} is not a valid game definition: {e}", path.display()))
}
