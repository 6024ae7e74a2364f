use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(file: &Path) -> Result<(), String> {
    let game = super::load_game(file)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Order", "Divisor", "Word"]);
    for rule in game.rules().rules() {
        table.add_row(vec![
            rule.sort_order.to_string(),
            rule.divisor.to_string(),
            rule.word.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  All checks passed for '{}' by {} ({} rules).",
        game.name(),
        game.author(),
        game.rules().len()
    );

    Ok(())
}
