use std::fs;
use std::path::{Path, PathBuf};

use fizz_engine::{Game, Rule, RuleSet};

pub fn run(
    name: &str,
    author: &str,
    rule_specs: &[String],
    output: Option<&Path>,
) -> Result<(), String> {
    let rules = parse_rules(rule_specs)?;
    let rules = RuleSet::new(rules).map_err(|e| e.to_string())?;
    let game = Game::new(name, author, rules).map_err(|e| e.to_string())?;

    let target = output.map_or_else(|| default_file_name(name), Path::to_path_buf);
    if target.exists() {
        return Err(format!("{} already exists", target.display()));
    }

    let json = serde_json::to_string_pretty(&game).map_err(|e| e.to_string())?;
    fs::write(&target, json + "\n")
        .map_err(|e| format!("cannot write {}: {e}", target.display()))?;

    println!(
        "  Created game '{}' with {} rule{} at {}",
        game.name(),
        game.rules().len(),
        if game.rules().len() == 1 { "" } else { "s" },
        target.display()
    );

    Ok(())
}

/// Parse `divisor=word` specs; flag position becomes the sort order.
fn parse_rules(specs: &[String]) -> Result<Vec<Rule>, String> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let (divisor, word) = spec
                .split_once('=')
                .ok_or_else(|| format!("rule \"{spec}\" is not of the form divisor=word"))?;
            let divisor: i64 = divisor
                .trim()
                .parse()
                .map_err(|_| format!("rule \"{spec}\" has a non-numeric divisor"))?;
            Ok(Rule::new(divisor, word.trim(), index as u32))
        })
        .collect()
}

fn default_file_name(name: &str) -> PathBuf {
    let stem: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    PathBuf::from(format!("{}.json", stem.trim_matches('-')))
}
