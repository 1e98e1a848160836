//! Eval command: rank the best hand from hole and board cards.

use crate::error::CliError;
use crate::ui::format_cards;
use std::collections::HashSet;
use std::io::Write;
use tablestakes_engine::cards::Card;
use tablestakes_engine::hand::evaluate;

/// `cards` holds two hole cards followed by zero to five board cards.
pub fn handle_eval_command(
    cards: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !(2..=7).contains(&cards.len()) {
        return Err(CliError::InvalidInput(format!(
            "expected 2 to 7 cards, got {}",
            cards.len()
        )));
    }
    let parsed = cards
        .iter()
        .map(|c| c.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let mut seen = HashSet::new();
    if let Some(dup) = parsed.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("duplicate card {}", dup)));
    }

    let (hole, board) = parsed.split_at(2);
    let rank = evaluate(hole, board);

    if json {
        let names = |cs: &[Card]| cs.iter().map(Card::to_string).collect::<Vec<_>>();
        let display = serde_json::json!({
            "category": rank.label(),
            "strength": rank.strength(),
            "cards": names(&rank.cards),
            "defining": rank.defining,
            "kickers": rank.kickers,
            "hole": names(hole),
            "board": names(board),
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        return Ok(());
    }

    writeln!(out, "Hand: {}", rank.label())?;
    writeln!(out, "Strength: {}", rank.strength())?;
    writeln!(out, "Cards: {}", format_cards(&rank.cards))?;
    Ok(())
}
