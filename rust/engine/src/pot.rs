use serde::{Deserialize, Serialize};

use crate::player::{Participant, SeatIndex};

/// A slice of the pot and the seats that can win it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pot {
    pub amount: u32,
    pub eligible: Vec<SeatIndex>,
}

/// Split everything committed this hand into a main pot and side pots.
///
/// Layers are cut at each distinct commitment level among `contesters`.
/// Every participant pays into each layer up to that level, folded ones
/// included, but only contesters who reached the level are eligible. The
/// last layer takes whatever anyone put in above the second-highest level,
/// so the pots always sum to the total committed.
pub fn build_pots(participants: &[Participant], contesters: &[SeatIndex]) -> Vec<Pot> {
    let mut levels: Vec<u32> = contesters
        .iter()
        .filter_map(|&s| participants.get(s))
        .map(Participant::total_committed)
        .collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots = Vec::with_capacity(levels.len());
    let mut floor = 0u32;
    for (i, &level) in levels.iter().enumerate() {
        let cap = if i + 1 == levels.len() { u32::MAX } else { level };
        let amount: u32 = participants
            .iter()
            .map(|p| p.total_committed().min(cap).saturating_sub(floor))
            .sum();
        let eligible: Vec<SeatIndex> = contesters
            .iter()
            .copied()
            .filter(|&s| participants[s].total_committed() >= level)
            .collect();
        if amount > 0 && !eligible.is_empty() {
            pots.push(Pot { amount, eligible });
        }
        floor = level;
    }
    pots
}
