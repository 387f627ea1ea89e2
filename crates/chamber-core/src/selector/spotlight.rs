use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{MemberCollection, MemberRecord};

/// Fewest members a spotlight draw asks for
pub const MIN_SPOTLIGHTS: usize = 2;

/// Most members a spotlight draw asks for
pub const MAX_SPOTLIGHTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpotlightOutcome {
    /// Members to feature, in display order.
    Selected(Vec<MemberRecord>),
    /// No gold or silver member exists in the collection.
    NoEligibleMembers,
}

impl SpotlightOutcome {
    pub fn selected(&self) -> &[MemberRecord] {
        match self {
            SpotlightOutcome::Selected(members) => members,
            SpotlightOutcome::NoEligibleMembers => &[],
        }
    }
}

/// Gold and silver members, in collection order.
pub fn eligible_members(collection: &MemberCollection) -> Vec<MemberRecord> {
    collection
        .iter()
        .filter(|m| m.is_spotlight_eligible())
        .cloned()
        .collect()
}

/// Draw how many members to feature: 2 or 3 with equal probability.
pub fn draw_count<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(MIN_SPOTLIGHTS..=MAX_SPOTLIGHTS)
}

/// Pick the members for the spotlight panel.
///
/// Ineligible members never appear. The draw count is independent of how
/// many members are eligible, so fewer than two eligible members yields
/// all of them. Every call redraws.
pub fn render_spotlight<R: Rng + ?Sized>(
    collection: &MemberCollection,
    rng: &mut R,
) -> SpotlightOutcome {
    let mut eligible = eligible_members(collection);
    if eligible.is_empty() {
        return SpotlightOutcome::NoEligibleMembers;
    }

    let count = draw_count(rng);
    eligible.shuffle(rng);
    eligible.truncate(count);
    SpotlightOutcome::Selected(eligible)
}
