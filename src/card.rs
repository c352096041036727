//! The normalized card record and the deck built from it.

/// A body section of a card, in the order sections are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Description,
    Features,
    Exits,
    SecretDoor,
    EncounterHooks,
    TrapsHazards,
    Loot,
    ClueThreads,
    Reward,
    Insight,
    Cost,
}

impl Section {
    pub const DRAW_ORDER: [Section; 11] = [
        Section::Description,
        Section::Features,
        Section::Exits,
        Section::SecretDoor,
        Section::EncounterHooks,
        Section::TrapsHazards,
        Section::Loot,
        Section::ClueThreads,
        Section::Reward,
        Section::Insight,
        Section::Cost,
    ];

    /// The (lower-cased) document key the section is read from.
    pub fn key(self) -> &'static str {
        match self {
            Section::Description => "description",
            Section::Features => "features",
            Section::Exits => "exits",
            Section::SecretDoor => "secret_door",
            Section::EncounterHooks => "encounter_hooks",
            Section::TrapsHazards => "traps_hazards",
            Section::Loot => "loot",
            Section::ClueThreads => "clue_threads",
            Section::Reward => "reward",
            Section::Insight => "insight",
            Section::Cost => "cost",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Description => "Description",
            Section::Features => "Features",
            Section::Exits => "Exits",
            Section::SecretDoor => "Secret Door",
            Section::EncounterHooks => "Encounter Hooks",
            Section::TrapsHazards => "Traps & Hazards",
            Section::Loot => "Loot",
            Section::ClueThreads => "Clue Threads",
            Section::Reward => "Reward",
            Section::Insight => "Insight",
            Section::Cost => "Cost",
        }
    }
}

/// One card, every field already a display string.
///
/// Optional sections are empty strings when absent; empty sections are not drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub card_id: String,
    pub title: String,
    pub outcome: String,
    pub description: String,
    pub features: String,
    pub exits: String,
    pub secret_door: String,
    pub encounter_hooks: String,
    pub traps_hazards: String,
    pub loot: String,
    pub clue_threads: String,
    pub reward: String,
    pub insight: String,
    pub cost: String,
}

impl Card {
    pub fn section(&self, section: Section) -> &str {
        match section {
            Section::Description => &self.description,
            Section::Features => &self.features,
            Section::Exits => &self.exits,
            Section::SecretDoor => &self.secret_door,
            Section::EncounterHooks => &self.encounter_hooks,
            Section::TrapsHazards => &self.traps_hazards,
            Section::Loot => &self.loot,
            Section::ClueThreads => &self.clue_threads,
            Section::Reward => &self.reward,
            Section::Insight => &self.insight,
            Section::Cost => &self.cost,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Description => &mut self.description,
            Section::Features => &mut self.features,
            Section::Exits => &mut self.exits,
            Section::SecretDoor => &mut self.secret_door,
            Section::EncounterHooks => &mut self.encounter_hooks,
            Section::TrapsHazards => &mut self.traps_hazards,
            Section::Loot => &mut self.loot,
            Section::ClueThreads => &mut self.clue_threads,
            Section::Reward => &mut self.reward,
            Section::Insight => &mut self.insight,
            Section::Cost => &mut self.cost,
        }
    }

    /// Sections with content, in draw order.
    pub fn present_sections(&self) -> impl Iterator<Item = (Section, &str)> {
        Section::DRAW_ORDER
            .into_iter()
            .map(move |s| (s, self.section(s)))
            .filter(|(_, text)| !text.is_empty())
    }
}

/// Repeats the whole card list `copies` times, in order.
pub fn replicate(cards: &[Card], copies: usize) -> Vec<Card> {
    let total = cards.len().saturating_mul(copies.max(1));
    cards.iter().cycle().take(total).cloned().collect()
}
