//! Effects produced by state transitions

/// What a successful transition changed, for logging and the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The selection moved; `None` means nothing is picked up anymore
    SelectionChanged { selected: Option<String> },

    /// An item was placed into a category
    Assigned {
        item_id: String,
        category_id: String,
        /// Category the item was in before, if any
        previous: Option<String>,
    },

    /// Every item was scored
    Scored { score: usize, total: usize },

    /// A fresh shuffled game replaced the old one
    GameReset { order: Vec<String> },
}

impl Effect {
    pub fn scored(score: usize, total: usize) -> Self {
        Effect::Scored { score, total }
    }
}
