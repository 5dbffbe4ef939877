//! Read-only situational data supplied with each parse call.

/// What the engine knows about the player's surroundings right now.
///
/// The parser only reads this; it is never stored between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    /// Name of the character the player is talking to, if any.
    pub conversation_partner: Option<String>,
    /// Names of characters the player can see.
    pub visible_npcs: Vec<String>,
    /// Names of items the player can see.
    pub visible_items: Vec<String>,
    /// Whether a fight is in progress.
    pub in_combat: bool,
}

impl ParseContext {
    /// An empty context: nobody around, no combat.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the conversation partner.
    pub fn with_partner(mut self, name: impl Into<String>) -> Self {
        self.conversation_partner = Some(name.into());
        self
    }

    /// Add a visible character.
    pub fn with_npc(mut self, name: impl Into<String>) -> Self {
        self.visible_npcs.push(name.into());
        self
    }

    /// Add a visible item.
    pub fn with_item(mut self, name: impl Into<String>) -> Self {
        self.visible_items.push(name.into());
        self
    }

    /// Set the combat flag.
    pub fn with_combat(mut self, in_combat: bool) -> Self {
        self.in_combat = in_combat;
        self
    }

    /// If `tokens` begin with the name of a visible character, return that
    /// name and how many tokens it spans. Longer names win.
    pub(crate) fn leading_npc(&self, tokens: &[String]) -> Option<(&str, usize)> {
        self.visible_npcs
            .iter()
            .filter_map(|name| {
                let words: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
                let matches = !words.is_empty() && tokens.starts_with(&words);
                matches.then_some((name.as_str(), words.len()))
            })
            .max_by_key(|(_, len)| *len)
    }
}
