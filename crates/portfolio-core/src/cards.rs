//! Card records and the registries the modals read from.
//!
//! Cards are rendered from these records and a click carries only the card id;
//! the modal then looks the record up here instead of walking the DOM.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Anything stored in a [`CardRegistry`]
pub trait Card {
    fn id(&self) -> &str;
}

/// A competition result shown in the achievements carousel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementCard {
    pub id: String,
    pub category: String,
    pub title: String,
    pub location: String,
    pub result: String,
    pub description: String,
    #[serde(default)]
    pub quote: Option<String>,
    /// Short label on the card face (e.g. the year)
    #[serde(default)]
    pub badge: Option<String>,
}

impl Card for AchievementCard {
    fn id(&self) -> &str {
        &self.id
    }
}

impl AchievementCard {
    /// Quote text as the modal shows it, wrapped in quotation marks.
    ///
    /// `None` when the card has no quote or an empty one.
    pub fn display_quote(&self) -> Option<String> {
        self.quote
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(|q| format!("\"{}\"", q))
    }
}

/// Field values for the achievement modal, copied verbatim from a card
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AchievementView {
    pub category: String,
    pub title: String,
    pub location: String,
    pub result: String,
    pub description: String,
    /// `None` hides the quote element
    pub quote: Option<String>,
}

impl From<&AchievementCard> for AchievementView {
    fn from(card: &AchievementCard) -> Self {
        Self {
            category: card.category.clone(),
            title: card.title.clone(),
            location: card.location.clone(),
            result: card.result.clone(),
            description: card.description.clone(),
            quote: card.display_quote(),
        }
    }
}

/// Partnership tier, ordered from most to least prominent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerTier {
    Main,
    Gold,
    #[default]
    Supporter,
}

impl PartnerTier {
    pub fn label(&self) -> &'static str {
        match self {
            PartnerTier::Main => "Main Partner",
            PartnerTier::Gold => "Gold Partner",
            PartnerTier::Supporter => "Supporter",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PartnerTier::Main => "partner-tier-main",
            PartnerTier::Gold => "partner-tier-gold",
            PartnerTier::Supporter => "partner-tier-supporter",
        }
    }
}

/// A sponsor shown in the partners grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tier: PartnerTier,
    #[serde(default)]
    pub logo: Option<String>,
    pub blurb: String,
    #[serde(default)]
    pub website: Option<String>,
}

impl Card for PartnerCard {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Ordered collection of cards with id lookup
#[derive(Clone, Debug, PartialEq)]
pub struct CardRegistry<T> {
    cards: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for CardRegistry<T> {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Card> CardRegistry<T> {
    /// Build a registry, rejecting duplicate ids
    pub fn new(cards: Vec<T>) -> PortfolioResult<Self> {
        let mut index = HashMap::with_capacity(cards.len());
        for (i, card) in cards.iter().enumerate() {
            if index.insert(card.id().to_string(), i).is_some() {
                return Err(PortfolioError::DuplicateCard(card.id().to_string()));
            }
        }
        Ok(Self { cards, index })
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Like [`CardRegistry::get`] but reports unknown ids as an error
    pub fn lookup(&self, id: &str) -> PortfolioResult<&T> {
        self.get(id)
            .ok_or_else(|| PortfolioError::UnknownCard(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nationals(quote: Option<&str>) -> AchievementCard {
        AchievementCard {
            id: "swiss-nationals".to_string(),
            category: "Kickboxing".to_string(),
            title: "Swiss Nationals".to_string(),
            location: "Zurich".to_string(),
            result: "1st place".to_string(),
            description: "Won the national title.".to_string(),
            quote: quote.map(str::to_string),
            badge: None,
        }
    }

    #[test]
    fn test_empty_quote_is_hidden() {
        assert_eq!(nationals(Some("")).display_quote(), None);
        assert_eq!(nationals(None).display_quote(), None);
    }

    #[test]
    fn test_quote_is_wrapped() {
        let view = AchievementView::from(&nationals(Some("Never give up")));
        assert_eq!(view.quote.as_deref(), Some("\"Never give up\""));
        assert_eq!(view.title, "Swiss Nationals");
        assert_eq!(view.location, "Zurich");
    }

    #[test]
    fn test_registry_lookup() {
        let registry = CardRegistry::new(vec![nationals(None)]).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("swiss-nationals").is_some());
        assert!(matches!(
            registry.lookup("missing"),
            Err(PortfolioError::UnknownCard(id)) if id == "missing"
        ));
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let result = CardRegistry::new(vec![nationals(None), nationals(None)]);
        assert!(matches!(result, Err(PortfolioError::DuplicateCard(_))));
    }

    #[test]
    fn test_partner_tier_deserialize() {
        let card: PartnerCard = serde_json::from_str(
            r#"{ "id": "gym", "name": "Fight Gym", "tier": "gold", "blurb": "Training home" }"#,
        )
        .unwrap();
        assert_eq!(card.tier, PartnerTier::Gold);
        assert_eq!(card.tier.label(), "Gold Partner");
        assert!(card.logo.is_none());
    }
}
