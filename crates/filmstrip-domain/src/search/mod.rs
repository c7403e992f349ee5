use crate::card::ImageCard;

pub trait CardMatcher {
    fn matches(&self, card: &ImageCard) -> bool;
}

/// Case-insensitive substring match on the display label.
pub struct LabelMatcher {
    query: String,
}

impl LabelMatcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl CardMatcher for LabelMatcher {
    fn matches(&self, card: &ImageCard) -> bool {
        if self.query.is_empty() {
            return true;
        }
        card.label.to_lowercase().contains(&self.query)
    }
}

/// Case-insensitive substring match on the image url.
pub struct UrlMatcher {
    query: String,
}

impl UrlMatcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl CardMatcher for UrlMatcher {
    fn matches(&self, card: &ImageCard) -> bool {
        if self.query.is_empty() {
            return true;
        }
        card.url.to_lowercase().contains(&self.query)
    }
}

/// Matches when any inner matcher does.
pub struct CompositeMatcher {
    matchers: Vec<Box<dyn CardMatcher>>,
}

impl CompositeMatcher {
    pub fn new(query: String) -> Self {
        let matchers: Vec<Box<dyn CardMatcher>> = vec![
            Box::new(LabelMatcher::new(query.clone())),
            Box::new(UrlMatcher::new(query)),
        ];
        Self { matchers }
    }
}

impl CardMatcher for CompositeMatcher {
    fn matches(&self, card: &ImageCard) -> bool {
        if self.matchers.is_empty() {
            return true;
        }
        self.matchers.iter().any(|m| m.matches(card))
    }
}

/// Filter a card list down to the indices that match.
pub fn filter_cards(cards: &[ImageCard], matcher: &dyn CardMatcher) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| matcher.matches(card))
        .map(|(i, _)| i)
        .collect()
}
