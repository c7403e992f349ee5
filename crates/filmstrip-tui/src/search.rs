use filmstrip_core::InputState;
use filmstrip_domain::{search, CompositeMatcher, ImageCard};

pub struct SearchState {
    pub input: InputState,
    pub is_active: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            is_active: false,
        }
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.input.clear();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.input.clear();
    }

    pub fn query(&self) -> &str {
        self.input.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.input.as_str().trim().is_empty()
    }

    /// Indices of the cards matching the current query.
    pub fn results(&self, cards: &[ImageCard]) -> Vec<usize> {
        let matcher = CompositeMatcher::new(self.query().trim().to_string());
        search::filter_cards(cards, &matcher)
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
