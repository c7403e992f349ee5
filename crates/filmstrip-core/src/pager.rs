//! Page-indicator state.
//!
//! Tracks one active/inactive flag per page marker (the "dots" under a
//! carousel). At most one marker is ever active.

/// State for a row of page markers.
#[derive(Clone, Debug, Default)]
pub struct Pager {
    markers: Vec<bool>,
}

impl Pager {
    /// Create a pager with `count` markers, none active.
    pub fn new(count: usize) -> Self {
        Self {
            markers: vec![false; count],
        }
    }

    /// Number of markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether the pager has no markers at all.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Activate exactly one marker, deactivating all others.
    ///
    /// No-op when there are no markers or the index is out of range.
    pub fn set_active(&mut self, index: usize) {
        if index >= self.markers.len() {
            return;
        }
        for (i, marker) in self.markers.iter_mut().enumerate() {
            *marker = i == index;
        }
    }

    /// Deactivate every marker.
    pub fn clear_active(&mut self) {
        for marker in &mut self.markers {
            *marker = false;
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.markers.get(index).copied().unwrap_or(false)
    }

    /// Index of the active marker, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.markers.iter().position(|&on| on)
    }
}
