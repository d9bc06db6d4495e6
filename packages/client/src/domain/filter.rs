//! Listing criteria chosen by the user.

/// Query criteria for the room listing.
///
/// Any change starts a new listing generation: fetched pages are dropped and
/// the cursor goes back to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    /// Free-text search; empty matches everything
    pub search: String,
    /// `Some(true)` public only, `Some(false)` private only, `None` both
    pub is_public: Option<bool>,
    /// `Some(true)` rooms with a free seat only
    pub is_possible: Option<bool>,
}

impl RoomFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into().trim().to_string();
        self
    }

    pub fn with_public(mut self, is_public: Option<bool>) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn with_possible(mut self, is_possible: Option<bool>) -> Self {
        self.is_possible = is_possible;
        self
    }
}
