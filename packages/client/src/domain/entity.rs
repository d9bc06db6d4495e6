//! Core domain models for the study room listing.

use super::{error::ValueObjectError, layout::PageSize, value_object::RoomId};

/// Whether a room can be entered without a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn from_is_public(is_public: bool) -> Self {
        if is_public {
            Self::Public
        } else {
            Self::Private
        }
    }
}

/// A study room as listed by the backend.
///
/// The backend owns rooms; the client only holds read-only copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    title: String,
    image_url: String,
    tags: Vec<String>,
    visibility: Visibility,
    chat_enabled: bool,
    capacity: u32,
    occupancy: u32,
}

impl Room {
    /// Create a room without image, tags or chat.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::OccupancyExceedsCapacity` when `occupancy > capacity`
    pub fn new(
        id: RoomId,
        title: impl Into<String>,
        visibility: Visibility,
        capacity: u32,
        occupancy: u32,
    ) -> Result<Self, ValueObjectError> {
        if occupancy > capacity {
            return Err(ValueObjectError::OccupancyExceedsCapacity {
                capacity,
                occupancy,
            });
        }
        Ok(Self {
            id,
            title: title.into(),
            image_url: String::new(),
            tags: Vec::new(),
            visibility,
            chat_enabled: false,
            capacity,
            occupancy,
        })
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_chat(mut self, chat_enabled: bool) -> Self {
        self.chat_enabled = chat_enabled;
        self
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn chat_enabled(&self) -> bool {
        self.chat_enabled
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }

    /// True when nobody else can join
    pub fn is_full(&self) -> bool {
        self.occupancy >= self.capacity
    }
}

/// One response of the cursor-based listing.
///
/// `has_more` is derived on the client: a short page ends the sequence. When the
/// result set is an exact multiple of the page size this costs one trailing
/// empty request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    rooms: Vec<Room>,
    offset: usize,
    has_more: bool,
}

impl Page {
    /// Build the page returned for a request at `request_offset` with `limit`.
    pub fn from_response(rooms: Vec<Room>, request_offset: usize, limit: PageSize) -> Self {
        let returned = rooms.len();
        Self {
            offset: request_offset + returned,
            has_more: returned == limit.get(),
            rooms,
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Offset to send with the next request
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }
}
