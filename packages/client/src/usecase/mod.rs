//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層と Gateway を操作します。

pub mod browse_rooms;
pub mod enter_room;
pub mod error;
pub mod preview_rooms;
pub mod room_feed;
pub mod study_session;

pub use browse_rooms::{BrowseRoomsUseCase, PageResponse};
pub use enter_room::{EnterRoomUseCase, PasswordOutcome, PasswordPrompt, Selection};
pub use error::EnterRoomError;
pub use preview_rooms::{HOME_PREVIEW_LIMIT, PreviewRoomsUseCase};
pub use room_feed::{Completion, FeedSnapshot, FeedStatus, PageRequest, RoomFeed};
pub use study_session::{SessionEvent, SessionRecord, StudySession};
