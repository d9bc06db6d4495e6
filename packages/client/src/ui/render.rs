//! Views: pure functions from state snapshots to text.

use std::fmt::Write;

use crate::{
    domain::{Room, RoomFilter, Route},
    usecase::{FeedSnapshot, FeedStatus, PasswordPrompt, StudySession},
};

use super::style::{StyleState, style_for};

/// Home preview state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewState {
    Loading,
    Loaded(Vec<Room>),
    Failed(String),
}

fn title_of(route: &Route) -> &'static str {
    match route {
        Route::Home => "Home",
        Route::Login => "Login",
        Route::Register => "Register",
        Route::Planner => "Planner",
        Route::StudyRooms => "Study Rooms",
        Route::StudyRoom(_) => "Study Room",
    }
}

/// Page header; auth buttons only appear on the room list
pub fn render_header(route: &Route, show_auth_buttons: bool) -> String {
    let mut out = format!("== {} ({}) ==", title_of(route), route);
    if show_auth_buttons && *route == Route::StudyRooms {
        out.push_str("   [login] [register]");
    }
    out
}

/// One room card on a single line
pub fn render_room_line(number: usize, room: &Room) -> String {
    let visibility = style_for(StyleState::Visibility(room.visibility()));
    let chat = style_for(StyleState::Chat(room.chat_enabled()));
    let seats = style_for(StyleState::Occupancy {
        full: room.is_full(),
    });

    let mut line = format!(
        "{:>3}. {} {}  {} {}/{}  {}",
        number,
        visibility.glyph,
        room.title(),
        seats.glyph,
        room.occupancy(),
        room.capacity(),
        chat.glyph,
    );
    if !room.tags().is_empty() {
        let tags: Vec<String> = room.tags().iter().map(|t| format!("#{}", t)).collect();
        let _ = write!(line, "  {}", tags.join(" "));
    }
    line
}

fn render_filter(filter: &RoomFilter) -> String {
    let public = style_for(StyleState::Toggle(filter.is_public));
    let possible = style_for(StyleState::Toggle(filter.is_possible));
    let search = if filter.search.is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", filter.search)
    };
    format!(
        "search: {}  public {} {}  possible {} {}",
        search, public.glyph, public.label, possible.glyph, possible.label
    )
}

/// Room list view
pub fn render_feed(snapshot: &FeedSnapshot) -> String {
    let mut out = render_filter(&snapshot.filter);
    if let Some(limit) = snapshot.limit {
        let _ = write!(out, "  (page size {})", limit);
    }
    out.push('\n');

    match &snapshot.status {
        FeedStatus::AwaitingLayout => out.push_str("Measuring the list container..."),
        FeedStatus::Loading => out.push_str("Loading..."),
        FeedStatus::Empty => out.push_str("No search results."),
        FeedStatus::Failed(message) => {
            let _ = write!(out, "Failed to load the room list: {}", message);
        }
        FeedStatus::Ready => {
            for (index, room) in snapshot.rooms.iter().enumerate() {
                out.push_str(&render_room_line(index + 1, room));
                out.push('\n');
            }
            if snapshot.loading_more {
                out.push_str("... loading more");
            } else if snapshot.has_more {
                out.push_str("... 'scroll' for more");
            } else {
                let _ = write!(out, "-- {} rooms --", snapshot.rooms.len());
            }
        }
    }
    out
}

/// Home preview view
pub fn render_preview(state: &PreviewState) -> String {
    match state {
        PreviewState::Loading => "Loading...".to_string(),
        PreviewState::Failed(message) => format!("Error: {}", message),
        PreviewState::Loaded(rooms) if rooms.is_empty() => "No rooms yet.".to_string(),
        PreviewState::Loaded(rooms) => {
            let mut out = String::from("Study rooms (log in to join)\n");
            for (index, room) in rooms.iter().enumerate() {
                out.push_str(&render_room_line(index + 1, room));
                out.push('\n');
            }
            out.push_str("'rooms' for the full list");
            out
        }
    }
}

pub fn render_prompt(prompt: &PasswordPrompt) -> String {
    format!(
        "'{}' is private. Enter 'password <pw>' or 'cancel'.",
        prompt.title
    )
}

/// Study timer view
pub fn render_session(session: &StudySession) -> String {
    let state = if session.is_active() { "running" } else { "paused" };
    format!(
        "current task {}  |  total {}  ({})",
        session.current_task_time(),
        session.total_study_time(),
        state
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ElapsedTime, PageSize, UserId,
        entity::fixtures::{private_room, room},
    };

    fn snapshot(rooms: Vec<Room>, status: FeedStatus, has_more: bool) -> FeedSnapshot {
        FeedSnapshot {
            generation: 1,
            filter: RoomFilter::default().with_public(Some(true)),
            limit: Some(PageSize::new(9).unwrap()),
            rooms,
            status,
            has_more,
            loading_more: false,
        }
    }

    #[test]
    fn test_render_feed_lists_rooms_in_order() {
        // テスト項目: 一覧は取得順に番号付きで表示される
        // given (前提条件):
        let view = snapshot(vec![room("a"), private_room("b")], FeedStatus::Ready, true);

        // when (操作):
        let text = render_feed(&view);

        // then (期待する結果):
        let a = text.find("room a").unwrap();
        let b = text.find("secret b").unwrap();
        assert!(a < b);
        assert!(text.contains("  1. "));
        assert!(text.contains("  2. "));
        assert!(text.contains("(page size 9)"));
        assert!(text.contains("public [✔] on  possible [ ] any"));
        assert!(text.ends_with("... 'scroll' for more"));
    }

    #[test]
    fn test_render_feed_end_of_list() {
        // テスト項目: 続きがない場合は件数を表示する
        // when (操作):
        let text = render_feed(&snapshot(vec![room("a")], FeedStatus::Ready, false));

        // then (期待する結果):
        assert!(text.ends_with("-- 1 rooms --"));
    }

    #[test]
    fn test_render_feed_states() {
        // テスト項目: 読み込み中・空・エラーの各状態が表示される
        // then (期待する結果):
        assert!(render_feed(&snapshot(vec![], FeedStatus::Loading, true)).contains("Loading"));
        assert!(
            render_feed(&snapshot(vec![], FeedStatus::Empty, false)).contains("No search results")
        );
        assert!(
            render_feed(&snapshot(
                vec![],
                FeedStatus::Failed("unexpected status 500".to_string()),
                false
            ))
            .contains("Failed to load the room list: unexpected status 500")
        );
    }

    #[test]
    fn test_render_room_line_shows_occupancy_and_tags() {
        // テスト項目: ルームの在室人数とタグが表示される
        // given (前提条件):
        let room = room("a").with_tags(vec!["math".to_string(), "exam".to_string()]);

        // when (操作):
        let line = render_room_line(7, &room);

        // then (期待する結果):
        assert!(line.starts_with("  7. "));
        assert!(line.contains("0/4"));
        assert!(line.ends_with("#math #exam"));
    }

    #[test]
    fn test_render_header_auth_buttons_only_on_room_list() {
        // テスト項目: ログイン / 会員登録ボタンはルーム一覧でのみ表示される
        // then (期待する結果):
        assert!(render_header(&Route::StudyRooms, true).contains("[login] [register]"));
        assert!(!render_header(&Route::Home, true).contains("[login]"));
        assert!(!render_header(&Route::StudyRooms, false).contains("[login]"));
    }

    #[test]
    fn test_render_session() {
        // テスト項目: タイマーの現在値が表示される
        // given (前提条件):
        let session = StudySession::new(
            UserId::new("guest".to_string()).unwrap(),
            ElapsedTime::from_secs(300),
        );

        // when (操作):
        let text = render_session(&session);

        // then (期待する結果):
        assert_eq!(text, "current task 00:00:00  |  total 00:05:00  (paused)");
    }
}
