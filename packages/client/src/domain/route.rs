//! Client-side routes.

use std::{fmt, str::FromStr};

use super::{error::ValueObjectError, value_object::RoomId};

/// Screens the client can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Planner,
    StudyRooms,
    StudyRoom(RoomId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Planner => "/planner".to_string(),
            Route::StudyRooms => "/study-rooms".to_string(),
            Route::StudyRoom(id) => format!("/study-room/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match path {
            "/" | "" => Ok(Route::Home),
            "/login" => Ok(Route::Login),
            "/register" => Ok(Route::Register),
            "/planner" => Ok(Route::Planner),
            "/study-rooms" => Ok(Route::StudyRooms),
            other => match other.strip_prefix("/study-room/") {
                Some(id) if !id.contains('/') => {
                    RoomId::new(id.to_string()).map(Route::StudyRoom)
                }
                _ => Err(ValueObjectError::RouteUnknown(s.to_string())),
            },
        }
    }
}
