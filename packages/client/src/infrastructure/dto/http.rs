//! HTTP API request/response DTOs of the study room backend.

use serde::{Deserialize, Serialize};

use crate::domain::{PasswordVerdict, Room, RoomId, ValueObjectError, Visibility};

/// Message the backend sends when the password matches.
pub const PASSWORD_CONFIRMED_MESSAGE: &str = "비밀번호 확인 완료";

/// Room as returned by `GET /rooms`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
    pub is_public: bool,
    #[serde(default)]
    pub is_chat: bool,
    pub max_num: u32,
    pub current_num: u32,
}

impl TryFrom<RoomDto> for Room {
    type Error = ValueObjectError;

    fn try_from(dto: RoomDto) -> Result<Self, Self::Error> {
        let room = Room::new(
            RoomId::new(dto.id)?,
            dto.title,
            Visibility::from_is_public(dto.is_public),
            dto.max_num,
            dto.current_num,
        )?;
        Ok(room
            .with_image_url(dto.image_url)
            .with_tags(dto.tag_list)
            .with_chat(dto.is_chat))
    }
}

/// Body of `POST /rooms/checkPassword/{roomId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckPasswordRequest {
    pub password: String,
}

/// Response of `POST /rooms/checkPassword/{roomId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckPasswordResponse {
    pub message: String,
}

impl From<CheckPasswordResponse> for PasswordVerdict {
    fn from(response: CheckPasswordResponse) -> Self {
        if response.message == PASSWORD_CONFIRMED_MESSAGE {
            PasswordVerdict::Confirmed
        } else {
            PasswordVerdict::Mismatch {
                message: response.message,
            }
        }
    }
}
