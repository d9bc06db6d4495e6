//! HTTP implementation of the room gateway (reqwest).

use async_trait::async_trait;
use reqwest::{Client, Response, Url};

use crate::{
    domain::{
        GatewayError, Password, PasswordVerdict, Room, RoomGateway, RoomId, RoomQuery,
    },
    infrastructure::dto::http::{CheckPasswordRequest, CheckPasswordResponse, RoomDto},
};

/// Talks to the study room REST backend.
#[derive(Debug, Clone)]
pub struct HttpRoomGateway {
    client: Client,
    base_url: Url,
}

impl HttpRoomGateway {
    /// Create a gateway for the backend at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// `{base}/{segments...}`, keeping any path prefix of the base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GatewayError::Transport(format!("base URL cannot have a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_rooms(&self, params: &[(&str, String)]) -> Result<Vec<Room>, GatewayError> {
        let url = self.endpoint(&["rooms"])?;
        tracing::debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let response = ensure_success(response)?;

        let dtos: Vec<RoomDto> = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        dtos.into_iter()
            .map(Room::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

fn ensure_success(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(GatewayError::Status {
        status: status.as_u16(),
        url: response.url().to_string(),
    })
}

/// Unset optional flags are sent as empty strings.
fn flag_param(value: Option<bool>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[async_trait]
impl RoomGateway for HttpRoomGateway {
    async fn fetch_rooms(&self, query: &RoomQuery) -> Result<Vec<Room>, GatewayError> {
        let params = [
            ("search", query.filter.search.clone()),
            ("isPublic", flag_param(query.filter.is_public)),
            ("isPossible", flag_param(query.filter.is_possible)),
            ("limit", query.limit.get().to_string()),
            ("offset", query.offset.to_string()),
        ];
        self.get_rooms(&params).await
    }

    async fn fetch_preview(&self, limit: usize) -> Result<Vec<Room>, GatewayError> {
        self.get_rooms(&[("limit", limit.to_string())]).await
    }

    async fn check_password(
        &self,
        room_id: &RoomId,
        password: &Password,
    ) -> Result<PasswordVerdict, GatewayError> {
        let url = self.endpoint(&["rooms", "checkPassword", room_id.as_str()])?;
        tracing::debug!("POST {}", url);

        let body = CheckPasswordRequest {
            password: password.expose().to_string(),
        };
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let response = ensure_success(response)?;

        let response: CheckPasswordResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;
        Ok(response.into())
    }
}
