//! UseCase: ホーム画面のルームプレビュー
//!
//! フィルタなしで先頭 6 件を取得する。未ログインのホーム画面なので、
//! ルームを選ぶとログイン画面に遷移する。

use std::sync::Arc;

use crate::domain::{GatewayError, Room, RoomGateway, Route};

/// ホーム画面に表示するルーム数
pub const HOME_PREVIEW_LIMIT: usize = 6;

/// ホーム画面プレビューのユースケース
#[derive(Clone)]
pub struct PreviewRoomsUseCase {
    /// Gateway（バックエンドアクセスの抽象化）
    gateway: Arc<dyn RoomGateway>,
}

impl PreviewRoomsUseCase {
    /// 新しい PreviewRoomsUseCase を作成
    pub fn new(gateway: Arc<dyn RoomGateway>) -> Self {
        Self { gateway }
    }

    /// プレビューを取得
    pub async fn execute(&self) -> Result<Vec<Room>, GatewayError> {
        let mut rooms = self.gateway.fetch_preview(HOME_PREVIEW_LIMIT).await?;
        rooms.truncate(HOME_PREVIEW_LIMIT);
        Ok(rooms)
    }

    /// プレビューのルームを選択した時の遷移先
    pub fn select(&self, _room: &Room) -> Route {
        Route::Login
    }
}
