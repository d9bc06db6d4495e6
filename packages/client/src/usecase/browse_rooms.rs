//! UseCase: ルーム一覧の閲覧
//!
//! [`RoomFeed`] が発行したリクエストを Gateway 経由で取得し、結果をフィードへ戻す。
//! 取得処理 ([`BrowseRoomsUseCase::fetch`]) は self を借用しない Future を返すので、
//! UI 層はタスクとして起動し、完了をイベントキュー経由で
//! [`BrowseRoomsUseCase::apply`] に渡せる。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - Gateway に渡るクエリ（filter / limit / offset）
//! - スクロールによる続き取得とエラー時の停止
//!
//! ### どのような状況を想定しているか
//! - 正常系：公開ルームを 9 件 → 4 件で取得
//! - 異常系：ネットワークエラー

use std::{future::Future, sync::Arc};

use tokio::sync::watch;

use crate::domain::{GatewayError, GridLayout, Room, RoomFilter, RoomGateway};

use super::room_feed::{Completion, FeedSnapshot, PageRequest, RoomFeed};

/// 取得済みのページ（リクエストと結果の組）
#[derive(Debug)]
pub struct PageResponse {
    pub request: PageRequest,
    pub result: Result<Vec<Room>, GatewayError>,
}

/// ルーム一覧閲覧のユースケース
pub struct BrowseRoomsUseCase {
    /// Gateway（バックエンドアクセスの抽象化）
    gateway: Arc<dyn RoomGateway>,
    feed: RoomFeed,
}

impl BrowseRoomsUseCase {
    /// 新しい BrowseRoomsUseCase を作成
    pub fn new(gateway: Arc<dyn RoomGateway>, layout: GridLayout, filter: RoomFilter) -> Self {
        Self {
            gateway,
            feed: RoomFeed::new(layout, filter),
        }
    }

    pub fn feed(&self) -> &RoomFeed {
        &self.feed
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.feed.subscribe()
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.feed.snapshot()
    }

    /// 表示中の `index` 番目（0 始まり）のルーム
    pub fn room_at(&self, index: usize) -> Option<&Room> {
        self.feed.rooms().get(index)
    }

    pub fn set_filter(&mut self, filter: RoomFilter) -> Option<PageRequest> {
        self.feed.set_filter(filter)
    }

    pub fn resize(&mut self, container_width: u32) -> Option<PageRequest> {
        self.feed.resize(container_width)
    }

    pub fn last_item_visible(&mut self) -> Option<PageRequest> {
        self.feed.last_item_visible()
    }

    /// リクエストを実行する Future を作成
    ///
    /// フィードの状態は変更しない。
    pub fn fetch(&self, request: PageRequest) -> impl Future<Output = PageResponse> + Send + use<> {
        let gateway = Arc::clone(&self.gateway);
        async move {
            tracing::debug!(
                "Fetching rooms (generation {}, offset {}, limit {})",
                request.generation(),
                request.query().offset,
                request.query().limit
            );
            let result = gateway.fetch_rooms(request.query()).await;
            PageResponse { request, result }
        }
    }

    /// 取得結果をフィードに反映
    pub fn apply(&mut self, response: PageResponse) -> Completion {
        self.feed.complete(&response.request, response.result)
    }

    /// リクエストがあれば取得して反映する（逐次実行用）
    ///
    /// # Returns
    ///
    /// * `Some(Completion)` - 取得を実行した
    /// * `None` - 発行すべきリクエストがなかった
    pub async fn load(&mut self, request: Option<PageRequest>) -> Option<Completion> {
        let request = request?;
        let response = self.fetch(request).await;
        Some(self.apply(response))
    }
}
