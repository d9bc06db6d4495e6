//! ルーム一覧の無限スクロール状態
//!
//! (filter, page size) の組を「世代」として扱い、世代ごとにカーソル位置と
//! 取得済みルームを保持する。ネットワーク I/O は行わず、発行すべきリクエストを
//! [`PageRequest`] として返し、結果を [`RoomFeed::complete`] で受け取る。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - 世代の開始（フィルタ変更・ページサイズ変更）とカーソルのリセット
//! - 最後のルームが見えたときの続き取得と、取得中の重複リクエスト抑止
//! - 古い世代の結果の破棄、ルーム ID の重複排除
//!
//! ### どのような状況を想定しているか
//! - 正常系：9 件 → 4 件で終端
//! - エッジケース：件数が limit の倍数（末尾で空ページを 1 回取得）
//! - 異常系：取得エラー後は自動リトライしない

use std::collections::HashSet;

use tokio::sync::watch;

use crate::domain::{
    GatewayError, GridLayout, Page, PageSize, Room, RoomFilter, RoomId, RoomQuery,
};

/// 一覧の表示状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    /// コンテナ幅が未確定（ページサイズ未計算）
    AwaitingLayout,
    /// 最初のページを取得中
    Loading,
    /// 最初のページが空だった
    Empty,
    /// ルームを表示中
    Ready,
    /// 取得に失敗した（フィルタかページサイズが変わるまでこの状態）
    Failed(String),
}

/// View が読む不変のスナップショット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshot {
    pub generation: u64,
    pub filter: RoomFilter,
    pub limit: Option<PageSize>,
    pub rooms: Vec<Room>,
    pub status: FeedStatus,
    pub has_more: bool,
    /// 2 ページ目以降を取得中
    pub loading_more: bool,
}

/// 世代番号付きのページ取得リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    generation: u64,
    query: RoomQuery,
}

impl PageRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &RoomQuery {
        &self.query
    }
}

/// [`RoomFeed::complete`] の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// ページを反映した（`appended` は重複排除後の追加件数）
    Applied { appended: usize, has_more: bool },
    /// エラーを反映した
    Failed,
    /// 古い世代の結果なので破棄した
    Stale,
}

/// ルーム一覧の状態管理
///
/// 世代ごとに取得中のリクエストは高々 1 件。
pub struct RoomFeed {
    layout: GridLayout,
    filter: RoomFilter,
    limit: Option<PageSize>,
    generation: u64,
    rooms: Vec<Room>,
    seen: HashSet<RoomId>,
    pages_loaded: usize,
    next_offset: usize,
    has_more: bool,
    in_flight: bool,
    error: Option<String>,
    publisher: watch::Sender<FeedSnapshot>,
}

impl RoomFeed {
    /// 新しい RoomFeed を作成
    ///
    /// ページサイズはコンテナ幅が分かるまで未確定で、最初の取得は
    /// [`RoomFeed::resize`] から始まる。
    pub fn new(layout: GridLayout, filter: RoomFilter) -> Self {
        let initial = FeedSnapshot {
            generation: 0,
            filter: filter.clone(),
            limit: None,
            rooms: Vec::new(),
            status: FeedStatus::AwaitingLayout,
            has_more: false,
            loading_more: false,
        };
        let (publisher, _) = watch::channel(initial);

        Self {
            layout,
            filter,
            limit: None,
            generation: 0,
            rooms: Vec::new(),
            seen: HashSet::new(),
            pages_loaded: 0,
            next_offset: 0,
            has_more: false,
            in_flight: false,
            error: None,
            publisher,
        }
    }

    /// スナップショットの購読を開始
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.publisher.subscribe()
    }

    /// 現在の状態のスナップショット
    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            generation: self.generation,
            filter: self.filter.clone(),
            limit: self.limit,
            rooms: self.rooms.clone(),
            status: self.status(),
            has_more: self.has_more,
            loading_more: self.in_flight && self.pages_loaded > 0,
        }
    }

    pub fn filter(&self) -> &RoomFilter {
        &self.filter
    }

    pub fn limit(&self) -> Option<PageSize> {
        self.limit
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// フィルタを変更
    ///
    /// 同じ条件なら何もしない。変わった場合は新しい世代を開始し、
    /// ページサイズが確定していれば最初のページのリクエストを返す。
    pub fn set_filter(&mut self, filter: RoomFilter) -> Option<PageRequest> {
        if filter == self.filter {
            return None;
        }
        self.filter = filter;
        self.restart()
    }

    /// コンテナ幅の変更を反映
    ///
    /// ページサイズが変わった場合だけ新しい世代を開始する。
    pub fn resize(&mut self, container_width: u32) -> Option<PageRequest> {
        let limit = self.layout.page_size(container_width);
        if self.limit == Some(limit) {
            return None;
        }
        tracing::debug!(
            "Container width {}px: page size {:?} -> {}",
            container_width,
            self.limit.map(|l| l.get()),
            limit
        );
        self.limit = Some(limit);
        self.restart()
    }

    /// 最後に描画されたルームが見えた
    ///
    /// 続きがあり、取得中でなく、エラー状態でもない場合だけ次のページを要求する。
    pub fn last_item_visible(&mut self) -> Option<PageRequest> {
        if self.pages_loaded == 0 {
            return None;
        }
        self.begin_fetch()
    }

    /// 取得結果を反映
    ///
    /// # Arguments
    ///
    /// * `request` - このフィードが発行したリクエスト
    /// * `result` - バックエンドの応答（バックエンドの順序のまま）
    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: Result<Vec<Room>, GatewayError>,
    ) -> Completion {
        if request.generation != self.generation {
            tracing::debug!(
                "Discarding page of stale generation {} (current: {})",
                request.generation,
                self.generation
            );
            return Completion::Stale;
        }
        self.in_flight = false;

        let completion = match result {
            Ok(rooms) => {
                let page =
                    Page::from_response(rooms, request.query.offset, request.query.limit);
                let appended = self.merge(&page);
                self.pages_loaded += 1;
                self.next_offset = page.offset();
                self.has_more = page.has_more();
                tracing::debug!(
                    "Page {} applied: {} new rooms, next offset {}, has_more {}",
                    self.pages_loaded,
                    appended,
                    self.next_offset,
                    self.has_more
                );
                Completion::Applied {
                    appended,
                    has_more: self.has_more,
                }
            }
            Err(e) => {
                tracing::warn!("Failed to fetch rooms at offset {}: {}", request.query.offset, e);
                self.error = Some(e.to_string());
                Completion::Failed
            }
        };

        self.publish();
        completion
    }

    /// 新しい世代を開始
    fn restart(&mut self) -> Option<PageRequest> {
        self.generation += 1;
        self.rooms.clear();
        self.seen.clear();
        self.pages_loaded = 0;
        self.next_offset = 0;
        self.has_more = true;
        self.in_flight = false;
        self.error = None;
        tracing::info!(
            "Room listing generation {} started (filter: {:?}, limit: {:?})",
            self.generation,
            self.filter,
            self.limit.map(|l| l.get())
        );

        let request = self.begin_fetch();
        if request.is_none() {
            self.publish();
        }
        request
    }

    fn begin_fetch(&mut self) -> Option<PageRequest> {
        let limit = self.limit?;
        if !self.has_more || self.in_flight || self.error.is_some() {
            return None;
        }
        self.in_flight = true;
        let request = PageRequest {
            generation: self.generation,
            query: RoomQuery {
                filter: self.filter.clone(),
                limit,
                offset: self.next_offset,
            },
        };
        self.publish();
        Some(request)
    }

    /// 既に表示済みの ID は追加しない
    fn merge(&mut self, page: &Page) -> usize {
        let before = self.rooms.len();
        for room in page.rooms() {
            if self.seen.insert(room.id().clone()) {
                self.rooms.push(room.clone());
            }
        }
        self.rooms.len() - before
    }

    fn status(&self) -> FeedStatus {
        if let Some(message) = &self.error {
            return FeedStatus::Failed(message.clone());
        }
        if self.limit.is_none() {
            return FeedStatus::AwaitingLayout;
        }
        if self.pages_loaded == 0 {
            return FeedStatus::Loading;
        }
        if self.rooms.is_empty() {
            return FeedStatus::Empty;
        }
        FeedStatus::Ready
    }

    fn publish(&self) {
        // 購読者がいなくても最新値は保持される
        self.publisher.send_replace(self.snapshot());
    }
}
