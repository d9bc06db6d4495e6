//! UseCase: 個人学習セッション
//!
//! 開始 / 一時停止で 1 秒ごとのタイマーを切り替え、現在の作業時間と
//! 累計学習時間を進める。開始・一時停止・退室のたびに記録を作成する。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - 開始・一時停止・退室の状態遷移と記録内容
//! - 一時停止中はタイマーが進まないこと
//!
//! ### どのような状況を想定しているか
//! - 正常系：開始 → 125 秒経過 → 一時停止 → 退室
//! - エッジケース：二重開始、開始前の一時停止

use chrono::{DateTime, Local};
use serde::Serialize;
use studyroom_shared::time::format_local;

use crate::domain::{ElapsedTime, Route, UserId};

/// 記録の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionEvent {
    Start,
    Pause,
    Leave,
}

/// セッションの記録（ログに JSON で出力する）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub user_id: String,
    pub event: SessionEvent,
    pub current_task_time: String,
    /// 退室時のみ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_study_time: Option<String>,
    pub local_time: String,
}

/// 個人学習セッション
#[derive(Debug, Clone)]
pub struct StudySession {
    user_id: UserId,
    active: bool,
    current_task: ElapsedTime,
    total: ElapsedTime,
}

impl StudySession {
    /// 新しいセッションを作成
    ///
    /// # Arguments
    ///
    /// * `user_id` - 記録に載せるユーザー ID
    /// * `total_so_far` - これまでの累計学習時間
    pub fn new(user_id: UserId, total_so_far: ElapsedTime) -> Self {
        Self {
            user_id,
            active: false,
            current_task: ElapsedTime::ZERO,
            total: total_so_far,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current_task_time(&self) -> ElapsedTime {
        self.current_task
    }

    pub fn total_study_time(&self) -> ElapsedTime {
        self.total
    }

    /// タイマーを開始（既に動いていれば何もしない）
    pub fn start(&mut self, now: DateTime<Local>) -> Option<SessionRecord> {
        if self.active {
            return None;
        }
        self.active = true;
        Some(self.record(SessionEvent::Start, now))
    }

    /// タイマーを一時停止（止まっていれば何もしない）
    pub fn pause(&mut self, now: DateTime<Local>) -> Option<SessionRecord> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(self.record(SessionEvent::Pause, now))
    }

    /// 1 秒分進める。停止中は何もしない。
    ///
    /// # Returns
    ///
    /// 時間が進んだかどうか
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.current_task.tick();
        self.total.tick();
        true
    }

    /// 退室する。遷移先はルーム一覧。
    pub fn leave(mut self, now: DateTime<Local>) -> (SessionRecord, Route) {
        self.active = false;
        let record = self.record(SessionEvent::Leave, now);
        (record, Route::StudyRooms)
    }

    fn record(&self, event: SessionEvent, now: DateTime<Local>) -> SessionRecord {
        SessionRecord {
            user_id: self.user_id.to_string(),
            event,
            current_task_time: self.current_task.to_string(),
            total_study_time: (event == SessionEvent::Leave).then(|| self.total.to_string()),
            local_time: format_local(&now),
        }
    }
}
