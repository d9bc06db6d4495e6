//! UseCase: ルームへの入室
//!
//! 公開ルームはそのまま入室し、非公開ルームはパスワード入力を求める。
//! 試行回数の制限やロックアウトはバックエンドに任せ、クライアントでは行わない。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - EnterRoomUseCase::select() / submit_password()
//!
//! ### どのような状況を想定しているか
//! - 正常系：公開ルームへの直接入室、正しいパスワードでの入室
//! - 異常系：パスワード不一致、空のパスワード、通信エラー

use std::sync::Arc;

use crate::domain::{Password, PasswordVerdict, Room, RoomGateway, RoomId, Route};

use super::error::EnterRoomError;

/// パスワード入力待ちの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPrompt {
    pub room_id: RoomId,
    pub title: String,
}

/// ルーム選択の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// そのまま遷移する
    Enter(Route),
    /// パスワード入力を求める
    PasswordRequired(PasswordPrompt),
}

/// パスワード送信の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordOutcome {
    /// 確認済み：ルーム画面へ遷移する
    Confirmed(Route),
    /// 不一致：入力画面は開いたまま
    Mismatch,
}

/// 入室のユースケース
#[derive(Clone)]
pub struct EnterRoomUseCase {
    /// Gateway（バックエンドアクセスの抽象化）
    gateway: Arc<dyn RoomGateway>,
}

impl EnterRoomUseCase {
    /// 新しい EnterRoomUseCase を作成
    pub fn new(gateway: Arc<dyn RoomGateway>) -> Self {
        Self { gateway }
    }

    /// ルームを選択
    pub fn select(&self, room: &Room) -> Selection {
        if room.is_public() {
            Selection::Enter(Route::StudyRoom(room.id().clone()))
        } else {
            Selection::PasswordRequired(PasswordPrompt {
                room_id: room.id().clone(),
                title: room.title().to_string(),
            })
        }
    }

    /// パスワードを送信
    ///
    /// # Arguments
    ///
    /// * `prompt` - 入力中の非公開ルーム
    /// * `password` - 入力されたパスワード
    ///
    /// # Returns
    ///
    /// * `Ok(PasswordOutcome)` - バックエンドの判定
    /// * `Err(EnterRoomError)` - 入力不正または通信失敗
    pub async fn submit_password(
        &self,
        prompt: &PasswordPrompt,
        password: &str,
    ) -> Result<PasswordOutcome, EnterRoomError> {
        let password = Password::new(password.to_string())?;

        match self.gateway.check_password(&prompt.room_id, &password).await? {
            PasswordVerdict::Confirmed => {
                tracing::info!("Password confirmed for room '{}'", prompt.room_id);
                Ok(PasswordOutcome::Confirmed(Route::StudyRoom(
                    prompt.room_id.clone(),
                )))
            }
            PasswordVerdict::Mismatch { message } => {
                tracing::info!(
                    "Password rejected for room '{}': {}",
                    prompt.room_id,
                    message
                );
                Ok(PasswordOutcome::Mismatch)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        GatewayError, ValueObjectError,
        entity::fixtures::{private_room, room},
        gateway::MockRoomGateway,
    };

    #[test]
    fn test_select_public_room_enters_directly() {
        // テスト項目: 公開ルームはパスワードなしで遷移する
        // given (前提条件):
        let usecase = EnterRoomUseCase::new(Arc::new(MockRoomGateway::new()));

        // when (操作):
        let selection = usecase.select(&room("r1"));

        // then (期待する結果):
        assert_eq!(
            selection,
            Selection::Enter(Route::StudyRoom(RoomId::new("r1".to_string()).unwrap()))
        );
    }

    #[test]
    fn test_select_private_room_requires_password() {
        // テスト項目: 非公開ルームはパスワード入力を求める
        // given (前提条件):
        let usecase = EnterRoomUseCase::new(Arc::new(MockRoomGateway::new()));

        // when (操作):
        let selection = usecase.select(&private_room("p1"));

        // then (期待する結果):
        assert_eq!(
            selection,
            Selection::PasswordRequired(PasswordPrompt {
                room_id: RoomId::new("p1".to_string()).unwrap(),
                title: "secret p1".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_confirmed_password_navigates_to_room() {
        // テスト項目: 正しいパスワードでルーム画面に遷移する
        // given (前提条件):
        let mut gateway = MockRoomGateway::new();
        gateway
            .expect_check_password()
            .withf(|id, pw| id.as_str() == "p1" && pw.expose() == "abc")
            .times(1)
            .returning(|_, _| Ok(PasswordVerdict::Confirmed));
        let usecase = EnterRoomUseCase::new(Arc::new(gateway));
        let Selection::PasswordRequired(prompt) = usecase.select(&private_room("p1")) else {
            panic!("private room should require a password");
        };

        // when (操作):
        let outcome = usecase.submit_password(&prompt, "abc").await;

        // then (期待する結果):
        let outcome = outcome.unwrap();
        assert_eq!(
            outcome,
            PasswordOutcome::Confirmed(Route::StudyRoom(RoomId::new("p1".to_string()).unwrap()))
        );
        if let PasswordOutcome::Confirmed(route) = outcome {
            assert_eq!(route.path(), "/study-room/p1");
        }
    }

    #[tokio::test]
    async fn test_other_message_is_mismatch() {
        // テスト項目: 確認完了以外のメッセージは不一致として扱う
        // given (前提条件):
        let mut gateway = MockRoomGateway::new();
        gateway.expect_check_password().times(1).returning(|_, _| {
            Ok(PasswordVerdict::Mismatch {
                message: "비밀번호 불일치".to_string(),
            })
        });
        let usecase = EnterRoomUseCase::new(Arc::new(gateway));
        let prompt = PasswordPrompt {
            room_id: RoomId::new("p1".to_string()).unwrap(),
            title: "secret".to_string(),
        };

        // when (操作):
        let outcome = usecase.submit_password(&prompt, "wrong").await;

        // then (期待する結果):
        assert_eq!(outcome, Ok(PasswordOutcome::Mismatch));
    }

    #[tokio::test]
    async fn test_empty_password_is_not_sent() {
        // テスト項目: 空のパスワードはバックエンドに送信しない
        // given (前提条件):
        let mut gateway = MockRoomGateway::new();
        gateway.expect_check_password().never();
        let usecase = EnterRoomUseCase::new(Arc::new(gateway));
        let prompt = PasswordPrompt {
            room_id: RoomId::new("p1".to_string()).unwrap(),
            title: "secret".to_string(),
        };

        // when (操作):
        let outcome = usecase.submit_password(&prompt, "").await;

        // then (期待する結果):
        assert_eq!(
            outcome,
            Err(EnterRoomError::InvalidPassword(ValueObjectError::PasswordEmpty))
        );
    }

    #[tokio::test]
    async fn test_gateway_failure_is_reported() {
        // テスト項目: 通信エラーはエラーとして返される
        // given (前提条件):
        let mut gateway = MockRoomGateway::new();
        gateway.expect_check_password().returning(|_, _| {
            Err(GatewayError::Status {
                status: 404,
                url: "http://localhost/rooms/checkPassword/p1".to_string(),
            })
        });
        let usecase = EnterRoomUseCase::new(Arc::new(gateway));
        let prompt = PasswordPrompt {
            room_id: RoomId::new("p1".to_string()).unwrap(),
            title: "secret".to_string(),
        };

        // when (操作):
        let outcome = usecase.submit_password(&prompt, "abc").await;

        // then (期待する結果):
        assert!(matches!(outcome, Err(EnterRoomError::Gateway(_))));
    }
}
