//! Event loop: terminal input, the study timer tick and backend responses.

use std::time::Duration;

use rustyline::{DefaultEditor, error::ReadlineError};
use studyroom_shared::time::now_local;
use tokio::{
    sync::{mpsc, oneshot},
    time::MissedTickBehavior,
};

use crate::{error::ClientError, usecase::SessionRecord};

use super::{
    command::Command,
    state::{AppContext, AppEvent, AppState, Effect},
};

const PROMPT: &str = "studyroom> ";

/// Run the interactive client until the user quits or input closes.
pub async fn run(context: AppContext) -> Result<(), ClientError> {
    tracing::info!("Connecting to {}", context.config.api_url);

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    spawn_input(tx.clone()).await?;

    let mut state = AppState::new(context);
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut effects = state.start();
    loop {
        for effect in effects.drain(..) {
            if !execute(&state, effect, &tx) {
                tracing::info!("Bye");
                return Ok(());
            }
        }

        let event = tokio::select! {
            Some(event) = rx.recv() => event,
            _ = ticker.tick() => AppEvent::Tick,
        };
        effects = state.handle(event, now_local());
    }
}

/// Perform one effect. Returns `false` when the client should stop.
fn execute(state: &AppState, effect: Effect, tx: &mpsc::UnboundedSender<AppEvent>) -> bool {
    match effect {
        Effect::Print(text) => println!("{}", text),
        Effect::FetchPage(request) => {
            let fetch = state.browse().fetch(request);
            let tx = tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(AppEvent::PageFetched(fetch.await));
            });
        }
        Effect::FetchPreview => {
            let usecase = state.preview().clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(AppEvent::PreviewFetched(usecase.execute().await));
            });
        }
        Effect::CheckPassword { prompt, password } => {
            let usecase = state.enter().clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = usecase.submit_password(&prompt, &password).await;
                let _ = tx.send(AppEvent::PasswordChecked { prompt, result });
            });
        }
        Effect::Record(record) => log_record(&record),
        Effect::Quit => return false,
    }
    true
}

fn log_record(record: &SessionRecord) {
    match serde_json::to_string(record) {
        Ok(json) => tracing::info!("Study record: {}", json),
        Err(e) => tracing::warn!("Failed to serialize study record: {}", e),
    }
}

/// Read lines on a dedicated thread; rustyline blocks.
async fn spawn_input(tx: mpsc::UnboundedSender<AppEvent>) -> Result<(), ClientError> {
    let (ready_tx, ready_rx) = oneshot::channel::<Result<(), String>>();

    std::thread::Builder::new()
        .name("input".to_string())
        .spawn(move || {
            let mut editor = match DefaultEditor::new() {
                Ok(editor) => {
                    let _ = ready_tx.send(Ok(()));
                    editor
                }
                Err(e) => {
                    let _ = ready_tx.send(Err(e.to_string()));
                    return;
                }
            };
            read_lines(&mut editor, &tx);
        })?;

    match ready_rx.await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(ClientError::Terminal(e)),
        Err(_) => Err(ClientError::Terminal(
            "input thread exited before start".to_string(),
        )),
    }
}

fn read_lines(editor: &mut DefaultEditor, tx: &mpsc::UnboundedSender<AppEvent>) {
    loop {
        let event = match editor.readline(PROMPT) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                match line.parse::<Command>() {
                    Ok(command) => AppEvent::Input(command),
                    Err(e) => AppEvent::InputError(e.to_string()),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => AppEvent::InputClosed,
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                AppEvent::InputClosed
            }
        };

        let closed = matches!(event, AppEvent::InputClosed);
        if tx.send(event).is_err() || closed {
            break;
        }
    }
}
