use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::config::constants::{sleep_duration_millis, PROGRESS_TICK_MS};

/// Spinner on stderr showing the latest progress line while a fetch runs.
pub struct ProgressLogger {
    message: String,
    animation_chars: Vec<&'static str>,
    progress_sender: Option<mpsc::UnboundedSender<String>>,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl ProgressLogger {
    pub fn new(message: &str) -> Self {
        let animation_chars = vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

        Self {
            message: message.to_string(),
            animation_chars,
            progress_sender: None,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let (progress_tx, mut progress_rx) = mpsc::unbounded_channel::<String>();
        let message = self.message.clone();
        let animation_chars = self.animation_chars.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut detail = String::new();
            let mut interval = tokio::time::interval(sleep_duration_millis(PROGRESS_TICK_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r\x1b[K{} {} {}", message, animation_chars[frame], detail);
                        std::io::stderr().flush().ok();
                        frame = (frame + 1) % animation_chars.len();
                    }
                    Some(update) = progress_rx.recv() => {
                        detail = update;
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.progress_sender = Some(progress_tx);
        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    /// Page callback for the paginated fetcher.
    pub fn page_reporter(&self) -> impl FnMut(usize, usize) + Send {
        let sender = self.progress_sender.clone();
        move |page, issues| {
            if let Some(sender) = &sender {
                let _ = sender.send(format!("(page {}, {} issues)", page, issues));
            }
        }
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        eprintln!("\r\x1b[K✅  {}", final_message);
        std::io::stderr().flush().ok();
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        eprintln!("\r\x1b[K❌ {}", error_message);
        std::io::stderr().flush().ok();
    }

    async fn halt(&mut self) {
        self.progress_sender = None;

        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }
}
