//! System clipboard via a dedicated worker thread.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{debug, warn};
use zeroize::Zeroize;

use super::{ClipboardBridge, ClipboardError, CopyOutcome};

/// Owns the platform clipboard on its own thread.
///
/// The clipboard context is created inside the worker, so it never has to
/// cross threads. Dropping this handle closes the request channel and joins
/// the worker.
pub struct SystemClipboard {
    requests: Option<Sender<String>>,
    outcomes: Option<Receiver<CopyOutcome>>,
    local: VecDeque<CopyOutcome>,
    worker: Option<JoinHandle<()>>,
}

impl SystemClipboard {
    pub fn spawn() -> Self {
        let (req_tx, req_rx) = mpsc::channel::<String>();
        let (out_tx, out_rx) = mpsc::channel();

        match thread::Builder::new()
            .name("clipboard".into())
            .spawn(move || worker_loop(req_rx, out_tx))
        {
            Ok(handle) => Self {
                requests: Some(req_tx),
                outcomes: Some(out_rx),
                local: VecDeque::new(),
                worker: Some(handle),
            },
            Err(e) => {
                warn!(error = %e, "failed to start clipboard worker");
                Self {
                    requests: None,
                    outcomes: None,
                    local: VecDeque::new(),
                    worker: None,
                }
            }
        }
    }
}

fn worker_loop(requests: Receiver<String>, outcomes: Sender<CopyOutcome>) {
    let mut ctx = ClipboardContext::new().map_err(|e| e.to_string());
    if let Err(reason) = &ctx {
        warn!(%reason, "system clipboard unavailable");
    }

    while let Ok(mut text) = requests.recv() {
        let outcome = match ctx.as_mut() {
            Ok(c) => match c.set_contents(std::mem::take(&mut text)) {
                Ok(()) => {
                    // Reading back makes some backends take ownership before we return.
                    if let Ok(mut retrieved) = c.get_contents() {
                        retrieved.zeroize();
                    }
                    Ok(())
                }
                Err(e) => Err(ClipboardError::Write(e.to_string())),
            },
            Err(reason) => Err(ClipboardError::Unavailable(reason.clone())),
        };
        text.zeroize();

        if outcomes.send(outcome).is_err() {
            break;
        }
    }

    debug!("clipboard worker exiting");
}

impl ClipboardBridge for SystemClipboard {
    fn submit(&mut self, text: &str) {
        let sent = self
            .requests
            .as_ref()
            .is_some_and(|tx| tx.send(text.to_string()).is_ok());

        if !sent {
            self.local.push_back(Err(ClipboardError::Disconnected));
        }
    }

    fn poll(&mut self) -> Option<CopyOutcome> {
        if let Some(outcome) = self.local.pop_front() {
            return Some(outcome);
        }

        let rx = self.outcomes.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.outcomes = None;
                self.requests = None;
                Some(Err(ClipboardError::Disconnected))
            }
        }
    }
}

impl Drop for SystemClipboard {
    fn drop(&mut self) {
        self.requests.take();
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}
