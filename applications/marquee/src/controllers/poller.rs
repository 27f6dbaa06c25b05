//! Background task: collection status polling and example rotation.

use crate::session::Session;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Owns the single background task.
///
/// The task refreshes the collection snapshot immediately and then every
/// `poll_every`, and rotates the search example every `rotate_every`. The two
/// loops run concurrently, so neither waits on the other. It stops on
/// [`shutdown`](Self::shutdown), when the handle is dropped, or when the
/// session shuts down.
pub struct PollerHandle {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl PollerHandle {
    pub fn spawn(session: Session, poll_every: Duration, rotate_every: Duration) -> Self {
        let token = session.shutdown_token().child_token();
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            run(session, task_token, poll_every, rotate_every).await;
        });

        info!(
            poll_secs = poll_every.as_secs_f64(),
            rotate_secs = rotate_every.as_secs_f64(),
            "Background updates started"
        );

        Self {
            token,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel the task and wait for it to finish.
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "Background task ended abnormally");
            }
        }
        info!("Background updates stopped");
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn run(session: Session, token: CancellationToken, poll_every: Duration, rotate_every: Duration) {
    tokio::join!(
        poll_collections(&session, &token, poll_every),
        rotate_examples(&session, &token, rotate_every),
    );

    debug!("Background task exiting");
}

/// Refresh loop. A slow fetch delays the next refresh, never the examples.
async fn poll_collections(session: &Session, token: &CancellationToken, every: Duration) {
    let mut poll = interval(every);
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let collections = session.collections();

    loop {
        tokio::select! {
            () = token.cancelled() => break,
            _ = poll.tick() => {}
        }
        tokio::select! {
            () = token.cancelled() => break,
            _ = collections.refresh() => {}
        }
    }
}

/// Example loop, first rotation one full interval after start.
async fn rotate_examples(session: &Session, token: &CancellationToken, every: Duration) {
    let mut rotate = interval_at(Instant::now() + every, every);
    rotate.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let examples = session.examples();

    loop {
        tokio::select! {
            () = token.cancelled() => break,
            _ = rotate.tick() => {}
        }
        tokio::select! {
            () = token.cancelled() => break,
            _ = examples.rotate() => {}
        }
    }
}
