//! View lifetimes.
//!
//! Every polling timer is owned by the view that spawned it and must stop
//! when that view is torn down, with no further requests emitted
//! afterwards. [`lifetime`] hands out the two halves of that contract: the
//! pollers hold a [`ViewLifetime`] and select on [`ViewLifetime::ended`];
//! the view holds the [`Teardown`] and calls [`Teardown::unmount`] when it
//! goes away.

use tokio::sync::{mpsc, watch};

/// Handle held by tasks bound to a mounted view. Clones share one
/// lifetime.
#[derive(Clone)]
pub struct ViewLifetime {
    ended: watch::Receiver<bool>,
    // Dropping the last clone is what lets `Teardown::unmount` return.
    _alive: mpsc::Sender<()>,
}

/// Owner half of a view lifetime.
pub struct Teardown {
    cancel: watch::Sender<bool>,
    finished: mpsc::Receiver<()>,
}

/// Creates a fresh lifetime pair for a view about to mount.
pub fn lifetime() -> (ViewLifetime, Teardown) {
    let (cancel, ended) = watch::channel(false);
    let (alive, finished) = mpsc::channel(1);

    (ViewLifetime { ended, _alive: alive }, Teardown { cancel, finished })
}

impl ViewLifetime {
    /// Resolves once the view is torn down. A dropped [`Teardown`] counts
    /// as torn down; an orphaned poller must not run forever.
    pub async fn ended(&self) {
        let mut ended = self.ended.clone();
        let _ = ended.wait_for(|ended| *ended).await;
    }

    pub fn is_ended(&self) -> bool {
        self.ended.has_changed().is_err() || *self.ended.borrow()
    }
}

impl Teardown {
    /// Cancels every task holding the lifetime and waits for all of them
    /// to finish.
    pub async fn unmount(mut self) {
        let _ = self.cancel.send(true);

        // Returns `None` once every `ViewLifetime` clone is gone.
        let _ = self.finished.recv().await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn unmount_wakes_waiters_and_joins_them() {
        let (view, teardown) = lifetime();

        let task = tokio::spawn(async move {
            view.ended().await;
        });

        tokio::time::timeout(Duration::from_millis(300), teardown.unmount())
            .await
            .expect("unmount should resolve");
        tokio::time::timeout(Duration::from_millis(300), task)
            .await
            .expect("task should finish")
            .expect("panic in task");
    }

    #[tokio::test]
    async fn unmount_waits_for_the_task_to_finish() {
        let (view, teardown) = lifetime();
        let (tx, mut rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            view.ended().await;
            // Simulate a request already in flight at teardown.
            tokio::time::sleep(Duration::from_millis(50)).await;
            let _ = tx.send(());
            drop(view);
        });

        teardown.unmount().await;
        // By the time unmount returns the task must have finished its work.
        rx.try_recv().expect("task should have completed before unmount returned");
    }

    #[tokio::test]
    async fn dropped_teardown_still_ends_the_lifetime() {
        let (view, teardown) = lifetime();
        drop(teardown);

        tokio::time::timeout(Duration::from_millis(300), view.ended())
            .await
            .expect("ended should resolve after the teardown is dropped");
        assert!(view.is_ended());
    }
}
