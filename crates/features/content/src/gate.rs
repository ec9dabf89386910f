use std::sync::Arc;
use tokio::sync::watch;

/// One-shot signal that the interactive page context exists.
///
/// Starts closed, opens exactly once, never closes again. Loaders wait on it before
/// issuing any fetch so the pre-rendered pass never touches the network.
#[derive(Debug, Clone)]
pub struct MountGate {
    tx: Arc<watch::Sender<bool>>,
}

impl MountGate {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn is_open(&self) -> bool {
        *self.tx.borrow()
    }

    /// Opens the gate. Returns `true` only for the call that flipped it.
    pub fn open(&self) -> bool {
        self.tx.send_if_modified(|open| !std::mem::replace(open, true))
    }

    /// Resolves once the gate is open.
    pub async fn opened(&self) {
        let mut rx = self.tx.subscribe();
        // the sender lives in `self`, so the channel cannot close while we wait
        let _ = rx.wait_for(|open| *open).await;
    }

    /// Lets the current render pass finish, then opens the gate.
    pub async fn open_after_paint(&self) {
        tokio::task::yield_now().await;
        self.open();
    }
}

impl Default for MountGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn opens_exactly_once() {
        let gate = MountGate::new();
        assert!(!gate.is_open());
        assert!(gate.open());
        assert!(!gate.open());
        assert!(gate.clone().is_open());
    }

    #[tokio::test]
    async fn waiters_resume_after_open() {
        let gate = MountGate::new();
        let waiter = tokio::spawn({
            let gate = gate.clone();
            async move { gate.opened().await }
        });

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!waiter.is_finished());

        gate.open_after_paint().await;
        tokio::time::timeout(Duration::from_secs(1), waiter).await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn already_open_gate_does_not_block() {
        let gate = MountGate::new();
        gate.open();
        tokio::time::timeout(Duration::from_millis(100), gate.opened()).await.unwrap();
    }
}
