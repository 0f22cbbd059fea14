//! Trailing-edge debounce over a tokio task.

use std::{future::Future, time::Duration};

use tokio::{sync::mpsc, task::JoinHandle};

/// Feeds values to an async handler once input has been quiet for `delay`.
///
/// Every [`push`](Debouncer::push) restarts the timer and replaces the
/// pending value, so the handler only ever sees the latest one. A value still
/// pending when the debouncer shuts down is delivered immediately.
#[derive(Debug)]
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn spawn<F, Fut>(delay: Duration, mut handler: F) -> Self
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();
        let task = tokio::spawn(async move {
            let mut pending: Option<T> = None;
            loop {
                match pending.take() {
                    None => match rx.recv().await {
                        Some(value) => pending = Some(value),
                        None => break,
                    },
                    Some(value) => {
                        tokio::select! {
                            next = rx.recv() => match next {
                                Some(newer) => pending = Some(newer),
                                None => {
                                    handler(value).await;
                                    break;
                                }
                            },
                            _ = tokio::time::sleep(delay) => handler(value).await,
                        }
                    }
                }
            }
        });
        Self { tx, task }
    }

    /// Returns `false` if the worker task is gone.
    pub fn push(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }

    /// Flushes any pending value and waits for the handler to finish.
    pub async fn shutdown(self) {
        let Self { tx, task } = self;
        drop(tx);
        if let Err(err) = task.await {
            tracing::warn!(error = %err, "debounce worker ended abnormally");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl FnMut(u32) -> std::future::Ready<()> + Send) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handler = move |value| {
            sink.lock().unwrap().push(value);
            std::future::ready(())
        };
        (seen, handler)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_to_latest_value() {
        let (seen, handler) = recorder();
        let debouncer = Debouncer::spawn(Duration::from_millis(500), handler);
        for value in 1..=3 {
            debouncer.push(value);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(seen.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(*seen.lock().unwrap(), vec![3]);
    }

    #[tokio::test(start_paused = true)]
    async fn quiet_gaps_deliver_each_value() {
        let (seen, handler) = recorder();
        let debouncer = Debouncer::spawn(Duration::from_millis(150), handler);
        debouncer.push(1);
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.push(2);
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_flushes_pending_value() {
        let (seen, handler) = recorder();
        let debouncer = Debouncer::spawn(Duration::from_secs(60), handler);
        debouncer.push(7);
        debouncer.shutdown().await;
        assert_eq!(*seen.lock().unwrap(), vec![7]);
    }
}
