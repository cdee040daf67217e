//! Fire-and-forget background work.

use std::future::Future;

/// Runs `task` on the tokio runtime, independent of the caller.
///
/// The join handle and the task's result are dropped. The task keeps running
/// after the spawning request finishes.
///
/// Delivery is at-most-once and may be zero: a store failure or a process
/// exit racing the task loses the work.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn spawn_detached<F, T, E>(task: F)
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    tokio::spawn(async move {
        let _ = task.await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_detached_task_runs_to_completion() {
        let (tx, rx) = oneshot::channel();

        spawn_detached(async move {
            tx.send(42).map_err(|_| "receiver dropped")?;
            Ok::<_, &'static str>(())
        });

        let value = tokio::time::timeout(Duration::from_secs(1), rx)
            .await
            .expect("task did not run")
            .expect("sender dropped");
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_detached_task_failure_is_swallowed() {
        let (tx, rx) = oneshot::channel::<()>();

        spawn_detached(async move {
            drop(tx);
            Err::<(), _>("boom")
        });

        // The sender is dropped by the failing task; the caller never sees "boom".
        let result = tokio::time::timeout(Duration::from_secs(1), rx)
            .await
            .expect("task did not run");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_detached_task_outlives_caller_scope() {
        let (tx, rx) = oneshot::channel();

        {
            let payload = String::from("still here");
            spawn_detached(async move {
                tokio::task::yield_now().await;
                tx.send(payload).map_err(|_| ())
            });
        }

        let value = tokio::time::timeout(Duration::from_secs(1), rx)
            .await
            .expect("task did not run")
            .expect("sender dropped");
        assert_eq!(value, "still here");
    }
}
