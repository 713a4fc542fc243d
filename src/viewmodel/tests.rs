//! View Model Tests
//!
//! State-sequence tests with gated repository stubs. Fetch tasks run on the
//! tauri async runtime, so every wait is bounded by a timeout.

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::{watch, Mutex, Notify};
    use tokio::time::timeout;

    use crate::domain::{FetchOutcome, Todo};
    use crate::repository::TodoRepository;
    use crate::viewmodel::{TodoViewModel, UiState};

    const WAIT: Duration = Duration::from_secs(5);

    fn sample_todo() -> Todo {
        Todo {
            user_id: 1,
            id: 1,
            title: "delectus aut autem".to_string(),
            completed: false,
        }
    }

    /// One prearranged repository call: signals arrival, waits for release,
    /// then answers.
    struct Call {
        arrived: Arc<Notify>,
        release: Arc<Notify>,
        outcome: FetchOutcome,
    }

    impl Call {
        fn new(outcome: FetchOutcome) -> Self {
            Self {
                arrived: Arc::new(Notify::new()),
                release: Arc::new(Notify::new()),
                outcome,
            }
        }
    }

    /// Repository stub that serves prearranged calls in arrival order.
    struct ScriptedRepository {
        calls: Mutex<VecDeque<Call>>,
    }

    impl ScriptedRepository {
        fn new(calls: Vec<Call>) -> Self {
            Self {
                calls: Mutex::new(calls.into_iter().collect()),
            }
        }
    }

    #[async_trait]
    impl TodoRepository for ScriptedRepository {
        async fn fetch_todo(&self) -> FetchOutcome {
            let call = self
                .calls
                .lock()
                .await
                .pop_front()
                .expect("unexpected fetch call");
            call.arrived.notify_one();
            call.release.notified().await;
            call.outcome
        }
    }

    async fn next_state(states: &mut watch::Receiver<UiState>) -> UiState {
        timeout(WAIT, states.changed())
            .await
            .expect("state change timed out")
            .expect("view model dropped");
        states.borrow_and_update().clone()
    }

    /// Skip coalesced `Loading` updates and return the next terminal state.
    async fn next_terminal_state(states: &mut watch::Receiver<UiState>) -> UiState {
        loop {
            let state = next_state(states).await;
            if state != UiState::Loading {
                return state;
            }
        }
    }

    #[tokio::test]
    async fn loading_precedes_success() {
        let call = Call::new(FetchOutcome::Success(sample_todo()));
        let release = Arc::clone(&call.release);
        let vm = TodoViewModel::new(Arc::new(ScriptedRepository::new(vec![call])));

        let mut states = vm.subscribe();
        assert_eq!(*states.borrow_and_update(), UiState::Loading);

        vm.load();
        assert_eq!(next_state(&mut states).await, UiState::Loading);

        release.notify_one();
        assert_eq!(
            next_state(&mut states).await,
            UiState::Success(sample_todo())
        );
    }

    #[tokio::test]
    async fn loading_precedes_error() {
        let call = Call::new(FetchOutcome::Failure("connection timed out".to_string()));
        let release = Arc::clone(&call.release);
        let vm = TodoViewModel::new(Arc::new(ScriptedRepository::new(vec![call])));

        let mut states = vm.subscribe();
        vm.load();
        assert_eq!(next_state(&mut states).await, UiState::Loading);

        release.notify_one();
        assert_eq!(
            next_state(&mut states).await,
            UiState::Error("connection timed out".to_string())
        );
    }

    #[tokio::test]
    async fn superseded_fetch_result_is_discarded() {
        let stale = Call::new(FetchOutcome::Failure("stale response".to_string()));
        let fresh = Call::new(FetchOutcome::Success(sample_todo()));
        let stale_arrived = Arc::clone(&stale.arrived);
        let stale_release = Arc::clone(&stale.release);
        let fresh_arrived = Arc::clone(&fresh.arrived);
        let fresh_release = Arc::clone(&fresh.release);

        let vm = TodoViewModel::new(Arc::new(ScriptedRepository::new(vec![stale, fresh])));
        let mut states = vm.subscribe();

        // Sequence the arrivals so call order matches load order.
        vm.load();
        timeout(WAIT, stale_arrived.notified()).await.unwrap();
        vm.load();
        timeout(WAIT, fresh_arrived.notified()).await.unwrap();

        // The newer request completes first.
        fresh_release.notify_one();
        assert_eq!(
            next_terminal_state(&mut states).await,
            UiState::Success(sample_todo())
        );

        // The superseded request completes late; its result must not
        // clobber the fresher state.
        stale_release.notify_one();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(vm.state(), UiState::Success(sample_todo()));
    }

    #[tokio::test]
    async fn rapid_retries_end_in_a_terminal_state() {
        let first = Call::new(FetchOutcome::Failure("first".to_string()));
        let second = Call::new(FetchOutcome::Success(sample_todo()));
        let first_release = Arc::clone(&first.release);
        let second_release = Arc::clone(&second.release);

        let vm = TodoViewModel::new(Arc::new(ScriptedRepository::new(vec![first, second])));
        let mut states = vm.subscribe();

        vm.load();
        vm.load();
        first_release.notify_one();
        second_release.notify_one();

        // Completion order is unspecified here; the contract is simply that
        // some terminal state is reached without a crash.
        let state = next_terminal_state(&mut states).await;
        assert!(matches!(
            state,
            UiState::Success(_) | UiState::Error(_)
        ));
    }
}
