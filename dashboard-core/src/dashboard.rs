use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{error, info, warn};

use crate::{
    FetchError, WeatherProvider,
    model::WeatherSnapshot,
    notify::{Notification, NotificationSink},
    state::{DerivedView, ViewAction, ViewState},
    units::DisplayUnit,
};

const FETCH_FAILED: &str =
    "Could not fetch weather data. Please check the location name and try again.";

/// Owns the view-state and turns queries into snapshot replacements and
/// notifications.
///
/// Requests are numbered as they are issued. A response is only shown if
/// it is newer than the snapshot on screen, so overlapping submissions
/// settle on the most recently issued one that succeeded.
#[derive(Debug)]
pub struct Dashboard<P, N> {
    provider: P,
    sink: N,
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    view: ViewState,
    issued: u64,
    shown: u64,
}

impl<P: WeatherProvider, N: NotificationSink> Dashboard<P, N> {
    pub fn new(provider: P, sink: N, unit: DisplayUnit) -> Self {
        Self {
            provider,
            sink,
            inner: Mutex::new(Inner { view: ViewState::with_unit(unit), ..Inner::default() }),
        }
    }

    /// Fetch current conditions for `query` and, on success, make them the
    /// displayed snapshot.
    ///
    /// Failures are logged and reported through the sink; the snapshot on
    /// screen is left as it was.
    pub async fn fetch_weather(&self, query: &str) -> Result<Arc<WeatherSnapshot>, FetchError> {
        let query = query.trim();
        if query.is_empty() {
            let err = FetchError::EmptyQuery;
            self.sink.notify(Notification::destructive("Validation error", err.to_string()));
            return Err(err);
        }

        let seq = {
            let mut inner = self.lock();
            inner.issued += 1;
            inner.view.apply(ViewAction::SetQuery(query.to_string()));
            inner.view.apply(ViewAction::SetLoading(true));
            inner.issued
        };

        info!(query, seq, "Fetching weather");
        let result = self.provider.current(query).await;

        let mut inner = self.lock();
        if seq == inner.issued {
            inner.view.apply(ViewAction::SetLoading(false));
        }

        match result {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                if seq <= inner.shown {
                    warn!(query, seq, shown = inner.shown, "Discarding stale weather response");
                    return Ok(snapshot);
                }

                inner.shown = seq;
                inner.view.apply(ViewAction::ReplaceSnapshot(Arc::clone(&snapshot)));
                drop(inner);

                self.sink.notify(Notification::info(
                    "Weather updated",
                    format!("Showing weather for {}", snapshot.location.display_name()),
                ));
                Ok(snapshot)
            }
            Err(err) => {
                drop(inner);

                error!(query, seq, error = %err, "Weather fetch failed");
                self.sink.notify(Notification::destructive("Error", FETCH_FAILED));
                Err(err)
            }
        }
    }

    /// Flip between Celsius and Fahrenheit; returns the new unit.
    pub fn toggle_unit(&self) -> DisplayUnit {
        let mut inner = self.lock();
        inner.view.apply(ViewAction::ToggleUnit);
        inner.view.unit
    }

    pub fn set_unit(&self, unit: DisplayUnit) {
        self.lock().view.apply(ViewAction::SetUnit(unit));
    }

    /// A copy of the current view-state.
    pub fn state(&self) -> ViewState {
        self.lock().view.clone()
    }

    /// Render-ready values, all derived from one state read.
    pub fn view(&self) -> DerivedView {
        self.lock().view.derive()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // State transitions never panic midway, so a poisoned lock still holds a
        // consistent view.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::fixtures::snapshot, notify::Severity, theme::ThemeId};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct FakeProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn current(&self, query: &str) -> Result<WeatherSnapshot, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match query {
                "London" => Ok(snapshot("London", "Partly cloudy", 14.0, 9.0)),
                _ => Err(FetchError::Status {
                    status: reqwest::StatusCode::BAD_REQUEST,
                    body: "No matching location found.".to_string(),
                }),
            }
        }
    }

    #[derive(Debug, Default)]
    struct RecordingSink(Mutex<Vec<Notification>>);

    impl NotificationSink for RecordingSink {
        fn notify(&self, notification: Notification) {
            self.0.lock().unwrap().push(notification);
        }
    }

    impl RecordingSink {
        fn taken(&self) -> Vec<Notification> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    fn dashboard() -> Dashboard<FakeProvider, RecordingSink> {
        Dashboard::new(FakeProvider::default(), RecordingSink::default(), DisplayUnit::Celsius)
    }

    #[tokio::test]
    async fn blank_query_never_reaches_provider() {
        let dash = dashboard();

        let err = dash.fetch_weather("   ").await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(dash.provider.calls.load(Ordering::SeqCst), 0);
        let notes = dash.sink.taken();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, Severity::Destructive);
        assert_eq!(dash.state(), ViewState::default());
    }

    #[tokio::test]
    async fn success_replaces_snapshot_and_names_location() {
        let dash = dashboard();

        dash.fetch_weather("  London ").await.unwrap();

        let state = dash.state();
        assert_eq!(state.query, "London");
        assert!(!state.loading);
        assert_eq!(state.snapshot.unwrap().location.name, "London");

        let notes = dash.sink.taken();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, Severity::Info);
        assert!(notes[0].description.contains("London, United Kingdom"));

        assert_eq!(dash.view().theme, ThemeId::Cloud);
    }

    #[tokio::test]
    async fn failure_keeps_previous_snapshot() {
        let dash = dashboard();
        dash.fetch_weather("London").await.unwrap();
        dash.sink.taken();

        let err = dash.fetch_weather("Nowhereville").await.unwrap_err();
        assert!(matches!(err, FetchError::Status { .. }));

        let state = dash.state();
        assert_eq!(state.snapshot.unwrap().location.name, "London");
        assert_eq!(state.query, "Nowhereville");
        assert!(!state.loading);

        let notes = dash.sink.taken();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, Severity::Destructive);
        assert_eq!(notes[0].description, FETCH_FAILED);
        assert!(!notes[0].description.contains("No matching location"));
    }

    #[tokio::test]
    async fn unit_toggle_round_trips() {
        let dash = dashboard();
        dash.fetch_weather("London").await.unwrap();

        let before = dash.view();
        assert_eq!(dash.toggle_unit(), DisplayUnit::Fahrenheit);
        assert_eq!(dash.view().current.unwrap().temperatures.temperature, 57);
        assert_eq!(dash.toggle_unit(), DisplayUnit::Celsius);
        assert_eq!(dash.view(), before);
    }

    #[tokio::test]
    async fn set_unit_overrides_and_survives_refetch() {
        let dash = dashboard();
        dash.set_unit(DisplayUnit::Fahrenheit);
        dash.set_unit(DisplayUnit::Fahrenheit);
        assert_eq!(dash.state().unit, DisplayUnit::Fahrenheit);

        dash.fetch_weather("London").await.unwrap();
        let view = dash.view();
        assert_eq!(view.unit, DisplayUnit::Fahrenheit);
        assert_eq!(view.current.unwrap().temperatures.temperature, 57);

        dash.set_unit(DisplayUnit::Celsius);
        assert_eq!(dash.view().current.unwrap().temperatures.temperature, 14);
    }
}
