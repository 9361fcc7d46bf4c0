//! Weather session: single owner of all forecast state.
//!
//! External stimuli (location updates, unit changes, day selection) and the
//! completions of in-flight fetches all funnel through one event channel, so
//! state transitions never run concurrently. Fetches are spawned tasks that
//! report back via `SessionEvent::FetchDone`; the latest completed fetch
//! wins, with no cancellation of earlier ones.

use std::sync::Arc;

use chrono::Local;
use tokio::sync::{mpsc, watch};

use crate::client::OpenMeteoClient;
use crate::error::WeatherError;
use crate::normalize::build_day_views;
use crate::notify::Notifier;
use crate::types::{Coordinate, CurrentView, DayView, Forecast, ViewState};
use skycast_core::TemperatureUnit;

/// Inbound events. `Location(None)` is ignored (no fix available).
#[derive(Debug)]
pub enum SessionEvent {
    Location(Option<Coordinate>),
    UnitChanged(TemperatureUnit),
    SelectDay(usize),
    FetchDone(Result<Forecast, WeatherError>),
}

/// Fetch-cycle state. One cycle per stimulus; `Failed` and `Ready` both
/// accept the next stimulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    Ready,
    /// Last fetch failed. Non-blocking: any new stimulus restarts the cycle.
    Failed,
}

/// Handle given to collaborators: event entry points plus a read-only
/// snapshot of the current view model.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    events: mpsc::UnboundedSender<SessionEvent>,
    view: watch::Receiver<ViewState>,
}

impl SessionHandle {
    pub fn update_location(&self, update: Option<Coordinate>) {
        let _ = self.events.send(SessionEvent::Location(update));
    }

    pub fn set_unit(&self, unit: TemperatureUnit) {
        let _ = self.events.send(SessionEvent::UnitChanged(unit));
    }

    /// Select the active day. Out-of-range indices are a silent no-op.
    pub fn select_day(&self, index: usize) {
        let _ = self.events.send(SessionEvent::SelectDay(index));
    }

    pub fn view(&self) -> watch::Receiver<ViewState> {
        self.view.clone()
    }
}

pub struct WeatherSession {
    client: Arc<OpenMeteoClient>,
    // Weak so the session's own fetch tasks never hold the channel open;
    // recv() returns None once every SessionHandle is gone.
    events: mpsc::WeakUnboundedSender<SessionEvent>,
    pub(crate) events_rx: mpsc::UnboundedReceiver<SessionEvent>,
    view: watch::Sender<ViewState>,
    notifier: Notifier,
    unit: TemperatureUnit,
    coordinate: Option<Coordinate>,
    forecast: Option<Forecast>,
    days: Vec<DayView>,
    active_day: usize,
    last_error: Option<String>,
    phase: Phase,
}

impl WeatherSession {
    pub fn new(
        client: OpenMeteoClient,
        unit: TemperatureUnit,
        notifier: Notifier,
    ) -> (Self, SessionHandle) {
        let (events, events_rx) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(ViewState::default());

        let session = Self {
            client: Arc::new(client),
            events: events.downgrade(),
            events_rx,
            view: view_tx,
            notifier,
            unit,
            coordinate: None,
            forecast: None,
            days: Vec::new(),
            active_day: 0,
            last_error: None,
            phase: Phase::Idle,
        };
        let handle = SessionHandle {
            events,
            view: view_rx,
        };
        (session, handle)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Message for the most recent fetch failure, if the last cycle failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Process inbound events until every [`SessionHandle`] is dropped.
    pub async fn run(mut self) {
        while let Some(event) = self.events_rx.recv().await {
            self.handle(event);
        }
        tracing::debug!("weather session stopped");
    }

    fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Location(None) => {}
            SessionEvent::Location(Some(coordinate)) => {
                self.coordinate = Some(coordinate);
                self.start_fetch();
            }
            SessionEvent::UnitChanged(unit) => {
                if unit == self.unit {
                    return;
                }
                self.unit = unit;
                if self.coordinate.is_some() {
                    self.start_fetch();
                }
            }
            SessionEvent::SelectDay(index) => self.select_day(index),
            SessionEvent::FetchDone(result) => self.apply_fetch(result),
        }
    }

    fn start_fetch(&mut self) {
        let Some(coordinate) = self.coordinate else {
            return;
        };
        self.phase = Phase::Fetching;
        tracing::info!(
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            unit = self.unit.as_str(),
            "starting forecast fetch"
        );

        let client = self.client.clone();
        let unit = self.unit;
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = client.fetch(coordinate, unit).await;
            // No handles left means no one to report to.
            if let Some(events) = events.upgrade() {
                let _ = events.send(SessionEvent::FetchDone(result));
            }
        });
    }

    fn apply_fetch(&mut self, result: Result<Forecast, WeatherError>) {
        match result {
            Ok(forecast) => {
                self.days = build_day_views(&forecast, Local::now().naive_local());
                // The day list is regenerated in full; a selection past the
                // end of a shorter list is clamped to the last valid index.
                if self.active_day >= self.days.len() {
                    self.active_day = self.days.len().saturating_sub(1);
                }
                self.forecast = Some(forecast);
                self.last_error = None;
                self.phase = Phase::Ready;
                self.publish();
            }
            Err(err) => {
                tracing::warn!("forecast fetch failed: {err}");
                self.last_error = Some(err.to_string());
                self.notifier
                    .notify(format!("{err}\n\nTrying again in 1 minute."));
                self.phase = Phase::Failed;
            }
        }
    }

    fn select_day(&mut self, index: usize) {
        if index >= self.days.len() {
            return;
        }
        self.active_day = index;
        self.publish();
    }

    fn publish(&self) {
        self.view.send_replace(ViewState {
            current: self.forecast.as_ref().map(|f| CurrentView::from(&f.current)),
            days: self.days.clone(),
            active_day: self.active_day,
        });
    }
}
