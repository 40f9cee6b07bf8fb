//! View state for the dashboard and the two operations that mutate it.
//!
//! Both operations are written against [`PredictionService`] and [`ViewState`]
//! so they run the same way inside a component (server functions, signals)
//! and in tests (fakes, a plain struct).

use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;

use crate::api;
use crate::shared::types::{HistoryRecordDto, PredictOutcome, PredictionDto};

pub const PREDICTION_FAILED: &str = "Prediction failed";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub days_input: String,
    pub result: Option<PredictionDto>,
    pub error: Option<String>,
    pub history: Vec<HistoryRecordDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysInput {
    Empty,
    Invalid,
    Days(i32),
}

/// Reads the input the way a number field does (`7`, `7.0`, `1e1`), then
/// keeps only whole values that fit the request parameter.
pub fn parse_days(input: &str) -> DaysInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DaysInput::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite()
            && v.fract() == 0.0
            && v >= i32::MIN as f64
            && v <= i32::MAX as f64 =>
        {
            DaysInput::Days(v as i32)
        }
        _ => DaysInput::Invalid,
    }
}

#[allow(async_fn_in_trait)]
pub trait PredictionService {
    async fn predict(&self, days: i32) -> PredictOutcome;
    async fn history(&self) -> Result<Vec<HistoryRecordDto>, String>;
}

/// Anything the operations can read and write dashboard state through.
pub trait ViewState {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R;
}

impl ViewState for DashboardState {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        f(self)
    }
}

impl ViewState for Signal<DashboardState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        f(&mut *self.write())
    }
}

/// Production service: goes through the server functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnService;

impl PredictionService for ServerFnService {
    async fn predict(&self, days: i32) -> PredictOutcome {
        match api::predict(days).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("[dashboard] predict server fn failed: {e}");
                PredictOutcome::Failed { error: None }
            }
        }
    }

    async fn history(&self) -> Result<Vec<HistoryRecordDto>, String> {
        api::history().await.map_err(|e| e.to_string())
    }
}

/// Dashboard state with history loaded once when the component mounts.
pub fn use_dashboard<S>(service: S) -> Signal<DashboardState>
where
    S: PredictionService + Clone + 'static,
{
    let state = use_signal(DashboardState::default);
    use_future(move || {
        let service = service.clone();
        async move {
            let mut state = state;
            refresh_history(&service, &mut state).await;
        }
    });
    state
}

/// Replaces history wholesale. Failures are logged only.
pub async fn refresh_history<S, V>(service: &S, view: &mut V)
where
    S: PredictionService,
    V: ViewState,
{
    match service.history().await {
        Ok(records) => {
            info!("[dashboard] history loaded: {} record(s)", records.len());
            view.update(|s| s.history = records);
        }
        Err(e) => warn!("History fetch failed: {e}"),
    }
}

/// Requests a prediction for the current input. No-op for empty input.
///
/// Concurrent submissions are not sequenced: whichever response resolves
/// last is what stays on screen.
pub async fn submit_prediction<S, V>(service: &S, view: &mut V)
where
    S: PredictionService,
    V: ViewState,
{
    let input = view.update(|s| s.days_input.clone());
    let days = match parse_days(&input) {
        DaysInput::Empty => return,
        DaysInput::Invalid => {
            warn!("[dashboard] not a whole number of days: {input:?}");
            view.update(|s| s.error = Some(PREDICTION_FAILED.to_string()));
            return;
        }
        DaysInput::Days(d) => d,
    };

    view.update(|s| s.error = None);
    match service.predict(days).await {
        PredictOutcome::Predicted(prediction) => {
            info!(
                "[dashboard] predicted {} for {} day(s) ahead",
                prediction.predicted_price, days
            );
            view.update(|s| s.result = Some(prediction));
            refresh_history(service, view).await;
        }
        PredictOutcome::Failed { error: message } => {
            error!("Prediction error: {}", message.as_deref().unwrap_or("<no body>"));
            view.update(|s| s.error = Some(message.unwrap_or_else(|| PREDICTION_FAILED.to_string())));
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// In-memory service; clones share call counters.
    #[derive(Clone, Default)]
    pub struct FakeService {
        pub predict_calls: Rc<RefCell<Vec<i32>>>,
        pub history_calls: Rc<Cell<usize>>,
        pub outcome: Option<PredictOutcome>,
        pub history: Option<Vec<HistoryRecordDto>>,
    }

    impl FakeService {
        pub fn predicting(outcome: PredictOutcome) -> Self {
            Self {
                outcome: Some(outcome),
                history: Some(vec![]),
                ..Default::default()
            }
        }

        pub fn with_history(history: Vec<HistoryRecordDto>) -> Self {
            Self {
                history: Some(history),
                ..Default::default()
            }
        }
    }

    impl PredictionService for FakeService {
        async fn predict(&self, days: i32) -> PredictOutcome {
            self.predict_calls.borrow_mut().push(days);
            self.outcome
                .clone()
                .unwrap_or(PredictOutcome::Failed { error: None })
        }

        async fn history(&self) -> Result<Vec<HistoryRecordDto>, String> {
            self.history_calls.set(self.history_calls.get() + 1);
            self.history.clone().ok_or_else(|| "connection refused".to_string())
        }
    }

    pub fn prediction(price: f64) -> PredictionDto {
        PredictionDto {
            predicted_price: price,
        }
    }

    pub fn rec(id: i64, days: i32, price: f64) -> HistoryRecordDto {
        HistoryRecordDto {
            id,
            days_ahead: days,
            predicted_price: price,
            created_at: format!("2024-05-01T10:{:02}:00", id),
        }
    }
}
