use dioxus::prelude::*;

use crate::dashboard::{submit_prediction, DashboardState, ServerFnService};
use crate::utils::format::format_rupees;

#[allow(non_snake_case)]
#[component]
pub fn PredictionCard(state: Signal<DashboardState>) -> Element {
    let mut state = state;
    let view = state.read().clone();

    rsx! {
        div { class: "card",
            input {
                r#type: "number",
                placeholder: "Days ahead",
                value: "{view.days_input}",
                oninput: move |e: FormEvent| state.write().days_input = e.value(),
            }
            button {
                onclick: move |_| async move {
                    let mut state = state;
                    submit_prediction(&ServerFnService, &mut state).await;
                },
                "Predict"
            }
        }

        if let Some(result) = &view.result {
            p { class: "result", "Predicted Price: {format_rupees(result.predicted_price)}" }
        }

        if let Some(err) = &view.error {
            p { class: "error", "{err}" }
        }
    }
}
