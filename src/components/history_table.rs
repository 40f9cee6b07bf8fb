use dioxus::prelude::*;

use crate::shared::types::HistoryRecordDto;
use crate::utils::format::{format_local, format_rupees_fixed};

/// One row per record, in the order the service returned them.
#[allow(non_snake_case)]
#[component]
pub fn HistoryTable(history: Vec<HistoryRecordDto>) -> Element {
    rsx! {
        table { class: "history",
            thead {
                tr {
                    th { "Days" }
                    th { "Price" }
                    th { "Time" }
                }
            }
            tbody {
                for item in history.iter() {
                    tr { key: "{item.id}",
                        td { "{item.days_ahead}" }
                        td { "{format_rupees_fixed(item.predicted_price)}" }
                        td {
                            time { datetime: "{item.created_at}", "{format_local(&item.created_at)}" }
                        }
                    }
                }
            }
        }
    }
}
