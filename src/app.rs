use dioxus::prelude::*;

use crate::components::{HistoryTable, PredictionCard, PriceTrendChart};
use crate::dashboard::{use_dashboard, DashboardState, ServerFnService};
use crate::MAIN_CSS;

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    let state = use_dashboard(ServerFnService);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "Predixa Dashboard" }
        DashboardView { state }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn DashboardView(state: Signal<DashboardState>) -> Element {
    let history = state.read().history.clone();

    rsx! {
        div { class: "container",
            h1 { "📈 Predixa Dashboard" }

            PredictionCard { state }

            h2 { "Prediction History" }
            if !history.is_empty() {
                HistoryTable { history: history.clone() }
                h2 { "Price Trend" }
                PriceTrendChart { history }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::testing::{rec, FakeService};
    use std::time::Duration;

    #[allow(non_snake_case)]
    fn MountedWithFake() -> Element {
        let service = use_context::<FakeService>();
        let state = use_dashboard(service);
        rsx! { DashboardView { state } }
    }

    #[allow(non_snake_case)]
    #[component]
    fn ViewWith(initial: DashboardState) -> Element {
        let state = use_signal(|| initial.clone());
        rsx! { DashboardView { state } }
    }

    #[tokio::test]
    async fn mount_loads_history_once_and_never_predicts() {
        let fake = FakeService::with_history(vec![rec(2, 1, 20.0), rec(1, 1, 10.0)]);
        let mut dom = VirtualDom::new(MountedWithFake).with_root_context(fake.clone());
        dom.rebuild_in_place();
        let _ = tokio::time::timeout(Duration::from_millis(500), dom.wait_for_work()).await;
        let _ = dom.render_immediate_to_vec();

        assert_eq!(fake.history_calls.get(), 1);
        assert!(fake.predict_calls.borrow().is_empty());

        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches("<tr").count(), 3);
        assert_eq!(html.matches("<circle").count(), 2);
    }

    #[test]
    fn empty_history_hides_table_and_chart() {
        let html = dioxus_ssr::render_element(rsx! { ViewWith { initial: DashboardState::default() } });
        assert!(html.contains("Prediction History"));
        assert!(!html.contains("<table"));
        assert!(!html.contains("<svg"));
        assert!(!html.contains("Price Trend"));
    }

    #[test]
    fn non_empty_history_shows_table_and_chart() {
        let initial = DashboardState {
            history: vec![rec(1, 3, 12.5)],
            ..Default::default()
        };
        let html = dioxus_ssr::render_element(rsx! { ViewWith { initial } });
        assert_eq!(html.matches("<tr").count(), 2);
        assert_eq!(html.matches("<circle").count(), 1);
        assert!(html.contains("Price Trend"));
    }
}
