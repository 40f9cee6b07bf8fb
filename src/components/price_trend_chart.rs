use dioxus::prelude::*;

use crate::shared::types::HistoryRecordDto;
use crate::utils::chart::{
    chronological, line_path, nice_ceiling, plot_points, x_label_indices, y_ticks, ChartLayout,
};
use crate::utils::format::{format_axis_value, format_rupees_fixed, format_time_of_day};

const Y_STEPS: usize = 4;
const MAX_X_LABELS: usize = 6;

#[allow(non_snake_case)]
#[component]
pub fn PriceTrendChart(history: Vec<HistoryRecordDto>) -> Element {
    let points_src = chronological(&history);
    let ids: Vec<i64> = points_src.iter().map(|r| r.id).collect();
    let prices: Vec<f64> = points_src.iter().map(|r| r.predicted_price).collect();
    let times: Vec<String> = points_src
        .iter()
        .map(|r| format_time_of_day(&r.created_at))
        .collect();

    let layout = ChartLayout::default();
    let max_price = prices.iter().cloned().fold(0.0f64, f64::max);
    let y_max = nice_ceiling(max_price);
    let tick_rows: Vec<(f32, String)> = y_ticks(max_price, Y_STEPS)
        .into_iter()
        .map(|t| (layout.y_for(t, y_max), format_axis_value(t)))
        .collect();
    let points = plot_points(&prices, &layout, y_max);
    let d = line_path(&points);
    let x_labels: Vec<(usize, f32, String)> = x_label_indices(points.len(), MAX_X_LABELS)
        .into_iter()
        .map(|i| (i, points[i].0, times[i].clone()))
        .collect();

    // Hovered point index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);
    let view_box = format!("0 0 {} {}", layout.width, layout.height);
    let baseline = layout.baseline();
    let right_edge = layout.width - layout.right;

    rsx! {
        div { class: "chart",
            svg { class: "chart-svg", view_box: "{view_box}", width: "100%", height: "{layout.height}",
                // Y grid and tick labels
                for (i, (ty, label)) in tick_rows.into_iter().enumerate() {
                    g { key: "y{i}",
                        line { x1: "{layout.left}", y1: "{ty}", x2: "{right_edge}", y2: "{ty}", stroke: "#e5e7eb", stroke_width: "1" }
                        text { x: "{layout.left - 6.0}", y: "{ty + 4.0}", text_anchor: "end", class: "axis-label", "{label}" }
                    }
                }
                // X axis and time-of-day ticks
                line { x1: "{layout.left}", y1: "{baseline}", x2: "{right_edge}", y2: "{baseline}", stroke: "#9ca3af", stroke_width: "1" }
                for (i, lx, label) in x_labels.into_iter() {
                    text { key: "x{i}", x: "{lx}", y: "{baseline + 18.0}", text_anchor: "middle", class: "axis-label", "{label}" }
                }
                path { d: "{d}", fill: "none", stroke: "#2563eb", stroke_width: "2", stroke_linejoin: "round" }
                for (i, ((x, y), id)) in points.iter().copied().zip(ids.iter().copied()).enumerate() {
                    circle {
                        key: "p{i}", "data-id": "{id}", cx: "{x}", cy: "{y}", r: "4", fill: "#2563eb",
                        onmouseenter: move |_| *hovered.write() = Some(i),
                        onmouseleave: move |_| *hovered.write() = None,
                        ontouchstart: move |_| *hovered.write() = Some(i),
                        ontouchend: move |_| *hovered.write() = None,
                    }
                }
                {
                    match *hovered.read() {
                        Some(i) if i < points.len() => {
                            let (x, y) = points[i];
                            let time_label = times[i].clone();
                            let value_label = format_rupees_fixed(prices[i]);
                            let cw = 7.0f32; // approx char width at 11px
                            let tip_w = (time_label.chars().count().max(value_label.chars().count()) as f32) * cw + 16.0;
                            let tip_h = 36.0f32;
                            let tip_x = (x - tip_w / 2.0).clamp(layout.left, (right_edge - tip_w).max(layout.left));
                            let tip_y = (y - 12.0 - tip_h).max(2.0);
                            rsx! { g { key: "tooltip",
                                rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "6", fill: "#ffffff", stroke: "#cbd5e1", stroke_width: "1" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 15.0}", class: "tooltip-label", "{time_label}" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 29.0}", class: "tooltip-value", "{value_label}" }
                            }}
                        }
                        _ => rsx! { Fragment {} },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::testing::rec;

    #[test]
    fn plots_one_point_per_record_oldest_first() {
        let history = vec![rec(3, 1, 30.0), rec(2, 1, 20.0), rec(1, 1, 10.0)];
        let html = dioxus_ssr::render_element(rsx! { PriceTrendChart { history } });

        assert_eq!(html.matches("<circle").count(), 3);
        let pos = |id: i64| html.find(&format!("data-id=\"{id}\"")).unwrap();
        assert!(pos(1) < pos(2));
        assert!(pos(2) < pos(3));
    }
}
