use crate::shared::types::HistoryRecordDto;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 300.0,
            left: 52.0,
            right: 16.0,
            top: 16.0,
            bottom: 28.0,
        }
    }
}

impl ChartLayout {
    pub fn plot_width(&self) -> f32 {
        (self.width - self.left - self.right).max(1.0)
    }

    pub fn plot_height(&self) -> f32 {
        (self.height - self.top - self.bottom).max(1.0)
    }

    pub fn baseline(&self) -> f32 {
        self.top + self.plot_height()
    }

    pub fn y_for(&self, value: f64, y_max: f64) -> f32 {
        let ratio = if y_max > 0.0 {
            (value / y_max).clamp(0.0, 1.0) as f32
        } else {
            0.0
        };
        self.baseline() - ratio * self.plot_height()
    }
}

/// History is stored newest first; the chart reads left to right in time.
pub fn chronological(history: &[HistoryRecordDto]) -> Vec<&HistoryRecordDto> {
    history.iter().rev().collect()
}

/// Smallest of 1, 2, 2.5, 5, 10 (times a power of ten) that is >= `max`.
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let base = 10f64.powf(max.log10().floor());
    let frac = max / base;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 2.5 {
        2.5
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Evenly spaced ticks from 0 up to the nice ceiling of `max`, inclusive.
pub fn y_ticks(max: f64, steps: usize) -> Vec<f64> {
    let steps = steps.max(1);
    let top = nice_ceiling(max);
    (0..=steps)
        .map(|i| top * (i as f64) / (steps as f64))
        .collect()
}

pub fn plot_points(prices: &[f64], layout: &ChartLayout, y_max: f64) -> Vec<(f32, f32)> {
    let n = prices.len();
    let plot_w = layout.plot_width();
    prices
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if n <= 1 {
                layout.left + plot_w / 2.0
            } else {
                layout.left + (i as f32) * plot_w / ((n - 1) as f32)
            };
            (x, layout.y_for(*p, y_max))
        })
        .collect()
}

pub fn line_path(points: &[(f32, f32)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd} {x:.2} {y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Indices that get an x-axis label, at most `max_labels`, always including the first.
pub fn x_label_indices(n: usize, max_labels: usize) -> Vec<usize> {
    if n == 0 || max_labels == 0 {
        return vec![];
    }
    let step = n.div_ceil(max_labels);
    (0..n).step_by(step).collect()
}
