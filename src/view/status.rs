use crate::model::{RunAction, RunStatus};

use super::Locale;

const CHART_COLORS: [&str; 2] = ["#4bc0c0", "#ff6384"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorColor {
    Green,
    Red,
}

impl IndicatorColor {
    pub fn as_css(self) -> &'static str {
        match self {
            IndicatorColor::Green => "green",
            IndicatorColor::Red => "red",
        }
    }
}

/// Doughnut chart data: successes first, errors second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartView {
    pub labels: [&'static str; 2],
    pub series: [u64; 2],
    pub colors: [&'static str; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub indicator: IndicatorColor,
    pub label: &'static str,
    /// Names the inverse of the current state.
    pub toggle_label: &'static str,
    pub toggle_action: RunAction,
    pub chart: ChartView,
}

pub fn render_status(status: &RunStatus, locale: Locale) -> StatusView {
    let toggle_action = status.state.toggle_action();
    let (indicator, label) = if status.is_running() {
        (IndicatorColor::Green, locale.running())
    } else {
        (IndicatorColor::Red, locale.paused())
    };
    let toggle_label = match toggle_action {
        RunAction::Pause => locale.pause(),
        RunAction::Resume => locale.resume(),
    };

    StatusView {
        indicator,
        label,
        toggle_label,
        toggle_action,
        chart: ChartView {
            labels: locale.chart_labels(),
            series: [status.success_count, status.error_count],
            colors: CHART_COLORS,
        },
    }
}
