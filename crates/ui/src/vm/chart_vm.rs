use deck_core::model::BarChart;

/// One row of the horizontal bar chart, ready for inline styling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartRowVm {
    pub name: String,
    pub label: String,
    /// CSS width, e.g. `66.7%`.
    pub width: String,
    pub color: &'static str,
    pub tooltip: String,
}

#[must_use]
pub fn map_chart_rows(chart: &BarChart) -> Vec<ChartRowVm> {
    chart
        .scaled()
        .into_iter()
        .map(|scaled| ChartRowVm {
            name: scaled.bar.name.clone(),
            label: scaled.bar.label.clone(),
            width: format!("{:.1}%", scaled.fraction * 100.0),
            color: scaled.color,
            tooltip: format!("{} · {}", scaled.bar.label, scaled.bar.name),
        })
        .collect()
}
