use thiserror::Error;

/// Fill colors cycled across bars by position.
pub const PALETTE: [&str; 3] = ["#e57d60", "#f19d86", "#ffd2c5"];

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    #[error("chart must contain at least one bar")]
    Empty,

    #[error("bar `{name}` has invalid value {value}; values must be finite and >= 0")]
    InvalidValue { name: String, value: f64 },
}

/// One category of a horizontal bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub name: String,
    pub value: f64,
    /// Human readable value, e.g. `$117B`.
    pub label: String,
}

impl Bar {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            label: label.into(),
        }
    }
}

/// A bar scaled against the largest bar of its chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledBar<'a> {
    pub bar: &'a Bar,
    /// Share of the largest value, in `[0, 1]`.
    pub fraction: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    bars: Vec<Bar>,
}

impl BarChart {
    /// # Errors
    ///
    /// Returns `ChartError::Empty` for no bars and `ChartError::InvalidValue`
    /// for negative or non-finite values.
    pub fn new(bars: Vec<Bar>) -> Result<Self, ChartError> {
        if bars.is_empty() {
            return Err(ChartError::Empty);
        }
        if let Some(bad) = bars
            .iter()
            .find(|bar| !bar.value.is_finite() || bar.value < 0.0)
        {
            return Err(ChartError::InvalidValue {
                name: bad.name.clone(),
                value: bad.value,
            });
        }
        Ok(Self { bars })
    }

    /// TAM / SAM / SOM in billions of dollars.
    #[must_use]
    pub fn market_size() -> Self {
        Self {
            bars: vec![
                Bar::new("TAM (2034)", 117.0, "$117B"),
                Bar::new("SAM (2034)", 78.0, "$78B"),
                Bar::new("SOM (2030)", 2.0, "$2B"),
            ],
        }
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|bar| bar.value).fold(0.0, f64::max)
    }

    /// Bars with their length relative to the largest value.
    ///
    /// An all-zero chart scales every bar to `0.0`.
    #[must_use]
    pub fn scaled(&self) -> Vec<ScaledBar<'_>> {
        let max = self.max_value();
        self.bars
            .iter()
            .enumerate()
            .map(|(i, bar)| ScaledBar {
                bar,
                fraction: if max > 0.0 { bar.value / max } else { 0.0 },
                color: PALETTE[i % PALETTE.len()],
            })
            .collect()
    }
}
