use thiserror::Error;

use crate::model::ChartError;
use crate::model::DeckError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Chart(#[from] ChartError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BarChart, Deck};

    fn build_empty_deck() -> Result<Deck, Error> {
        Ok(Deck::new(Vec::new())?)
    }

    fn build_empty_chart() -> Result<BarChart, Error> {
        Ok(BarChart::new(Vec::new())?)
    }

    #[test]
    fn model_errors_convert_transparently() {
        let err = build_empty_deck().unwrap_err();
        assert!(matches!(err, Error::Deck(DeckError::Empty)));
        assert_eq!(err.to_string(), DeckError::Empty.to_string());

        let err = build_empty_chart().unwrap_err();
        assert!(matches!(err, Error::Chart(ChartError::Empty)));
    }
}
