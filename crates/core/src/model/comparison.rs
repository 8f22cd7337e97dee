#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub competitor: String,
    pub product: String,
    pub limitation: String,
    pub price: String,
    /// Our own row, drawn with accent styling.
    pub highlighted: bool,
}

impl ComparisonRow {
    fn new(competitor: &str, product: &str, limitation: &str, price: &str) -> Self {
        Self {
            competitor: competitor.to_string(),
            product: product.to_string(),
            limitation: limitation.to_string(),
            price: price.to_string(),
            highlighted: false,
        }
    }

    fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonTable {
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub const COLUMNS: [&'static str; 4] = ["Competitor", "Product", "Limitation", "Price"];

    #[must_use]
    pub fn competition() -> Self {
        Self {
            rows: vec![
                ComparisonRow::new("StoryFile", "Video Retrieval", "Not truly interactive", "Enterprise"),
                ComparisonRow::new("HereAfter AI", "Audio App", "No visual component", "$22/mo"),
                ComparisonRow::new("Eternos", "Full Avatar", "Prohibitively expensive", "$5,000+"),
                ComparisonRow::new(
                    "TYMELESS",
                    "Interactive Avatar",
                    "Democratized access",
                    "$9 - $24/mo",
                )
                .highlighted(),
            ],
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }
}
