use serde::{Deserialize, Serialize};

/// A headline market index shown in the sidebar (display values only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketIndex {
    /// e.g. "S&P 500"
    pub name: String,

    /// Formatted level, e.g. "4,783.45"
    pub value: String,

    /// Formatted change, e.g. "+0.87%"
    pub change: String,

    pub up: bool,
}

impl MarketIndex {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
        up: bool,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            change: change.into(),
            up,
        }
    }
}

/// Market tone of a news item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Bullish,
    Bearish,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Bullish => write!(f, "bullish"),
            Sentiment::Bearish => write!(f, "bearish"),
        }
    }
}

/// A single entry in the news feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,

    pub headline: String,

    /// Publisher, e.g. "Reuters"
    pub source: String,

    /// Relative age label, e.g. "2h ago"
    pub time: String,

    /// Ticker symbol or topic ("MACRO")
    pub tag: String,

    pub sentiment: Sentiment,
}

impl NewsItem {
    pub fn new(
        id: u32,
        headline: impl Into<String>,
        source: impl Into<String>,
        time: impl Into<String>,
        tag: impl Into<String>,
        sentiment: Sentiment,
    ) -> Self {
        Self {
            id,
            headline: headline.into(),
            source: source.into(),
            time: time.into(),
            tag: tag.into(),
            sentiment,
        }
    }
}
