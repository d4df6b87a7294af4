//! Sentiment classification over a VADER polarity score.

use serde::Serialize;
use vader_sentiment::SentimentIntensityAnalyzer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Analysis {
    pub sentiment: Sentiment,
    /// Absolute polarity in [0, 1], rounded to 2 decimals. Not a calibrated
    /// probability.
    pub confidence: f64,
}

/// Score `text` and map its polarity onto a three-way label.
///
/// Polarity is the VADER compound score in [-1, 1]. Strictly positive maps to
/// positive, strictly negative to negative, exactly zero (including empty
/// input) to neutral.
pub fn analyze(text: &str) -> Analysis {
    let analyzer = SentimentIntensityAnalyzer::new();
    let scores = analyzer.polarity_scores(text);
    let polarity = scores.get("compound").copied().unwrap_or(0.0);

    let sentiment = if polarity > 0.0 {
        Sentiment::Positive
    } else if polarity < 0.0 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let confidence = (polarity.abs() * 100.0).round() / 100.0;

    tracing::info!(
        text_len = text.len(),
        polarity,
        sentiment = sentiment.as_str(),
        confidence,
        "analyzed review text"
    );

    Analysis {
        sentiment,
        confidence,
    }
}
