use vader_sentiment::SentimentIntensityAnalyzer;

use crate::engine::capability::SentimentScorer;
use crate::model::node_output::SentimentScores;

/// VADER lexicon scorer. Runs in-process against the full VADER lexicon and
/// emoji table shipped with `vader_sentiment`.
pub struct LexiconScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        // punctuation-only input would otherwise count as one neutral token
        if !text.chars().any(char::is_alphanumeric) {
            return SentimentScores { neg: 0.0, neu: 0.0, pos: 0.0, compound: 0.0 };
        }

        let scores = self.analyzer.polarity_scores(text);
        let axis = |name: &str| scores.get(name).copied().unwrap_or(0.0);

        SentimentScores {
            neg: round_to(axis("neg"), 3),
            neu: round_to(axis("neu"), 3),
            pos: round_to(axis("pos"), 3),
            compound: round_to(axis("compound"), 4),
        }
    }
}

fn round_to(x: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (x * factor).round() / factor
}
