use super::{not_prepared, SentencePredictor};
use crate::classification::argmax;
use crate::error::Result;
use crate::labels::LabelSet;
use crate::lexicon::{OpinionLexicon, ScoreLexicon, SentiWordNet, WordEmotionScore};
use crate::resources::Resources;
use crate::text::TextNormalizer;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;

const POSITIVE: &str = "positive";
const NEGATIVE: &str = "negative";

/// `positive` when the SentiWordNet positive total is at least the negative total.
#[derive(Debug, Default)]
pub struct MaxSentimentScore {
    allow_negation: bool,
    normalizer: Option<Arc<TextNormalizer>>,
    lexicon: Option<Arc<SentiWordNet>>,
}

impl MaxSentimentScore {
    /// Creates the predictor; negation is off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subtract the scores of words inside a negation scope.
    #[must_use]
    pub fn with_negation(mut self, allow_negation: bool) -> Self {
        self.allow_negation = allow_negation;
        self
    }
}

impl SentencePredictor for MaxSentimentScore {
    fn name(&self) -> &str {
        "MaxSentimentScore"
    }

    fn prepare(&mut self, resources: &Resources) -> Result<()> {
        if self.lexicon.is_none() {
            self.lexicon = Some(resources.sentiwordnet()?);
            self.normalizer = Some(resources.normalizer());
        }
        Ok(())
    }

    fn predict(&mut self, sentence: &str) -> Result<String> {
        let (Some(normalizer), Some(lexicon)) = (&self.normalizer, &self.lexicon) else {
            return Err(not_prepared(self.name()));
        };
        let tokens = normalizer.tokenize(&sentence.to_lowercase());
        let scores = lexicon.score_tokens(&tokens, self.allow_negation);
        let label = if scores[1] >= scores[0] {
            POSITIVE
        } else {
            NEGATIVE
        };
        Ok(label.to_string())
    }
}

/// `positive` when at least as many positive as negative opinion words occur.
#[derive(Debug, Default)]
pub struct OpinionLexiconCount {
    allow_negation: bool,
    normalizer: Option<Arc<TextNormalizer>>,
    lexicon: Option<Arc<OpinionLexicon>>,
}

impl OpinionLexiconCount {
    /// Creates the predictor; negation is off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a negated opinion word for the opposite polarity.
    #[must_use]
    pub fn with_negation(mut self, allow_negation: bool) -> Self {
        self.allow_negation = allow_negation;
        self
    }
}

impl SentencePredictor for OpinionLexiconCount {
    fn name(&self) -> &str {
        "OpinionLexiconSentimentCount"
    }

    fn prepare(&mut self, resources: &Resources) -> Result<()> {
        if self.lexicon.is_none() {
            self.lexicon = Some(resources.opinion_lexicon()?);
            self.normalizer = Some(resources.normalizer());
        }
        Ok(())
    }

    fn predict(&mut self, sentence: &str) -> Result<String> {
        let (Some(normalizer), Some(lexicon)) = (&self.normalizer, &self.lexicon) else {
            return Err(not_prepared(self.name()));
        };
        let tokens = normalizer.tokenize(&sentence.to_lowercase());
        let counts = lexicon.opinion_counts(&tokens, self.allow_negation);
        let label = if counts.positive >= counts.negative {
            POSITIVE
        } else {
            NEGATIVE
        };
        Ok(label.to_string())
    }
}

/// How [`MaxEmotionScore`] picks among equally scored emotions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The first tied emotion in label order
    #[default]
    FirstSeen,
    /// A uniformly random tied emotion, from an RNG with this seed
    Random(u64),
}

/// The emotion with the highest NRC emotion score total.
///
/// # Examples
///
/// ```
/// use sentir::config::ToolkitConfig;
/// use sentir::lexicon::WordEmotionScore;
/// use sentir::resources::Resources;
/// use sentir::sentence::{MaxEmotionScore, SentencePredictor};
///
/// let lexicon = WordEmotionScore::parse("######\nfear\tspider\t0.9\njoy\tpuppy\t0.8\n");
/// let resources = Resources::new(ToolkitConfig::new().with_cache_enabled(false))
///     .with_word_emotion_scores(lexicon);
///
/// let mut predictor = MaxEmotionScore::new();
/// predictor.ensure_ready(&resources).expect("lexicon provided");
/// assert_eq!(predictor.predict("A spider on my puppy").expect("ready"), "fear");
/// ```
#[derive(Debug)]
pub struct MaxEmotionScore {
    allow_negation: bool,
    tie_break: TieBreak,
    rng: Option<StdRng>,
    normalizer: Option<Arc<TextNormalizer>>,
    lexicon: Option<Arc<WordEmotionScore>>,
}

impl MaxEmotionScore {
    /// Creates the predictor; negation is off and ties keep the first emotion.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_negation: false,
            tie_break: TieBreak::FirstSeen,
            rng: None,
            normalizer: None,
            lexicon: None,
        }
    }

    /// Subtract the scores of words inside a negation scope.
    #[must_use]
    pub fn with_negation(mut self, allow_negation: bool) -> Self {
        self.allow_negation = allow_negation;
        self
    }

    /// Sets the tie-break policy.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self.rng = match tie_break {
            TieBreak::FirstSeen => None,
            TieBreak::Random(seed) => Some(StdRng::seed_from_u64(seed)),
        };
        self
    }

    fn pick(&mut self, scores: &[f32]) -> usize {
        let Some(rng) = self.rng.as_mut() else {
            return argmax(scores);
        };
        let best = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let tied: Vec<usize> = (0..scores.len()).filter(|&i| scores[i] == best).collect();
        tied.choose(rng).copied().unwrap_or(0)
    }
}

impl Default for MaxEmotionScore {
    fn default() -> Self {
        Self::new()
    }
}

impl SentencePredictor for MaxEmotionScore {
    fn name(&self) -> &str {
        "MaxEmotionScore"
    }

    fn prepare(&mut self, resources: &Resources) -> Result<()> {
        if self.lexicon.is_none() {
            self.lexicon = Some(resources.word_emotion_scores()?);
            self.normalizer = Some(resources.normalizer());
        }
        Ok(())
    }

    fn predict(&mut self, sentence: &str) -> Result<String> {
        let (Some(normalizer), Some(lexicon)) = (&self.normalizer, &self.lexicon) else {
            return Err(not_prepared(self.name()));
        };
        let tokens = normalizer.tokenize(&sentence.to_lowercase());
        let scores = lexicon.score_tokens(&tokens, self.allow_negation);
        let id = self.pick(&scores);
        Ok(LabelSet::emotions().label(id).unwrap_or_default().to_string())
    }
}
