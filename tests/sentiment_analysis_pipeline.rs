// Integration tests for the sentiment analysis pipeline public API.

use std::collections::HashMap;
use std::io::Write;

use sentiment_nlp::pipelines::sentiment_analysis_pipeline::*;

/// Deterministic scorer with a fixed score per token; unknown tokens score 0.
#[derive(Clone, Default)]
struct StubModel {
    document: Option<SentimentResult>,
    tokens: HashMap<String, f64>,
    fail_on: Option<String>,
}

impl StubModel {
    fn with_tokens(pairs: &[(&str, f64)]) -> Self {
        Self {
            tokens: pairs.iter().map(|(t, s)| (t.to_string(), *s)).collect(),
            ..Default::default()
        }
    }
}

impl SentimentAnalysisModel for StubModel {
    type Options = ();

    fn new(_: ()) -> anyhow::Result<Self> {
        Ok(Self::default())
    }

    fn score_document(&self, _text: &str) -> anyhow::Result<SentimentResult> {
        Ok(self.document.unwrap_or_else(SentimentResult::neutral))
    }

    fn score_token(&self, token: &str) -> anyhow::Result<f64> {
        if self.fail_on.as_deref() == Some(token) {
            anyhow::bail!("cannot score `{token}`");
        }
        Ok(self.tokens.get(token).copied().unwrap_or(0.0))
    }
}

#[test]
fn boundary_scores_follow_thresholds() -> anyhow::Result<()> {
    let model = StubModel::with_tokens(&[
        ("edge_pos", 0.1),
        ("just_pos", 0.1001),
        ("edge_neg", -0.1),
        ("just_neu", -0.0999),
    ]);
    let pipeline = SentimentAnalysisPipeline::new(model);

    let tokens = pipeline.classify_tokens("edge_pos just_pos edge_neg just_neu")?;
    let positives: Vec<&str> = tokens.positives.iter().map(|t| t.token.as_str()).collect();
    let negatives: Vec<&str> = tokens.negatives.iter().map(|t| t.token.as_str()).collect();

    assert_eq!(positives, vec!["just_pos"]);
    assert_eq!(negatives, vec!["edge_neg"]);
    assert_eq!(tokens.negatives[0].score, -0.1);
    assert_eq!(tokens.neutral, vec!["edge_pos", "just_neu"]);
    Ok(())
}

#[test]
fn scorer_failure_fails_the_request() {
    let model = StubModel {
        fail_on: Some("boom".into()),
        ..StubModel::with_tokens(&[("fine", 0.5)])
    };
    let pipeline = SentimentAnalysisPipeline::new(model);

    let err = pipeline.analyze("fine boom fine").unwrap_err();
    assert!(err.to_string().contains("cannot score `boom`"));
}

#[test]
fn analysis_bundles_every_output() -> anyhow::Result<()> {
    let model = StubModel {
        document: Some(SentimentResult {
            polarity: -0.25,
            subjectivity: 0.5,
        }),
        ..StubModel::with_tokens(&[("meh", -0.3), ("yay", 0.7)])
    };
    let pipeline = SentimentAnalysisPipeline::new(model);

    let analysis = pipeline.analyze("meh yay ok")?;
    assert_eq!(analysis.label, SentimentLabel::Negative);
    assert_eq!(analysis.rows[0].metric, "polarity");
    assert_eq!(analysis.rows[0].value, -0.25);
    assert_eq!(analysis.rows[1].metric, "subjectivity");
    assert_eq!(analysis.rows[1].value, 0.5);
    assert_eq!(
        analysis.counts,
        SentimentCounts {
            positive: 1,
            negative: 1,
            neutral: 1
        }
    );
    Ok(())
}

#[test]
fn empty_input_is_neutral() -> anyhow::Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::lexicon().build()?;

    for text in ["", "   \n\t  "] {
        let analysis = pipeline.analyze(text)?;
        assert_eq!(analysis.sentiment, SentimentResult::neutral());
        assert_eq!(analysis.label, SentimentLabel::Neutral);
        assert!(analysis.tokens.is_empty());
        assert_eq!(analysis.counts.total(), 0);
    }
    Ok(())
}

#[test]
fn classification_partitions_tokens() -> anyhow::Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::lexicon().build()?;
    let text = "I love this   great phone but the battery is bad and ugly !!! :)";

    let tokens = pipeline.classify_tokens(text)?;
    assert_eq!(tokens.token_count(), text.split_whitespace().count());

    let mut seen: Vec<&str> = tokens
        .positives
        .iter()
        .chain(tokens.negatives.iter())
        .map(|t| t.token.as_str())
        .chain(tokens.neutral.iter().map(String::as_str))
        .collect();
    let mut expected: Vec<&str> = text.split_whitespace().collect();
    seen.sort_unstable();
    expected.sort_unstable();
    assert_eq!(seen, expected);

    assert!(tokens.positives.iter().all(|t| t.score > POSITIVE_THRESHOLD));
    assert!(tokens.negatives.iter().all(|t| t.score <= NEGATIVE_THRESHOLD));
    for token in &tokens.neutral {
        let score = pipeline.model().score_token(token)?;
        assert!(score > NEGATIVE_THRESHOLD && score <= POSITIVE_THRESHOLD);
    }

    let positives: Vec<&str> = tokens.positives.iter().map(|t| t.token.as_str()).collect();
    assert!(positives.contains(&"love"));
    assert!(positives.contains(&"great"));
    let negatives: Vec<&str> = tokens.negatives.iter().map(|t| t.token.as_str()).collect();
    assert!(negatives.contains(&"bad"));
    Ok(())
}

#[test]
fn emphasis_without_sentiment_is_neutral() -> anyhow::Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::lexicon().build()?;

    let tokens = pipeline.classify_tokens("Hello!! Really!! why??? table!!! !!! great!!!")?;
    assert_eq!(tokens.neutral, ["Hello!!", "Really!!", "why???", "table!!!", "!!!"]);
    assert!(tokens.negatives.is_empty());
    assert_eq!(tokens.positives.len(), 1);
    assert_eq!(tokens.positives[0].token, "great!!!");
    Ok(())
}

#[test]
fn repeated_analysis_is_identical() -> anyhow::Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::lexicon().build()?;
    let text = "The food was not good, but the staff were very friendly!";

    let first = pipeline.analyze(text)?;
    let second = pipeline.analyze(text)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn document_score_uses_lexicon_rules() -> anyhow::Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::lexicon().build()?;

    let result = pipeline.score("This is very good")?;
    assert!((result.polarity - 0.91).abs() < 1e-9);
    assert_eq!(result.label(), SentimentLabel::Positive);

    let result = pipeline.score("This is not good")?;
    assert!((result.polarity + 0.35).abs() < 1e-9);
    assert_eq!(result.label(), SentimentLabel::Negative);
    Ok(())
}

#[test]
fn bundled_lexicon_covers_review_vocabulary() -> anyhow::Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::lexicon().build()?;

    let result = pipeline.score("The pasta was delicious")?;
    assert!((result.polarity - 1.0).abs() < 1e-9);
    assert!((result.subjectivity - 1.0).abs() < 1e-9);

    let positive = [
        "terrific", "charming", "splendid", "tasty", "lovely", "gorgeous", "cozy", "superb",
        "pleasant", "elegant", "enjoyable", "thrilling",
    ];
    for word in positive {
        let result = pipeline.score(&format!("the {word} one"))?;
        assert!(result.polarity > 0.0, "{word}: {result}");
        assert_eq!(result.label(), SentimentLabel::Positive, "{word}");
    }

    let negative = [
        "dreadful", "miserable", "stale", "rude", "disappointing", "filthy", "mediocre",
        "overpriced", "useless", "boring", "tragic", "unpleasant",
    ];
    for word in negative {
        let result = pipeline.score(&format!("the {word} one"))?;
        assert!(result.polarity < 0.0, "{word}: {result}");
        assert_eq!(result.label(), SentimentLabel::Negative, "{word}");
    }
    Ok(())
}

#[test]
fn custom_lexicon_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{"entries": [{{"word": "rusty", "polarity": -0.6, "subjectivity": 0.4}}]}}"#
    )?;

    let pipeline = SentimentAnalysisPipelineBuilder::lexicon()
        .lexicon_file(file.path())
        .build()?;

    let result = pipeline.score("a rusty good bike")?;
    // "good" is not part of the custom lexicon.
    assert!((result.polarity + 0.6).abs() < 1e-9);
    assert!((result.subjectivity - 0.4).abs() < 1e-9);
    Ok(())
}

#[test]
fn invalid_lexicon_file_fails_build() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "not json")?;

    let res = SentimentAnalysisPipelineBuilder::lexicon()
        .lexicon_file(file.path())
        .build();
    assert!(res.is_err());
    Ok(())
}
