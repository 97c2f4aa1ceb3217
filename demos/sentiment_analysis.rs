use anyhow::Result;
use sentiment_nlp::pipelines::sentiment_analysis_pipeline::*;

fn main() -> Result<()> {
    println!("Building pipeline...");

    let pipeline = SentimentAnalysisPipelineBuilder::lexicon().build()?;

    println!("Pipeline built successfully.");

    let text = "I love my new car, but the seats are really not comfortable";

    let analysis = pipeline.analyze(text)?;

    println!("\n=== Sentiment Analysis Result ===");
    println!("Text: \"{}\"", text);
    println!("{}", analysis.sentiment);
    println!("Sentiment:: {} {}", analysis.label, analysis.label.emoji());
    for token in &analysis.tokens.positives {
        println!("  + {} ({:.4})", token.token, token.score);
    }
    for token in &analysis.tokens.negatives {
        println!("  - {} ({:.4})", token.token, token.score);
    }
    println!("  neutral: {}", analysis.tokens.neutral.join(" "));

    Ok(())
}
