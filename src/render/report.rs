use minijinja::{context, Environment};

use super::charts::{bar_chart, pie_chart};
use crate::core::SentimentError;
use crate::pipelines::sentiment_analysis_pipeline::pipeline::format_float;
use crate::pipelines::sentiment_analysis_pipeline::{ScoredToken, SentimentAnalysis};

const BAR_HALF_WIDTH: usize = 20;
const PIE_WIDTH: usize = 40;

const REPORT_TEMPLATE: &str = r#"{{ title }}

[Results]
{{ sentiment }}
Sentiment:: {{ label }} {{ emoji }}

metric        value
{% for row in rows %}
{{ row }}
{% endfor %}

[Token Sentiment]
positives: {{ positives }}
negatives: {{ negatives }}
neutral:   {{ neutral }}

[Visualization]
{% for line in bars %}
{{ line }}
{% endfor %}

[Sentiment Distribution]
{% for line in pie %}
{{ line }}
{% else %}
No tokens to plot.
{% endfor %}
"#;

/// Render the full text report: results, table, token groups and both charts.
pub fn render_text(analysis: &SentimentAnalysis) -> Result<String, SentimentError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("report", REPORT_TEMPLATE)?;

    let rows: Vec<String> = analysis
        .rows
        .iter()
        .map(|row| format!("{:<14}{}", row.metric, format_float(row.value)))
        .collect();

    let tmpl = env.get_template("report")?;
    let report = tmpl.render(context! {
        title => super::TITLE,
        sentiment => analysis.sentiment.to_string(),
        label => analysis.label.as_str(),
        emoji => analysis.label.emoji(),
        rows => rows,
        positives => scored_list(&analysis.tokens.positives),
        negatives => scored_list(&analysis.tokens.negatives),
        neutral => plain_list(&analysis.tokens.neutral),
        bars => bar_chart(&analysis.rows, BAR_HALF_WIDTH),
        pie => pie_chart(&analysis.counts, PIE_WIDTH),
    })?;
    Ok(report)
}

/// Pretty-printed JSON of the whole analysis.
pub fn render_json(analysis: &SentimentAnalysis) -> Result<String, SentimentError> {
    serde_json::to_string_pretty(analysis).map_err(SentimentError::Serialize)
}

fn scored_list(tokens: &[ScoredToken]) -> String {
    if tokens.is_empty() {
        return "(none)".to_string();
    }
    tokens
        .iter()
        .map(|t| format!("{} ({})", t.token, format_float(t.score)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn plain_list(tokens: &[String]) -> String {
    if tokens.is_empty() {
        "(none)".to_string()
    } else {
        tokens.join(", ")
    }
}
