//! Scripted assistant for explaining analysis results.
//!
//! A priority-ordered list of (keyword predicate, responder) pairs evaluated
//! first-match-wins against the lowercased query. Pure keyword matching over
//! result fields; no inference of any kind.

use fairlens_model::AnalysisResult;

/// One scripted rule: fires when any keyword occurs in the query.
struct AssistRule {
    keywords: &'static [&'static str],
    responder: fn(&AnalysisResult) -> String,
}

/// Ordered rule table; earlier rules win.
const RULES: &[AssistRule] = &[
    AssistRule {
        keywords: &["score", "fair"],
        responder: score_response,
    },
    AssistRule {
        keywords: &["bias"],
        responder: bias_response,
    },
    AssistRule {
        keywords: &["fix", "recommend", "what should"],
        responder: recommendation_response,
    },
    AssistRule {
        keywords: &["safe", "hiring", "use"],
        responder: safety_response,
    },
    AssistRule {
        keywords: &["proxy"],
        responder: proxy_response,
    },
    AssistRule {
        keywords: &["underrepresented", "representation"],
        responder: representation_response,
    },
];

/// Answer a free-text query about an analysis result.
///
/// With no result available, points the user at running an analysis first.
/// Unrecognized queries get a help text listing example questions.
pub fn respond(result: Option<&AnalysisResult>, query: &str) -> String {
    let Some(result) = result else {
        return "Please upload and analyze a dataset first. I can help explain bias findings \
                once you've run an analysis."
            .to_string();
    };
    let query = query.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|kw| query.contains(kw)) {
            return (rule.responder)(result);
        }
    }
    help_response()
}

fn score_response(result: &AnalysisResult) -> String {
    let advice = if result.overall_score >= 75 {
        "This is generally acceptable, but always review individual metrics."
    } else {
        "Consider applying the recommended mitigations to improve fairness."
    };
    format!(
        "Your dataset has an overall fairness score of {}/100, which indicates a {} risk \
         level. {advice}",
        result.overall_score,
        result.risk_level.as_str()
    )
}

fn bias_response(result: &AnalysisResult) -> String {
    let column = result.most_biased_column.as_deref().unwrap_or("(none)");
    let proxy_note = if result.proxy_bias_detected {
        "Additionally, proxy bias was detected: some non-sensitive columns are highly \
         correlated with sensitive attributes, which can introduce indirect discrimination."
    } else {
        "No proxy bias was detected in this dataset."
    };
    format!("The most biased column detected is \"{column}\". {proxy_note}")
}

fn recommendation_response(result: &AnalysisResult) -> String {
    match result.recommendations.first() {
        Some(top) => format!(
            "My top recommendation: {}. {} This has a {} expected impact on fairness.",
            top.title,
            top.description,
            top.impact.as_str()
        ),
        None => "Your dataset appears fair. Keep monitoring as data evolves.".to_string(),
    }
}

fn safety_response(result: &AnalysisResult) -> String {
    if result.overall_score >= 75 {
        format!(
            "Based on the analysis, this dataset shows low bias risk (score: {}/100). \
             However, always combine automated analysis with domain expert review before \
             using in high-stakes decisions like hiring.",
            result.overall_score
        )
    } else {
        format!(
            "This dataset shows {} bias risk (score: {}/100). I would recommend addressing \
             the identified biases before using it for sensitive applications. Review the \
             mitigation recommendations for actionable steps.",
            result.risk_level.as_str(),
            result.overall_score
        )
    }
}

fn proxy_response(result: &AnalysisResult) -> String {
    if result.proxy_biases.is_empty() {
        return "No proxy biases were detected in this dataset.".to_string();
    }
    result
        .proxy_biases
        .iter()
        .map(|pb| {
            format!(
                "{} may act as a proxy for {} (correlation: {:.2}). {}",
                pb.column, pb.sensitive_column, pb.correlation, pb.explanation
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn representation_response(result: &AnalysisResult) -> String {
    match &result.most_underrepresented_group {
        Some(group) => format!(
            "The most underrepresented group is \"{}\" in column \"{}\" at {:.1}% \
             representation.",
            group.group,
            group.column,
            group.percentage * 100.0
        ),
        None => "No significant underrepresentation was detected.".to_string(),
    }
}

fn help_response() -> String {
    "I can help you understand your bias analysis results. Try asking:\n\
     - \"What is the fairness score?\"\n\
     - \"Why is this dataset biased?\"\n\
     - \"What should I fix first?\"\n\
     - \"Is this dataset safe for hiring?\"\n\
     - \"Tell me about proxy bias\""
        .to_string()
}
