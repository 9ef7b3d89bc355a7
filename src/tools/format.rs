//! Rendering of Nativ responses as plain text for the LLM

use serde_json::Value;

use crate::client::{BrandVoice, Language, StyleGuide, TmEntry, TmSearchMatch, TmStats, Translation};

/// Translated text, then rationale, back-translation and TM match when present
pub fn translation(t: &Translation) -> String {
    let mut lines = vec![t.translated_text.clone()];

    if let Some(rationale) = non_empty(&t.rationale) {
        lines.push(format!("Rationale: {}", rationale));
    }
    if let Some(back) = non_empty(&t.backtranslation) {
        lines.push(format!("Back-translation: {}", back));
    }
    // A zero score means the API found nothing worth reporting
    if let Some(tm) = t.tm_match.as_ref().filter(|m| m.score > 0.0) {
        lines.push(format!("TM match: {:.0}% ({})", tm.score, tm.match_type));
    }

    lines.join("\n")
}

pub fn batch(results: &[Translation]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {}", i + 1, r.translated_text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn tm_matches(matches: &[TmSearchMatch]) -> String {
    if matches.is_empty() {
        return "No matches found in translation memory.".to_string();
    }

    let mut lines = Vec::with_capacity(matches.len() + 1);
    lines.push(format!("Found {} match(es):", matches.len()));
    for m in matches {
        lines.push(format!(
            "- [{:.0}% {}] \"{}\" -> \"{}\"",
            m.score, m.match_type, m.source_text, m.target_text
        ));
    }
    lines.join("\n")
}

pub fn tm_entry(entry: &TmEntry) -> String {
    format!(
        "Added TM entry {}: \"{}\" ({}) -> \"{}\" ({})",
        entry.id,
        entry.source_text,
        entry.source_language_code,
        entry.target_text,
        entry.target_language_code
    )
}

pub fn languages(langs: &[Language]) -> String {
    if langs.is_empty() {
        return "No languages configured.".to_string();
    }

    let mut lines = vec!["Configured languages:".to_string()];
    for lang in langs {
        let mut line = format!("- {} ({})", lang.language, lang.language_code);
        if let Some(formality) = non_empty(&lang.formality) {
            line.push_str(&format!(" -- formality: {}", formality));
        }
        lines.push(line);
    }
    lines.join("\n")
}

pub fn style_guides(guides: &[StyleGuide]) -> String {
    if guides.is_empty() {
        return "No style guides configured.".to_string();
    }

    let mut lines = vec![format!("Style guides ({}):", guides.len())];
    for g in guides {
        let status = if g.is_enabled { "enabled" } else { "disabled" };
        lines.push(format!("\n## {} [{}]\n{}", g.title, status, g.content));
    }
    lines.join("\n")
}

pub fn brand_voice(voice: &BrandVoice) -> String {
    match non_empty(&voice.prompt) {
        Some(prompt) if voice.exists => format!("Brand voice:\n{}", prompt),
        _ => "No brand voice configured.".to_string(),
    }
}

pub fn tm_stats(stats: &TmStats) -> String {
    let mut lines = vec![
        format!("Translation memory: {} total entries", stats.total),
        format!("  Enabled: {}", stats.enabled),
        format!("  Disabled: {}", stats.disabled),
    ];

    if let Some(by_source) = stats.by_source.as_ref().filter(|m| !m.is_empty()) {
        lines.push("  By source:".to_string());
        for (source, count) in by_source {
            lines.push(format!("    {}: {}", source, count_text(count)));
        }
    }
    lines.join("\n")
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Bare strings lose their JSON quotes; everything else prints as compact JSON
fn count_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
