use crate::config::schema::ScoringDef;
use crate::inference::numbering::numbered_level;
use crate::inference::scoring::{level_for_score, score_line, FontRanks};
use crate::inference::{dedup_headings, normalize_text};
use crate::model::{Heading, HeadingLevel, Line};
use serde::Serialize;

/// Which rule decided a line's fate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// A leading section number fixed the level.
    Numbered,
    /// The font-rank score reached a heading threshold.
    Scored,
    /// The score stayed below every threshold.
    BodyText,
}

/// A normalized line together with the signals used to classify it.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub line: Line,
    pub font_rank: Option<usize>,
    /// Only computed when no numbering pattern matched.
    pub score: Option<i32>,
    pub rule: Rule,
    pub level: Option<HeadingLevel>,
}

/// Normalize and classify every line independently, in document order.
///
/// Empty lines (after whitespace collapsing) are dropped before font ranks
/// are computed, so they never contribute a size.
pub fn classify_lines(lines: &[Line], scoring: &ScoringDef) -> Vec<Candidate> {
    classify_with_ranks(lines, scoring).1
}

/// Like [`classify_lines`], also returning the font ranks the scores were computed from.
pub fn classify_with_ranks(lines: &[Line], scoring: &ScoringDef) -> (FontRanks, Vec<Candidate>) {
    let normalized: Vec<Line> = lines
        .iter()
        .filter_map(|l| {
            let text = normalize_text(&l.text);
            if text.is_empty() {
                None
            } else {
                Some(Line { text, ..l.clone() })
            }
        })
        .collect();

    let ranks = FontRanks::from_lines(&normalized);

    let candidates = normalized
        .into_iter()
        .map(|line| {
            let font_rank = ranks.rank(line.size);

            if let Some(level) = numbered_level(&line.text) {
                return Candidate {
                    line,
                    font_rank,
                    score: None,
                    rule: Rule::Numbered,
                    level: Some(level),
                };
            }

            let score = score_line(&line, font_rank, scoring);
            let level = level_for_score(score, scoring);
            Candidate {
                line,
                font_rank,
                score: Some(score),
                rule: if level.is_some() {
                    Rule::Scored
                } else {
                    Rule::BodyText
                },
                level,
            }
        })
        .collect();

    (ranks, candidates)
}

/// General heading detection over layout lines.
///
/// Multiple headings per page are kept; repeated (text, page) pairs collapse
/// to their first occurrence.
pub fn infer(lines: &[Line], scoring: &ScoringDef) -> Vec<Heading> {
    let headings = classify_lines(lines, scoring)
        .into_iter()
        .filter_map(|c| {
            c.level
                .map(|level| Heading::new(level, c.line.text, c.line.page))
        })
        .collect();
    dedup_headings(headings)
}
