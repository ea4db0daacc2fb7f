use outline_core::inference::{Candidate, Rule};
use outline_core::pipeline::PipelineOutcome;

pub fn print_outline(outcome: &PipelineOutcome) {
    print!("{}", format_outline(outcome));
}

pub fn format_outline(outcome: &PipelineOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n\n", outcome.result.title));

    if outcome.result.outline.is_empty() {
        out.push_str("  (no headings found)\n");
    } else {
        for h in &outcome.result.outline {
            let indent = "  ".repeat(h.level.depth() + 1);
            let label = format!("{}{} {}", indent, h.level, h.text);
            out.push_str(&format!("{:<60}  p. {}\n", label, h.page));
        }
    }

    out.push_str(&format!(
        "\n  {} page(s), {} heading(s) via {}{}\n",
        outcome.page_count,
        outcome.result.outline.len(),
        outcome.source,
        if outcome.ocr_invoked { ", OCR used" } else { "" }
    ));
    out
}

pub fn print_candidates(candidates: &[Candidate], sizes: &[f32]) {
    print!("{}", format_candidates(candidates, sizes));
}

pub fn format_candidates(candidates: &[Candidate], sizes: &[f32]) -> String {
    let mut out = String::new();

    let sizes: Vec<String> = sizes
        .iter()
        .enumerate()
        .map(|(rank, size)| format!("#{} {:.1}pt", rank, size))
        .collect();
    out.push_str(&format!("Font sizes: {}\n\n", sizes.join(", ")));

    out.push_str(&format!(
        "  {:<4}  {:<6}  {:<4}  {:<5}  {:<5}  {:<9}  {:<5}  Text\n",
        "Page", "Size", "Bold", "Rank", "Score", "Rule", "Level"
    ));
    out.push_str(&format!("  {}\n", "-".repeat(70)));

    for c in candidates {
        let rank = c.font_rank.map(|r| r.to_string()).unwrap_or("-".into());
        let score = c.score.map(|s| s.to_string()).unwrap_or("-".into());
        let level = c.level.map(|l| l.to_string()).unwrap_or("-".into());
        let rule = match c.rule {
            Rule::Numbered => "numbered",
            Rule::Scored => "scored",
            Rule::BodyText => "body",
        };
        out.push_str(&format!(
            "  {:<4}  {:<6.1}  {:<4}  {:<5}  {:<5}  {:<9}  {:<5}  {}\n",
            c.line.page,
            c.line.size,
            if c.line.bold { "yes" } else { "" },
            rank,
            score,
            rule,
            level,
            truncate(&c.line.text, 60)
        ));
    }

    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outline_core::config::schema::ScoringDef;
    use outline_core::inference::classify_lines;
    use outline_core::model::{Heading, HeadingLevel, Line, OutlineResult, OutlineSource};

    #[test]
    fn test_outline_indents_by_level() {
        let outcome = PipelineOutcome {
            result: OutlineResult {
                title: "Annual Report".into(),
                outline: vec![
                    Heading::new(HeadingLevel::H1, "1. Introduction", 1),
                    Heading::new(HeadingLevel::H2, "1.1 Scope", 2),
                ],
            },
            source: OutlineSource::General,
            ocr_invoked: false,
            page_count: 2,
        };
        let text = format_outline(&outcome);
        assert!(text.starts_with("=== Annual Report ==="));
        assert!(text.contains("\n  H1 1. Introduction "));
        assert!(text.contains("\n    H2 1.1 Scope "));
        assert!(text.contains("2 page(s), 2 heading(s) via general"));
        assert!(!text.contains("OCR used"));
    }

    #[test]
    fn test_empty_outline_message() {
        let outcome = PipelineOutcome {
            result: OutlineResult::untitled(),
            source: OutlineSource::Empty,
            ocr_invoked: true,
            page_count: 1,
        };
        let text = format_outline(&outcome);
        assert!(text.contains("(no headings found)"));
        assert!(text.contains("via none, OCR used"));
    }

    #[test]
    fn test_candidate_table_rows() {
        let lines = vec![
            Line::new("Guide", 20.0, true, 1),
            Line::new("2.1 Background", 11.0, false, 1),
        ];
        let candidates = classify_lines(&lines, &ScoringDef::default());
        let text = format_candidates(&candidates, &[20.0, 11.0]);
        assert!(text.starts_with("Font sizes: #0 20.0pt, #1 11.0pt"));
        let rows: Vec<&str> = text.lines().skip(4).collect();
        assert!(rows[0].contains("scored") && rows[0].contains("H1"));
        assert!(rows[1].contains("numbered") && rows[1].contains("H2"));
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
