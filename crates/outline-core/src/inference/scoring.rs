use crate::config::schema::ScoringDef;
use crate::model::{HeadingLevel, Line};

/// Score bonus by font rank: largest size, second largest, third largest.
pub const RANK_WEIGHTS: [i32; 3] = [5, 3, 1];
pub const BOLD_BONUS: i32 = 1;
pub const SHORT_BONUS: i32 = 1;
pub const SHORT_MAX_WORDS: usize = 10;
pub const H1_MIN_SCORE: i32 = 5;
pub const H2_MIN_SCORE: i32 = 3;
/// Above the short-line bonus alone, so shortness never makes a heading by itself.
pub const H3_MIN_SCORE: i32 = 2;

/// Document-relative ranking of distinct font sizes, 0 = largest.
#[derive(Debug, Clone, Default)]
pub struct FontRanks {
    sizes: Vec<f32>,
}

impl FontRanks {
    pub fn from_lines(lines: &[Line]) -> Self {
        let mut sizes: Vec<f32> = lines.iter().map(|l| l.size).collect();
        sizes.sort_by(|a, b| b.total_cmp(a));
        sizes.dedup();
        FontRanks { sizes }
    }

    /// Rank of `size`, or `None` if it was never observed.
    pub fn rank(&self, size: f32) -> Option<usize> {
        self.sizes.iter().position(|s| *s == size)
    }

    /// Distinct sizes, largest first.
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }
}

/// Combined font-rank, boldness and shortness score for a line.
pub fn score_line(line: &Line, rank: Option<usize>, scoring: &ScoringDef) -> i32 {
    let mut score = rank
        .and_then(|r| scoring.rank_weights.get(r))
        .copied()
        .unwrap_or(0);

    if line.bold {
        score += scoring.bold_bonus;
    }

    if line.text.split_whitespace().count() <= scoring.short_max_words {
        score += scoring.short_bonus;
    }

    score
}

/// Map a score to a heading level; `None` means the line is body text.
pub fn level_for_score(score: i32, scoring: &ScoringDef) -> Option<HeadingLevel> {
    if score >= scoring.h1_min_score {
        Some(HeadingLevel::H1)
    } else if score >= scoring.h2_min_score {
        Some(HeadingLevel::H2)
    } else if score >= scoring.h3_min_score {
        Some(HeadingLevel::H3)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str, size: f32, bold: bool) -> Line {
        Line::new(text, size, bold, 1)
    }

    #[test]
    fn test_font_ranks_are_descending_and_distinct() {
        let lines = vec![
            line("a", 11.0, false),
            line("b", 24.0, false),
            line("c", 11.0, false),
            line("d", 16.0, false),
        ];
        let ranks = FontRanks::from_lines(&lines);
        assert_eq!(ranks.sizes(), [24.0_f32, 16.0, 11.0].as_slice());
        assert_eq!(ranks.rank(24.0), Some(0));
        assert_eq!(ranks.rank(16.0), Some(1));
        assert_eq!(ranks.rank(11.0), Some(2));
        assert_eq!(ranks.rank(9.0), None);
    }

    #[test]
    fn test_largest_bold_single_word_scores_seven() {
        let scoring = ScoringDef::default();
        let l = line("SUMMARY", 20.0, true);
        let score = score_line(&l, Some(0), &scoring);
        assert_eq!(score, 7);
        assert_eq!(level_for_score(score, &scoring), Some(HeadingLevel::H1));
    }

    #[test]
    fn test_rank_beyond_weights_scores_zero() {
        let scoring = ScoringDef::default();
        let l = line("Body text here", 9.0, false);
        assert_eq!(score_line(&l, Some(3), &scoring), 1);
        assert_eq!(score_line(&l, None, &scoring), 1);
    }

    #[test]
    fn test_long_line_gets_no_short_bonus() {
        let scoring = ScoringDef::default();
        let l = line(
            "one two three four five six seven eight nine ten eleven",
            12.0,
            false,
        );
        assert_eq!(score_line(&l, Some(1), &scoring), 3);
    }

    #[test]
    fn test_score_thresholds() {
        let scoring = ScoringDef::default();
        assert_eq!(level_for_score(5, &scoring), Some(HeadingLevel::H1));
        assert_eq!(level_for_score(4, &scoring), Some(HeadingLevel::H2));
        assert_eq!(level_for_score(3, &scoring), Some(HeadingLevel::H2));
        assert_eq!(level_for_score(2, &scoring), Some(HeadingLevel::H3));
        assert_eq!(level_for_score(1, &scoring), None);
        assert_eq!(level_for_score(0, &scoring), None);
    }

    #[test]
    fn test_shortness_alone_is_not_a_heading() {
        let scoring = ScoringDef::default();
        let l = line("Short line", 9.0, false);
        let score = score_line(&l, None, &scoring);
        assert_eq!(level_for_score(score, &scoring), None);
    }
}
