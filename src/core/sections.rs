use crate::domain::model::{AnalysisReport, SectionKind};

/// Headings that may close a section. Only later headings count, so a stray
/// earlier heading inside the text never truncates a section.
fn successors(kind: SectionKind) -> &'static [SectionKind] {
    let all = &SectionKind::ALL;
    let position = all.iter().position(|k| *k == kind).unwrap_or(all.len());
    &all[(position + 1).min(all.len())..]
}

/// Slice from the heading's first occurrence up to the nearest successor
/// heading that follows it. Plain substring search. Empty when the heading
/// is absent.
pub fn extract_section(text: &str, kind: SectionKind) -> String {
    let Some(start) = text.find(kind.heading()) else {
        return String::new();
    };
    let rest = &text[start..];

    let end = successors(kind)
        .iter()
        .filter_map(|next| rest.find(next.heading()))
        .min()
        .unwrap_or(rest.len());

    rest[..end].trim().to_string()
}

/// Split free-form service text into the six report sections.
///
/// If no general section can be found but the text is not empty, the whole
/// text becomes the general section.
pub fn parse_analysis_text(text: &str) -> AnalysisReport {
    let mut report = AnalysisReport {
        general: extract_section(text, SectionKind::General),
        personality: extract_section(text, SectionKind::Personality),
        career: extract_section(text, SectionKind::Career),
        love: extract_section(text, SectionKind::Love),
        health: extract_section(text, SectionKind::Health),
        wealth: extract_section(text, SectionKind::Wealth),
    };

    if report.general.is_empty() && !text.is_empty() {
        report.general = text.to_string();
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "总体分析：格局平稳。\n性格特质：温和。\n事业财运：宜稳。\n感情姻缘：晚婚。\n健康状况：注意脾胃。\n财富运势：中年后好转。";

    #[test]
    fn test_successors() {
        assert_eq!(successors(SectionKind::General).len(), 5);
        assert_eq!(successors(SectionKind::Health), &[SectionKind::Wealth]);
        assert!(successors(SectionKind::Wealth).is_empty());
    }

    #[test]
    fn test_parse_all_sections_in_order() {
        let report = parse_analysis_text(FULL);
        assert_eq!(report.general, "总体分析：格局平稳。");
        assert_eq!(report.personality, "性格特质：温和。");
        assert_eq!(report.career, "事业财运：宜稳。");
        assert_eq!(report.love, "感情姻缘：晚婚。");
        assert_eq!(report.health, "健康状况：注意脾胃。");
        assert_eq!(report.wealth, "财富运势：中年后好转。");

        for kind in SectionKind::ALL {
            for other in successors(kind) {
                assert!(!report.section(kind).contains(other.heading()));
            }
        }
    }

    #[test]
    fn test_only_general_heading() {
        let text = "前言\n总体分析：命局偏旺，宜收敛锋芒。后续内容略。";
        let report = parse_analysis_text(text);
        assert_eq!(report.general, "总体分析：命局偏旺，宜收敛锋芒。后续内容略。");
        assert!(report.personality.is_empty());
        assert!(report.career.is_empty());
        assert!(report.love.is_empty());
        assert!(report.health.is_empty());
        assert!(report.wealth.is_empty());
    }

    #[test]
    fn test_missing_middle_heading_closes_at_next_present_one() {
        let text = "总体分析：甲\n性格特质：乙\n健康状况：丙\n财富运势：丁";
        let report = parse_analysis_text(text);
        assert_eq!(report.personality, "性格特质：乙");
        assert!(report.career.is_empty());
        assert!(report.love.is_empty());
        assert_eq!(report.health, "健康状况：丙");
    }

    #[test]
    fn test_no_headings_falls_back_to_raw_text() {
        let text = "The model answered without any headings.";
        let report = parse_analysis_text(text);
        assert_eq!(report.general, text);
        assert!(report.wealth.is_empty());
    }

    #[test]
    fn test_empty_text_stays_blank() {
        assert!(parse_analysis_text("").is_blank());
    }

    #[test]
    fn test_successor_before_heading_is_ignored() {
        let text = "财富运势：先说财运。总体分析：再说总体。";
        let report = parse_analysis_text(text);
        assert_eq!(report.general, "总体分析：再说总体。");
        assert_eq!(report.wealth, text);
    }
}
