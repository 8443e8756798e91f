//! 結果頁：以純文字輸出使用者資料、四柱、五行分布與六段分析

use crate::domain::model::{
    AnalysisReport, Chart, Element, SectionKind, UserProfile, UNKNOWN_HOUR,
};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

const SHICHEN_LABELS: [&str; 12] = [
    "子时 (23:00-01:00)",
    "丑时 (01:00-03:00)",
    "寅时 (03:00-05:00)",
    "卯时 (05:00-07:00)",
    "辰时 (07:00-09:00)",
    "巳时 (09:00-11:00)",
    "午时 (11:00-13:00)",
    "未时 (13:00-15:00)",
    "申时 (15:00-17:00)",
    "酉时 (17:00-19:00)",
    "戌时 (19:00-21:00)",
    "亥时 (21:00-23:00)",
];

/// Index 12 and anything out of range read as unknown.
pub fn shichen_label(hour: u8) -> &'static str {
    if hour >= UNKNOWN_HOUR {
        return "不详";
    }
    SHICHEN_LABELS[usize::from(hour)]
}

fn section_title(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::General => "总体分析",
        SectionKind::Personality => "性格特质",
        SectionKind::Career => "事业发展",
        SectionKind::Love => "感情婚姻",
        SectionKind::Health => "健康状况",
        SectionKind::Wealth => "财富运势",
    }
}

pub fn render_user_info(profile: &UserProfile) -> String {
    format!(
        "姓名：{}\n性别：{}\n出生：{} {}年{}月{}日 {}\n出生地：{}\n",
        profile.name,
        profile.gender.label(),
        profile.calendar().label(),
        profile.birth_year,
        profile.birth_month,
        profile.birth_day,
        shichen_label(profile.birth_hour),
        profile.birth_place
    )
}

pub fn render_chart(chart: &Chart) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "      年柱  月柱  日柱  时柱");
    let pillars = chart.pillars();
    let _ = writeln!(
        out,
        "天干   {}    {}    {}    {}",
        pillars[0].stem, pillars[1].stem, pillars[2].stem, pillars[3].stem
    );
    let _ = writeln!(
        out,
        "地支   {}    {}    {}    {}",
        pillars[0].branch, pillars[1].branch, pillars[2].branch, pillars[3].branch
    );
    let _ = writeln!(
        out,
        "五行   {}    {}    {}    {}",
        pillars[0].element, pillars[1].element, pillars[2].element, pillars[3].element
    );

    let total = chart.tally.total();
    let _ = writeln!(out, "\n五行分布：");
    for element in Element::ALL {
        let count = chart.tally.get(element);
        let (filled, percent) = if total == 0 {
            (0, 0.0)
        } else {
            (
                usize::from(count) * BAR_WIDTH / total as usize,
                f64::from(count) / f64::from(total) * 100.0,
            )
        };
        let _ = writeln!(
            out,
            "{} {}{} {} ({:.1}%)",
            element,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            count,
            percent
        );
    }

    out
}

pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    for kind in SectionKind::ALL {
        let _ = writeln!(out, "【{}】", section_title(kind));
        let _ = writeln!(out, "{}\n", report.section_or_placeholder(kind));
    }
    out
}

pub fn render_page(profile: &UserProfile, chart: &Chart, report: &AnalysisReport) -> String {
    format!(
        "{}\n{}\n{}",
        render_user_info(profile),
        render_chart(chart),
        render_report(report)
    )
}
