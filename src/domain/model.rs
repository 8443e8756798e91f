use serde::{Deserialize, Serialize};
use std::fmt;

/// 五行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

impl Element {
    /// Fixed enumeration order, also the tie-break order for dominant/weak selection.
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// 天干
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    const GLYPHS: [&'static str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

    /// Any integer maps onto the cycle, negatives included.
    pub fn from_cycle(n: i64) -> Stem {
        Self::ALL[n.rem_euclid(10) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn glyph(self) -> &'static str {
        Self::GLYPHS[self.index()]
    }

    /// Stems pair up: 甲乙 wood, 丙丁 fire, 戊己 earth, 庚辛 metal, 壬癸 water.
    pub fn element(self) -> Element {
        Element::ALL[self.index() / 2]
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// 地支
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    const GLYPHS: [&'static str; 12] = [
        "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
    ];

    const ELEMENTS: [Element; 12] = [
        Element::Water,
        Element::Earth,
        Element::Wood,
        Element::Wood,
        Element::Earth,
        Element::Fire,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Metal,
        Element::Earth,
        Element::Water,
    ];

    pub fn from_cycle(n: i64) -> Branch {
        Self::ALL[n.rem_euclid(12) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn glyph(self) -> &'static str {
        Self::GLYPHS[self.index()]
    }

    pub fn element(self) -> Element {
        Self::ELEMENTS[self.index()]
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// 一柱：天干、地支，以及天干所屬五行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    #[serde(rename = "tianGan")]
    pub stem: Stem,
    #[serde(rename = "diZhi")]
    pub branch: Branch,
    #[serde(rename = "wuXing")]
    pub element: Element,
}

impl Pillar {
    /// The element is always derived from the stem.
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self {
            stem,
            branch,
            element: stem.element(),
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} ({})", self.stem, self.branch, self.element)
    }
}

/// 五行統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTally {
    #[serde(rename = "木")]
    pub wood: u8,
    #[serde(rename = "火")]
    pub fire: u8,
    #[serde(rename = "土")]
    pub earth: u8,
    #[serde(rename = "金")]
    pub metal: u8,
    #[serde(rename = "水")]
    pub water: u8,
}

impl ElementTally {
    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn add(&mut self, element: Element) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u32 {
        Element::ALL.iter().map(|e| u32::from(self.get(*e))).sum()
    }

    /// Highest count; ties go to the earliest element in `Element::ALL`.
    pub fn dominant(&self) -> Element {
        Element::ALL
            .into_iter()
            .fold(Element::Wood, |best, e| {
                if self.get(e) > self.get(best) {
                    e
                } else {
                    best
                }
            })
    }

    /// Lowest count; ties go to the earliest element in `Element::ALL`.
    pub fn weakest(&self) -> Element {
        Element::ALL
            .into_iter()
            .fold(Element::Wood, |best, e| {
                if self.get(e) < self.get(best) {
                    e
                } else {
                    best
                }
            })
    }
}

/// 四柱八字與五行統計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub year_pillar: Pillar,
    pub month_pillar: Pillar,
    pub day_pillar: Pillar,
    pub hour_pillar: Pillar,
    #[serde(rename = "wuXingCount")]
    pub tally: ElementTally,
}

impl Chart {
    pub fn pillars(&self) -> [&Pillar; 4] {
        [
            &self.year_pillar,
            &self.month_pillar,
            &self.day_pillar,
            &self.hour_pillar,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Gender::Male),
            "female" | "f" | "女" => Ok(Gender::Female),
            other => Err(format!("unknown gender '{}', expected male or female", other)),
        }
    }
}

/// Lunar input is accepted but never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarKind {
    #[default]
    Solar,
    Lunar,
}

impl CalendarKind {
    pub fn label(self) -> &'static str {
        match self {
            CalendarKind::Solar => "公历",
            CalendarKind::Lunar => "农历",
        }
    }
}

/// Shichen index meaning "birth hour not known".
pub const UNKNOWN_HOUR: u8 = 12;

/// 表單收集的使用者資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub gender: Gender,
    pub birth_year: i32,
    pub birth_month: u32,
    pub birth_day: u32,
    /// Shichen index 0-11, or 12 when unknown.
    pub birth_hour: u8,
    pub birth_place: String,
    pub is_lunar: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserProfile {
    pub fn calendar(&self) -> CalendarKind {
        if self.is_lunar {
            CalendarKind::Lunar
        } else {
            CalendarKind::Solar
        }
    }

    pub fn hour_known(&self) -> bool {
        self.birth_hour < UNKNOWN_HOUR
    }
}

/// Placeholder shown for a section with no text.
pub const SECTION_PLACEHOLDER: &str = "暂无分析";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    General,
    Personality,
    Career,
    Love,
    Health,
    Wealth,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::General,
        SectionKind::Personality,
        SectionKind::Career,
        SectionKind::Love,
        SectionKind::Health,
        SectionKind::Wealth,
    ];

    /// Heading literal the hosted model is asked to start each section with.
    pub fn heading(self) -> &'static str {
        match self {
            SectionKind::General => "总体分析",
            SectionKind::Personality => "性格特质",
            SectionKind::Career => "事业财运",
            SectionKind::Love => "感情姻缘",
            SectionKind::Health => "健康状况",
            SectionKind::Wealth => "财富运势",
        }
    }
}

/// 六段分析結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(rename = "generalAnalysis")]
    pub general: String,
    pub personality: String,
    pub career: String,
    pub love: String,
    pub health: String,
    pub wealth: String,
}

impl AnalysisReport {
    pub fn section(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::General => &self.general,
            SectionKind::Personality => &self.personality,
            SectionKind::Career => &self.career,
            SectionKind::Love => &self.love,
            SectionKind::Health => &self.health,
            SectionKind::Wealth => &self.wealth,
        }
    }

    pub fn section_or_placeholder(&self, kind: SectionKind) -> &str {
        let text = self.section(kind);
        if text.trim().is_empty() {
            SECTION_PLACEHOLDER
        } else {
            text
        }
    }

    pub fn is_blank(&self) -> bool {
        SectionKind::ALL
            .iter()
            .all(|kind| self.section(*kind).trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_and_branch_elements() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Xin.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);

        assert_eq!(Branch::Zi.element(), Element::Water);
        assert_eq!(Branch::Chou.element(), Element::Earth);
        assert_eq!(Branch::Mao.element(), Element::Wood);
        assert_eq!(Branch::Si.element(), Element::Fire);
        assert_eq!(Branch::You.element(), Element::Metal);
        assert_eq!(Branch::Hai.element(), Element::Water);
    }

    #[test]
    fn test_from_cycle_wraps_negatives() {
        assert_eq!(Stem::from_cycle(-1), Stem::Gui);
        assert_eq!(Stem::from_cycle(10), Stem::Jia);
        assert_eq!(Branch::from_cycle(-1), Branch::Hai);
        assert_eq!(Branch::from_cycle(25), Branch::Chou);
    }

    #[test]
    fn test_dominant_and_weak_tie_break() {
        let tally = ElementTally {
            wood: 3,
            fire: 3,
            earth: 1,
            metal: 0,
            water: 1,
        };
        assert_eq!(tally.dominant(), Element::Wood);
        assert_eq!(tally.weakest(), Element::Metal);

        let flat = ElementTally {
            wood: 2,
            fire: 2,
            earth: 2,
            metal: 1,
            water: 1,
        };
        assert_eq!(flat.dominant(), Element::Wood);
        assert_eq!(flat.weakest(), Element::Metal);
    }

    #[test]
    fn test_pillar_serializes_with_glyphs() {
        let pillar = Pillar::new(Stem::Geng, Branch::Wu);
        let json = serde_json::to_value(pillar).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"tianGan": "庚", "diZhi": "午", "wuXing": "金"})
        );
    }

    #[test]
    fn test_report_placeholder() {
        let report = AnalysisReport {
            general: "总体分析：平稳".to_string(),
            ..Default::default()
        };
        assert_eq!(report.section_or_placeholder(SectionKind::Career), SECTION_PLACEHOLDER);
        assert_eq!(report.section_or_placeholder(SectionKind::General), "总体分析：平稳");
        assert!(!report.is_blank());
        assert!(AnalysisReport::default().is_blank());
    }
}
