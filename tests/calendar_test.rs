use bazi_report::calculate_chart;
use bazi_report::core::calendar::days_from_reference;
use bazi_report::domain::model::{Branch, CalendarKind, Element, Stem};

#[test]
fn test_reference_chart() {
    let chart = calculate_chart(1990, 8, 15, 6, CalendarKind::Solar);

    assert_eq!(chart.year_pillar.to_string(), "庚午 (金)");
    assert_eq!(chart.month_pillar.to_string(), "癸酉 (水)");
    assert_eq!(chart.day_pillar.to_string(), "壬申 (水)");
    assert_eq!(chart.hour_pillar.to_string(), "癸午 (水)");

    assert_eq!(chart.tally.get(Element::Metal), 3);
    assert_eq!(chart.tally.get(Element::Water), 3);
    assert_eq!(chart.tally.get(Element::Fire), 2);
    assert_eq!(chart.tally.get(Element::Wood), 0);
    assert_eq!(chart.tally.get(Element::Earth), 0);
    assert_eq!(days_from_reference(1990, 8, 15), 33068);
}

#[test]
fn test_tally_always_counts_eight_characters() {
    for year in [1900, 1949, 1984, 2000, 2024] {
        for month in 1..=12 {
            for hour in 0..=12 {
                let chart = calculate_chart(year, month, 15, hour, CalendarKind::Solar);
                assert_eq!(chart.tally.total(), 8, "{}-{} hour {}", year, month, hour);
            }
        }
    }
}

#[test]
fn test_lunar_input_uses_same_formulas() {
    let solar = calculate_chart(1990, 8, 15, 6, CalendarKind::Solar);
    let lunar = calculate_chart(1990, 8, 15, 6, CalendarKind::Lunar);
    assert_eq!(solar, lunar);
}

#[test]
fn test_overflowing_day_rolls_into_next_month() {
    let overflow = calculate_chart(1990, 2, 31, 0, CalendarKind::Solar);
    let rolled = calculate_chart(1990, 3, 3, 0, CalendarKind::Solar);
    assert_eq!(overflow.day_pillar, rolled.day_pillar);
    assert_eq!(overflow.hour_pillar, rolled.hour_pillar);
}

#[test]
fn test_reference_day_is_jia_zi() {
    let chart = calculate_chart(1900, 1, 31, 0, CalendarKind::Solar);
    assert_eq!(chart.day_pillar.stem, Stem::Jia);
    assert_eq!(chart.day_pillar.branch, Branch::Zi);
}
