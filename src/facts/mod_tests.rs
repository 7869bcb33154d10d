use super::*;
use crate::calendar::CalendarDate;

#[test]
fn bundles_all_lookups() {
    let date = CalendarDate::new(1990, 3, 15).unwrap();
    let facts = DerivedFacts::for_date(date).unwrap();

    assert_eq!(facts.zodiac, ZodiacSign::Pisces);
    assert_eq!(facts.birthstone, Birthstone::Aquamarine);
    assert_eq!(facts.chinese_zodiac, ChineseZodiac::Horse);
    assert_eq!(facts.generation, Generation::Millennial);
    assert_eq!(facts.weekday, Weekday::Thursday);
    assert_eq!(facts.day_of_year, 74);
    assert!(!facts.leap_year);
}

#[test]
fn leap_day_facts() {
    let date = CalendarDate::new(2000, 2, 29).unwrap();
    let facts = DerivedFacts::for_date(date).unwrap();

    assert_eq!(facts.zodiac, ZodiacSign::Pisces);
    assert_eq!(facts.day_of_year, 60);
    assert!(facts.leap_year);
    assert_eq!(facts.chinese_zodiac, ChineseZodiac::Dragon);
    assert_eq!(facts.generation, Generation::GenZ);
}

#[test]
fn pre_table_year_propagates_error() {
    let date = CalendarDate::new(1700, 6, 1).unwrap();
    assert!(DerivedFacts::for_date(date).is_err());
}
