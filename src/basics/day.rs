use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Friday and Saturday form the weekend here; Sunday is a working day.
pub fn day_type(day: Day) -> DayType {
    match day {
        Day::Friday | Day::Saturday => DayType::Weekend,
        _ => DayType::Weekday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type() {
        assert_eq!(day_type(Day::Friday), DayType::Weekend);
        assert_eq!(day_type(Day::Saturday), DayType::Weekend);
        assert_eq!(day_type(Day::Sunday), DayType::Weekday);
        assert_eq!(day_type(Day::Monday).to_string(), "Weekday");
    }

    #[test]
    fn test_two_weekend_days() {
        let all = [
            Day::Monday,
            Day::Tuesday,
            Day::Wednesday,
            Day::Thursday,
            Day::Friday,
            Day::Saturday,
            Day::Sunday,
        ];
        let weekend = all
            .iter()
            .filter(|d| day_type(**d) == DayType::Weekend)
            .count();
        assert_eq!(weekend, 2);
    }
}
