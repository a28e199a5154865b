//! Weekday model and the ordered day set attached to a routine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A day of the week, carried on the wire by its three-letter abbreviation.
///
/// Reading is case-insensitive; writing always uses the canonical `Mon`..`Sun`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All weekdays in display order (Monday first)
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.abbreviation().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown weekday '{s}'"))
    }
}

impl TryFrom<String> for Weekday {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Weekday> for String {
    fn from(day: Weekday) -> Self {
        day.abbreviation().to_string()
    }
}

/// The active days of a routine.
///
/// Insertion order is kept for display; duplicates are dropped on
/// construction, so the set never holds the same day twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct DaySet(Vec<Weekday>);

impl DaySet {
    /// Every day of the week, Monday first
    #[must_use]
    pub fn all() -> Self {
        Self(Weekday::ALL.to_vec())
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day)
    }

    /// Removes the day if present, otherwise appends it.
    ///
    /// Returns whether the day is a member afterwards.
    pub fn toggle(&mut self, day: Weekday) -> bool {
        if let Some(index) = self.0.iter().position(|existing| *existing == day) {
            self.0.remove(index);
            false
        } else {
            self.0.push(day);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Weekday] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for DaySet {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Vec<Weekday>> for DaySet {
    fn from(days: Vec<Weekday>) -> Self {
        let mut unique = Vec::with_capacity(days.len());
        for day in days {
            if !unique.contains(&day) {
                unique.push(day);
            }
        }
        Self(unique)
    }
}

impl From<DaySet> for Vec<Weekday> {
    fn from(days: DaySet) -> Self {
        days.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_twice_restores_membership() {
        let mut days = DaySet::all();
        let before = days.clone();

        assert!(!days.toggle(Weekday::Wed));
        assert!(!days.contains(Weekday::Wed));
        assert!(days.toggle(Weekday::Wed));
        assert!(days.contains(Weekday::Wed));

        let mut before_sorted: Vec<_> = before.iter().map(|d| d.to_string()).collect();
        let mut after_sorted: Vec<_> = days.iter().map(|d| d.to_string()).collect();
        before_sorted.sort();
        after_sorted.sort();
        assert_eq!(before_sorted, after_sorted);
    }

    #[test]
    fn toggled_on_day_is_appended() {
        let mut days = DaySet::from(vec![Weekday::Sat, Weekday::Mon]);
        days.toggle(Weekday::Tue);
        assert_eq!(
            days.as_slice(),
            &[Weekday::Sat, Weekday::Mon, Weekday::Tue]
        );
    }

    #[test]
    fn duplicates_are_dropped_on_deserialize() {
        let days: DaySet = serde_json::from_str(r#"["Mon","Tue","Mon","Sun"]"#).unwrap();
        assert_eq!(days.as_slice(), &[Weekday::Mon, Weekday::Tue, Weekday::Sun]);
        assert_eq!(
            serde_json::to_string(&days).unwrap(),
            r#"["Mon","Tue","Sun"]"#
        );
    }

    #[test]
    fn unknown_weekday_is_rejected() {
        assert!(serde_json::from_str::<DaySet>(r#"["Mon","Funday"]"#).is_err());
        assert!("Funday".parse::<Weekday>().is_err());
        assert_eq!("thu".parse::<Weekday>(), Ok(Weekday::Thu));
    }

    #[test]
    fn wire_days_are_read_case_insensitively() {
        let days: DaySet = serde_json::from_str(r#"["thu"," SAT ","Mon"]"#).unwrap();
        assert_eq!(days.as_slice(), &[Weekday::Thu, Weekday::Sat, Weekday::Mon]);
        assert_eq!(
            serde_json::to_string(&days).unwrap(),
            r#"["Thu","Sat","Mon"]"#
        );
    }
}
