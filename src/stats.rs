//! Aggregate counts over a record snapshot, feeding the dashboard view and
//! the report's summary page.

use crate::model::Student;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub male: usize,
    pub female: usize,
    pub other: usize,
    /// Number of distinct languages across all records.
    pub languages: usize,
    /// Records per language, language-sorted.
    pub language_counts: BTreeMap<String, usize>,
}

impl Stats {
    pub fn collect(students: &[Student]) -> Self {
        let mut stats = Stats {
            total: students.len(),
            ..Default::default()
        };

        for s in students {
            match s.fields.gender.as_str() {
                "Male" => stats.male += 1,
                "Female" => stats.female += 1,
                _ => stats.other += 1,
            }
            *stats
                .language_counts
                .entry(s.fields.language.clone())
                .or_insert(0) += 1;
        }
        stats.languages = stats.language_counts.len();
        stats
    }
}

/// The last `n` records in insertion order, oldest of the n first.
pub fn recent(students: &[Student], n: usize) -> &[Student] {
    let start = students.len().saturating_sub(n);
    &students[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn counts_genders_and_languages() {
        let store = StoreFixture::new()
            .with_student("a", "Tamil", "Male")
            .with_student("b", "Tamil", "Female")
            .with_student("c", "English", "Male")
            .with_student("d", "Spanish", "Others")
            .store;

        let stats = Stats::collect(store.students());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.male, 2);
        assert_eq!(stats.female, 1);
        assert_eq!(stats.other, 1);
        assert_eq!(stats.languages, 3);
        assert_eq!(stats.language_counts["Tamil"], 2);
        assert_eq!(stats.language_counts["English"], 1);
    }

    #[test]
    fn unknown_gender_strings_count_as_other() {
        let store = StoreFixture::new().with_student("x", "English", "").store;
        let stats = Stats::collect(store.students());
        assert_eq!(stats.other, 1);
    }

    #[test]
    fn empty_snapshot_is_all_zeroes() {
        let stats = Stats::collect(&[]);
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn recent_takes_the_tail() {
        let store = StoreFixture::new().with_students(7).store;
        let tail = recent(store.students(), 5);
        assert_eq!(tail.len(), 5);
        assert_eq!(tail[0].fields.name, "Student 3");
        assert_eq!(tail[4].fields.name, "Student 7");

        assert_eq!(recent(store.students(), 100).len(), 7);
    }
}
