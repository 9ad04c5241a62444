//! Pure derivation of "what is visible now" from a record slice plus
//! ephemeral query parameters. No hidden state: the same inputs always
//! produce the same output.

use crate::model::Student;

/// One page of a paginated sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// `ceil(count / page_size)`; 0 when there is nothing to show.
    pub total_pages: usize,
}

/// Keep every record where any field value, rendered as text and
/// lowercased, contains the lowercased term. A plain substring test over
/// all fields (id included), not tokenized search. An empty term keeps
/// everything.
pub fn filter<'a>(students: &'a [Student], term: &str) -> Vec<&'a Student> {
    let needle = term.to_lowercase();
    students
        .iter()
        .filter(|s| matches_term(s, &needle))
        .collect()
}

fn matches_term(student: &Student, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    student
        .values_as_text()
        .iter()
        .any(|v| v.to_lowercase().contains(needle))
}

/// Slice out page `page` (1-based) of `items`.
///
/// A page beyond the end is not an error at this layer; it just yields no
/// items. Callers are responsible for clamping the requested page back into
/// range whenever the underlying sequence or the page size changes, see
/// [`clamp_page`].
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    if page_size == 0 || items.is_empty() {
        return Page {
            items: Vec::new(),
            total_pages: 0,
        };
    }

    let total_pages = items.len().div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let slice = if start >= items.len() {
        &[]
    } else {
        let end = (start + page_size).min(items.len());
        &items[start..end]
    };

    Page {
        items: slice.to_vec(),
        total_pages,
    }
}

/// Clamp a requested page into `[1, total_pages]`, treating an empty
/// sequence (0 pages) as a single empty page so view state stays
/// well-formed.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::fields;

    fn students(count: usize) -> Vec<Student> {
        (0..count)
            .map(|i| Student::new(i as i64 + 1, fields(&format!("Student {}", i + 1))))
            .collect()
    }

    #[test]
    fn empty_term_keeps_everything_in_order() {
        let all = students(4);
        let kept = filter(&all, "");
        assert_eq!(kept.len(), 4);
        let ids: Vec<i64> = kept.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut all = students(2);
        all[0].fields.language = "Tamil".to_string();
        all[1].fields.language = "English".to_string();

        let kept = filter(&all, "tamil");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].fields.language, "Tamil");

        let kept = filter(&all, "GLIsh");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].fields.language, "English");
    }

    #[test]
    fn filter_matches_any_field_including_id() {
        let mut all = students(3);
        all[2].id = 777;
        all[1].fields.email = "needle@example.com".to_string();

        let by_id = filter(&all, "777");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id, 777);

        let by_email = filter(&all, "needle");
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].id, 2);
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let all = students(3);
        assert!(filter(&all, "zzz-no-such-value").is_empty());
    }

    #[test]
    fn pagination_math() {
        let all = students(12);

        let p1 = paginate(&all, 1, 5);
        assert_eq!(p1.total_pages, 3);
        assert_eq!(p1.items.len(), 5);

        let p2 = paginate(&all, 2, 5);
        assert_eq!(p2.items.len(), 5);
        assert_eq!(p2.items[0].id, 6);

        let p3 = paginate(&all, 3, 5);
        assert_eq!(p3.items.len(), 2);
        assert_eq!(p3.items[0].id, 11);
    }

    #[test]
    fn page_past_the_end_yields_no_items() {
        let all = students(3);
        let page = paginate(&all, 9, 5);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn empty_input_has_zero_pages() {
        let none: Vec<Student> = Vec::new();
        let page = paginate(&none, 1, 5);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn page_size_exactly_divides() {
        let all = students(10);
        let page = paginate(&all, 2, 5);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        // An empty sequence still leaves the view on page 1.
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn same_inputs_same_output() {
        let all = students(7);
        let a = paginate(&filter(&all, "student"), 2, 3);
        let b = paginate(&filter(&all, "student"), 2, 3);
        assert_eq!(a.total_pages, b.total_pages);
        assert_eq!(
            a.items.iter().map(|s| s.id).collect::<Vec<_>>(),
            b.items.iter().map(|s| s.id).collect::<Vec<_>>()
        );
    }
}
