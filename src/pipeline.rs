//! Visible List Pipeline
//!
//! Pure derivation of the displayed list from the fetched collection:
//! age filter, then type filter, then optional age sort.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::Animal;

/// Age sort applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AgeSort {
    /// Store order
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl AgeSort {
    /// Sort toggle: engages ascending order, or releases back to store order.
    pub fn toggled(self) -> Self {
        match self {
            AgeSort::Unsorted => AgeSort::Ascending,
            AgeSort::Ascending | AgeSort::Descending => AgeSort::Unsorted,
        }
    }

    /// Label for the sort toggle button.
    pub fn button_label(self) -> &'static str {
        match self {
            AgeSort::Unsorted => "Sort by Age (Ascending)",
            AgeSort::Ascending | AgeSort::Descending => "Sort by Age (Descending)",
        }
    }
}

/// Exact-match type filter. An empty selection means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    Any,
    Exactly(String),
}

impl TypeFilter {
    pub fn from_selection(value: &str) -> Self {
        if value.is_empty() {
            TypeFilter::Any
        } else {
            TypeFilter::Exactly(value.to_string())
        }
    }

    /// Value for the `<select>`; `""` is the "All" option.
    pub fn selection(&self) -> &str {
        match self {
            TypeFilter::Any => "",
            TypeFilter::Exactly(kind) => kind,
        }
    }

    pub fn matches(&self, animal: &Animal) -> bool {
        match self {
            TypeFilter::Any => true,
            TypeFilter::Exactly(kind) => animal.kind == *kind,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Substring matched against the age text (`"1"` matches 1, 10, 21...)
    pub age: String,
    pub kind: TypeFilter,
    pub sort: AgeSort,
}

/// Derive the visible list. Never touches `collection`.
pub fn derive_visible(collection: &[Animal], filters: &Filters) -> Vec<Animal> {
    let mut visible: Vec<Animal> = collection
        .iter()
        .filter(|animal| filters.age.is_empty() || animal.age.text().contains(filters.age.as_str()))
        .filter(|animal| filters.kind.matches(animal))
        .cloned()
        .collect();

    match filters.sort {
        AgeSort::Unsorted => {}
        AgeSort::Ascending => visible.sort_by(|a, b| compare_years(a, b, false)),
        AgeSort::Descending => visible.sort_by(|a, b| compare_years(a, b, true)),
    }
    visible
}

// Unparseable ages go last in either direction. `sort_by` is stable, so
// equal keys keep their filtered order.
fn compare_years(a: &Animal, b: &Animal, descending: bool) -> Ordering {
    match (a.age.years(), b.age.years()) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Each type present in `collection` once, in order of first appearance.
pub fn distinct_types(collection: &[Animal]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut kinds = Vec::new();
    for animal in collection {
        if seen.insert(animal.kind.as_str()) {
            kinds.push(animal.kind.clone());
        }
    }
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Age, AnimalId};

    fn animal(id: &str, age: &str, kind: &str) -> Animal {
        Animal {
            id: AnimalId::new(id),
            name: format!("animal-{}", id),
            age: Age::new(age),
            kind: kind.to_string(),
            next_checkup: None,
        }
    }

    fn ids(animals: &[Animal]) -> Vec<&str> {
        animals.iter().map(|a| a.id.as_str()).collect()
    }

    fn dog_and_cat() -> Vec<Animal> {
        vec![animal("1", "5", "dog"), animal("2", "15", "cat")]
    }

    #[test]
    fn test_age_filter_is_substring_match() {
        let collection = dog_and_cat();

        let by_five = Filters { age: "5".to_string(), ..Default::default() };
        assert_eq!(ids(&derive_visible(&collection, &by_five)), vec!["1", "2"]);

        let by_fifteen = Filters { age: "15".to_string(), ..Default::default() };
        assert_eq!(ids(&derive_visible(&collection, &by_fifteen)), vec!["2"]);
    }

    #[test]
    fn test_age_filter_is_lossless_and_precise() {
        let collection: Vec<Animal> = (0..40)
            .map(|n| animal(&n.to_string(), &n.to_string(), "dog"))
            .collect();
        let filters = Filters { age: "1".to_string(), ..Default::default() };

        let visible = derive_visible(&collection, &filters);
        assert!(visible.iter().all(|a| a.age.text().contains('1')));
        let expected = collection.iter().filter(|a| a.age.text().contains('1')).count();
        assert_eq!(visible.len(), expected);
        assert_eq!(expected, 13); // 1, 10-19, 21, 31
    }

    #[test]
    fn test_type_filter_exact_match() {
        let collection = dog_and_cat();

        let cats = Filters { kind: TypeFilter::from_selection("cat"), ..Default::default() };
        assert_eq!(ids(&derive_visible(&collection, &cats)), vec!["2"]);

        let case_differs = Filters { kind: TypeFilter::from_selection("Cat"), ..Default::default() };
        assert!(derive_visible(&collection, &case_differs).is_empty());

        let any = Filters { kind: TypeFilter::from_selection(""), ..Default::default() };
        assert_eq!(derive_visible(&collection, &any), collection);
    }

    #[test]
    fn test_sort_is_stable_both_directions() {
        let collection = vec![
            animal("a", "3", "dog"),
            animal("b", "1", "cat"),
            animal("c", "3", "cat"),
            animal("d", "1", "dog"),
        ];

        let asc = Filters { sort: AgeSort::Ascending, ..Default::default() };
        assert_eq!(ids(&derive_visible(&collection, &asc)), vec!["b", "d", "a", "c"]);

        let desc = Filters { sort: AgeSort::Descending, ..Default::default() };
        assert_eq!(ids(&derive_visible(&collection, &desc)), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_unparseable_ages_sort_last() {
        let collection = vec![
            animal("x", "unknown", "dog"),
            animal("a", "10", "dog"),
            animal("y", "", "dog"),
            animal("b", "2", "dog"),
        ];

        let asc = Filters { sort: AgeSort::Ascending, ..Default::default() };
        assert_eq!(ids(&derive_visible(&collection, &asc)), vec!["b", "a", "x", "y"]);

        let desc = Filters { sort: AgeSort::Descending, ..Default::default() };
        assert_eq!(ids(&derive_visible(&collection, &desc)), vec!["a", "b", "x", "y"]);
    }

    #[test]
    fn test_toggle_twice_restores_store_order() {
        let collection = vec![animal("a", "9", "dog"), animal("b", "2", "cat"), animal("c", "5", "dog")];
        let mut filters = Filters::default();
        let original = derive_visible(&collection, &filters);

        filters.sort = filters.sort.toggled();
        assert_eq!(ids(&derive_visible(&collection, &filters)), vec!["b", "c", "a"]);
        filters.sort = filters.sort.toggled();
        assert_eq!(derive_visible(&collection, &filters), original);
    }

    #[test]
    fn test_filters_compose_in_order() {
        let collection = vec![
            animal("1", "12", "dog"),
            animal("2", "1", "cat"),
            animal("3", "21", "dog"),
            animal("4", "3", "dog"),
        ];
        let filters = Filters {
            age: "1".to_string(),
            kind: TypeFilter::Exactly("dog".to_string()),
            sort: AgeSort::Descending,
        };
        assert_eq!(ids(&derive_visible(&collection, &filters)), vec!["3", "1"]);
        assert_eq!(collection.len(), 4);
    }

    #[test]
    fn test_distinct_types_once_each() {
        let collection = vec![
            animal("1", "1", "dog"),
            animal("2", "1", "cat"),
            animal("3", "1", "dog"),
            animal("4", "1", "bird"),
        ];
        assert_eq!(distinct_types(&collection), vec!["dog", "cat", "bird"]);
        assert!(distinct_types(&[]).is_empty());
    }

    #[test]
    fn test_button_label_follows_sort() {
        assert_eq!(AgeSort::Unsorted.button_label(), "Sort by Age (Ascending)");
        assert_eq!(AgeSort::Ascending.button_label(), "Sort by Age (Descending)");
    }
}
