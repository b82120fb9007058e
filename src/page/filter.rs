use crate::animals::Animal;

/// Animals whose name contains the trimmed filter, ignoring case.
///
/// A blank filter keeps every animal. Order is preserved.
pub fn filter_animals<'a>(animals: &'a [Animal], filter: &str) -> Vec<&'a Animal> {
    let query = filter.trim().to_lowercase();
    if query.is_empty() {
        return animals.iter().collect();
    }
    animals
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animals(names: &[&str]) -> Vec<Animal> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Animal {
                id: i as i64 + 1,
                name: (*name).to_string(),
                created_at: "2024-01-01T00:00:00Z".to_string(),
            })
            .collect()
    }

    fn names<'a>(list: &[&'a Animal]) -> Vec<&'a str> {
        list.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn blank_filter_keeps_everything_in_order() {
        let list = animals(&["Zebra", "ant", "Moose"]);
        for filter in ["", "   ", "\t\n"] {
            assert_eq!(names(&filter_animals(&list, filter)), ["Zebra", "ant", "Moose"]);
        }
    }

    #[test]
    fn matches_substring_ignoring_case() {
        let list = animals(&["Red Panda", "panther", "Cat", "PANGOLIN"]);
        assert_eq!(
            names(&filter_animals(&list, "pan")),
            ["Red Panda", "panther", "PANGOLIN"]
        );
        assert_eq!(names(&filter_animals(&list, "CAT")), ["Cat"]);
    }

    #[test]
    fn filter_is_trimmed_but_inner_spaces_count() {
        let list = animals(&["Red Panda", "Redpanda"]);
        assert_eq!(names(&filter_animals(&list, "  red p  ")), ["Red Panda"]);
    }

    #[test]
    fn no_match_is_empty() {
        let list = animals(&["Dog"]);
        assert!(filter_animals(&list, "cat").is_empty());
        assert!(filter_animals(&[], "cat").is_empty());
    }
}
