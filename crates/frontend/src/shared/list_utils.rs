/// Утилиты для списков, которые фильтруются по строке из заголовка
use leptos::prelude::*;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Case-insensitive substring check shared by `Searchable` impls
pub fn contains_ignore_case(text: &str, filter: &str) -> bool {
    text.to_lowercase().contains(&filter.trim().to_lowercase())
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Byte ranges of case-insensitive matches of `filter` in `text`.
///
/// Empty when lowercasing changes byte offsets; such text is shown without
/// highlighting.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();
    if filter_lower.is_empty() || text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="list-match">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ignore_case(self.0, filter)
        }
    }

    #[test]
    fn test_filter_list_empty_filter_keeps_all() {
        let rows = vec![Row("alpha"), Row("beta")];
        assert_eq!(filter_list(&rows, ""), rows);
        assert_eq!(filter_list(&rows, "   "), rows);
    }

    #[test]
    fn test_filter_list_case_insensitive() {
        let rows = vec![Row("Alpha"), Row("beta"), Row("ALPHABET")];
        assert_eq!(filter_list(&rows, "alp"), vec![Row("Alpha"), Row("ALPHABET")]);
        assert!(filter_list(&rows, "gamma").is_empty());
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Banana", "an"), vec![(1, 3), (3, 5)]);
        assert_eq!(match_ranges("Banana", " AN "), vec![(1, 3), (3, 5)]);
        assert!(match_ranges("Banana", "").is_empty());
        assert!(match_ranges("Banana", "x").is_empty());
    }
}
