//! Client-side search and pagination over rows fetched in full.

use serde_json::Value;

/// A displayed column. `key` is a dotted path into the row object
/// (`"company.name"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub title: &'static str,
}

/// Text shown for `key` in `row`; empty when the field is missing or null.
pub fn cell_text(row: &Value, key: &str) -> String {
    let pointer = format!("/{}", key.replace('.', "/"));
    match row.pointer(&pointer) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Server id of a row (`id`, string or number).
pub fn row_id(row: &Value) -> Option<String> {
    match row.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Rows left after the one with `id` was deleted server-side.
pub fn without_row(rows: &[Value], id: &str) -> Vec<Value> {
    rows.iter()
        .filter(|row| row_id(row).as_deref() != Some(id))
        .cloned()
        .collect()
}

/// Rows whose visible columns contain `query`, ignoring case. A blank query
/// keeps everything.
pub fn search<'a>(rows: &'a [Value], columns: &[Column], query: &str) -> Vec<&'a Value> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|row| {
            columns
                .iter()
                .any(|c| cell_text(row, c.key).to_lowercase().contains(&needle))
        })
        .collect()
}

#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, already clamped.
    pub number: usize,
    pub total_pages: usize,
}

pub fn total_pages(len: usize, size: usize) -> usize {
    len.div_ceil(size.max(1)).max(1)
}

/// Slice of `items` for the requested 1-based page, clamped into range.
pub fn paginate<T>(items: &[T], requested: usize, size: usize) -> Page<'_, T> {
    let size = size.max(1);
    let total_pages = total_pages(items.len(), size);
    let number = requested.clamp(1, total_pages);
    let start = (number - 1) * size;
    let end = (start + size).min(items.len());

    Page {
        items: &items[start.min(end)..end],
        number,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const COLUMNS: [Column; 2] = [
        Column { key: "name", title: "Nama" },
        Column { key: "company.name", title: "Perusahaan" },
    ];

    fn rows() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "Sensor Suhu", "company": {"name": "Tirta"}}),
            json!({"id": 2, "name": "Gateway", "company": {"name": "Agro Makmur"}}),
            json!({"id": 3, "name": "Meter Air", "company": null}),
        ]
    }

    #[test]
    fn cell_text_follows_dotted_paths() {
        let r = rows();
        assert_eq!(cell_text(&r[0], "company.name"), "Tirta");
        assert_eq!(cell_text(&r[2], "company.name"), "");
        assert_eq!(cell_text(&r[0], "id"), "1");
        assert_eq!(cell_text(&r[0], "missing"), "");
    }

    #[test]
    fn row_id_accepts_numbers_and_strings() {
        assert_eq!(row_id(&json!({"id": 7})).as_deref(), Some("7"));
        assert_eq!(row_id(&json!({"id": "dev-7"})).as_deref(), Some("dev-7"));
        assert_eq!(row_id(&json!({"id": ""})), None);
        assert_eq!(row_id(&json!({"name": "x"})), None);
    }

    #[test]
    fn deleted_row_is_dropped_locally() {
        let r = rows();
        let left = without_row(&r, "2");
        assert_eq!(left, vec![r[0].clone(), r[2].clone()]);
        assert_eq!(without_row(&r, "99").len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_over_columns() {
        let r = rows();
        let hits = search(&r, &COLUMNS, "  agro ");
        assert_eq!(hits, vec![&r[1]]);

        let hits = search(&r, &COLUMNS, "SENSOR");
        assert_eq!(hits, vec![&r[0]]);
    }

    #[test]
    fn search_ignores_hidden_fields() {
        let r = rows();
        assert!(search(&r, &COLUMNS, "3").is_empty());
    }

    #[test]
    fn blank_query_keeps_all_rows() {
        let r = rows();
        assert_eq!(search(&r, &COLUMNS, "   ").len(), 3);
    }

    #[test]
    fn pages_are_clamped() {
        let items: Vec<u32> = (1..=25).collect();

        let first = paginate(&items, 0, 10);
        assert_eq!(first.number, 1);
        assert_eq!(first.items, &items[..10]);
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 99, 10);
        assert_eq!(last.number, 3);
        assert_eq!(last.items, &items[20..]);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 2, 10);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
    }
}
