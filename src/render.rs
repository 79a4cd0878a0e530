//! Plain-text rendering of the current page.

use crate::sort::SortDirection;
use crate::view::GridView;

const COLUMN_GAP: &str = "  ";

fn sort_marker(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ↑",
        Some(SortDirection::Descending) => " ↓",
        None => "",
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// Render the visible rows as an aligned table with a title row, a rule and
/// a page footer. Cells show their display value.
pub fn render_table(view: &GridView) -> String {
    let sort = view.sort_state();
    let titles: Vec<String> = view
        .headers()
        .iter()
        .map(|h| format!("{}{}", h.title, sort_marker(sort.direction_for(&h.key))))
        .collect();

    let body: Vec<Vec<&str>> = view
        .visible_rows()
        .iter()
        .map(|row| {
            view.headers()
                .iter()
                .map(|h| row.get(&h.key).map(|c| c.display_value.as_str()).unwrap_or(""))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            body.iter()
                .map(|cells| cells[i].chars().count())
                .chain(std::iter::once(title.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(c, *w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(body.len() + 3);
    out.push(line(titles));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );
    if body.is_empty() {
        out.push("(no rows)".to_string());
    }
    for cells in &body {
        out.push(line(cells.iter().map(|c| c.to_string()).collect()));
    }

    let p = view.pagination();
    out.push(format!(
        "Page {} of {} | {} of {} rows",
        p.current_page(),
        p.last_page(),
        view.matched_rows().len(),
        view.source_len()
    ));
    out.join("\n")
}
