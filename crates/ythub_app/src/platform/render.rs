use ythub_core::{ListViewModel, StatusRowView};

pub fn render(view: &ListViewModel) -> Vec<String> {
    if view.rows.is_empty() {
        return vec!["(no entries)".to_string()];
    }
    view.rows.iter().map(render_row).collect()
}

/// One line per row; empty cells are skipped.
pub fn render_row(row: &StatusRowView) -> String {
    let marker = if row.highlighted { '*' } else { ' ' };
    let mut cells = vec![format!("{marker} {}", row.id)];
    if let Some(name) = &row.name {
        cells.push(name.clone());
    }
    if let Some(icon) = &row.icon {
        cells.push(format!("<{icon}>"));
    }
    if let Some(text) = &row.text {
        cells.push(format!("{text} [status-{}]", row.class_affix));
    }
    if let Some(created) = &row.created {
        cells.push(created.clone());
    }
    cells.join(" | ")
}
