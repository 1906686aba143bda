use comfy_table::Table;
use comfy_table::presets::ASCII_FULL;

use crate::models::ImageRow;

pub const HEADERS: (&str, &str) = ("Pods", "Images");

/// Renders a bordered two-column grid. Column widths follow the widest cell
/// in each column; cells may carry ANSI styling, which does not count
/// towards the width (comfy-table measures the visible text).
pub fn render(rows: &[ImageRow], headers: (&str, &str)) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![headers.0, headers.1]);
    for row in rows {
        table.add_row(vec![row.pod.clone(), row.images.clone()]);
    }
    table.to_string()
}
