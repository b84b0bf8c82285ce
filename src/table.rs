//! Column-aligned rendering for `table()`.

use serde_json::Value as Json;

const INDEX: &str = "(index)";
const VALUES: &str = "Values";

/// Render structured rows as a text table.
///
/// Returns `None` when `data` is not an array or object; the caller then
/// logs the data as-is.
pub fn render(data: &Json, properties: Option<&[String]>) -> Option<String> {
    let rows: Vec<(String, &Json)> = match data {
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Json::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        _ => return None,
    };

    let mut columns: Vec<String> = Vec::new();
    if let Some(props) = properties {
        columns.extend(props.iter().cloned());
    } else {
        for (_, row) in &rows {
            if let Json::Object(fields) = row {
                for key in fields.keys() {
                    if !columns.iter().any(|c| c == key) {
                        columns.push(key.clone());
                    }
                }
            }
        }
    }
    let has_values = rows.iter().any(|(_, row)| !row.is_object());

    let mut header = vec![INDEX.to_owned()];
    header.extend(columns.iter().cloned());
    if has_values {
        header.push(VALUES.to_owned());
    }

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|(index, row)| {
            let mut cells = vec![index.clone()];
            for col in &columns {
                cells.push(row.get(col).map(cell).unwrap_or_default());
            }
            if has_values {
                cells.push(if row.is_object() { String::new() } else { cell(row) });
            }
            cells
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            body.iter()
                .map(|r| r[i].chars().count())
                .chain(core::iter::once(header[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    out.push('\n');
    out.push('|');
    for w in &widths {
        out.push_str(&"-".repeat(w + 2));
        out.push('|');
    }
    for r in &body {
        out.push('\n');
        push_row(&mut out, r, &widths);
    }
    Some(out)
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (c, w) in cells.iter().zip(widths) {
        let pad = w - c.chars().count();
        out.push(' ');
        out.push_str(c);
        out.push_str(&" ".repeat(pad + 1));
        out.push('|');
    }
}

fn cell(v: &Json) -> String {
    match v {
        Json::String(s) => format!("'{s}'"),
        other => other.to_string(),
    }
}
