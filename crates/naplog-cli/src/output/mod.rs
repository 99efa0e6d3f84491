use std::fmt::Display;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;

pub mod table;

use table::{TableOptions, render_table};

/// Render a response in the requested format. `Text` uses the value's
/// `Display` form; the others go through its serialized form.
pub fn render<T: Serialize + Display>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(value.to_string().trim_end().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_value_table(
            &serde_json::to_value(value)?,
            TableOptions::from_env(),
        )),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + Display>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Objects become a key/value table of their scalar fields, followed by one
/// titled section per nested object or array.
fn render_value_table(value: &Value, options: TableOptions) -> String {
    match value {
        Value::Object(map) => render_object(map, options),
        Value::Array(items) => render_array(items, options),
        scalar => render_table(&["value"], &[vec![cell(scalar)]], options),
    }
}

fn render_object(map: &Map<String, Value>, options: TableOptions) -> String {
    let (nested, scalars): (Vec<_>, Vec<_>) = map
        .iter()
        .partition(|(_, value)| value.is_object() || value.is_array());

    let rows = scalars
        .iter()
        .map(|(key, value)| vec![(*key).clone(), cell(value)])
        .collect::<Vec<_>>();

    let mut sections = vec![render_table(&["key", "value"], &rows, options)];
    for (key, value) in nested {
        sections.push(format!("{key}:\n{}", render_value_table(value, options)));
    }
    sections.join("\n\n")
}

fn render_array(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return render_table(&["value"], &rows, options);
    }

    // Union of keys across rows.
    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect::<Vec<Vec<String>>>();

    render_table(&headers, &rows, options)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: i64,
        start: &'static str,
    }

    #[derive(Serialize)]
    struct Example {
        date: &'static str,
        total: f64,
        naps: Vec<Row>,
    }

    impl fmt::Display for Example {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "Summary for {}", self.date)
        }
    }

    fn example() -> Example {
        Example {
            date: "2024-01-05",
            total: 1.5,
            naps: vec![Row { id: 1, start: "09:00" }, Row { id: 2, start: "13:00" }],
        }
    }

    #[test]
    fn text_render_uses_display_without_trailing_newline() {
        let out = render(&example(), OutputFormat::Text).expect("text render should work");
        assert_eq!(out, "Summary for 2024-01-05");
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&example(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["date"], "2024-01-05");
        assert_eq!(parsed["naps"][1]["id"], 2);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&example(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_splits_nested_rows_into_sections() {
        let out = render(&example(), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("naps:"));
        let nap_header = out
            .lines()
            .skip_while(|line| *line != "naps:")
            .nth(1)
            .expect("nap table header");
        assert!(nap_header.contains("id") && nap_header.contains("start"));
    }
}
