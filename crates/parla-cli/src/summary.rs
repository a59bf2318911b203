use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use serde_json::{Value, json};

use crate::types::{InspectResult, NormalizedId, PrepareResult, RenderResult, SourceStatus};

pub fn print_prepare_summary(result: &PrepareResult) {
    println!("Snapshot: {}", result.snapshot_path.display());
    println!("Language: {}", result.language);
    println!("{}", prepare_table(result));
    if !result.categorize.failed.is_empty() {
        eprintln!("Columns kept as text:");
        for (name, reason) in &result.categorize.failed {
            eprintln!("- {name}: {reason}");
        }
    }
    println!("Finished in {:.2}s", result.duration.as_secs_f64());
}

pub fn print_render_summary(result: &RenderResult) {
    println!("Document: {}", result.output_path.display());
    println!("{}", render_table(result));
    println!("Finished in {:.2}s", result.duration.as_secs_f64());
}

pub fn print_inspect(result: &InspectResult) {
    let snapshot = &result.snapshot;
    println!("Snapshot: {}", result.snapshot_path.display());
    println!(
        "Created: {} (tool {}, schema v{})",
        snapshot.created_at, snapshot.tool_version, snapshot.schema_version
    );
    println!("Language: {}", snapshot.language);
    println!("Rows: {}", snapshot.rows);
    println!("{}", sources_table(result));
    println!("{}", columns_table(result));
}

pub fn print_inspect_json(result: &InspectResult) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(&inspect_report(result))?);
    Ok(())
}

pub(crate) fn inspect_report(result: &InspectResult) -> Value {
    let snapshot = &result.snapshot;
    let sources: Vec<Value> = result
        .sources
        .iter()
        .map(|(source, status)| {
            json!({
                "role": source.role,
                "path": source.path,
                "sha256": source.sha256,
                "size": source.size,
                "status": status_label(status),
            })
        })
        .collect();
    let columns: Vec<Value> = snapshot
        .columns
        .iter()
        .map(|column| json!({ "name": column.name, "kind": column.values.kind_name() }))
        .collect();
    json!({
        "snapshot": result.snapshot_path.display().to_string(),
        "schema_version": snapshot.schema_version,
        "created_at": snapshot.created_at,
        "tool_version": snapshot.tool_version,
        "language": snapshot.language,
        "rows": snapshot.rows,
        "sources": sources,
        "columns": columns,
    })
}

pub fn print_normalized(ids: &[NormalizedId]) {
    for id in ids {
        match &id.result {
            Ok(normalized) => println!("{normalized}"),
            Err(error) => eprintln!("error: {error}"),
        }
    }
}

pub(crate) fn prepare_table(result: &PrepareResult) -> Table {
    let stats = &result.merge;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Text rows"), Cell::new(stats.text_rows)]);
    table.add_row(vec![
        Cell::new("Without session metadata"),
        count_cell(stats.dropped_text_rows, Color::Yellow),
    ]);
    table.add_row(vec![Cell::new("Utterances"), Cell::new(stats.utterances)]);
    table.add_row(vec![
        Cell::new("Speaker matches"),
        Cell::new(stats.speaker_matches),
    ]);
    table.add_row(vec![Cell::new("Party matches"), Cell::new(stats.party_matches)]);
    if stats.normalized_ids > 0 || stats.malformed_ids > 0 {
        table.add_row(vec![
            Cell::new("Normalized IDs"),
            Cell::new(stats.normalized_ids),
        ]);
        table.add_row(vec![
            Cell::new("Malformed IDs"),
            count_cell(stats.malformed_ids, Color::Red),
        ]);
    }
    table.add_row(vec![Cell::new("Sentences"), Cell::new(stats.sentences)]);
    table.add_row(vec![
        Cell::new("Categorical columns"),
        Cell::new(result.categorize.converted.len()),
    ]);
    table.add_row(vec![
        Cell::new("Columns").add_attribute(Attribute::Bold),
        Cell::new(result.columns.len()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub(crate) fn render_table(result: &RenderResult) -> Table {
    let stats = result.stats;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Document"),
        header_cell("Language"),
        header_cell("Utterances"),
        header_cell("Segments"),
        header_cell("Words"),
        header_cell("Skipped"),
        header_cell("Unknown speakers"),
    ]);
    apply_table_style(&mut table);
    for index in 2..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(&result.document_id)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(&result.language),
        Cell::new(stats.utterances),
        Cell::new(stats.segments),
        Cell::new(stats.words),
        count_cell(stats.skipped_rows, Color::Yellow),
        count_cell(stats.unknown_speakers, Color::Yellow),
    ]);
    table
}

fn sources_table(result: &InspectResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Path"),
        header_cell("SHA-256"),
        header_cell("Bytes"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for (source, status) in &result.sources {
        table.add_row(vec![
            Cell::new(&source.role),
            Cell::new(&source.path),
            dim_cell(source.short_hash()),
            Cell::new(source.size),
            status_cell(status),
        ]);
    }
    table
}

fn columns_table(result: &InspectResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Kind")]);
    apply_table_style(&mut table);
    for column in &result.snapshot.columns {
        let kind = column.values.kind_name();
        let kind_cell = match kind {
            "categorical" => Cell::new(kind).fg(Color::Green),
            "sentences" => Cell::new(kind).fg(Color::Magenta),
            _ => dim_cell(kind),
        };
        table.add_row(vec![Cell::new(&column.name), kind_cell]);
    }
    table
}

fn status_label(status: &SourceStatus) -> &str {
    match status {
        SourceStatus::Unchanged => "ok",
        SourceStatus::Changed => "changed",
        SourceStatus::Missing => "missing",
        SourceStatus::Unreadable(reason) => reason,
    }
}

fn status_cell(status: &SourceStatus) -> Cell {
    let label = status_label(status);
    match status {
        SourceStatus::Unchanged => Cell::new(label).fg(Color::Green),
        SourceStatus::Changed => Cell::new(label)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        SourceStatus::Missing => Cell::new(label).fg(Color::Red),
        SourceStatus::Unreadable(_) => Cell::new(label).fg(Color::Yellow),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
