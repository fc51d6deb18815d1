use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use ect_signal::{SignalKind, compute_text_stats, extract_signal_features, find_signal_matches};

use crate::types::FeaturesResult;

pub fn print_summary(result: &FeaturesResult) {
    println!("Events: {}", result.event_count);
    println!("Segments: {}", result.segment_count);
    if let Some(path) = &result.events_path {
        println!("Event features: {}", path.display());
    }
    if let Some(path) = &result.segments_path {
        println!("Transcript segments: {}", path.display());
    }
    if result.events_path.is_none() && result.segments_path.is_none() {
        println!("Dry run: no files written to {}", result.output_dir.display());
    }
    if result.preview.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Event"),
        header_cell("Segments"),
        header_cell("Speakers"),
        header_cell("Signals"),
        header_cell("Signal Types"),
        header_cell("Q&A Words"),
        header_cell("Q&A Preview"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for preview in &result.preview {
        table.add_row(vec![
            Cell::new(&preview.event_id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(preview.segment_count),
            Cell::new(preview.speaker_count),
            signal_count_cell(preview.signal_total),
            text_or_dash(&preview.signal_types),
            Cell::new(preview.qa_word_count),
            text_or_dash(&preview.qa_preview),
        ]);
    }
    println!("{table}");
}

/// Print the match table, feature flags, and lexicon rates for one text.
pub fn print_signal_report(text: &str) {
    let matches = find_signal_matches(text);
    if matches.is_empty() {
        println!("No signal matches.");
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Category"),
            header_cell("Phrase"),
            header_cell("Snippet"),
        ]);
        apply_match_table_style(&mut table);
        for found in &matches {
            table.add_row(vec![
                Cell::new(found.signal.as_str()).fg(Color::Blue),
                Cell::new(&found.phrase),
                Cell::new(&found.snippet).fg(Color::DarkGrey),
            ]);
        }
        println!("{table}");
    }

    let features = extract_signal_features(text);
    for kind in SignalKind::ALL {
        let summary = features.summary(kind);
        if summary.flag {
            println!("{}: {} match(es)", kind.as_str(), summary.count);
        }
    }
    let stats = compute_text_stats(text);
    println!(
        "words: {}  hedge: {} ({:.4})  risk: {} ({:.4})",
        stats.word_count, stats.hedge_terms, stats.hedge_rate, stats.risk_terms, stats.risk_rate
    );
}

fn signal_count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn text_or_dash(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Fixed(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

fn apply_match_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(32)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
