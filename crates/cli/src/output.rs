use crate::error::CliError;
use report::DefinitionReport;

/// Prints the text to stdout, or writes it to a file when a path is
/// given.
pub fn emit(text: &str, path: Option<String>) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, text)?,
        None => println!("{text}"),
    }
    Ok(())
}

/// Formats the definition report as plain text for terminal display.
pub fn describe_text(report: &DefinitionReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Migration definition: {}\n", report.definition_name));
    if let Some(description) = &report.description {
        out.push_str(&format!("  {description}\n"));
    }
    out.push_str(&format!(
        "Source:      {} ({})\n",
        report.source.name, report.source.driver
    ));
    out.push_str(&format!(
        "Destination: {} ({})\n",
        report.destination.name, report.destination.driver
    ));
    out.push_str(&format!(
        "Items: {} | mapped: {} | computed: {} | lookups: {} | filtered: {}\n",
        report.totals.items,
        report.totals.mapped_fields,
        report.totals.computed_fields,
        report.totals.lookups,
        report.totals.filtered_items
    ));

    for item in &report.items {
        out.push_str(&format!("\n{} -> {}\n", item.source_table, item.dest_table));

        if !item.mappings.is_empty() {
            out.push_str("  Mappings:\n");
            for mapping in &item.mappings {
                out.push_str(&format!(
                    "    {:<20} <- {}\n",
                    mapping.target, mapping.expression_preview
                ));
            }
        }

        if !item.lookups.is_empty() {
            out.push_str("  Lookups:\n");
            for lookup in &item.lookups {
                out.push_str(&format!(
                    "    {:<20} <- {} (table: {}, column: {})\n",
                    lookup.target, lookup.reference, lookup.table, lookup.column
                ));
            }
        }

        out.push_str(&format!("  Filter: {}\n", item.filter.text));

        if !item.joins.is_empty() {
            out.push_str("  Joins:\n");
            for join in &item.joins {
                out.push_str(&format!(
                    "    {} = {} ON {}\n",
                    join.alias, join.table, join.on
                ));
            }
        }
    }

    out
}
