//! Table and CSV output

use comfy_table::{presets::NOTHING, Table};
use std::io::{self, Write};

use super::common::{escape_csv, instance_rows};
use crate::usage::Hierarchy;

/// Write one row per service instance as an aligned table
pub fn write_table<W: Write>(hierarchy: &Hierarchy, no_header: bool, out: &mut W) -> io::Result<()> {
    let rows = instance_rows(hierarchy);

    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["Service", "Plan", "Instance", "Org", "Space"]);
    }
    for row in &rows {
        table.add_row(vec![row.service, row.plan, row.instance, row.org, row.space]);
    }

    writeln!(out, "{table}")?;
    if !no_header {
        writeln!(
            out,
            "\nTotal: {} services, {} plans, {} instances",
            hierarchy.services.len(),
            hierarchy.plan_count(),
            hierarchy.instance_count()
        )?;
    }
    Ok(())
}

/// Write one row per service instance as CSV
pub fn write_csv<W: Write>(hierarchy: &Hierarchy, no_header: bool, out: &mut W) -> io::Result<()> {
    if !no_header {
        writeln!(out, "service,plan,instance,org,space")?;
    }
    for row in instance_rows(hierarchy) {
        writeln!(
            out,
            "{},{},{},{},{}",
            escape_csv(row.service),
            escape_csv(row.plan),
            escape_csv(row.instance),
            escape_csv(row.org),
            escape_csv(row.space)
        )?;
    }
    Ok(())
}
