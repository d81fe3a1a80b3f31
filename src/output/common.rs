//! Common utilities for output formatters

use serde::Serialize;
use std::io::{self, Write};

use crate::usage::Hierarchy;

/// One flattened line of the hierarchy
///
/// Services without plans and plans without instances still produce a row
/// so that nothing disappears from tabular output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRow<'a> {
    pub service: &'a str,
    pub plan: &'a str,
    pub instance: &'a str,
    pub org: &'a str,
    pub space: &'a str,
}

/// Flatten the hierarchy into rows, keeping API order
pub fn instance_rows(hierarchy: &Hierarchy) -> Vec<InstanceRow<'_>> {
    let mut rows = Vec::new();
    for service in &hierarchy.services {
        if service.plans.is_empty() {
            rows.push(InstanceRow {
                service: &service.label,
                plan: "",
                instance: "",
                org: "",
                space: "",
            });
        }
        for plan in &service.plans {
            if plan.service_instances.is_empty() {
                rows.push(InstanceRow {
                    service: &service.label,
                    plan: &plan.name,
                    instance: "",
                    org: "",
                    space: "",
                });
            }
            for instance in &plan.service_instances {
                rows.push(InstanceRow {
                    service: &service.label,
                    plan: &plan.name,
                    instance: &instance.name,
                    org: &instance.space.organization.name,
                    space: &instance.space.name,
                });
            }
        }
    }
    rows
}

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write data as pretty-printed JSON
pub fn write_json<T: Serialize, W: Write>(data: &T, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, data)?;
    writeln!(out)
}

/// Write data as YAML
pub fn write_yaml<T: Serialize, W: Write>(data: &T, out: &mut W) -> io::Result<()> {
    let yaml = serde_yml::to_string(data).map_err(|e| io::Error::other(e.to_string()))?;
    write!(out, "{}", yaml)
}
