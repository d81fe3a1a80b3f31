//! Indented text report
//!
//! ```text
//! Service p-mysql was found.
//! -Plan: small
//! --Instance: orders-db
//! ---Org: acme
//! ---Space: dev
//!
//! ```

use std::io::{self, Write};

use crate::usage::Hierarchy;

/// Write the hierarchy as the indented service report
///
/// Each service block ends with one blank line. The hierarchy is assumed
/// to be fully resolved; nothing is validated here.
pub fn write_report<W: Write>(hierarchy: &Hierarchy, out: &mut W) -> io::Result<()> {
    for service in &hierarchy.services {
        writeln!(out, "Service {} was found.", service.label)?;
        for plan in &service.plans {
            writeln!(out, "-Plan: {}", plan.name)?;
            for instance in &plan.service_instances {
                writeln!(out, "--Instance: {}", instance.name)?;
                writeln!(out, "---Org: {}", instance.space.organization.name)?;
                writeln!(out, "---Space: {}", instance.space.name)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
