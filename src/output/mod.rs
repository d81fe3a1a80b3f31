//! Output formatting module
//!
//! Handles the output formats: indented report, table, CSV, JSON, YAML

mod common;
mod report;
mod table;

use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::usage::Hierarchy;

pub use self::common::{escape_csv, instance_rows, write_json, write_yaml, InstanceRow};
pub use self::report::write_report;
pub use self::table::{write_csv, write_table};

/// Write the hierarchy in the requested format
pub fn output_hierarchy<W: Write>(
    hierarchy: &Hierarchy,
    format: OutputFormat,
    no_header: bool,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_report(hierarchy, out),
        OutputFormat::Table => write_table(hierarchy, no_header, out),
        OutputFormat::Csv => write_csv(hierarchy, no_header, out),
        OutputFormat::Json => write_json(hierarchy, out),
        OutputFormat::Yaml => write_yaml(hierarchy, out),
    }?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::{Service, ServicePlan};

    fn hierarchy() -> Hierarchy {
        Hierarchy::new(vec![Service {
            label: "p-mysql".to_string(),
            plans: vec![ServicePlan {
                name: "small".to_string(),
                service_instances: vec![],
            }],
        }])
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        output_hierarchy(&hierarchy(), format, false, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_is_default_report() {
        assert_eq!(
            render(OutputFormat::Text),
            "Service p-mysql was found.\n-Plan: small\n\n"
        );
    }

    #[test]
    fn test_json_structure() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value[0]["label"], "p-mysql");
        assert_eq!(value[0]["plans"][0]["name"], "small");
    }

    #[test]
    fn test_yaml_contains_labels() {
        let yaml = render(OutputFormat::Yaml);
        assert!(yaml.contains("label: p-mysql"));
        assert!(yaml.contains("name: small"));
    }

    #[test]
    fn test_csv_has_header() {
        assert!(render(OutputFormat::Csv).starts_with("service,plan,instance,org,space\n"));
    }
}
