//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use docsort_classifier::{Classification, ReferenceMatch};
use docsort_domain::{
    ClassifiedItem, DepartmentEntry, DocumentTypeEntry, ProjectEntry, ReferencePatternCategory,
};
use docsort_pipeline::{RunReport, SearchOutcome};
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a batch run report.
    pub fn format_report(&self, report: &RunReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report.tables_written.join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Count"]);
                for (metric, count) in [
                    ("Lines read", report.lines_read),
                    ("Records", report.records),
                    ("Uncategorized", report.uncategorized),
                    ("Malformed", report.malformed),
                    ("Duplicates", report.duplicates),
                    ("Tables written", report.tables_written.len()),
                    ("Tables failed", report.tables_failed.len()),
                ] {
                    builder.push_record([metric.to_string(), count.to_string()]);
                }

                let mut out = vec![self.render(builder)];
                for location in &report.tables_written {
                    out.push(self.success(location));
                }
                for failed in &report.tables_failed {
                    out.push(self.error(&format!("{}: {}", failed.table, failed.reason)));
                }
                Ok(out.join("\n"))
            }
        }
    }

    /// Format the classification of one text.
    pub fn format_classification(
        &self,
        classification: &Classification,
        references: &[ReferenceMatch],
    ) -> Result<String> {
        let project = &classification.project;
        let document_type = classification.document_type.as_deref();

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "project_code": project.code,
                "project_name": project.name,
                "document_type": document_type,
                "references": references.iter().map(reference_json).collect::<Vec<_>>(),
            }))?),
            OutputFormat::Quiet => Ok(project.code.clone()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Project".to_string(), format!("{} ({})", project.code, project.name)]);
                builder.push_record(["Document type".to_string(), document_type.unwrap_or("-").to_string()]);
                let refs: Vec<&str> = references.iter().map(|r| r.matched.as_str()).collect();
                builder.push_record([
                    "References".to_string(),
                    if refs.is_empty() { "-".to_string() } else { refs.join(", ") },
                ]);

                let table = self.render(builder);
                if project.is_uncategorized() {
                    Ok(format!("{}\n{}", table, self.warning("No project matched")))
                } else {
                    Ok(table)
                }
            }
        }
    }

    /// Format reference matches.
    pub fn format_references(&self, references: &[ReferenceMatch]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &references.iter().map(reference_json).collect::<Vec<_>>(),
            )?),
            OutputFormat::Quiet => Ok(references
                .iter()
                .map(|r| r.matched.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if references.is_empty() {
                    return Ok(self.colorize("No references found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Category", "Match", "Span", "Groups"]);
                for r in references {
                    let groups: Vec<&str> = r.groups.iter().map(|g| g.as_deref().unwrap_or("")).collect();
                    builder.push_record([
                        r.category.to_string(),
                        r.matched.clone(),
                        format!("{}..{}", r.start, r.end),
                        groups.join(" | "),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format search results.
    pub fn format_search(&self, outcome: &SearchOutcome) -> Result<String> {
        let items: Vec<&ClassifiedItem> = outcome.items().collect();

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "items": items.iter().map(|i| item_json(i)).collect::<Vec<_>>(),
                "analysis": outcome.analysis(),
                "source_failed": outcome.source_failed,
                "analysis_failed": outcome.analysis_failed,
            }))?),
            OutputFormat::Quiet => Ok(items
                .iter()
                .map(|i| i.subject.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if outcome.source_failed {
                    return Ok(self.error("Item source could not be read"));
                }
                if items.is_empty() {
                    return Ok(self.colorize("No items found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Subject", "Sender", "Project", "Type", "Reference"]);
                for item in &items {
                    builder.push_record([
                        item.subject.clone(),
                        item.sender.clone().unwrap_or_default(),
                        item.project_code.clone(),
                        item.document_type.clone().unwrap_or_default(),
                        item.reference_number.clone().unwrap_or_default(),
                    ]);
                }
                let mut out = self.render(builder);
                if let Some(analysis) = outcome.analysis() {
                    out.push_str(&format!("\n{}", self.info(analysis)));
                }
                Ok(out)
            }
        }
    }

    /// Format the project table.
    pub fn format_projects(&self, projects: &[ProjectEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &projects
                    .iter()
                    .map(|p| json!({ "code": p.code, "name": p.name, "aliases": p.aliases }))
                    .collect::<Vec<_>>(),
            )?),
            OutputFormat::Quiet => Ok(codes(projects.iter().map(|p| p.code.as_str()))),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Code", "Name", "Aliases"]);
                for p in projects {
                    builder.push_record([p.code.clone(), p.name.clone(), p.aliases.join(", ")]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format the department table.
    pub fn format_departments(&self, departments: &[DepartmentEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &departments
                    .iter()
                    .map(|d| json!({ "code": d.code, "name": d.name, "aliases": d.aliases }))
                    .collect::<Vec<_>>(),
            )?),
            OutputFormat::Quiet => Ok(codes(departments.iter().map(|d| d.code.as_str()))),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Code", "Name", "Aliases"]);
                for d in departments {
                    builder.push_record([d.code.clone(), d.name.clone(), d.aliases.join(", ")]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format the document type table.
    pub fn format_document_types(&self, types: &[DocumentTypeEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &types
                    .iter()
                    .map(|t| json!({ "name": t.name, "prefixes": t.prefixes, "keywords": t.keywords }))
                    .collect::<Vec<_>>(),
            )?),
            OutputFormat::Quiet => Ok(codes(types.iter().map(|t| t.name.as_str()))),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Type", "Prefixes", "Keywords"]);
                for t in types {
                    builder.push_record([t.name.clone(), t.prefixes.join(", "), t.keywords.join(", ")]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format the reference pattern categories.
    pub fn format_patterns(&self, categories: &[ReferencePatternCategory]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &categories
                    .iter()
                    .map(|c| json!({ "category": c.category.as_str(), "patterns": c.patterns }))
                    .collect::<Vec<_>>(),
            )?),
            OutputFormat::Quiet => Ok(codes(categories.iter().map(|c| c.category.as_str()))),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Category", "#", "Pattern"]);
                for c in categories {
                    for (idx, pattern) in c.patterns.iter().enumerate() {
                        builder.push_record([c.category.to_string(), idx.to_string(), pattern.clone()]);
                    }
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn codes<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join("\n")
}

fn reference_json(r: &ReferenceMatch) -> serde_json::Value {
    json!({
        "category": r.category.as_str(),
        "pattern_index": r.pattern_index,
        "match": r.matched,
        "start": r.start,
        "end": r.end,
        "groups": r.groups,
    })
}

fn item_json(item: &ClassifiedItem) -> serde_json::Value {
    json!({
        "subject": item.subject,
        "sender": item.sender,
        "received": item.received,
        "body": item.body_excerpt,
        "project_code": item.project_code,
        "project_name": item.project_name,
        "document_type": item.document_type,
        "reference_number": item.reference_number,
    })
}
