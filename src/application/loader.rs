//! CSV ingestion of an academic genealogy.
//!
//! Expected shape:
//!
//! ```text
//! advisee,year,advisor
//! Maya Leong,1990,
//! Matthew Hui,1995,Maya Leong
//! ```
//!
//! The first record is the root (its advisor column is ignored and may be
//! left out); every later record is inserted below its advisor in file order.

use std::ops::RangeInclusive;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{GenealogyTree, InsertOutcome, Person};
use crate::infrastructure::traits::FileSystem;

/// Header every genealogy file must start with.
pub const EXPECTED_HEADER: [&str; 3] = ["advisee", "year", "advisor"];

/// Field counts accepted for the root record and for every later record.
const ROOT_FIELDS: RangeInclusive<usize> = 2..=3;
const ADVISEE_FIELDS: RangeInclusive<usize> = 3..=3;

#[derive(Debug, Deserialize)]
struct AdviseeRecord {
    advisee: String,
    year: i32,
    advisor: String,
}

/// A record that was not inserted because its advisor is not in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line: u64,
    pub advisor: Person,
    pub advisee: Person,
}

/// Summary of one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records inserted below their advisor (the root is not counted)
    pub inserted: usize,
    /// Records whose advisee was already in the tree
    pub duplicates: usize,
    /// Records whose advisor was not (yet) in the tree
    pub unknown_advisors: Vec<SkippedRecord>,
}

/// Tree built from a genealogy file plus what happened along the way.
#[derive(Debug, Clone)]
pub struct LoadedGenealogy {
    pub tree: GenealogyTree,
    pub report: LoadReport,
}

/// Reads genealogy files through the filesystem abstraction.
pub struct GenealogyLoader {
    fs: Arc<dyn FileSystem>,
}

impl GenealogyLoader {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn load_file(&self, path: &Path) -> ApplicationResult<LoadedGenealogy> {
        if !self.fs.is_file(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("genealogy file not found: {}", path.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "file does not exist",
                )),
            });
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read genealogy", path)?;
        load_str(&content)
    }
}

/// Build a tree from CSV text.
pub fn load_str(content: &str) -> ApplicationResult<LoadedGenealogy> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(invalid_format)?.clone();
    if !headers.iter().eq(EXPECTED_HEADER) {
        return Err(ApplicationError::InvalidFormat {
            message: format!(
                "expected header \"{}\", found \"{}\"",
                EXPECTED_HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        });
    }

    let mut records = reader.records();
    let (root_line, root) = match records.next() {
        Some(record) => parse_record(record, &headers, ROOT_FIELDS)?,
        None => {
            return Err(ApplicationError::InvalidFormat {
                message: "no root record".to_string(),
            })
        }
    };
    let root_person = person_on_line(&root.advisee, root_line)?;
    debug!("root: {} ({})", root_person, root.year);

    let mut tree = GenealogyTree::new(root_person, root.year);
    let mut report = LoadReport::default();

    for record in records {
        let (line, record) = parse_record(record, &headers, ADVISEE_FIELDS)?;
        let advisee = person_on_line(&record.advisee, line)?;
        let advisor = person_on_line(&record.advisor, line)?;

        match tree.insert(&advisor, advisee.clone(), record.year) {
            InsertOutcome::Inserted => report.inserted += 1,
            InsertOutcome::AlreadyPresent => {
                debug!("line {}: {} already in tree", line, advisee);
                report.duplicates += 1;
            }
            InsertOutcome::UnknownAdvisor => {
                warn!("line {}: advisor {} not found, skipping {}", line, advisor, advisee);
                report.unknown_advisors.push(SkippedRecord {
                    line,
                    advisor,
                    advisee,
                });
            }
        }
    }

    debug!(
        "loaded {} persons ({} duplicates, {} unknown advisors)",
        tree.size(),
        report.duplicates,
        report.unknown_advisors.len()
    );
    Ok(LoadedGenealogy { tree, report })
}

fn parse_record(
    record: csv::Result<csv::StringRecord>,
    headers: &csv::StringRecord,
    fields: RangeInclusive<usize>,
) -> ApplicationResult<(u64, AdviseeRecord)> {
    let mut record = record.map_err(|e| ApplicationError::InvalidRecord {
        line: e.position().map(|p| p.line()).unwrap_or(0),
        message: e.to_string(),
    })?;
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    if !fields.contains(&record.len()) {
        let expected = if fields.start() == fields.end() {
            fields.start().to_string()
        } else {
            format!("{} to {}", fields.start(), fields.end())
        };
        return Err(ApplicationError::InvalidRecord {
            line,
            message: format!("expected {expected} fields, found {}", record.len()),
        });
    }
    // a root row may leave out the advisor column
    while record.len() < headers.len() {
        record.push_field("");
    }
    let parsed = record
        .deserialize(Some(headers))
        .map_err(|e| ApplicationError::InvalidRecord {
            line,
            message: e.to_string(),
        })?;
    Ok((line, parsed))
}

fn person_on_line(full_name: &str, line: u64) -> ApplicationResult<Person> {
    Person::parse_full_name(full_name).map_err(|e| ApplicationError::InvalidRecord {
        line,
        message: e.to_string(),
    })
}

fn invalid_format(e: csv::Error) -> ApplicationError {
    ApplicationError::InvalidFormat {
        message: e.to_string(),
    }
}
