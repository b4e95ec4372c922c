//! Run report
//!
//! Every non-fatal condition (skipped records, duplicates, unknown actions)
//! must stay visible to operators, otherwise silent data loss is
//! undetectable. The report aggregates all counters for one invocation.

use serde::Serialize;

/// Counters for one sync run, printed by the CLI after completion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// User rows actually inserted (existing usernames do not count)
    pub users_created: u64,

    /// Product field updates that matched a row
    pub products_updated: u64,

    /// Recognized changes skipped for a missing/mistyped required field
    pub changes_malformed: u64,

    /// Changes with an action kind this build does not recognize
    pub changes_unknown: u64,

    /// Sale records newly appended to the log
    pub sales_inserted: u64,

    /// Sale records dropped as duplicates of an existing or in-batch key
    pub sales_duplicate: u64,

    /// Sale records skipped as malformed (e.g. missing timestamp)
    pub sales_malformed: u64,

    /// Version marker written to the snapshot, once export has run
    pub snapshot_version: Option<i64>,
}

impl RunReport {
    /// Total number of records that were skipped rather than applied
    pub fn skipped(&self) -> u64 {
        self.changes_malformed + self.changes_unknown + self.sales_duplicate + self.sales_malformed
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "users created:     {}", self.users_created)?;
        writeln!(f, "products updated:  {}", self.products_updated)?;
        writeln!(f, "changes malformed: {}", self.changes_malformed)?;
        writeln!(f, "changes unknown:   {}", self.changes_unknown)?;
        writeln!(f, "sales inserted:    {}", self.sales_inserted)?;
        writeln!(f, "sales duplicate:   {}", self.sales_duplicate)?;
        writeln!(f, "sales malformed:   {}", self.sales_malformed)?;
        match self.snapshot_version {
            Some(v) => write!(f, "snapshot version:  {}", v),
            None => write!(f, "snapshot version:  (not exported)"),
        }
    }
}
