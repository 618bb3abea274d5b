//! Provision, generate, load.

use rand::Rng;
use tracing::{error, info};

use crate::catalog::ValuePools;
use crate::clock::Clock;
use crate::errors::SeedError;
use crate::generator::generate;
use crate::loader::{bulk_insert, InsertReport};
use crate::provisioner::{ensure_index, IndexStatus};
use crate::schema::{IndexSchema, DEFAULT_INDEX_NAME};
use crate::store::SearchStore;

/// Number of documents written per run unless configured otherwise.
pub const DEFAULT_DOCUMENT_COUNT: usize = 100;

/// What a single run does.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedPlan {
    pub index_name: String,
    pub document_count: usize,
    pub schema: IndexSchema,
    pub pools: ValuePools,
    /// Fail the run when the bulk response rejects any document.
    pub strict: bool,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
            document_count: DEFAULT_DOCUMENT_COUNT,
            schema: IndexSchema::products(),
            pools: ValuePools::DEFAULT,
            strict: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeedOutcome {
    pub index_status: IndexStatus,
    pub report: InsertReport,
}

fn check_count(plan: &SeedPlan) -> Result<(), SeedError> {
    if plan.document_count == 0 {
        return Err(SeedError::validation("document count must be at least 1"));
    }
    Ok(())
}

/// First half of a run: makes sure the target index exists.
///
/// The index check is the gate. If it fails, nothing is generated and
/// nothing is written.
pub async fn provision<S>(store: &S, plan: &SeedPlan) -> Result<IndexStatus, SeedError>
where
    S: SearchStore + ?Sized,
{
    check_count(plan)?;
    ensure_index(store, &plan.index_name, &plan.schema).await
}

/// Second half of a run: generates the documents and bulk-inserts them.
///
/// Rejected items are left in the report; see [`check_report`].
pub async fn load<S, C, R>(
    store: &S,
    plan: &SeedPlan,
    clock: &C,
    rng: &mut R,
) -> Result<InsertReport, SeedError>
where
    S: SearchStore + ?Sized,
    C: Clock + ?Sized,
    R: Rng + ?Sized,
{
    check_count(plan)?;

    let documents = generate(plan.document_count, &plan.pools, clock, rng);
    info!(
        index = %plan.index_name,
        count = documents.len(),
        "Generated sample documents"
    );

    bulk_insert(store, &plan.index_name, &documents).await
}

/// Turns rejected items into an error when the plan is strict.
pub fn check_report(plan: &SeedPlan, report: &InsertReport) -> Result<(), SeedError> {
    if plan.strict && report.has_failures() {
        error!(
            index = %plan.index_name,
            failed = report.failed,
            total = report.total,
            "Strict mode: bulk response contains rejected documents"
        );
        return Err(SeedError::partial_bulk(report.failed, report.total));
    }
    Ok(())
}

/// Runs one seeding pass against `store`.
///
/// Documents are appended on every run, never replaced.
pub async fn run<S, C, R>(
    store: &S,
    plan: &SeedPlan,
    clock: &C,
    rng: &mut R,
) -> Result<SeedOutcome, SeedError>
where
    S: SearchStore + ?Sized,
    C: Clock + ?Sized,
    R: Rng + ?Sized,
{
    let index_status = provision(store, plan).await?;
    let report = load(store, plan, clock, rng).await?;
    check_report(plan, &report)?;

    Ok(SeedOutcome {
        index_status,
        report,
    })
}
