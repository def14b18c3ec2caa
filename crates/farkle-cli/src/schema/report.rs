use chrono::{DateTime, Utc};
use farkle_evaluator::stop_strategy::PointsTableStop;
use farkle_simulation::{
    aggregate::{AggregateSummary, Objective},
    batch::BatchConfig,
    sweep::{AxisRange, CellSummary, SweepCell},
};
use farkle_stats::descriptive::DescriptiveStats;
use serde::Serialize;

/// Result of a single `simulate` run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Timestamp when the report was generated (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Turn count, worker count and seed of the batch
    pub batch: BatchConfig,
    /// Thresholds and starting pool that were simulated
    pub cell: SweepCell,
    /// Voluntary stop table, absent when turns roll until they farkle
    pub stop_table: Option<PointsTableStop>,
    pub stats: AggregateSummary,
}

/// Result of a `sweep` run, one entry per configuration
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub generated_at: DateTime<Utc>,
    pub batch: BatchConfig,
    pub stop_table: Option<PointsTableStop>,
    /// Quantity the cells are ranked by
    pub objective: Objective,
    /// Configuration the axes are applied to
    pub base: SweepCell,
    pub axes: Vec<AxisRange>,
    /// Every cell in sweep order
    pub cells: Vec<CellSummary>,
    pub best: Option<CellSummary>,
    /// Spread of the per-cell averages
    pub averages: Option<DescriptiveStats>,
}
