use std::path::PathBuf;

use chrono::Utc;
use farkle_evaluator::{scoring_policy::ThresholdPolicy, turn_player::TurnPlayer};
use farkle_simulation::{aggregate::AggregateSummary, batch::simulate_batch};

use crate::{
    config::{BatchArgs, StopArgs, ThresholdArgs},
    schema::report::SimulationReport,
    util,
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    #[clap(flatten)]
    thresholds: ThresholdArgs,
    #[clap(flatten)]
    batch: BatchArgs,
    #[clap(flatten)]
    stop: StopArgs,
    /// Write a JSON report to this file (`-` for stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let cell = arg.thresholds.cell()?;
    let batch = arg.batch.batch_config()?;
    let stop_table = arg.stop.points_table()?;

    eprintln!("Simulating {} turns on {} workers", batch.turns(), batch.workers());
    eprintln!("  Seed:       {}", batch.seed());
    eprintln!("  Thresholds: {cell}");
    if let Some(table) = &stop_table {
        eprintln!("  Stop table: {:?}", table.min_points());
    }

    let player = TurnPlayer::new(Box::new(ThresholdPolicy::new(cell.thresholds)))
        .with_stop_strategy(arg.stop.stop_strategy()?);
    let stats = simulate_batch(&player, cell.starting_pool, &batch).summary();
    print_summary(&stats);

    let report = SimulationReport {
        generated_at: Utc::now(),
        batch,
        cell,
        stop_table,
        stats,
    };
    util::save_report(&report, arg.output.as_deref())
}

fn print_summary(stats: &AggregateSummary) {
    println!("Turns:              {}", stats.turns);
    println!("Acquired points:    {}", stats.acquired_points);
    println!(
        "Points per turn:    {:.2} (std dev {:.2}, std error {:.2})",
        stats.average_points, stats.points_std_dev, stats.points_std_error
    );
    println!("Scored per turn:    {:.2}", stats.average_scored_points);
    println!("Bust rate:          {:.2}%", stats.bust_rate * 100.0);
    println!("Rolls per turn:     {:.2}", stats.rolls_per_turn);
    println!("Hot dice:           {}", stats.hot_dice);
}
