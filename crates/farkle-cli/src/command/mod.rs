use clap::{Parser, Subcommand};

use self::{simulate::SimulateArg, sweep::SweepArg};

mod simulate;
mod sweep;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Simulate one threshold configuration
    Simulate(#[clap(flatten)] SimulateArg),
    /// Compare threshold configurations
    Sweep(#[clap(flatten)] SweepArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Simulate(SimulateArg::default())) {
        Mode::Simulate(arg) => simulate::run(&arg)?,
        Mode::Sweep(arg) => sweep::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        let args = CommandArgs::try_parse_from(["farkle", "simulate", "--turns", "10"]).unwrap();
        assert!(matches!(args.mode, Some(Mode::Simulate(_))));

        let args =
            CommandArgs::try_parse_from(["farkle", "sweep", "--turns", "10", "singles"]).unwrap();
        assert!(matches!(args.mode, Some(Mode::Sweep(_))));

        let args = CommandArgs::try_parse_from([
            "farkle", "sweep", "custom", "--axis", "ones=2..=5", "--axis", "start=4..=6",
        ])
        .unwrap();
        assert!(matches!(args.mode, Some(Mode::Sweep(_))));

        assert!(CommandArgs::try_parse_from(["farkle", "sweep", "custom", "--axis", "x=1"]).is_err());
        assert!(CommandArgs::try_parse_from(["farkle"]).unwrap().mode.is_none());
    }
}
