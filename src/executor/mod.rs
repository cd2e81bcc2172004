pub mod pipeline;
pub mod runner;

#[cfg(test)]
pub mod testing;

pub use pipeline::{Pipeline, SetupContext, SetupStep, StepOutcome, StepReport};
pub use runner::{run_checked, CommandRunner, DryRunRunner, Invocation, SystemRunner};
