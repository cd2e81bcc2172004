use clap::Parser;
use colored::*;

mod cli;
mod config;
mod error;
mod executor;
mod setup;
mod temp;
mod ui;

use cli::Cli;
use config::Config;
use executor::{CommandRunner, DryRunRunner, SetupContext, SystemRunner};
use ui::Reporter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if cli.debug {
        println!("{} {:?}", "[DEBUG]".yellow(), cli);
    }

    let reporter = Reporter::new(cli.debug);
    reporter.banner("Starting the full Hyprland Desktop install");

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "[X]".red(), e);
            std::process::exit(1);
        }
    };

    let runner: Box<dyn CommandRunner> = if cli.dry_run {
        Box::new(DryRunRunner::new())
    } else {
        Box::new(SystemRunner::new())
    };

    let pipeline = setup::desktop_pipeline(&config);
    if cli.debug {
        println!(
            "{} Steps: {}",
            "[DEBUG]".yellow(),
            pipeline.step_names().join(" -> ")
        );
    }

    let ctx = SetupContext::new(runner.as_ref(), &reporter);
    let result = pipeline.execute(&ctx).await;
    reporter.summary(&result);

    // 모든 단계가 이미 실행됨, 종료 코드는 결과만 반영
    std::process::exit(result.exit_code());
}
