use crate::error::SetupError;
use crate::executor::pipeline::{PipelineResult, StepOutcome, StepReport};
use crate::executor::runner::Invocation;
use colored::*;

/// 빌드 도구가 없을 때만 설치 안내를 표시
const BUILD_TOOLS: &[&str] = &["git", "makepkg"];

/// 단계 상태 출력
///
/// 디버그 모드에서는 명령어 출력이 이미 실시간으로 표시되므로
/// 캡처된 stderr는 디버그 모드가 아닐 때만 출력합니다.
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn banner(&self, message: &str) {
        println!("{} {}", "[>>]".cyan().bold(), message.bold());
    }

    pub fn start(&self, step: &str) {
        println!("\n{} {}", "[*]".cyan(), step);
    }

    pub fn command(&self, invocation: &Invocation) {
        if self.verbose {
            println!(
                "{} Running command: {}",
                "[DEBUG]".yellow(),
                invocation.display()
            );
        }
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", "[i]".cyan(), message);
    }

    pub fn report(&self, report: &StepReport) {
        match &report.outcome {
            StepOutcome::Completed => println!("{} {}", "[v]".green(), report.message),
            StepOutcome::AlreadySatisfied => {
                println!("{} {}", "[v]".green(), report.message.dimmed())
            }
            StepOutcome::Failed(error) => {
                println!("{} {}", "[X]".red(), report.message.red());
                for line in self.failure_lines(error) {
                    eprintln!("{}", line.dimmed());
                }
            }
        }
    }

    /// 실패 상세 내용 (에러, 설치 안내, 캡처된 stderr)
    pub fn failure_lines(&self, error: &SetupError) -> Vec<String> {
        let mut lines = vec![format!("    {}", error)];

        if let SetupError::ProgramNotFound { program } = error {
            if BUILD_TOOLS.contains(&program.as_str()) {
                lines.push("    Make sure git and base-devel are installed.".to_string());
            }
        }

        if !self.verbose {
            if let Some(stderr) = error.captured_stderr() {
                lines.push(stderr.trim_end().to_string());
            }
        }

        lines
    }

    pub fn summary(&self, result: &PipelineResult) {
        let headline = if result.all_succeeded() {
            "[OK]".green().bold()
        } else {
            "[!]".yellow().bold()
        };

        println!("\n{} Desktop install finished", headline);
        println!("  - Steps: {}", result.total);
        println!("  - Success: {}", result.success_count.to_string().green());
        println!("  - Failed: {}", result.failure_count.to_string().red());

        for failed in result.failed_steps() {
            println!(
                "  {} {} (status {})",
                "[X]".red(),
                failed.name,
                failed.status_code()
            );
        }
    }
}
