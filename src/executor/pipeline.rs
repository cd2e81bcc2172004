use crate::error::SetupError;
use crate::executor::runner::{CommandRunner, Invocation};
use crate::ui::Reporter;
use async_trait::async_trait;

/// 단계 실행 결과 분류
#[derive(Debug)]
pub enum StepOutcome {
    /// 명령어 실행 성공
    Completed,
    /// 이미 설치되어 있어 아무것도 실행하지 않음
    AlreadySatisfied,
    /// 실패 (다음 단계는 계속 진행)
    Failed(SetupError),
}

/// 단계 실행 보고
#[derive(Debug)]
pub struct StepReport {
    /// 단계 이름
    pub name: String,
    /// 결과
    pub outcome: StepOutcome,
    /// 사용자에게 보여줄 메시지
    pub message: String,
}

impl StepReport {
    pub fn completed(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            outcome: StepOutcome::Completed,
            message: message.into(),
        }
    }

    pub fn satisfied(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            outcome: StepOutcome::AlreadySatisfied,
            message: message.into(),
        }
    }

    pub fn failed(name: &str, message: impl Into<String>, error: SetupError) -> Self {
        Self {
            name: name.to_string(),
            outcome: StepOutcome::Failed(error),
            message: message.into(),
        }
    }

    /// 성공 여부 (이미 설치된 경우 포함)
    pub fn succeeded(&self) -> bool {
        !matches!(self.outcome, StepOutcome::Failed(_))
    }

    pub fn error(&self) -> Option<&SetupError> {
        match &self.outcome {
            StepOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// 0 = 성공 또는 이미 설치됨, 그 외는 `SetupError::status_code`
    pub fn status_code(&self) -> i32 {
        self.error().map_or(0, SetupError::status_code)
    }
}

/// 단계 실행 환경
pub struct SetupContext<'a> {
    pub runner: &'a dyn CommandRunner,
    pub reporter: &'a Reporter,
}

impl<'a> SetupContext<'a> {
    pub fn new(runner: &'a dyn CommandRunner, reporter: &'a Reporter) -> Self {
        Self { runner, reporter }
    }

    pub fn verbose(&self) -> bool {
        self.reporter.verbose()
    }

    /// 현재 verbosity를 적용하고 디버그 출력
    pub fn prepare(&self, invocation: Invocation) -> Invocation {
        let invocation = invocation.with_verbose(self.verbose());
        self.reporter.command(&invocation);
        invocation
    }
}

/// 설치 단계
#[async_trait]
pub trait SetupStep: Send + Sync {
    fn name(&self) -> &str;

    /// 모든 에러는 보고서로 변환되어야 함
    async fn run(&self, ctx: &SetupContext<'_>) -> StepReport;
}

/// 파이프라인 실행 결과
#[derive(Debug)]
pub struct PipelineResult {
    /// 총 단계 수
    pub total: usize,
    /// 성공한 단계 수
    pub success_count: usize,
    /// 실패한 단계 수
    pub failure_count: usize,
    /// 단계별 보고
    pub reports: Vec<StepReport>,
}

impl PipelineResult {
    pub fn from_reports(reports: Vec<StepReport>) -> Self {
        let success_count = reports.iter().filter(|r| r.succeeded()).count();
        Self {
            total: reports.len(),
            success_count,
            failure_count: reports.len() - success_count,
            reports,
        }
    }

    /// 모든 단계가 성공했는지 확인
    pub fn all_succeeded(&self) -> bool {
        self.failure_count == 0
    }

    /// 실패한 단계 반환
    pub fn failed_steps(&self) -> Vec<&StepReport> {
        self.reports.iter().filter(|r| !r.succeeded()).collect()
    }

    /// 프로세스 종료 코드
    pub fn exit_code(&self) -> i32 {
        if self.all_succeeded() {
            0
        } else {
            1
        }
    }
}

/// 순차 실행기
///
/// 이전 단계의 실패와 관계없이 모든 단계를 순서대로 실행합니다.
pub struct Pipeline {
    steps: Vec<Box<dyn SetupStep>>,
}

impl Pipeline {
    pub fn new(steps: Vec<Box<dyn SetupStep>>) -> Self {
        Self { steps }
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    pub async fn execute(&self, ctx: &SetupContext<'_>) -> PipelineResult {
        let mut reports = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            ctx.reporter.start(step.name());
            let report = step.run(ctx).await;
            ctx.reporter.report(&report);
            reports.push(report);
        }

        PipelineResult::from_reports(reports)
    }
}
