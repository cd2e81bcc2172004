use crate::executor::{run_checked, Invocation, SetupContext, SetupStep, StepReport};
use async_trait::async_trait;

const NAME: &str = "System update";

/// 패키지 데이터베이스 갱신 및 전체 업그레이드
pub struct SystemUpdate;

impl SystemUpdate {
    pub fn new() -> Self {
        Self
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::elevated("pacman", ["-Syyu", "--noconfirm"])
    }
}

impl Default for SystemUpdate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SetupStep for SystemUpdate {
    fn name(&self) -> &str {
        NAME
    }

    async fn run(&self, ctx: &SetupContext<'_>) -> StepReport {
        let invocation = ctx.prepare(self.invocation());

        match run_checked(ctx.runner, &invocation).await {
            Ok(_) => StepReport::completed(NAME, "Successfully updated!"),
            Err(e) => StepReport::failed(NAME, "Update failed!", e),
        }
    }
}
