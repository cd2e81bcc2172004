use crate::executor::{run_checked, Invocation, SetupContext, SetupStep, StepReport};
use async_trait::async_trait;

const NAME: &str = "Package install";

/// 기본 패키지 목록을 pacman 한 번으로 설치
///
/// 결과는 전체 묶음 단위로 보고합니다 (pacman이 일부만 적용했을 수 있음).
pub struct PackageInstall {
    packages: Vec<String>,
}

impl PackageInstall {
    pub fn new(packages: Vec<String>) -> Self {
        Self { packages }
    }

    pub fn invocation(&self) -> Invocation {
        let mut args = vec!["-S".to_string(), "--noconfirm".to_string()];
        args.extend(self.packages.iter().cloned());
        Invocation::elevated("pacman", args)
    }
}

#[async_trait]
impl SetupStep for PackageInstall {
    fn name(&self) -> &str {
        NAME
    }

    async fn run(&self, ctx: &SetupContext<'_>) -> StepReport {
        if self.packages.is_empty() {
            return StepReport::satisfied(NAME, "No packages to install");
        }

        let invocation = ctx.prepare(self.invocation());
        let listed = self.packages.join(", ");

        match run_checked(ctx.runner, &invocation).await {
            Ok(_) => StepReport::completed(NAME, format!("Successfully installed: {}", listed)),
            Err(e) => StepReport::failed(NAME, format!("Installation failed for: {}", listed), e),
        }
    }
}
