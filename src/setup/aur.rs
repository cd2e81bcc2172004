use crate::executor::{run_checked, Invocation, SetupContext, SetupStep, StepReport};
use async_trait::async_trait;

const NAME: &str = "AUR package install";

/// AUR helper로 AUR 패키지 설치
///
/// clean build / diff review 질문은 `None`으로 미리 응답합니다.
/// makepkg는 root로 빌드하지 않으므로 helper는 sudo 없이 실행하고,
/// 설치 단계에서 helper가 직접 sudo를 호출합니다.
pub struct AurInstall {
    helper: String,
    packages: Vec<String>,
}

impl AurInstall {
    pub fn new(helper: String, packages: Vec<String>) -> Self {
        Self { helper, packages }
    }

    pub fn invocation(&self) -> Invocation {
        let mut args: Vec<String> = [
            "-S",
            "--answerclean",
            "None",
            "--answerdiff",
            "None",
            "--noconfirm",
        ]
        .iter()
        .map(|a| a.to_string())
        .collect();
        args.extend(self.packages.iter().cloned());
        Invocation::new(&self.helper, args).prompting()
    }
}

#[async_trait]
impl SetupStep for AurInstall {
    fn name(&self) -> &str {
        NAME
    }

    async fn run(&self, ctx: &SetupContext<'_>) -> StepReport {
        if self.packages.is_empty() {
            return StepReport::satisfied(NAME, "No AUR packages to install");
        }

        let invocation = ctx.prepare(self.invocation());
        let listed = self.packages.join(", ");

        match run_checked(ctx.runner, &invocation).await {
            Ok(_) => StepReport::completed(NAME, format!("Successfully installed: {}", listed)),
            Err(e) => StepReport::failed(NAME, format!("Installation failed for: {}", listed), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::testing::{Scripted, ScriptedRunner};
    use crate::ui::Reporter;

    fn install(packages: &[&str]) -> AurInstall {
        AurInstall::new(
            "yay".to_string(),
            packages.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_prompts_are_pre_answered() {
        let inv = install(&["zen-browser-git"]).invocation();
        assert_eq!(
            inv.display(),
            "yay -S --answerclean None --answerdiff None --noconfirm zen-browser-git"
        );
        assert!(inv.prompts);
    }

    #[tokio::test]
    async fn test_success() {
        let runner = ScriptedRunner::new();
        let reporter = Reporter::new(false);
        let ctx = SetupContext::new(&runner, &reporter);

        let report = install(&["zen-browser-git", "spotify"]).run(&ctx).await;

        assert!(report.succeeded());
        assert_eq!(report.message, "Successfully installed: zen-browser-git, spotify");
    }

    #[tokio::test]
    async fn test_missing_helper() {
        let runner = ScriptedRunner::new().on("yay", Scripted::NotFound);
        let reporter = Reporter::new(false);
        let ctx = SetupContext::new(&runner, &reporter);

        let report = install(&["zen-browser-git"]).run(&ctx).await;

        assert_eq!(report.message, "Installation failed for: zen-browser-git");
        assert_eq!(report.status_code(), 2);
    }

    #[tokio::test]
    async fn test_empty_list_runs_nothing() {
        let runner = ScriptedRunner::new();
        let reporter = Reporter::new(false);
        let ctx = SetupContext::new(&runner, &reporter);

        let report = install(&[]).run(&ctx).await;

        assert!(report.succeeded());
        assert!(runner.calls().is_empty());
    }
}
