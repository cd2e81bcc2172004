//! AUR helper 부트스트랩
//!
//! ```text
//! CheckPresence ──present──▶ Done
//!       │
//!     absent
//!       ▼
//!   Cloning ──▶ Building ──▶ Done
//!       │           │
//!       └────┬──────┘
//!            ▼
//!          Failed
//! ```
//!
//! clone은 이 단계가 소유한 `TempDir` 안에 만들어지며 모든 종료 경로에서 삭제됩니다.

use crate::config::HelperConfig;
use crate::error::SetupError;
use crate::executor::{run_checked, Invocation, SetupContext, SetupStep, StepReport};
use crate::temp::temp_dir_base;
use async_trait::async_trait;
use std::path::Path;

const NAME: &str = "AUR helper bootstrap";

pub struct HelperBootstrap {
    helper: HelperConfig,
}

impl HelperBootstrap {
    pub fn new(helper: HelperConfig) -> Self {
        Self { helper }
    }

    /// `pacman -Q <helper>` (종료 코드 0 = 설치됨)
    pub fn presence_probe(&self) -> Invocation {
        Invocation::new("pacman", ["-Q", self.helper.name.as_str()]).as_probe()
    }

    pub fn clone_invocation(&self, workspace: &Path) -> Invocation {
        Invocation::new("git", ["clone", self.helper.repository.as_str()]).with_dir(workspace)
    }

    pub fn build_invocation(&self, checkout: &Path) -> Invocation {
        Invocation::new("makepkg", ["-si", "--noconfirm"])
            .with_dir(checkout)
            .prompting()
    }

    /// 작업 디렉토리 삭제 결과 반영
    ///
    /// 단계가 성공했는데 삭제에 실패하면 실패로 보고합니다. 이미 실패한 경우
    /// 원래 에러를 유지하고 경고만 출력합니다.
    pub fn finish_workspace(
        ctx: &SetupContext<'_>,
        report: StepReport,
        path: &Path,
        removal: std::io::Result<()>,
    ) -> StepReport {
        let Err(e) = removal else {
            return report;
        };

        let message = format!("Could not remove temporary directory: {}", path.display());
        if report.succeeded() {
            StepReport::failed(NAME, message, e.into())
        } else {
            ctx.reporter.info(&format!("{} ({})", message, e));
            report
        }
    }

    async fn build_in(&self, ctx: &SetupContext<'_>, workspace: &Path) -> StepReport {
        let package = &self.helper.package;

        let clone = ctx.prepare(self.clone_invocation(workspace));
        if let Err(e) = run_checked(ctx.runner, &clone).await {
            return StepReport::failed(NAME, format!("Failed to clone {} repository.", package), e);
        }
        ctx.reporter
            .info(&format!("Successfully cloned {} repository.", package));

        let checkout = workspace.join(package);
        if !ctx.runner.is_dry_run() && !checkout.is_dir() {
            let path = checkout.display().to_string();
            return StepReport::failed(
                NAME,
                format!("Repository directory not found: {}", path),
                SetupError::MissingCheckout(path),
            );
        }

        ctx.reporter
            .info(&format!("Building and installing {}...", package));
        let build = ctx.prepare(self.build_invocation(&checkout));
        match run_checked(ctx.runner, &build).await {
            Ok(_) => StepReport::completed(
                NAME,
                format!("{} built and installed successfully!", package),
            ),
            Err(e) => StepReport::failed(NAME, "makepkg failed.", e),
        }
    }
}

#[async_trait]
impl SetupStep for HelperBootstrap {
    fn name(&self) -> &str {
        NAME
    }

    async fn run(&self, ctx: &SetupContext<'_>) -> StepReport {
        let name = &self.helper.name;

        let probe = ctx.prepare(self.presence_probe());
        match ctx.runner.run(&probe).await {
            Ok(output) if output.success() => {
                return StepReport::satisfied(NAME, format!("{} is already installed.", name));
            }
            Ok(_) => {}
            Err(e) => {
                return StepReport::failed(
                    NAME,
                    format!("Could not check whether {} is installed.", name),
                    e,
                );
            }
        }

        ctx.reporter.info(&format!(
            "{} is NOT installed -- installing {} from AUR...",
            name, self.helper.package
        ));

        let workspace = match tempfile::Builder::new()
            .prefix("archdesk-")
            .tempdir_in(temp_dir_base())
        {
            Ok(dir) => dir,
            Err(e) => {
                return StepReport::failed(NAME, "Could not create a temporary directory.", e.into());
            }
        };
        ctx.reporter.info(&format!(
            "Using temporary directory: {}",
            workspace.path().display()
        ));

        let path = workspace.path().to_path_buf();
        let report = self.build_in(ctx, &path).await;
        Self::finish_workspace(ctx, report, &path, workspace.close())
    }
}
