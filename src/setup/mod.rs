//! 데스크톱 설치 단계 (실행 순서대로)

pub mod aur;
pub mod helper;
pub mod packages;
pub mod update;

use crate::config::Config;
use crate::executor::{Pipeline, SetupStep};

pub use aur::AurInstall;
pub use helper::HelperBootstrap;
pub use packages::PackageInstall;
pub use update::SystemUpdate;

/// 시스템 업데이트 → 패키지 설치 → helper 부트스트랩 → AUR 패키지 설치
pub fn desktop_pipeline(config: &Config) -> Pipeline {
    let steps: Vec<Box<dyn SetupStep>> = vec![
        Box::new(SystemUpdate::new()),
        Box::new(PackageInstall::new(config.packages.clone())),
        Box::new(HelperBootstrap::new(config.helper.clone())),
        Box::new(AurInstall::new(
            config.helper.name.clone(),
            config.aur_packages.clone(),
        )),
    ];
    Pipeline::new(steps)
}
