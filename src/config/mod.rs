use crate::error::{Result, SetupError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 설치 대상 설정
///
/// `--config`로 TOML 파일을 지정하지 않으면 내장 기본값을 사용합니다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// pacman으로 설치할 패키지 (순서 유지, 중복 허용)
    #[serde(default = "default_packages")]
    pub packages: Vec<String>,

    /// AUR helper로 설치할 패키지
    #[serde(default = "default_aur_packages")]
    pub aur_packages: Vec<String>,

    /// AUR helper 부트스트랩 설정
    #[serde(default)]
    pub helper: HelperConfig,
}

/// AUR helper 정의
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HelperConfig {
    /// helper 실행 파일 이름 (pacman -Q 로 확인)
    #[serde(default = "default_helper_name")]
    pub name: String,

    /// helper를 제공하는 AUR 패키지 이름 (clone 디렉토리 이름)
    #[serde(default = "default_helper_package")]
    pub package: String,

    /// 빌드 레시피 저장소 URL
    #[serde(default = "default_helper_repository")]
    pub repository: String,
}

const DEFAULT_PACKAGES: &[&str] = &[
    // Hyprland 핵심
    "hyprland",
    "hypridle",
    "hyprlock",
    "hyprpolkitagent",
    "xdg-desktop-portal-hyprland",
    // Hyprland 추가 도구
    "hyprpaper",
    "hyprpicker",
    "hyprsunset",
    // 기본 유틸리티
    "xdg-desktop-dirs",
    "wl-clipboard",
    "pipewire",
    "wireplumber",
    "bluez",
    "bluez-utils",
    "udiskie",
    // 사용자 인터페이스
    "ly",
    "swaync",
    "waybar",
    "walker",
    // 폰트
    "noto-fonts",
    "ttf-hack-nerd",
    // 기본 애플리케이션
    "kitty",
    "pacmanfm-qt",
    // 셸 애플리케이션
    "zsh",
    "git",
    "bluetui",
    "stow",
    "neovim",
];

const DEFAULT_AUR_PACKAGES: &[&str] = &["zen-browser-git"];

fn default_packages() -> Vec<String> {
    DEFAULT_PACKAGES.iter().map(|p| p.to_string()).collect()
}

fn default_aur_packages() -> Vec<String> {
    DEFAULT_AUR_PACKAGES.iter().map(|p| p.to_string()).collect()
}

fn default_helper_name() -> String {
    "yay".to_string()
}

fn default_helper_package() -> String {
    "yay-bin".to_string()
}

fn default_helper_repository() -> String {
    "https://aur.archlinux.org/yay-bin.git".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            packages: default_packages(),
            aur_packages: default_aur_packages(),
            helper: HelperConfig::default(),
        }
    }
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            name: default_helper_name(),
            package: default_helper_package(),
            repository: default_helper_repository(),
        }
    }
}

impl Config {
    /// 설정 로드 (경로가 없으면 기본값 사용)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|e| {
            SetupError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        Self::from_toml(&content)
            .map_err(|e| SetupError::Config(format!("{}: {}", path.display(), e)))
    }

    /// TOML 문자열 파싱
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
