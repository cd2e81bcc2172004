use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "archdesk")]
#[command(version)]
#[command(about = "Arch Linux Hyprland desktop installer", long_about = None)]
pub struct Cli {
    /// 디버그 모드 (명령어 출력을 실시간으로 표시)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// 명령어만 출력하고 실행하지 않음
    #[arg(long)]
    pub dry_run: bool,

    /// 패키지 목록과 AUR helper를 지정하는 TOML 설정 파일
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["archdesk"]);
        assert!(!cli.debug);
        assert!(!cli.dry_run);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["archdesk", "-d", "--dry-run", "-c", "desk.toml"]);
        assert!(cli.debug);
        assert!(cli.dry_run);
        assert_eq!(cli.config, Some(PathBuf::from("desk.toml")));
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["archdesk", "extra"]).is_err());
    }
}
