use crate::error::{Result, SetupError};
use crate::ui::create_spinner;
use async_trait::async_trait;
use colored::*;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// 외부 명령어 한 건 (argv, 작업 디렉토리, 출력 모드)
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// 실행 파일 이름
    pub program: String,
    /// 인자 목록
    pub args: Vec<String>,
    /// 작업 디렉토리
    pub working_dir: Option<PathBuf>,
    /// 출력을 캡처하지 않고 실시간으로 표시
    pub verbose: bool,
    /// 시스템을 변경하지 않는 조회 명령어
    pub probe: bool,
    /// 터미널에서 비밀번호를 물어볼 수 있음 (sudo, makepkg, AUR helper)
    pub prompts: bool,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: None,
            verbose: false,
            probe: false,
            prompts: false,
        }
    }

    /// `sudo`를 앞에 붙인 명령어
    pub fn elevated<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = vec![program.to_string()];
        argv.extend(args.into_iter().map(Into::into));
        Self::new("sudo", argv).prompting()
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn as_probe(mut self) -> Self {
        self.probe = true;
        self
    }

    /// 내부에서 sudo를 호출할 수 있는 명령어로 표시
    pub fn prompting(mut self) -> Self {
        self.prompts = true;
        self
    }

    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    pub fn display(&self) -> String {
        self.argv().join(" ")
    }
}

/// 종료 코드와 캡처된 stderr (캡처 모드일 때만)
#[derive(Debug, Clone, PartialEq)]
pub struct ExecOutput {
    pub code: i32,
    pub stderr: Option<String>,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// 명령어를 끝까지 실행
    ///
    /// 0이 아닌 종료 코드도 `Ok`로 반환합니다. 실행 실패와 시그널 종료만 에러입니다.
    async fn run(&self, invocation: &Invocation) -> Result<ExecOutput>;

    /// 명령어를 출력만 하고 실행하지 않는 경우 true
    fn is_dry_run(&self) -> bool {
        false
    }
}

/// 실행 후 0이 아닌 종료 코드를 `SetupError::CommandFailed`로 변환
pub async fn run_checked(runner: &dyn CommandRunner, invocation: &Invocation) -> Result<ExecOutput> {
    let output = runner.run(invocation).await?;
    if output.success() {
        Ok(output)
    } else {
        Err(SetupError::CommandFailed {
            command: invocation.display(),
            code: output.code,
            stderr: output.stderr,
        })
    }
}

/// tokio로 실제 프로세스 실행
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &Invocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }
        command
    }

    fn spawn_error(invocation: &Invocation, e: std::io::Error) -> SetupError {
        if e.kind() == ErrorKind::NotFound {
            SetupError::ProgramNotFound {
                program: invocation.program.clone(),
            }
        } else {
            SetupError::Io(e)
        }
    }

    /// 캡처 모드에서 스피너 표시 여부
    ///
    /// 스피너가 stderr를 다시 그리면 sudo 비밀번호 프롬프트가 지워지므로
    /// 비밀번호를 물어볼 수 있는 명령어에는 표시하지 않습니다.
    pub fn shows_spinner(invocation: &Invocation) -> bool {
        !invocation.verbose && !invocation.prompts
    }

    fn exit_code(invocation: &Invocation, status: ExitStatus) -> Result<i32> {
        status.code().ok_or_else(|| SetupError::Terminated {
            command: invocation.display(),
        })
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ExecOutput> {
        if let Some(dir) = &invocation.working_dir {
            check_dir(dir)?;
        }

        let mut command = Self::command(invocation);

        if invocation.verbose {
            let status = command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .await
                .map_err(|e| Self::spawn_error(invocation, e))?;

            return Ok(ExecOutput {
                code: Self::exit_code(invocation, status)?,
                stderr: None,
            });
        }

        let spinner = Self::shows_spinner(invocation)
            .then(|| create_spinner(&format!("Running {}", invocation.display())));
        let output = command
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| Self::spawn_error(invocation, e));
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let output = output?;
        Ok(ExecOutput {
            code: Self::exit_code(invocation, output.status)?,
            stderr: Some(String::from_utf8_lossy(&output.stderr).to_string()),
        })
    }
}

// 작업 디렉토리가 없으면 NotFound가 되어 프로그램 누락으로 오인됨
fn check_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(SetupError::Io(std::io::Error::new(
            ErrorKind::NotFound,
            format!("working directory does not exist: {}", dir.display()),
        )))
    }
}

/// 명령어를 실행하지 않고 출력만 함
///
/// 조회 명령어는 "없음"(1)으로 응답해 전체 설치 경로를 미리 보여줍니다.
pub struct DryRunRunner;

impl DryRunRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DryRunRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for DryRunRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ExecOutput> {
        match &invocation.working_dir {
            Some(dir) => println!(
                "{} {} {}",
                "[DRY RUN]".yellow(),
                invocation.display(),
                format!("(in {})", dir.display()).dimmed()
            ),
            None => println!("{} {}", "[DRY RUN]".yellow(), invocation.display()),
        }

        Ok(ExecOutput {
            code: if invocation.probe { 1 } else { 0 },
            stderr: None,
        })
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
