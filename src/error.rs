use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Required program not found: {program}")]
    ProgramNotFound { program: String },

    #[error("Command failed with exit code {code}: {command}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: Option<String>,
    },

    #[error("Command was terminated before reporting an exit code: {command}")]
    Terminated { command: String },

    #[error("Repository directory not found: {0}")]
    MissingCheckout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SetupError {
    /// 에러 종류별 상태 번호
    ///
    /// 1 = 명령어 실패, 2 = 필수 프로그램 없음, 3 = 시그널로 종료, 4 = 기타
    pub fn status_code(&self) -> i32 {
        match self {
            SetupError::CommandFailed { .. } | SetupError::MissingCheckout(_) => 1,
            SetupError::ProgramNotFound { .. } => 2,
            SetupError::Terminated { .. } => 3,
            SetupError::Config(_) | SetupError::Io(_) => 4,
        }
    }

    /// 캡처 모드로 실행된 명령어의 stderr
    pub fn captured_stderr(&self) -> Option<&str> {
        match self {
            SetupError::CommandFailed {
                stderr: Some(text), ..
            } if !text.trim().is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;
