//! 단계 테스트용 스크립트 실행기

use crate::error::{Result, SetupError};
use crate::executor::runner::{CommandRunner, ExecOutput, Invocation};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum Scripted {
    Exit { code: i32, stderr: Option<String> },
    /// 종료 코드 0, 작업 디렉토리 안에 이 디렉토리 생성
    CreateDir(String),
    NotFound,
    Terminated,
}

/// 모든 호출을 기록하고 스크립트대로 응답
///
/// 키는 `sudo`를 뺀 argv의 앞부분 토큰입니다 (예: `"pacman -Q"`).
/// 처음 일치하는 키가 사용되며, 일치하지 않으면 종료 코드 0을 반환합니다.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: Vec<(Vec<String>, Scripted)>,
    calls: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, key: &str, response: Scripted) -> Self {
        let tokens = key.split_whitespace().map(str::to_string).collect();
        self.responses.push((tokens, response));
        self
    }

    pub fn exit(self, key: &str, code: i32) -> Self {
        self.on(key, Scripted::Exit { code, stderr: None })
    }

    pub fn fail_with(self, key: &str, code: i32, stderr: &str) -> Self {
        self.on(
            key,
            Scripted::Exit {
                code,
                stderr: Some(stderr.to_string()),
            },
        )
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// 기록된 호출의 프로그램 이름 (`sudo` 제외)
    pub fn programs(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|inv| unprivileged_argv(inv).first().map(|p| p.to_string()))
            .collect()
    }

    fn lookup(&self, invocation: &Invocation) -> Option<&Scripted> {
        let argv = unprivileged_argv(invocation);
        self.responses
            .iter()
            .find(|(key, _)| key.len() <= argv.len() && key.iter().zip(&argv).all(|(k, a)| k == *a))
            .map(|(_, response)| response)
    }
}

fn unprivileged_argv(invocation: &Invocation) -> Vec<&str> {
    let argv = invocation.argv();
    if argv.first() == Some(&"sudo") {
        argv[1..].to_vec()
    } else {
        argv
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ExecOutput> {
        self.calls.lock().unwrap().push(invocation.clone());

        match self.lookup(invocation) {
            None => Ok(ExecOutput { code: 0, stderr: None }),
            Some(Scripted::Exit { code, stderr }) => Ok(ExecOutput {
                code: *code,
                stderr: stderr.clone(),
            }),
            Some(Scripted::CreateDir(name)) => {
                let base = invocation
                    .working_dir
                    .clone()
                    .expect("CreateDir needs a working directory");
                std::fs::create_dir_all(base.join(name))?;
                Ok(ExecOutput { code: 0, stderr: None })
            }
            Some(Scripted::NotFound) => Err(SetupError::ProgramNotFound {
                program: unprivileged_argv(invocation)[0].to_string(),
            }),
            Some(Scripted::Terminated) => Err(SetupError::Terminated {
                command: invocation.display(),
            }),
        }
    }
}
