//! 빌드 작업 디렉토리의 기준 경로

use std::env;
use std::path::PathBuf;

/// 임시 디렉토리를 만들 기준 경로
///
/// 항상 절대 경로를 반환하므로 `TMPDIR=tmp` 설정이어도 현재 디렉토리 아래에
/// 작업 디렉토리가 생기지 않습니다.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        PathBuf::from("/tmp")
    }
}
