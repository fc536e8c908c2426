//! 경고 로그 싱크
//!
//! 리졸버가 폴백 경로를 탈 때 남기는 구조화된 경고의 출력처입니다.
//! 응답을 기다리지 않는 fire-and-forget 계약입니다.

use crate::errors::errors::AppError;

pub trait WarningSink: Send + Sync {
    /// 경고 한 건을 기록합니다. 실패해도 호출자에게 알리지 않습니다.
    fn warn(&self, message: &str, error: &AppError);
}

/// `log::warn!`으로 전달하는 기본 싱크
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWarningSink;

impl WarningSink for LogWarningSink {
    fn warn(&self, message: &str, error: &AppError) {
        log::warn!("{}: [{}] {}", message, error.name(), error);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;
    use super::*;

    /// 기록된 경고를 보관하는 테스트용 싱크
    #[derive(Default)]
    pub struct RecordingSink {
        pub entries: Mutex<Vec<(String, String)>>,
    }

    impl RecordingSink {
        pub fn count(&self) -> usize {
            self.entries.lock().unwrap().len()
        }

        pub fn messages(&self) -> Vec<(String, String)> {
            self.entries.lock().unwrap().clone()
        }
    }

    impl WarningSink for RecordingSink {
        fn warn(&self, message: &str, error: &AppError) {
            self.entries
                .lock()
                .unwrap()
                .push((message.to_string(), error.to_string()));
        }
    }
}
