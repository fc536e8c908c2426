//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 문자열 검증, 정리, 이메일 로컬 파트 추출

pub mod string_utils;
