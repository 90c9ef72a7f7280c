//! User-facing message constants.
//!
//! Ported from the original `src/constants/index.ts` message tables
//! (success/error message columns), expressed as `&str` constants.

// Success messages
pub const FETCH_SUCCESS: &str = "항목 조회 성공";
pub const CREATE_SUCCESS: &str = "항목 생성 성공";
pub const UPDATE_SUCCESS: &str = "항목 수정 성공";
pub const DELETE_SUCCESS: &str = "항목 삭제 성공";

// Failure messages (envelope `message` column)
pub const NOT_FOUND: &str = "항목을 찾을 수 없습니다";
pub const VALIDATION_ERROR: &str = "유효성 검사 오류";
pub const BAD_REQUEST: &str = "잘못된 요청입니다";
pub const SERVER_ERROR: &str = "서버 오류 발생";

// Failure details (envelope `error` column)
pub const REQUIRED_FIELDS: &str = "제목과 설명은 필수입니다";
pub const ID_REQUIRED: &str = "ID는 필수입니다";
