//! 정답 대비 입력 채점
//!
//! 퀴즈 화면은 입력이 바뀔 때마다(한 타마다) 진행도를 다시 계산한다.
//! 모든 함수는 상태 없는 순수 함수이며 입력 길이에 선형이다.
//!
//! # 사용 예시
//!
//! ```
//! use hangul_drill::scoring::{calculate_correct_keystrokes, select_best_answer};
//!
//! let progress = calculate_correct_keystrokes("김민지", "김믽");
//! assert_eq!((progress.correct, progress.total), (7, 8));
//!
//! let best = select_best_answer(&["안녕", "안녕하세요"], "안녕");
//! assert!(best.is_exact_match);
//! ```

mod best_answer;
mod matcher;

pub use best_answer::{select_best_answer, BestAnswer};
pub use matcher::{calculate_correct_jamos, calculate_correct_keystrokes, MatchResult, ScoringMode};
