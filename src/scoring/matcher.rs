//! 정답 대비 입력 진행도 계산
//!
//! 정답과 입력을 같은 단위(호환 자모 또는 키 입력)로 펼친 뒤
//! 앞에서부터 처음 틀린 지점까지 일치한 단위 수를 센다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::keystrokes::{to_display_jamos, to_keystroke_units};

/// 진행도 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// 앞에서부터 연속으로 일치한 단위 수
    pub correct: usize,
    /// 정답을 펼친 전체 단위 수
    pub total: usize,
}

impl MatchResult {
    /// 정답 단위를 모두 맞췄는지 (빈 정답은 완료로 보지 않음)
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }

    /// 남은 단위 수
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.correct)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// 비교 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// 호환 자모 단위 (겹자모는 1)
    Jamo,
    /// 두벌식 키 입력 단위 (겹자모는 2)
    #[default]
    Keystroke,
}

impl ScoringMode {
    /// 선택한 단위로 진행도 계산
    pub fn score(self, correct_answer: &str, user_input: &str) -> MatchResult {
        match self {
            ScoringMode::Jamo => calculate_correct_jamos(correct_answer, user_input),
            ScoringMode::Keystroke => calculate_correct_keystrokes(correct_answer, user_input),
        }
    }

    /// 진행도 표시에 쓰는 단위 이름
    pub fn unit_name(self) -> &'static str {
        match self {
            ScoringMode::Jamo => "jamo",
            ScoringMode::Keystroke => "keystrokes",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Jamo => f.write_str("jamo"),
            ScoringMode::Keystroke => f.write_str("keystroke"),
        }
    }
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jamo" => Ok(ScoringMode::Jamo),
            "keystroke" | "keystrokes" => Ok(ScoringMode::Keystroke),
            other => Err(format!("unknown scoring mode: {other}")),
        }
    }
}

/// 정답 앞부분과 연속으로 일치하는 단위 수 (첫 불일치에서 멈춤)
fn matching_prefix_len(expected: &[char], actual: &[char]) -> usize {
    expected
        .iter()
        .zip(actual)
        .take_while(|(e, a)| e == a)
        .count()
}

fn compare_units(expected: &[char], actual: &[char]) -> MatchResult {
    MatchResult {
        correct: matching_prefix_len(expected, actual),
        total: expected.len(),
    }
}

/// 호환 자모 단위 진행도
///
/// 조합 중인 마지막 글자(ㅇ, 또는 첫가끝 ᄋ)도 정답의 해당 자모와 같게 본다.
/// 입력이 정답보다 길어도 감점하지 않는다.
pub fn calculate_correct_jamos(correct_answer: &str, user_input: &str) -> MatchResult {
    compare_units(
        &to_display_jamos(correct_answer),
        &to_display_jamos(user_input),
    )
}

/// 키 입력 단위 진행도
///
/// 겹자음, 겹모음, 겹받침은 두 단위로 센다.
pub fn calculate_correct_keystrokes(correct_answer: &str, user_input: &str) -> MatchResult {
    compare_units(
        &to_keystroke_units(correct_answer),
        &to_keystroke_units(user_input),
    )
}
