//! 여러 정답 후보 중 입력에 가장 가까운 정답 고르기

use std::fmt;

use serde::Serialize;

use crate::scoring::matcher::calculate_correct_keystrokes;

/// 선택된 정답과 키 입력 진행도
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestAnswer {
    pub answer: String,
    pub correct: usize,
    pub total: usize,
    /// 입력이 정답 문자열과 글자 그대로 같은지
    pub is_exact_match: bool,
}

impl BestAnswer {
    /// 후보가 하나도 없을 때의 초기값 (total = 무한대)
    fn sentinel() -> Self {
        Self {
            answer: String::new(),
            correct: 0,
            total: usize::MAX,
            is_exact_match: false,
        }
    }

    /// 이 후보가 지금까지의 최선보다 나은지
    /// 일치 수가 같으면 더 짧은(같은 길이 포함) 후보를 택한다.
    fn is_beaten_by(&self, correct: usize, total: usize) -> bool {
        correct > self.correct || (correct == self.correct && total <= self.total)
    }
}

impl fmt::Display for BestAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} keystrokes correct", self.correct, self.total)
    }
}

/// 정답 후보 중 입력과 키 입력 진행도가 가장 높은 후보 선택
///
/// 입력과 글자 그대로 같은 후보가 있으면 그 자리에서 바로 반환한다.
pub fn select_best_answer<S: AsRef<str>>(possible_answers: &[S], user_input: &str) -> BestAnswer {
    let mut best = BestAnswer::sentinel();

    for answer in possible_answers {
        let answer = answer.as_ref();
        let result = calculate_correct_keystrokes(answer, user_input);

        if answer == user_input {
            return BestAnswer {
                answer: answer.to_owned(),
                correct: result.correct,
                total: result.total,
                is_exact_match: true,
            };
        }

        if best.is_beaten_by(result.correct, result.total) {
            best = BestAnswer {
                answer: answer.to_owned(),
                correct: result.correct,
                total: result.total,
                is_exact_match: false,
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_wins() {
        let best = select_best_answer(&["안녕", "안녕하세요"], "안녕");
        assert_eq!(best.answer, "안녕");
        assert!(best.is_exact_match);
        assert_eq!((best.correct, best.total), (6, 6));
    }

    #[test]
    fn test_exact_match_short_circuits() {
        // 뒤에 더 긴 일치 후보가 있어도 먼저 나온 정확 일치가 이김
        let best = select_best_answer(&["안녕하세요", "안녕", "안녕"], "안녕");
        assert_eq!(best.answer, "안녕");
        assert!(best.is_exact_match);
    }

    #[test]
    fn test_more_correct_wins() {
        let best = select_best_answer(&["안녕", "안녕하세요"], "안녕하");
        assert_eq!(best.answer, "안녕하세요");
        assert_eq!((best.correct, best.total), (8, 12));
        assert!(!best.is_exact_match);
    }

    #[test]
    fn test_tie_prefers_shorter() {
        let best = select_best_answer(&["안녕하세요", "안녕"], "안");
        assert_eq!(best.answer, "안녕");
        assert_eq!((best.correct, best.total), (3, 6));

        let best = select_best_answer(&["안녕", "안녕하세요"], "안");
        assert_eq!(best.answer, "안녕");
    }

    #[test]
    fn test_full_tie_takes_later_candidate() {
        let best = select_best_answer(&["가나", "가다"], "가");
        assert_eq!(best.answer, "가다");
        assert_eq!((best.correct, best.total), (2, 4));
    }

    #[test]
    fn test_no_match_still_picks_candidate() {
        let best = select_best_answer(&["안녕하세요", "감사"], "xyz");
        assert_eq!(best.correct, 0);
        assert_eq!(best.answer, "감사");
    }

    #[test]
    fn test_empty_candidates() {
        let answers: [&str; 0] = [];
        let best = select_best_answer(&answers, "안녕");
        assert_eq!(best.answer, "");
        assert_eq!(best.correct, 0);
        assert_eq!(best.total, usize::MAX);
        assert!(!best.is_exact_match);
    }

    #[test]
    fn test_owned_strings() {
        let answers = vec![String::from("김민지"), String::from("민지")];
        let best = select_best_answer(answers.as_slice(), "김믽");
        assert_eq!(best.answer, "김민지");
        assert_eq!((best.correct, best.total), (7, 8));
        assert_eq!(best.to_string(), "7/8 keystrokes correct");
    }
}
