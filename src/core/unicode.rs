//! 유니코드 한글 분류/분해 유틸리티
//!
//! - 문자 분류 (완성형 음절, 첫가끝 자모, 호환 자모, 확장 자모)
//! - 같은 분류끼리 문자열 구간 나누기
//! - 음절 합성/분해 (SBase 공식)

use serde::Serialize;

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 초성 자모 시작 (ᄀ)
const CHOSEONG_BASE: u32 = 0x1100;
/// 중성 자모 시작 (ᅡ)
const JUNGSEONG_BASE: u32 = 0x1161;
/// 종성 기준 (U+11A7), 종성 없음 = 0
const JONGSEONG_BASE: u32 = 0x11A7;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;
/// 초성 하나당 음절 수 (588)
const SYLLABLES_PER_CHOSEONG: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 한글 관련 유니코드 블록 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HangulCharClass {
    /// 완성형 음절 (U+AC00 ~ U+D7AF)
    Syllables,
    /// 첫가끝 자모 (U+1100 ~ U+11FF)
    Jamo,
    /// 호환 자모 (U+3130 ~ U+318F)
    CompatibilityJamo,
    /// 자모 확장-A (U+A960 ~ U+A97F)
    JamoExtendedA,
    /// 자모 확장-B (U+D7B0 ~ U+D7FF)
    JamoExtendedB,
    /// 한글이 아닌 문자
    None,
}

impl From<char> for HangulCharClass {
    fn from(ch: char) -> Self {
        // 음절 블록 상한은 U+D7A3이지만 U+D7AF까지 음절로 본다 (미할당 코드포인트)
        match ch {
            '\u{AC00}'..='\u{D7AF}' => HangulCharClass::Syllables,
            '\u{1100}'..='\u{11FF}' => HangulCharClass::Jamo,
            '\u{3130}'..='\u{318F}' => HangulCharClass::CompatibilityJamo,
            '\u{A960}'..='\u{A97F}' => HangulCharClass::JamoExtendedA,
            '\u{D7B0}'..='\u{D7FF}' => HangulCharClass::JamoExtendedB,
            _ => HangulCharClass::None,
        }
    }
}

impl HangulCharClass {
    /// 문자열을 같은 분류가 연속되는 최대 구간으로 나눈다.
    /// 빈 문자열은 빈 목록.
    pub fn split(text: &str) -> Vec<(HangulCharClass, &str)> {
        let mut runs = Vec::new();
        let mut chars = text.char_indices();
        let Some((_, first)) = chars.next() else {
            return runs;
        };

        let mut start = 0;
        let mut current = HangulCharClass::from(first);
        for (idx, ch) in chars {
            let class = HangulCharClass::from(ch);
            if class != current {
                runs.push((current, &text[start..idx]));
                start = idx;
                current = class;
            }
        }
        runs.push((current, &text[start..]));
        runs
    }
}

/// 문자 하나의 한글 분류
pub fn classify(ch: char) -> HangulCharClass {
    HangulCharClass::from(ch)
}

/// 문자열의 첫 문자 분류 (빈 문자열은 `None` 분류)
pub fn classify_str(text: &str) -> HangulCharClass {
    text.chars()
        .next()
        .map(HangulCharClass::from)
        .unwrap_or(HangulCharClass::None)
}

/// [`HangulCharClass::split`]과 동일
pub fn split_by_class(text: &str) -> Vec<(HangulCharClass, &str)> {
    HangulCharClass::split(text)
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + choseong * SYLLABLES_PER_CHOSEONG
        + jungseong * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 첫가끝 자모(초성, 중성, 선택적 종성)로 음절 합성
/// 범위를 벗어난 자모가 하나라도 있으면 None
pub fn compose_jamos(initial: char, medial: char, last: Option<char>) -> Option<char> {
    let cho = (initial as u32).checked_sub(CHOSEONG_BASE)?;
    let jung = (medial as u32).checked_sub(JUNGSEONG_BASE)?;
    let jong = match last {
        Some(ch) => match (ch as u32).checked_sub(JONGSEONG_BASE)? {
            0 => return None,
            t => t,
        },
        None => 0,
    };
    compose_syllable(cho, jung, jong)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable_indices(ch: char) -> Option<(u32, u32, u32)> {
    if HangulCharClass::from(ch) != HangulCharClass::Syllables {
        return None;
    }
    let offset = ch as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = offset / SYLLABLES_PER_CHOSEONG;
    let jungseong = (offset % SYLLABLES_PER_CHOSEONG) / JONGSEONG_COUNT;
    let jongseong = offset % JONGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글을 첫가끝 자모 (초성, 중성, 종성)으로 분해
///
/// 음절이 아니면 None. 종성이 없는 음절은 세 번째 값이 None.
pub fn decompose_syllable(ch: char) -> Option<(char, char, Option<char>)> {
    let (cho, jung, jong) = decompose_syllable_indices(ch)?;
    let initial = char::from_u32(CHOSEONG_BASE + cho)?;
    let medial = char::from_u32(JUNGSEONG_BASE + jung)?;
    let last = match jong {
        0 => None,
        t => Some(char::from_u32(JONGSEONG_BASE + t)?),
    };
    Some((initial, medial, last))
}

/// 문자열 안의 모든 완성형 음절을 첫가끝 자모로 풀어 쓴다.
/// 음절이 아닌 문자는 순서와 함께 그대로 유지
pub fn decompose_all_syllables<T: AsRef<str>>(text: T) -> String {
    let text = text.as_ref();
    let mut result = String::with_capacity(text.len() * 2);

    for ch in text.chars() {
        match decompose_syllable(ch) {
            Some((initial, medial, last)) => {
                result.push(initial);
                result.push(medial);
                if let Some(last) = last {
                    result.push(last);
                }
            }
            None => result.push(ch),
        }
    }

    result
}

/// [`decompose_all_syllables`]와 동일
pub fn normalize(text: &str) -> String {
    decompose_all_syllables(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify('이'), HangulCharClass::Syllables);
        assert_eq!(classify('\u{11B8}'), HangulCharClass::Jamo); // ᆸ
        assert_eq!(classify('ㄱ'), HangulCharClass::CompatibilityJamo);
        assert_eq!(classify('\u{A960}'), HangulCharClass::JamoExtendedA);
        assert_eq!(classify('\u{D7B0}'), HangulCharClass::JamoExtendedB);
        assert_eq!(classify('h'), HangulCharClass::None);
        assert_eq!(classify('😀'), HangulCharClass::None);
    }

    #[test]
    fn test_classify_block_edges() {
        assert_eq!(classify('\u{ABFF}'), HangulCharClass::None);
        assert_eq!(classify('\u{AC00}'), HangulCharClass::Syllables);
        assert_eq!(classify('\u{D7A3}'), HangulCharClass::Syllables);
        // 미할당 구간도 음절로 분류
        assert_eq!(classify('\u{D7AF}'), HangulCharClass::Syllables);
        assert_eq!(classify('\u{10FF}'), HangulCharClass::None);
        assert_eq!(classify('\u{11FF}'), HangulCharClass::Jamo);
        assert_eq!(classify('\u{3130}'), HangulCharClass::CompatibilityJamo);
        assert_eq!(classify('\u{318F}'), HangulCharClass::CompatibilityJamo);
        assert_eq!(classify('\u{3190}'), HangulCharClass::None);
    }

    #[test]
    fn test_classify_str() {
        assert_eq!(classify_str(""), HangulCharClass::None);
        assert_eq!(classify_str("이것"), HangulCharClass::Syllables);
        assert_eq!(classify_str("h이"), HangulCharClass::None);
    }

    #[test]
    fn test_split() {
        assert!(HangulCharClass::split("").is_empty());
        assert_eq!(
            HangulCharClass::split("이"),
            vec![(HangulCharClass::Syllables, "이")]
        );
        assert_eq!(
            split_by_class("hi 이 there"),
            vec![
                (HangulCharClass::None, "hi "),
                (HangulCharClass::Syllables, "이"),
                (HangulCharClass::None, " there"),
            ]
        );
        assert_eq!(
            split_by_class("안녕ㅎ"),
            vec![
                (HangulCharClass::Syllables, "안녕"),
                (HangulCharClass::CompatibilityJamo, "ㅎ"),
            ]
        );
    }

    #[test]
    fn test_split_is_repeatable() {
        let text = "ㄱ가a가";
        assert_eq!(split_by_class(text), split_by_class(text));
        assert_eq!(split_by_class(text).len(), 4);
    }

    #[test]
    fn test_compose_syllable() {
        // 가 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 없음(0)
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        // 각 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 ㄱ(1)
        assert_eq!(compose_syllable(0, 0, 1), Some('각'));
        // 한 = 초성 ㅎ(18) + 중성 ㅏ(0) + 종성 ㄴ(4)
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(18, 20, 27), Some('힣'));

        assert_eq!(compose_syllable(19, 0, 0), None);
        assert_eq!(compose_syllable(0, 21, 0), None);
        assert_eq!(compose_syllable(0, 0, 28), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('h'), None);
        assert_eq!(decompose_syllable('ㄱ'), None);
        // 이 = ᄋ + ᅵ
        assert_eq!(decompose_syllable('이'), Some(('\u{110B}', '\u{1175}', None)));
        // 는 = ᄂ + ᅳ + ᆫ
        assert_eq!(
            decompose_syllable('는'),
            Some(('\u{1102}', '\u{1173}', Some('\u{11AB}')))
        );
    }

    #[test]
    fn test_decompose_syllable_indices() {
        assert_eq!(decompose_syllable_indices('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable_indices('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable_indices('글'), Some((0, 18, 8)));
        assert_eq!(decompose_syllable_indices('1'), None);
    }

    #[test]
    fn test_unassigned_syllable_range() {
        // U+D7A4 ~ U+D7AF는 분해는 되지만 다시 합성할 수 없다
        let (initial, _, _) = decompose_syllable('\u{D7AF}').unwrap();
        assert_eq!(initial, '\u{1113}');
        assert_eq!(decompose_syllable_indices('\u{D7AF}'), Some((19, 0, 11)));
        assert_eq!(compose_syllable(19, 0, 11), None);
    }

    #[test]
    fn test_roundtrip_all_syllables() {
        for code in 0xAC00..=0xD7A3u32 {
            let ch = char::from_u32(code).unwrap();
            let (initial, medial, last) = decompose_syllable(ch).unwrap();
            assert_eq!(compose_jamos(initial, medial, last), Some(ch));
            assert_eq!(last.is_some(), (code - 0xAC00) % 28 != 0);
        }
    }

    #[test]
    fn test_compose_jamos_rejects_out_of_range() {
        assert_eq!(compose_jamos('a', '\u{1161}', None), None);
        assert_eq!(compose_jamos('\u{1100}', '\u{1100}', None), None);
        // 종성 자리에 U+11A7(종성 없음 기준)은 올 수 없음
        assert_eq!(compose_jamos('\u{1100}', '\u{1161}', Some('\u{11A7}')), None);
        assert_eq!(compose_jamos('\u{1100}', '\u{1161}', Some('\u{11A8}')), Some('각'));
    }

    #[test]
    fn test_decompose_all_syllables() {
        let decomposed = decompose_all_syllables("이");
        assert_eq!(decomposed, "\u{110B}\u{1175}");
        assert_eq!(decomposed.chars().count(), 2);

        assert_eq!(
            decompose_all_syllables("hi 이 there"),
            "hi \u{110B}\u{1175} there"
        );
        assert_eq!(decompose_all_syllables(String::from("안")).chars().count(), 3);
    }

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("hello, world!"), "hello, world!");
        assert_eq!(normalize("ㄱㅏ \u{1100}"), "ㄱㅏ \u{1100}");
    }

    #[test]
    fn test_normalize_length_growth() {
        // 종성 있는 음절은 3자, 없는 음절은 2자
        let text = "안녕하세요 a";
        let normalized = normalize(text);
        assert_eq!(normalized.chars().count(), 3 + 3 + 2 + 2 + 2 + 2);
        assert!(normalized.chars().count() >= text.chars().count());
    }
}
