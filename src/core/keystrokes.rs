//! 호환 자모 -> 두벌식 키 입력 분리
//!
//! 겹자음, 겹모음, 겹받침은 두벌식 자판에서 두 번의 키 입력으로 만들어진다.
//! 정답과 입력을 키 입력 단위로 펼쳐 비교하면 한 타마다 진행도를 줄 수 있다.

use std::iter::{once, Chain, Once};

use crate::core::jamo_mapper::to_compat_with_fallback;
use crate::core::unicode::decompose_all_syllables;

/// 호환 자모 하나가 만들어지는 키 입력 순서
pub type Keystrokes = Chain<Once<char>, std::option::IntoIter<char>>;

/// 복합 호환 자모를 두 키 입력으로 분리
/// 반환: (첫 번째 키, 두 번째 키), 단일 키 자모는 None
pub fn split_compound_jamo(ch: char) -> Option<(char, char)> {
    match ch {
        // 쌍자음
        'ㄲ' => Some(('ㄱ', 'ㄱ')),
        'ㄸ' => Some(('ㄷ', 'ㄷ')),
        'ㅃ' => Some(('ㅂ', 'ㅂ')),
        'ㅆ' => Some(('ㅅ', 'ㅅ')),
        'ㅉ' => Some(('ㅈ', 'ㅈ')),

        // 겹받침
        'ㄳ' => Some(('ㄱ', 'ㅅ')),
        'ㄵ' => Some(('ㄴ', 'ㅈ')),
        'ㄶ' => Some(('ㄴ', 'ㅎ')),
        'ㄺ' => Some(('ㄹ', 'ㄱ')),
        'ㄻ' => Some(('ㄹ', 'ㅁ')),
        'ㄼ' => Some(('ㄹ', 'ㅂ')),
        'ㄽ' => Some(('ㄹ', 'ㅅ')),
        'ㄾ' => Some(('ㄹ', 'ㅌ')),
        'ㄿ' => Some(('ㄹ', 'ㅍ')),
        'ㅀ' => Some(('ㄹ', 'ㅎ')),
        'ㅄ' => Some(('ㅂ', 'ㅅ')),

        // 겹모음
        'ㅘ' => Some(('ㅗ', 'ㅏ')),
        'ㅙ' => Some(('ㅗ', 'ㅐ')),
        'ㅚ' => Some(('ㅗ', 'ㅣ')),
        'ㅝ' => Some(('ㅜ', 'ㅓ')),
        'ㅞ' => Some(('ㅜ', 'ㅔ')),
        'ㅟ' => Some(('ㅜ', 'ㅣ')),
        'ㅢ' => Some(('ㅡ', 'ㅣ')),

        _ => None,
    }
}

/// 호환 자모 하나를 키 입력 순서로 펼친다.
/// 복합 자모는 두 키, 그 밖의 문자는 자기 자신 하나.
pub fn to_keystrokes(ch: char) -> Keystrokes {
    match split_compound_jamo(ch) {
        Some((first, second)) => once(first).chain(Some(second)),
        None => once(ch).chain(None::<char>),
    }
}

/// 문자열을 호환 자모 단위로 펼친다 (음절 분해 + 호환 자모 변환)
pub fn to_display_jamos(text: &str) -> Vec<char> {
    decompose_all_syllables(text)
        .chars()
        .map(to_compat_with_fallback)
        .collect()
}

/// 문자열을 키 입력 단위로 펼친다 (음절 분해 + 호환 자모 변환 + 키 분리)
pub fn to_keystroke_units(text: &str) -> Vec<char> {
    decompose_all_syllables(text)
        .chars()
        .map(to_compat_with_fallback)
        .flat_map(to_keystrokes)
        .collect()
}
