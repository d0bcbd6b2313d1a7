//! 첫가끝 자모 -> 호환 자모 매핑
//!
//! 조합 중인 입력(ㅇ, ㅏ 등)은 IME가 호환 자모로 내보내므로,
//! 정답의 첫가끝 자모도 호환 자모로 바꿔야 서로 비교할 수 있다.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// 초성 자모 시작 (ᄀ)
const CHOSEONG_START: u32 = 0x1100;
/// 중성 자모 시작 (ᅡ)
const JUNGSEONG_START: u32 = 0x1161;
/// 종성 자모 시작 (ᆨ)
const JONGSEONG_START: u32 = 0x11A8;

/// 초성 인덱스 -> 호환 자모 (초성 순서와 호환 자모 순서가 다름)
#[rustfmt::skip]
static CHOSEONG_TO_COMPAT: [u32; 19] = [
    0x3131, // ㄱ
    0x3132, // ㄲ
    0x3134, // ㄴ
    0x3137, // ㄷ
    0x3138, // ㄸ
    0x3139, // ㄹ
    0x3141, // ㅁ
    0x3142, // ㅂ
    0x3143, // ㅃ
    0x3145, // ㅅ
    0x3146, // ㅆ
    0x3147, // ㅇ
    0x3148, // ㅈ
    0x3149, // ㅉ
    0x314A, // ㅊ
    0x314B, // ㅋ
    0x314C, // ㅌ
    0x314D, // ㅍ
    0x314E, // ㅎ
];

/// 중성 인덱스 -> 호환 자모 (ㅏ ~ ㅣ)
#[rustfmt::skip]
static JUNGSEONG_TO_COMPAT: [u32; 21] = [
    0x314F, // ㅏ
    0x3150, // ㅐ
    0x3151, // ㅑ
    0x3152, // ㅒ
    0x3153, // ㅓ
    0x3154, // ㅔ
    0x3155, // ㅕ
    0x3156, // ㅖ
    0x3157, // ㅗ
    0x3158, // ㅘ
    0x3159, // ㅙ
    0x315A, // ㅚ
    0x315B, // ㅛ
    0x315C, // ㅜ
    0x315D, // ㅝ
    0x315E, // ㅞ
    0x315F, // ㅟ
    0x3160, // ㅠ
    0x3161, // ㅡ
    0x3162, // ㅢ
    0x3163, // ㅣ
];

/// 종성 인덱스(1~27) -> 호환 자모
/// 종성에는 ㄸ, ㅃ, ㅉ가 없다.
#[rustfmt::skip]
static JONGSEONG_TO_COMPAT: [u32; 27] = [
    0x3131, // ㄱ
    0x3132, // ㄲ
    0x3133, // ㄳ
    0x3134, // ㄴ
    0x3135, // ㄵ
    0x3136, // ㄶ
    0x3137, // ㄷ
    0x3139, // ㄹ
    0x313A, // ㄺ
    0x313B, // ㄻ
    0x313C, // ㄼ
    0x313D, // ㄽ
    0x313E, // ㄾ
    0x313F, // ㄿ
    0x3140, // ㅀ
    0x3141, // ㅁ
    0x3142, // ㅂ
    0x3144, // ㅄ
    0x3145, // ㅅ
    0x3146, // ㅆ
    0x3147, // ㅇ
    0x3148, // ㅈ
    0x314A, // ㅊ
    0x314B, // ㅋ
    0x314C, // ㅌ
    0x314D, // ㅍ
    0x314E, // ㅎ
];

lazy_static! {
    /// 첫가끝 자모 -> 호환 자모 조회 테이블
    static ref JAMO_TO_COMPAT: HashMap<char, char> = build_compat_table();
}

fn build_compat_table() -> HashMap<char, char> {
    let tables: [(u32, &[u32]); 3] = [
        (CHOSEONG_START, &CHOSEONG_TO_COMPAT),
        (JUNGSEONG_START, &JUNGSEONG_TO_COMPAT),
        (JONGSEONG_START, &JONGSEONG_TO_COMPAT),
    ];

    let mut map = HashMap::with_capacity(19 + 21 + 27);
    for (start, compat_codes) in tables {
        for (offset, &compat) in (0u32..).zip(compat_codes) {
            if let (Some(jamo), Some(compat)) =
                (char::from_u32(start + offset), char::from_u32(compat))
            {
                map.insert(jamo, compat);
            }
        }
    }
    map
}

/// 첫가끝 자모를 대응하는 호환 자모로 변환
///
/// 호환 자모는 단독으로 표시해도 앞뒤 간격이 깨지지 않는다.
/// 대응하는 호환 자모가 없으면(옛한글, 한글이 아닌 문자 등) None.
pub fn to_compat(ch: char) -> Option<char> {
    JAMO_TO_COMPAT.get(&ch).copied()
}

/// 첫가끝 자모를 호환 자모로 변환, 대응이 없으면 원래 문자 그대로
pub fn to_compat_with_fallback(ch: char) -> char {
    to_compat(ch).unwrap_or(ch)
}
