//! 금칙어 치환
//!
//! 공백(`' '`) 단위로 나눈 단어 중 금칙어와 대소문자 구분 없이 일치하는 단어를
//! `****`로 바꿉니다. 구두점이 붙은 단어(`"Sharbert!"`)는 일치하지 않습니다.

/// 금칙어를 대체하는 문자열
pub const CENSORED_REPLACEMENT: &str = "****";

/// `text`에서 `wordlist`에 있는 단어를 가립니다.
///
/// `wordlist`는 소문자로 주어져야 합니다.
///
/// ```rust,ignore
/// assert_eq!(censor("I hear Mastodon is better than Chirpy. sharbert I need to migrate", &["sharbert"]),
///            "I hear Mastodon is better than Chirpy. **** I need to migrate");
/// ```
pub fn censor(text: &str, wordlist: &[&str]) -> String {
    text.split(' ')
        .map(|word| {
            if wordlist.contains(&word.to_lowercase().as_str()) {
                CENSORED_REPLACEMENT
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
