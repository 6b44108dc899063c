//! Text helpers shared by the front end and the tester reports.

/// Banner lines cycled while a purchase is being judged.
pub const LOADING_MESSAGES: [&str; 5] = [
    "虚空でアイテムを探しています...",
    "コストを算出中...",
    "時間を歪めています...",
    "シナジーを計算中...",
    "運命のダイスを振っています...",
];

/// Loading banner for tick `tick`, wrapping around.
#[must_use]
pub fn loading_message(tick: usize) -> &'static str {
    LOADING_MESSAGES[tick % LOADING_MESSAGES.len()]
}

/// `1234567` -> `1,234,567`.
#[must_use]
pub fn group_digits(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
