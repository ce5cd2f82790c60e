//! User-facing toast texts.

pub const INVALID_QUERY: &str = "Invalid query";

pub const NO_MATCHES: &str = "Вибачте, немає зображень, які відповідають вашому пошуковому запиту. Будь ласка спробуйте ще раз.";

pub const SEARCH_FAILED: &str = "Помилка пошуку";

pub const END_OF_RESULTS: &str = "You've reached the end of search results";

/// Success toast shown after the first page of a query arrives.
pub fn found(total_hits: u64) -> String {
    format!("Урааа! Ми знайшли {} картинку.", total_hits)
}
