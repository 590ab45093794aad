//! Country code to flag glyph lookup

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;
const WHITE_FLAG: &str = "\u{1F3F3}\u{FE0F}";

/// Renders a two-letter ISO country code as its flag glyph.
///
/// Anything that is not a two-letter ASCII code renders as a neutral white
/// flag rather than garbage.
pub fn flag_emoji(code: &str) -> String {
    let letters: Vec<char> = code.chars().map(|c| c.to_ascii_uppercase()).collect();

    if letters.len() != 2 || !letters.iter().all(|c| c.is_ascii_uppercase()) {
        return WHITE_FLAG.to_string();
    }

    letters
        .iter()
        .filter_map(|c| char::from_u32(REGIONAL_INDICATOR_A + (*c as u32 - 'A' as u32)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(flag_emoji("de"), "🇩🇪");
        assert_eq!(flag_emoji("EN"), "🇪🇳");
        assert_eq!(flag_emoji("es"), "🇪🇸");
    }

    #[test]
    fn test_invalid_codes_fall_back() {
        assert_eq!(flag_emoji(""), WHITE_FLAG);
        assert_eq!(flag_emoji("d"), WHITE_FLAG);
        assert_eq!(flag_emoji("deu"), WHITE_FLAG);
        assert_eq!(flag_emoji("1x"), WHITE_FLAG);
    }
}
