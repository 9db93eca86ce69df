// 🧭 Navigation - anchor ids, scroll-spy and click targets
// Pure geometry: the page script and the terminal viewer both feed offsets in.

/// Pixels below the viewport top at which a section counts as "reached"
pub const DEFAULT_SPY_THRESHOLD: f64 = 200.0;

/// Height of the fixed header that a clicked section must clear
pub const DEFAULT_HEADER_OFFSET: f64 = 160.0;

/// Derive the fragment id used for a category's section and nav link.
///
/// Lowercases, then replaces every char outside `[a-z0-9]` with `_`
/// (one `_` per char, accented letters included).
pub fn anchor_id(category: &str) -> String {
    category
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '_' })
        .collect()
}

/// Index of the section that is currently active.
///
/// That is the last section whose top offset is at or above
/// `scroll_y + threshold`. `None` while the first section is still below.
pub fn active_section(section_tops: &[f64], scroll_y: f64, threshold: f64) -> Option<usize> {
    let line = scroll_y + threshold;
    section_tops.iter().rposition(|&top| top <= line)
}

/// Horizontal (or vertical) extent of an element, in the same coordinate space
/// as the strip it lives in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub start: f64,
    pub end: f64,
}

impl Extent {
    pub fn new(start: f64, end: f64) -> Self {
        Extent { start, end }
    }
}

/// True when the active link is clipped by its navigation strip and
/// has to be scrolled into view.
pub fn needs_reveal(link: Extent, strip: Extent) -> bool {
    link.start < strip.start || link.end > strip.end
}

/// Scroll position for a clicked nav link: the section top minus the fixed
/// header, never above the page start.
pub fn scroll_target(section_top: f64, header_offset: f64) -> f64 {
    (section_top - header_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_safe(id: &str) -> bool {
        !id.is_empty() && id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    }

    #[test]
    fn test_anchor_id_curly_apostrophe() {
        let id = anchor_id("A l\u{2019}hora del Vermut");

        assert_eq!(id, "a_l_hora_del_vermut");
        assert!(is_safe(&id));
    }

    #[test]
    fn test_anchor_id_accents_and_digits() {
        assert_eq!(anchor_id("Cafès"), "caf_s");
        assert_eq!(anchor_id("Plats Combinats"), "plats_combinats");
        assert_eq!(anchor_id("Menú 2x1"), "men__2x1");
    }

    #[test]
    fn test_anchor_id_is_stable() {
        assert_eq!(anchor_id("Entrepans Freds"), anchor_id("Entrepans Freds"));
        assert_eq!(anchor_id("Tapes"), anchor_id("TAPES"));
    }

    #[test]
    fn test_active_section_picks_last_reached() {
        let tops = [100.0, 900.0, 1500.0];

        assert_eq!(active_section(&tops, 0.0, DEFAULT_SPY_THRESHOLD), Some(0));
        assert_eq!(active_section(&tops, 700.0, DEFAULT_SPY_THRESHOLD), Some(1));
        assert_eq!(active_section(&tops, 1299.0, DEFAULT_SPY_THRESHOLD), Some(1));
        assert_eq!(active_section(&tops, 1300.0, DEFAULT_SPY_THRESHOLD), Some(2));
        assert_eq!(active_section(&tops, 99_999.0, DEFAULT_SPY_THRESHOLD), Some(2));
    }

    #[test]
    fn test_active_section_none_before_first() {
        let tops = [500.0, 900.0];

        assert_eq!(active_section(&tops, 0.0, DEFAULT_SPY_THRESHOLD), None);
        assert_eq!(active_section(&[], 0.0, DEFAULT_SPY_THRESHOLD), None);
    }

    #[test]
    fn test_needs_reveal() {
        let strip = Extent::new(0.0, 400.0);

        assert!(!needs_reveal(Extent::new(10.0, 120.0), strip));
        assert!(!needs_reveal(Extent::new(0.0, 400.0), strip));
        assert!(needs_reveal(Extent::new(-5.0, 80.0), strip));
        assert!(needs_reveal(Extent::new(350.0, 460.0), strip));
    }

    #[test]
    fn test_scroll_target_clears_header() {
        assert_eq!(scroll_target(1000.0, DEFAULT_HEADER_OFFSET), 840.0);
        assert_eq!(scroll_target(100.0, DEFAULT_HEADER_OFFSET), 0.0);
    }
}
