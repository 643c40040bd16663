//! Scroll spy and smooth navigation math.
//!
//! Everything in here is pure: the browser side (`app::scroll_spy`) measures
//! the live layout on every event and hands the numbers to these functions.

/// Distance below the viewport top at which a section counts as "reached".
pub const SPY_OFFSET: f64 = 100.0;
/// Height of the fixed navbar that navigation targets must clear.
pub const NAVBAR_HEIGHT: f64 = 80.0;
/// Scroll distance after which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 10.0;
/// Scroll distance after which the scroll-to-top button shows.
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 500.0;

/// Vertical extent of a section, read from the layout at call time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry<T> {
    pub id: T,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl<T> SectionGeometry<T> {
    pub fn new(id: T, offset_top: f64, offset_height: f64) -> Self {
        Self {
            id,
            offset_top,
            offset_height,
        }
    }

    /// Geometry for an id with no element in the document. The range is
    /// empty so it never contains a scroll position.
    pub fn missing(id: T) -> Self {
        Self::new(id, 0.0, 0.0)
    }

    pub fn contains(&self, position: f64) -> bool {
        self.offset_top <= position && position < self.offset_top + self.offset_height
    }
}

/// First section (in input order) whose range contains `scroll_y + offset`.
pub fn active_section<T: Copy>(
    sections: &[SectionGeometry<T>],
    scroll_y: f64,
    offset: f64,
) -> Option<T> {
    let position = scroll_y + offset;
    sections
        .iter()
        .find(|section| section.contains(position))
        .map(|section| section.id)
}

/// Scroll destination that puts an element's top just below the fixed navbar.
///
/// `element_top` is relative to the viewport, as returned by
/// `getBoundingClientRect`.
pub fn navigation_target(element_top: f64, scroll_y: f64, overlay_height: f64) -> f64 {
    element_top + scroll_y - overlay_height
}

/// Where navigation to an element should scroll, or `None` when the element
/// isn't in the document and nothing should move.
pub fn plan_navigation(element_top: Option<f64>, scroll_y: f64, overlay_height: f64) -> Option<f64> {
    element_top.map(|top| navigation_target(top, scroll_y, overlay_height))
}

pub fn is_scrolled_past(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::Section;

    fn two_sections() -> Vec<SectionGeometry<&'static str>> {
        vec![
            SectionGeometry::new("A", 0.0, 100.0),
            SectionGeometry::new("B", 100.0, 200.0),
        ]
    }

    #[test]
    fn test_active_section_ranges() {
        let sections = two_sections();
        assert_eq!(active_section(&sections, 50.0, 0.0), Some("A"));
        assert_eq!(active_section(&sections, 150.0, 0.0), Some("B"));
        assert_eq!(active_section(&sections, 300.0, 0.0), None);
    }

    #[test]
    fn test_range_bounds() {
        let sections = two_sections();
        // lower bound inclusive, upper bound exclusive
        assert_eq!(active_section(&sections, 0.0, 0.0), Some("A"));
        assert_eq!(active_section(&sections, 100.0, 0.0), Some("B"));
        assert_eq!(active_section(&sections, 299.9, 0.0), Some("B"));
        assert_eq!(active_section(&sections, -1.0, 0.0), None);
    }

    #[test]
    fn test_offset_is_added_to_scroll() {
        let sections = two_sections();
        assert_eq!(active_section(&sections, 0.0, SPY_OFFSET), Some("B"));
        assert_eq!(active_section(&sections, 200.0, SPY_OFFSET), None);
    }

    #[test]
    fn test_overlap_first_in_order_wins() {
        let sections = vec![
            SectionGeometry::new("A", 0.0, 500.0),
            SectionGeometry::new("B", 100.0, 200.0),
        ];
        assert_eq!(active_section(&sections, 150.0, 0.0), Some("A"));
        let reversed = sections.iter().rev().copied().collect::<Vec<_>>();
        assert_eq!(active_section(&reversed, 150.0, 0.0), Some("B"));
    }

    #[test]
    fn test_missing_element_never_active() {
        let sections = vec![
            SectionGeometry::missing(Section::Home),
            SectionGeometry::new(Section::About, 0.0, 800.0),
        ];
        assert_eq!(active_section(&sections, 0.0, 0.0), Some(Section::About));
        assert_eq!(active_section(&[SectionGeometry::missing(Section::Home)], 0.0, 0.0), None);
    }

    #[test]
    fn test_at_most_one_active() {
        let mut top = 0.0;
        let sections = Section::ALL
            .iter()
            .map(|s| {
                let g = SectionGeometry::new(*s, top, 700.0);
                top += 700.0;
                g
            })
            .collect::<Vec<_>>();
        let mut scroll = -200.0;
        while scroll < top + 200.0 {
            let position = scroll + SPY_OFFSET;
            let containing = sections.iter().filter(|s| s.contains(position)).count();
            assert!(containing <= 1);
            let active = active_section(&sections, scroll, SPY_OFFSET);
            assert_eq!(active.is_some(), containing == 1);
            scroll += 37.0;
        }
    }

    #[test]
    fn test_navigation_target() {
        assert_eq!(navigation_target(500.0, 0.0, NAVBAR_HEIGHT), 420.0);
        // element already scrolled partly out of view
        assert_eq!(navigation_target(-100.0, 1000.0, NAVBAR_HEIGHT), 820.0);
    }

    #[test]
    fn test_plan_navigation() {
        assert_eq!(plan_navigation(Some(500.0), 0.0, NAVBAR_HEIGHT), Some(420.0));
        assert_eq!(plan_navigation(Some(-100.0), 1000.0, NAVBAR_HEIGHT), Some(820.0));
    }

    #[test]
    fn test_plan_navigation_missing_element() {
        assert_eq!(plan_navigation(None, 0.0, NAVBAR_HEIGHT), None);
        assert_eq!(plan_navigation(None, 1234.0, NAVBAR_HEIGHT), None);
    }

    #[test]
    fn test_scroll_thresholds() {
        assert!(!is_scrolled_past(10.0, NAVBAR_SCROLLED_THRESHOLD));
        assert!(is_scrolled_past(10.5, NAVBAR_SCROLLED_THRESHOLD));
        assert!(!is_scrolled_past(500.0, SCROLL_TO_TOP_THRESHOLD));
        assert!(is_scrolled_past(501.0, SCROLL_TO_TOP_THRESHOLD));
    }
}
