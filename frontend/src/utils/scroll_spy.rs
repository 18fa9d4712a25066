/// Vertical extent of a page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Returns the id of the section under `scroll_y`, after shifting every
/// section up by `header_allowance` for the fixed navbar. When bounds
/// overlap the last matching section wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, header_allowance: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.top - header_allowance;
            scroll_y >= top && scroll_y < top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

/// Scroll progress as a percentage in `[0, 100]`.
pub fn scroll_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}
