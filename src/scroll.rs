// Scroll-derived page state: progress bar width, navbar style, and which
// section the nav should highlight.

/// Scroll past this many pixels and the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
/// A section counts as current this many pixels before its top reaches the viewport top.
pub const SECTION_LEAD: f64 = 100.0;

/// How far down the page the viewport is, in percent. Pages that cannot
/// scroll report 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    scroll_top / scrollable * 100.0
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AFTER
}

/// Id of the last section, in document order, whose top (less the lead)
/// has been scrolled past.
pub fn active_section<'a, I>(scroll_y: f64, sections: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut current = None;
    for (id, offset_top) in sections {
        if scroll_y >= offset_top - SECTION_LEAD {
            current = Some(id);
        }
    }
    current
}
