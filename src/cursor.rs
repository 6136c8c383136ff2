// Soft glow that follows the pointer on devices that can hover.

pub const HOVER_QUERY: &str = "(hover:hover)";

/// CSS `left` / `top` values placing the glow at the pointer.
pub fn glow_position(client_x: i32, client_y: i32) -> (String, String) {
    (format!("{}px", client_x), format!("{}px", client_y))
}
