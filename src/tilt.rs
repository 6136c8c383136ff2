// 3D tilt for cards following the pointer: up to MAX_DEG on each axis at the
// card's edges, flat at its centre.

pub const MAX_DEG: f64 = 8.0;
pub const PERSPECTIVE_PX: f64 = 800.0;
pub const LIFT_PX: f64 = 4.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// `x`, `y` are the pointer position relative to the card's top-left corner.
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Tilt {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        let rotate_x = if center_y > 0.0 {
            (y - center_y) / center_y * -MAX_DEG
        } else {
            0.0
        };
        let rotate_y = if center_x > 0.0 {
            (x - center_x) / center_x * MAX_DEG
        } else {
            0.0
        };
        Tilt { rotate_x, rotate_y }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY(-{}px)",
            PERSPECTIVE_PX, self.rotate_x, self.rotate_y, LIFT_PX
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        let tilt = Tilt::at(100.0, 50.0, 200.0, 100.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn corners_reach_max() {
        let top_left = Tilt::at(0.0, 0.0, 200.0, 100.0);
        assert_eq!(top_left, Tilt { rotate_x: 8.0, rotate_y: -8.0 });
        let bottom_right = Tilt::at(200.0, 100.0, 200.0, 100.0);
        assert_eq!(bottom_right, Tilt { rotate_x: -8.0, rotate_y: 8.0 });
    }

    #[test]
    fn zero_sized_card_does_not_divide_by_zero() {
        assert_eq!(Tilt::at(5.0, 5.0, 0.0, 0.0), Tilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn css_matches_page_transform() {
        let css = Tilt { rotate_x: 4.0, rotate_y: -2.5 }.css_transform();
        assert_eq!(css, "perspective(800px) rotateX(4deg) rotateY(-2.5deg) translateY(-4px)");
    }
}
