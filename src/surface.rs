// Drawing calls the particle field issues each frame. The browser's 2D
// context is the real implementation; tests record the calls instead.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_disc(&mut self, x: f64, y: f64, radius: f64, style: &str);
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, style: &str);
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_disc(&mut self, x: f64, y: f64, radius: f64, style: &str) {
        self.begin_path();
        // arc only fails for a negative radius
        if self.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0).is_ok() {
            self.set_fill_style(&JsValue::from_str(style));
            self.fill();
        }
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, style: &str) {
        self.begin_path();
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.set_stroke_style(&JsValue::from_str(style));
        self.set_line_width(width);
        self.stroke();
    }
}
