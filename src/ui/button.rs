use macroquad::prelude::*;

const IDLE: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const HOVER: Color = Color::new(0.39, 0.58, 0.93, 1.0);
const ACTIVE: Color = Color::new(0.86, 0.44, 0.58, 1.0);

/// Panel button with hover and click detection
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Draw the button; `active` highlights toggles that are currently on
    pub fn draw(&self, mouse_pos: (f32, f32), active: bool) {
        let fill = match (active, self.is_hovered(mouse_pos)) {
            (true, _) => ACTIVE,
            (false, true) => HOVER,
            (false, false) => IDLE,
        };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            x + (w - size.width) / 2.0,
            y + (h + size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
