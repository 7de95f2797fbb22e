//! Custom cursor that follows the pointer and hides when it leaves the window.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            visible: true,
        }
    }
}

impl CursorState {
    pub fn move_to(&mut self, client_x: f64, client_y: f64) {
        self.x = client_x;
        self.y = client_y;
    }

    pub fn leave(&mut self) {
        self.visible = false;
    }

    pub fn enter(&mut self) {
        self.visible = true;
    }

    pub fn style(&self) -> String {
        let display = if self.visible { "block" } else { "none" };
        format!("left: {}px; top: {}px; display: {};", self.x, self.y, display)
    }
}
