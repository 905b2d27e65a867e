//! Axis-aligned rectangles in playfield units.
//!
//! The y axis points down: `top < bottom`, matching screen coordinates.


/// An axis-aligned rectangle stored as its top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on `(cx, cy)`.
    pub fn from_center(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    /// Rectangle whose top edge midpoint sits at `(cx, top)`.
    pub fn from_midtop(cx: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, top, width, height)
    }

    /// Rectangle whose bottom edge midpoint sits at `(cx, bottom)`.
    pub fn from_midbottom(cx: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, bottom - height, width, height)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open point test, used when rasterising the field.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    /// Shift horizontally by `dx`.
    pub fn translate_x(&mut self, dx: f64) {
        self.x += dx;
    }
}
