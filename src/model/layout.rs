#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

/// A pointer position in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Toolkit pointer coordinates arrive as floats; truncate to the pixel grid.
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self {
            x: x.floor() as i32,
            y: y.floor() as i32,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right() && point.y >= self.top && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(100, 0, 100, 100);
        assert!(rect.contains(Point::new(100, 0)));
        assert!(rect.contains(Point::new(199, 99)));
        assert!(!rect.contains(Point::new(200, 50)));
        assert!(!rect.contains(Point::new(150, 100)));
        assert!(!rect.contains(Point::new(99, 50)));
    }

    #[test]
    fn test_point_from_f64_floors() {
        assert_eq!(Point::from_f64(99.9, 0.2), Point::new(99, 0));
    }
}
