use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_with_equal_coords_are_equal() {
        assert_eq!(Point { x: 3, y: 7 }, Point { x: 3, y: 7 });
        assert_ne!(Point { x: 3, y: 7 }, Point { x: 7, y: 3 });
    }
}
