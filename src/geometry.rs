use core::fmt;
use core::str::FromStr;

/// The walk always starts here.
pub const ORIGIN: Position = Position { x: 0, y: 0 };

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, (dx, dy): (i64, i64)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Per-axis delta from `other` to `self`.
    pub fn delta_from(self, other: Position) -> (i64, i64) {
        (self.x - other.x, self.y - other.y)
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Inclusive extent of a set of positions.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Bounds {
    pub fn around(position: Position) -> Self {
        Self {
            min_x: position.x,
            max_x: position.x,
            min_y: position.y,
            max_y: position.y,
        }
    }

    pub fn include(&mut self, position: Position) {
        self.min_x = self.min_x.min(position.x);
        self.max_x = self.max_x.max(position.x);
        self.min_y = self.min_y.min(position.y);
        self.max_y = self.max_y.max(position.y);
    }

    pub fn contains(&self, position: Position) -> bool {
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_y..=self.max_y).contains(&position.y)
    }

    pub fn width(&self) -> u64 {
        self.max_x.abs_diff(self.min_x)
    }

    pub fn height(&self) -> u64 {
        self.max_y.abs_diff(self.min_y)
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn uniform(size: usize) -> Self {
        Self::new(size, size)
    }

    pub fn area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw_width, raw_height) = s.split_once('x').ok_or(format!("invalid format: {}", s))?;

        let width = raw_width
            .parse::<u32>()
            .map_err(|_| format!("invalid width: {}", raw_width))? as usize;
        let height = raw_height
            .parse::<u32>()
            .map_err(|_| format!("invalid height: {}", raw_height))? as usize;

        if width == 0 || height == 0 {
            return Err(format!("size must not be empty: {}", s));
        }

        // one RGBA frame of this size must be addressable
        if width.checked_mul(height).and_then(|a| a.checked_mul(4)).is_none() {
            return Err(format!("size too large: {}", s));
        }

        Ok(Size { width, height })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
