use crate::geometry::{Bounds, Position, ORIGIN};

/// Every position a walk visited, in order.
///
/// Entry `i` is the position *after* step `i`. The origin is the implicit
/// predecessor of entry 0 and is not stored, so a walk of `n` steps yields a
/// path of exactly `n` entries.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Path {
    xs: Vec<i64>,
    ys: Vec<i64>,
}

pub struct PathIter<'a> {
    path: &'a Path,
    pos: usize,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, position: Position) {
        self.xs.push(position.x);
        self.ys.push(position.y);
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Position> {
        Some(Position::new(*self.xs.get(index)?, *self.ys.get(index)?))
    }

    pub fn first(&self) -> Option<Position> {
        self.get(0)
    }

    pub fn last(&self) -> Option<Position> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Where the walk began. Always the origin.
    pub fn start(&self) -> Position {
        ORIGIN
    }

    pub fn xs(&self) -> &[i64] {
        &self.xs
    }

    pub fn ys(&self) -> &[i64] {
        &self.ys
    }

    pub fn iter(&self) -> PathIter {
        PathIter { path: self, pos: 0 }
    }

    /// Deltas between consecutive positions, beginning with origin -> entry 0.
    pub fn steps(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let previous = std::iter::once(self.start()).chain(self.iter().map(|(_, p)| p));

        previous
            .zip(self.iter().map(|(_, p)| p))
            .map(|(from, to)| to.delta_from(from))
    }

    /// Extent of the path, origin included.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::around(self.start());

        for (_, position) in self {
            bounds.include(position);
        }

        bounds
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = (usize, Position);
    type IntoIter = PathIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for PathIter<'a> {
    type Item = (usize, Position);

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.path.get(self.pos)?;
        let index = self.pos;

        self.pos += 1;

        Some((index, position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.path.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for PathIter<'a> {}

impl FromIterator<Position> for Path {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut path = Path::new();

        for position in iter {
            path.push(position);
        }

        path
    }
}
