/// How neighbor lookups treat the edges of the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Boundary {
    /// Cells beyond the edge do not exist and never count as neighbors
    #[default]
    Bounded,
    /// Opposite edges are joined, so the grid behaves like a torus
    Toroidal,
}

impl Boundary {
    pub fn name(&self) -> &'static str {
        match self {
            Boundary::Bounded => "bounded",
            Boundary::Toroidal => "toroidal",
        }
    }

    /// Coordinates at distance <= 1 from `pos` along an axis of length `len`,
    /// as `[previous, pos, next]`. Entries that fall off a bounded edge, or
    /// that wrap onto an already listed coordinate, are `None`.
    pub fn axis_span(self, pos: usize, len: usize) -> [Option<usize>; 3] {
        debug_assert!(pos < len);
        match self {
            Boundary::Bounded => [
                pos.checked_sub(1),
                Some(pos),
                (pos + 1 < len).then_some(pos + 1),
            ],
            Boundary::Toroidal => {
                let prev = (pos + len - 1) % len;
                let next = (pos + 1) % len;
                [
                    (prev != pos).then_some(prev),
                    Some(pos),
                    (next != pos && next != prev).then_some(next),
                ]
            }
        }
    }
}
