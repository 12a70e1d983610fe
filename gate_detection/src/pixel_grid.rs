/// Rectangular grid stored row-major in a single buffer.
/// Note: the size is fixed at construction, there is no way to resize a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Detection mask: `true` means detected, `false` means background
pub type Mask = PixelGrid<bool>;

impl<T: Clone> PixelGrid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}
impl<T> PixelGrid<T> {
    /// Builds a grid by calling `f(row, column)` in row-major order
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for column in 0..width {
                cells.push(f(row, column));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.index_of(row, column).map(|i| &self.cells[i])
    }
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.index_of(row, column).map(|i| &mut self.cells[i])
    }

    /// Iterates over `((row, column), cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / width, i % width), cell))
    }

    /// Applies `f` to every cell, keeping the dimensions
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PixelGrid<U> {
        PixelGrid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(&mut f).collect(),
        }
    }

    #[inline(always)]
    fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.height && column < self.width {
            Some(row * self.width + column)
        } else {
            None
        }
    }
}
impl Mask {
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&x| x).count()
    }
}
impl<T> std::ops::Index<(usize, usize)> for PixelGrid<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        match self.index_of(row, column) {
            Some(i) => &self.cells[i],
            None => panic!(
                "({row}, {column}) is outside of a {}x{} grid",
                self.width, self.height
            ),
        }
    }
}
impl<T> std::ops::IndexMut<(usize, usize)> for PixelGrid<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        match self.index_of(row, column) {
            Some(i) => &mut self.cells[i],
            None => panic!(
                "({row}, {column}) is outside of a {}x{} grid",
                self.width, self.height
            ),
        }
    }
}
