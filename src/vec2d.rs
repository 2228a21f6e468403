use std::ops::{Index, IndexMut};

use crate::data::Pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Vec2d<T> {
    pub(crate) fn new(rows: usize, cols: usize, default: T) -> Self {
        Vec2d {
            data: vec![default; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && (pos.r as usize) < self.rows && (pos.c as usize) < self.cols
    }

    /// `None` when `pos` is off the grid
    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self.data[self.index_of(pos)])
        } else {
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }

    pub(crate) fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    fn index_of(&self, pos: Pos) -> usize {
        pos.r as usize * self.cols + pos.c as usize
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        assert!(self.contains(index), "{:?} is off the grid", index);
        &self.data[self.index_of(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        assert!(self.contains(index), "{:?} is off the grid", index);
        let index = self.index_of(index);
        &mut self.data[index]
    }
}
