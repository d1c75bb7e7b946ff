use std::ops;

use crate::dims::Dims;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        if !pos.all_non_negative() {
            return None;
        }

        let Dims(x, y) = pos;
        let (x, y) = (x as usize, y as usize);

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            width,
            height,
        }
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index).expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::Array2D;
    use crate::dims::Dims;

    #[test]
    fn out_of_bounds_is_none() {
        let arr = Array2D::new(0u8, 3, 2);
        assert_eq!(arr.get(Dims(2, 1)), Some(&0));
        assert_eq!(arr.get(Dims(3, 0)), None);
        assert_eq!(arr.get(Dims(0, 2)), None);
        assert_eq!(arr.get(Dims(-1, 0)), None);
    }

    #[test]
    fn idx_round_trip() {
        let arr = Array2D::new((), 4, 3);
        for pos in arr.iter_pos() {
            assert_eq!(arr.idx_to_dim(arr.dim_to_idx(pos).unwrap()), Some(pos));
        }
        assert_eq!(arr.iter_pos().count(), 12);
    }

    #[test]
    fn index_mut_writes_in_place() {
        let mut arr = Array2D::new(false, 2, 2);
        arr[Dims(1, 0)] = true;
        assert_eq!(arr.iter().filter(|&&b| b).count(), 1);
        assert!(arr[Dims(1, 0)]);
    }
}
