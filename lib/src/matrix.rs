/// A square grid of QR modules
///
/// `data` is stored row-major: the module at row `r`, column `c` lives at
/// `data[r * size + c]` and is `true` when the module is dark in the QR
/// standard sense. Darkness here is unrelated to display inversion - the
/// renderers apply the invert flag on top of these raw values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    size: usize,
    data: Vec<bool>,
}

impl BitMatrix {
    /// Create a matrix from row-major module data
    ///
    /// # Panics
    /// Panics if `data.len() != size * size`. A mismatched buffer is a
    /// programming error, not a recoverable condition.
    pub fn new(size: usize, data: Vec<bool>) -> Self {
        assert_eq!(
            data.len(),
            size * size,
            "BitMatrix data length must be size * size"
        );
        Self { size, data }
    }

    /// Number of modules per side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw darkness of the module at (row, col)
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range. The renderers handle
    /// quiet-zone coordinates themselves before calling this.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.size && col < self.size, "module out of range");
        self.data[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let m = BitMatrix::new(2, vec![true, false, false, true]);
        assert_eq!(m.size(), 2);
        assert!(m.get(0, 0));
        assert!(!m.get(0, 1));
        assert!(!m.get(1, 0));
        assert!(m.get(1, 1));
    }

    #[test]
    fn test_new_empty() {
        let m = BitMatrix::new(0, vec![]);
        assert_eq!(m.size(), 0);
    }

    #[test]
    #[should_panic(expected = "BitMatrix data length must be size * size")]
    fn test_new_length_mismatch() {
        BitMatrix::new(3, vec![true; 8]);
    }

    #[test]
    #[should_panic(expected = "module out of range")]
    fn test_get_out_of_range() {
        let m = BitMatrix::new(1, vec![true]);
        m.get(0, 1);
    }
}
