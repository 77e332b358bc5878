//! Rotation module - quarter-turn transform for square shapes
//!
//! Rotation is always clockwise. There is no kick table: whether the rotated
//! shape fits is decided afterwards by [`crate::collision::collides`].

use crate::shape::Shape;

/// Rotate a shape 90° clockwise.
///
/// Output cell `(r, c)` is input cell `(n - 1 - c, r)`, i.e. transpose then
/// reverse each row. The bounding box keeps its size.
///
/// # Examples
///
/// ```
/// use blockfall_core::{rotate, Shape};
///
/// let l = Shape::from_rows(&[&[1, 0], &[1, 1]]).unwrap();
/// let turned = rotate(&l);
/// assert_eq!(turned.to_rows(), vec![vec![1, 1], vec![1, 0]]);
/// ```
pub fn rotate(shape: &Shape) -> Shape {
    let n = shape.size();
    let mut out = Shape::empty(n);
    for (r, c) in shape.filled() {
        // (r, c) lands at row c, column n - 1 - r
        out.set(c, n - 1 - r, true);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_t_clockwise() {
        let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0], &[0, 0, 0]]).unwrap();
        let east = rotate(&t);
        assert_eq!(
            east.to_rows(),
            vec![vec![0, 0, 1], vec![0, 1, 1], vec![0, 0, 1]]
        );
    }

    #[test]
    fn test_rotate_keeps_size_and_count() {
        let s = Shape::from_rows(&[
            &[1, 0, 0, 0],
            &[1, 1, 0, 0],
            &[0, 0, 0, 1],
            &[0, 0, 0, 0],
        ])
        .unwrap();
        let r = rotate(&s);
        assert_eq!(r.size(), 4);
        assert_eq!(r.count(), s.count());
    }

    #[test]
    fn test_four_turns_is_identity() {
        let s = Shape::from_rows(&[&[1, 1, 0], &[0, 1, 0], &[0, 1, 1]]).unwrap();
        let back = rotate(&rotate(&rotate(&rotate(&s))));
        assert_eq!(back, s);
    }

    #[test]
    fn test_rotate_single_cell() {
        let one = Shape::from_rows(&[&[1]]).unwrap();
        assert_eq!(rotate(&one), one);
    }
}
