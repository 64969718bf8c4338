// ----------------------- Vector operations -----------------------
//
// Kernels over slices of GF(p) elements. `vz` is updated in place and `vx` must be at least
// as long. With the `parallel` feature the element loop runs on the rayon pool.

use crate::utils::iterator::*;

use super::{PrimeField, ZZpElem};

impl PrimeField {
    /// vz'[] = vz[] + vx[]
    pub fn add_vector(&self, vz: &mut [ZZpElem], vx: &[ZZpElem]) {
        assert!(vx.len() >= vz.len());
        get_iterator_mut(vz)
            .zip(vx)
            .for_each(|(z, x)| *z = self.add(*z, *x));
    }

    /// vz'[] = vz[] - vx[]
    pub fn sub_vector(&self, vz: &mut [ZZpElem], vx: &[ZZpElem]) {
        assert!(vx.len() >= vz.len());
        get_iterator_mut(vz)
            .zip(vx)
            .for_each(|(z, x)| *z = self.subtract(*z, *x));
    }

    /// vx'[] = vx[] * scalar
    pub fn mul_vector_by_scalar(&self, vx: &mut [ZZpElem], scalar: ZZpElem) {
        get_iterator_mut(vx).for_each(|x| *x = self.multiply(*x, scalar));
    }

    /// vz'[] = vz[] - scalar * vx[], the row operation of Gaussian elimination
    pub fn sub_scaled_vector(&self, vz: &mut [ZZpElem], vx: &[ZZpElem], scalar: ZZpElem) {
        assert!(vx.len() >= vz.len());
        if self.is_zero(scalar) {
            return;
        }
        get_iterator_mut(vz).zip(vx).for_each(|(z, x)| {
            if !self.is_zero(*x) {
                self.subtract_multiple(z, scalar, *x);
            }
        });
    }

    /// Sum of vx[i] * vy[i]
    pub fn dot_product(&self, vx: &[ZZpElem], vy: &[ZZpElem]) -> ZZpElem {
        assert_eq!(vx.len(), vy.len());
        vx.iter()
            .zip(vy)
            .fold(self.zero(), |acc, (x, y)| self.add(acc, self.multiply(*x, *y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elems(field: &PrimeField, values: &[i64]) -> Vec<ZZpElem> {
        values.iter().map(|&v| field.from_integer(v)).collect()
    }

    fn residues(field: &PrimeField, v: &[ZZpElem]) -> Vec<u32> {
        v.iter().map(|&a| field.to_residue(a)).collect()
    }

    #[test]
    fn test_add_sub_vector() {
        let field = PrimeField::new(7).unwrap();
        let mut vz = elems(&field, &[1, 2, 3, 4, 0]);
        let vx = elems(&field, &[6, 6, 0, 4, 5]);

        field.add_vector(&mut vz, &vx);
        assert_eq!(residues(&field, &vz), vec![0, 1, 3, 1, 5]);

        field.sub_vector(&mut vz, &vx);
        assert_eq!(residues(&field, &vz), vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_mul_vector_by_scalar() {
        let field = PrimeField::new(11).unwrap();
        let mut vx = elems(&field, &[0, 1, 2, 5, 10]);
        field.mul_vector_by_scalar(&mut vx, field.from_integer(3));
        assert_eq!(residues(&field, &vx), vec![0, 3, 6, 4, 8]);

        field.mul_vector_by_scalar(&mut vx, field.zero());
        assert!(vx.iter().all(|&a| field.is_zero(a)));
    }

    #[test]
    fn test_sub_scaled_vector() {
        let field = PrimeField::new(13).unwrap();
        let mut vz = elems(&field, &[5, 0, 7, 1]);
        let vx = elems(&field, &[1, 4, 0, 12]);

        field.sub_scaled_vector(&mut vz, &vx, field.from_integer(2));
        // [5-2, 0-8, 7-0, 1-24] mod 13
        assert_eq!(residues(&field, &vz), vec![3, 5, 7, 3]);

        let before = vz.clone();
        field.sub_scaled_vector(&mut vz, &vx, field.zero());
        assert_eq!(vz, before);
    }

    #[test]
    fn test_row_reduction() {
        // Solve x + 2y = 4, 3x + 5y = 1 over GF(7) by elimination; x = 3, y = 4
        let field = PrimeField::new(7).unwrap();
        let mut r0 = elems(&field, &[1, 2, 4]);
        let mut r1 = elems(&field, &[3, 5, 1]);

        let factor = r1[0];
        field.sub_scaled_vector(&mut r1, &r0, factor);
        assert!(field.is_zero(r1[0]));

        let pivot = field.invert(r1[1]);
        field.mul_vector_by_scalar(&mut r1, pivot);
        assert_eq!(r1[1], field.one());

        let factor = r0[1];
        field.sub_scaled_vector(&mut r0, &r1, factor);

        assert_eq!(residues(&field, &r0), vec![1, 0, 3]);
        assert_eq!(residues(&field, &r1), vec![0, 1, 4]);
    }

    #[test]
    fn test_dot_product() {
        let field = PrimeField::new(101).unwrap();
        let vx = elems(&field, &[1, 2, 3, 0]);
        let vy = elems(&field, &[50, 50, 1, 9]);
        // 50 + 100 + 3 = 153 = 52 mod 101
        assert_eq!(field.to_residue(field.dot_product(&vx, &vy)), 52);
        assert_eq!(field.dot_product(&[], &[]), field.zero());
    }
}
