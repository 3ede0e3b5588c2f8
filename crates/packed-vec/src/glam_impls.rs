//! [`Kernel`] for `glam`'s vector types, as library reference points.
//!
//! `glam::Vec3` is a plain 12-byte struct, `glam::Vec3A` is padded to 16
//! bytes and 16-byte aligned so it can live in a SIMD register, and
//! `glam::Vec4` is the 4-wide counterpart. The arithmetic matches the
//! crate's own types: the reduction only sums `x`, `y`, `z`.

use crate::{Kernel, RESET_W, RESET_YZ};

impl Kernel for glam::Vec3 {
    #[inline(always)]
    fn apply(&mut self) {
        let sq = *self * *self;
        *self = glam::Vec3::new((sq.x + sq.y + sq.z).sqrt(), RESET_YZ, RESET_YZ);
    }
}

impl Kernel for glam::Vec3A {
    #[inline(always)]
    fn apply(&mut self) {
        let sq = *self * *self;
        *self = glam::Vec3A::new((sq.x + sq.y + sq.z).sqrt(), RESET_YZ, RESET_YZ);
    }
}

impl Kernel for glam::Vec4 {
    // The lane-wise multiply also squares w, but w never reaches the sum.
    #[inline(always)]
    fn apply(&mut self) {
        let sq = *self * *self;
        *self = glam::Vec4::new((sq.x + sq.y + sq.z).sqrt(), RESET_YZ, RESET_YZ, RESET_W);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vec3, Vec4};

    #[test]
    fn test_glam_kernels_match_packed_types() {
        let (x, y, z) = (12.5f32, -0.75, 33.0);

        let mut ours = Vec3::new(x, y, z);
        ours.apply();

        let mut g3 = glam::Vec3::new(x, y, z);
        g3.apply();
        assert_eq!(g3.to_array(), ours.to_array());

        let mut g3a = glam::Vec3A::new(x, y, z);
        g3a.apply();
        assert_eq!(g3a.to_array(), ours.to_array());

        let mut ours4 = Vec4::new(x, y, z, 5.0);
        ours4.apply();
        let mut g4 = glam::Vec4::new(x, y, z, 5.0);
        g4.apply();
        assert_eq!(g4.to_array(), ours4.to_array());
    }

    #[test]
    fn test_vec3a_is_padded() {
        assert_eq!(std::mem::size_of::<glam::Vec3>(), 12);
        assert_eq!(std::mem::size_of::<glam::Vec3A>(), 16);
    }
}
