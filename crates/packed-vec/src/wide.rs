//! Wide batches: `N` logical vectors stored split by component.
//!
//! Lane `i` of a batch is the logical vector `(x[i], y[i], z[i][, w[i]])`.
//! Every operation runs the scalar arithmetic of [`Vec3`]/[`Vec4`] once per
//! lane, as straight loops over fixed-length arrays so the compiler can map
//! them onto SIMD registers.

use crate::{LayoutError, Vec3, Vec4, RESET_W, RESET_YZ};

/// `N` 3-component vectors in structure-of-arrays form.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3Wide<const N: usize> {
    pub x: [f32; N],
    pub y: [f32; N],
    pub z: [f32; N],
}

impl<const N: usize> Default for Vec3Wide<N> {
    fn default() -> Self {
        Self {
            x: [0.0; N],
            y: [0.0; N],
            z: [0.0; N],
        }
    }
}

impl<const N: usize> Vec3Wide<N> {
    pub const LANES: usize = N;

    /// Broadcast one vector into every lane.
    #[inline]
    pub fn splat(v: Vec3) -> Self {
        Self {
            x: [v.x; N],
            y: [v.y; N],
            z: [v.z; N],
        }
    }

    pub fn from_lanes(lanes: [Vec3; N]) -> Self {
        let mut out = Self::default();
        for (i, v) in lanes.iter().enumerate() {
            out.set_lane(i, *v);
        }
        out
    }

    pub fn to_lanes(&self) -> [Vec3; N] {
        std::array::from_fn(|i| self.lane(i))
    }

    /// Panics if `i >= N`.
    #[inline]
    pub fn lane(&self, i: usize) -> Vec3 {
        Vec3::new(self.x[i], self.y[i], self.z[i])
    }

    /// Panics if `i >= N`.
    #[inline]
    pub fn set_lane(&mut self, i: usize, v: Vec3) {
        self.x[i] = v.x;
        self.y[i] = v.y;
        self.z[i] = v.z;
    }

    /// Per-lane `x*x + y*y + z*z`.
    #[inline(always)]
    pub fn self_dot(&self) -> [f32; N] {
        let mut out = [0.0; N];
        for i in 0..N {
            out[i] = self.x[i] * self.x[i] + self.y[i] * self.y[i] + self.z[i] * self.z[i];
        }
        out
    }

    #[inline(always)]
    pub fn squared_components(&self) -> Self {
        let mut out = Self::default();
        for i in 0..N {
            out.x[i] = self.x[i] * self.x[i];
            out.y[i] = self.y[i] * self.y[i];
            out.z[i] = self.z[i] * self.z[i];
        }
        out
    }

    /// Per-lane `sqrt(x + y + z)` into `x`, `y`/`z` reset.
    #[inline(always)]
    pub fn reduce_reset(&self) -> Self {
        let mut x = [0.0; N];
        for i in 0..N {
            x[i] = (self.x[i] + self.y[i] + self.z[i]).sqrt();
        }
        Self {
            x,
            y: [RESET_YZ; N],
            z: [RESET_YZ; N],
        }
    }
}

/// `N` 4-component vectors in structure-of-arrays form.
///
/// The `w` lanes default to 1 and are never read by the arithmetic.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec4Wide<const N: usize> {
    pub x: [f32; N],
    pub y: [f32; N],
    pub z: [f32; N],
    pub w: [f32; N],
}

impl<const N: usize> Default for Vec4Wide<N> {
    fn default() -> Self {
        Self {
            x: [0.0; N],
            y: [0.0; N],
            z: [0.0; N],
            w: [1.0; N],
        }
    }
}

impl<const N: usize> Vec4Wide<N> {
    pub const LANES: usize = N;

    #[inline]
    pub fn splat(v: Vec4) -> Self {
        Self {
            x: [v.x; N],
            y: [v.y; N],
            z: [v.z; N],
            w: [v.w; N],
        }
    }

    pub fn from_lanes(lanes: [Vec4; N]) -> Self {
        let mut out = Self::default();
        for (i, v) in lanes.iter().enumerate() {
            out.set_lane(i, *v);
        }
        out
    }

    pub fn to_lanes(&self) -> [Vec4; N] {
        std::array::from_fn(|i| self.lane(i))
    }

    /// Panics if `i >= N`.
    #[inline]
    pub fn lane(&self, i: usize) -> Vec4 {
        Vec4::new(self.x[i], self.y[i], self.z[i], self.w[i])
    }

    /// Panics if `i >= N`.
    #[inline]
    pub fn set_lane(&mut self, i: usize, v: Vec4) {
        self.x[i] = v.x;
        self.y[i] = v.y;
        self.z[i] = v.z;
        self.w[i] = v.w;
    }

    /// Per-lane `x*x + y*y + z*z`; `w` is excluded.
    #[inline(always)]
    pub fn self_dot(&self) -> [f32; N] {
        let mut out = [0.0; N];
        for i in 0..N {
            out[i] = self.x[i] * self.x[i] + self.y[i] * self.y[i] + self.z[i] * self.z[i];
        }
        out
    }

    #[inline(always)]
    pub fn squared_components(&self) -> Self {
        let mut out = Self {
            w: self.w,
            ..Self::default()
        };
        for i in 0..N {
            out.x[i] = self.x[i] * self.x[i];
            out.y[i] = self.y[i] * self.y[i];
            out.z[i] = self.z[i] * self.z[i];
        }
        out
    }

    /// Per-lane `sqrt(x + y + z)` into `x`, `y`/`z` reset to 0, `w` to 1.
    #[inline(always)]
    pub fn reduce_reset(&self) -> Self {
        let mut x = [0.0; N];
        for i in 0..N {
            x[i] = (self.x[i] + self.y[i] + self.z[i]).sqrt();
        }
        Self {
            x,
            y: [RESET_YZ; N],
            z: [RESET_YZ; N],
            w: [RESET_W; N],
        }
    }
}

fn check_batches(len: usize, lanes: usize) -> Result<(), LayoutError> {
    if lanes == 0 {
        return Err(LayoutError::ZeroLanes);
    }
    if len % lanes != 0 {
        return Err(LayoutError::RaggedBatch { len, lanes });
    }
    Ok(())
}

/// Pack interleaved vectors into `len / N` wide batches.
pub fn gather3<const N: usize>(vectors: &[Vec3]) -> Result<Vec<Vec3Wide<N>>, LayoutError> {
    check_batches(vectors.len(), N)?;
    Ok(vectors
        .chunks_exact(N)
        .map(|chunk| {
            let mut batch = Vec3Wide::<N>::default();
            for (i, v) in chunk.iter().enumerate() {
                batch.set_lane(i, *v);
            }
            batch
        })
        .collect())
}

/// Pack interleaved vectors into `len / N` wide batches.
pub fn gather4<const N: usize>(vectors: &[Vec4]) -> Result<Vec<Vec4Wide<N>>, LayoutError> {
    check_batches(vectors.len(), N)?;
    Ok(vectors
        .chunks_exact(N)
        .map(|chunk| {
            let mut batch = Vec4Wide::<N>::default();
            for (i, v) in chunk.iter().enumerate() {
                batch.set_lane(i, *v);
            }
            batch
        })
        .collect())
}

/// Unpack wide batches back to interleaved vectors, lane order preserved.
pub fn scatter3<const N: usize>(batches: &[Vec3Wide<N>]) -> Vec<Vec3> {
    batches.iter().flat_map(|b| b.to_lanes()).collect()
}

/// Unpack wide batches back to interleaved vectors, lane order preserved.
pub fn scatter4<const N: usize>(batches: &[Vec4Wide<N>]) -> Vec<Vec4> {
    batches.iter().flat_map(|b| b.to_lanes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kernel;
    use std::mem::size_of;

    fn sample3() -> [Vec3; 4] {
        [
            Vec3::new(1.0, 2.0, 2.0),
            Vec3::new(-3.0, 0.0, 4.0),
            Vec3::new(0.5, -0.25, 8.0),
            Vec3::new(-99.0, 100.0, -0.125),
        ]
    }

    #[test]
    fn test_batch_is_n_fold_compaction() {
        assert_eq!(size_of::<Vec3Wide<8>>(), 8 * size_of::<Vec3>());
        assert_eq!(size_of::<Vec4Wide<8>>(), 8 * size_of::<Vec4>());
    }

    #[test]
    fn test_default_lanes() {
        let b = Vec4Wide::<8>::default();
        for i in 0..8 {
            assert_eq!(b.lane(i), Vec4::default());
        }
        assert_eq!(Vec3Wide::<8>::default(), Vec3Wide::splat(Vec3::ZERO));
    }

    #[test]
    fn test_lane_round_trip() {
        let lanes = sample3();
        let batch = Vec3Wide::from_lanes(lanes);
        assert_eq!(batch.to_lanes(), lanes);
        assert_eq!(batch.x, [1.0, -3.0, 0.5, -99.0]);
    }

    #[test]
    fn test_wide_self_dot_matches_scalar_per_lane() {
        let lanes = sample3();
        let dots = Vec3Wide::from_lanes(lanes).self_dot();
        for (i, v) in lanes.iter().enumerate() {
            assert_eq!(dots[i], v.self_dot(), "lane {}", i);
        }

        let lanes4 = lanes.map(|v| Vec4::new(v.x, v.y, v.z, 50.0 + v.x));
        let dots4 = Vec4Wide::from_lanes(lanes4).self_dot();
        assert_eq!(dots, dots4);
    }

    #[test]
    fn test_wide_kernel_matches_scalar_per_lane() {
        let lanes = sample3();
        let mut batch = Vec3Wide::from_lanes(lanes);
        batch.apply();
        for (i, v) in lanes.iter().enumerate() {
            let mut expected = *v;
            expected.apply();
            assert_eq!(batch.lane(i), expected, "lane {}", i);
        }
    }

    #[test]
    fn test_wide4_reset_overwrites_every_lane() {
        let mut batch = Vec4Wide::<8>::splat(Vec4::new(7.0, -1.0, 3.5, -20.0));
        batch.apply();
        assert_eq!(batch.y, [0.0; 8]);
        assert_eq!(batch.z, [0.0; 8]);
        assert_eq!(batch.w, [1.0; 8]);
    }

    #[test]
    fn test_squared_components_carries_w() {
        let batch = Vec4Wide::<2>::from_lanes([Vec4::new(2.0, 3.0, 4.0, 9.0), Vec4::default()]);
        let sq = batch.squared_components();
        assert_eq!(sq.lane(0), Vec4::new(4.0, 9.0, 16.0, 9.0));
        assert_eq!(sq.lane(1), Vec4::default());
    }

    #[test]
    fn test_gather_rejects_ragged_input() {
        let v = vec![Vec3::ZERO; 10];
        assert_eq!(
            gather3::<8>(&v),
            Err(LayoutError::RaggedBatch { len: 10, lanes: 8 })
        );
        assert_eq!(gather3::<0>(&v), Err(LayoutError::ZeroLanes));
    }

    #[test]
    fn test_gather_scatter_preserves_order() {
        let v: Vec<Vec4> = (0..16)
            .map(|i| Vec4::new(i as f32, -(i as f32), 0.5 * i as f32, 1.0))
            .collect();
        let batches = gather4::<8>(&v).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[1].lane(3), v[11]);
        assert_eq!(scatter4(&batches), v);
    }
}
