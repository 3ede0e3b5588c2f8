//! Small `f32` vectors in two physical layouts.
//!
//! - Interleaved (array-of-structures): [`Vec3`] and [`Vec4`] keep every
//!   component of one logical vector next to each other.
//! - Wide batches (structure-of-arrays): [`Vec3Wide`] and [`Vec4Wide`] keep
//!   `N` logical vectors split by component, one `[f32; N]` per axis.
//!
//! Every type implements [`Kernel`], the elementwise transform used to
//! compare the layouts: square the components, reduce them, and write the
//! result back with the remaining components reset to sentinels.
//!
//! The 4-wide types never let `w` enter the arithmetic, so a 3-wide and a
//! 4-wide kernel pass perform the same floating-point work and differ only in
//! memory traffic.
//!
//! # Example
//!
//! ```
//! use packed_vec::{Kernel, Vec3, Vec3Wide};
//!
//! let mut v = Vec3::new(3.0, 4.0, 0.0);
//! v.apply();
//! assert_eq!(v, Vec3::new(5.0, 0.0, 0.0));
//!
//! let mut batch = Vec3Wide::<8>::from_lanes([Vec3::new(0.0, 3.0, 4.0); 8]);
//! batch.apply();
//! assert_eq!(batch.lane(7), Vec3::from_x(5.0));
//! ```

mod error;
mod glam_impls;
mod types;
mod wide;

pub use error::LayoutError;
pub use types::{Vec3, Vec4};
pub use wide::{gather3, gather4, scatter3, scatter4, Vec3Wide, Vec4Wide};

/// Default number of lanes in a wide batch.
pub const LANES: usize = 8;

/// Sentinel written to `y` and `z` by [`Kernel::apply`].
pub const RESET_YZ: f32 = 0.0;

/// Sentinel written to `w` by [`Kernel::apply`].
pub const RESET_W: f32 = 1.0;

/// Elementwise transform applied by the benchmark to every stored element.
///
/// `apply` must be equivalent to squaring the `x`, `y`, `z` components,
/// summing them, taking the square root into `x`, and resetting `y`/`z` to
/// [`RESET_YZ`] and `w` (when present) to [`RESET_W`]. Wide batches apply the
/// same transform independently to each lane.
pub trait Kernel {
    fn apply(&mut self);
}

impl Kernel for Vec3 {
    #[inline(always)]
    fn apply(&mut self) {
        *self = self.squared_components().reduce_reset();
    }
}

impl Kernel for Vec4 {
    #[inline(always)]
    fn apply(&mut self) {
        *self = self.squared_components().reduce_reset();
    }
}

impl<const N: usize> Kernel for Vec3Wide<N> {
    #[inline(always)]
    fn apply(&mut self) {
        *self = self.squared_components().reduce_reset();
    }
}

impl<const N: usize> Kernel for Vec4Wide<N> {
    #[inline(always)]
    fn apply(&mut self) {
        *self = self.squared_components().reduce_reset();
    }
}
