use crate::{RESET_W, RESET_YZ};

/// A 3-component `f32` vector, 12 bytes, no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_x(x: f32) -> Self {
        Self::new(x, 0.0, 0.0)
    }

    #[inline]
    pub const fn from_xy(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0)
    }

    /// `x*x + y*y + z*z`.
    #[inline(always)]
    pub fn self_dot(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Per-component products `(x*x, y*y, z*z)`.
    #[inline(always)]
    pub fn squared_components(&self) -> Self {
        Self::new(self.x * self.x, self.y * self.y, self.z * self.z)
    }

    /// `sqrt(x + y + z)` into `x`, with `y` and `z` reset.
    ///
    /// The components are summed as-is: callers pass the output of
    /// [`squared_components`](Self::squared_components).
    #[inline(always)]
    pub fn reduce_reset(&self) -> Self {
        Self::new((self.x + self.y + self.z).sqrt(), RESET_YZ, RESET_YZ)
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// A 4-component `f32` vector, 16 bytes, no padding.
///
/// `w` defaults to 1 and never takes part in [`self_dot`](Self::self_dot) or
/// [`reduce_reset`](Self::reduce_reset).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Vec4 {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_x(x: f32) -> Self {
        Self::new(x, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn from_xy(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0, 1.0)
    }

    #[inline]
    pub const fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// `x*x + y*y + z*z`. `w` is excluded so the cost matches [`Vec3::self_dot`].
    #[inline(always)]
    pub fn self_dot(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Per-component products of `x`, `y`, `z`; `w` is carried through.
    #[inline(always)]
    pub fn squared_components(&self) -> Self {
        Self::new(self.x * self.x, self.y * self.y, self.z * self.z, self.w)
    }

    /// `sqrt(x + y + z)` into `x`, `y`/`z` reset to 0 and `w` to 1.
    #[inline(always)]
    pub fn reduce_reset(&self) -> Self {
        Self::new((self.x + self.y + self.z).sqrt(), RESET_YZ, RESET_YZ, RESET_W)
    }

    #[inline]
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}
