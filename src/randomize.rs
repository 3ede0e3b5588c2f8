//! Random initialization of every component of every stored element.

use packed_vec::{Vec3, Vec3Wide, Vec4, Vec4Wide};
use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::{RANDOM_MAX, RANDOM_MIN};
use crate::storage::Storage;

/// Generator shared by every benchmark case.
pub type BenchRng = ChaCha8Rng;

/// Seed the shared generator from OS entropy.
///
/// Call once per process and pass the generator down by `&mut`; cases never
/// reseed it.
pub fn bench_rng() -> BenchRng {
    ChaCha8Rng::from_entropy()
}

/// Overwrite every component (and every lane) with a fresh sample.
pub trait Randomize {
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, dist: &Uniform<f32>);
}

impl Randomize for Vec3 {
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, dist: &Uniform<f32>) {
        self.x = dist.sample(rng);
        self.y = dist.sample(rng);
        self.z = dist.sample(rng);
    }
}

impl Randomize for Vec4 {
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, dist: &Uniform<f32>) {
        self.x = dist.sample(rng);
        self.y = dist.sample(rng);
        self.z = dist.sample(rng);
        self.w = dist.sample(rng);
    }
}

impl<const N: usize> Randomize for Vec3Wide<N> {
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, dist: &Uniform<f32>) {
        for lane in [&mut self.x, &mut self.y, &mut self.z] {
            for c in lane.iter_mut() {
                *c = dist.sample(rng);
            }
        }
    }
}

impl<const N: usize> Randomize for Vec4Wide<N> {
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, dist: &Uniform<f32>) {
        for lane in [&mut self.x, &mut self.y, &mut self.z, &mut self.w] {
            for c in lane.iter_mut() {
                *c = dist.sample(rng);
            }
        }
    }
}

impl Randomize for glam::Vec3 {
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, dist: &Uniform<f32>) {
        *self = glam::Vec3::new(dist.sample(rng), dist.sample(rng), dist.sample(rng));
    }
}

impl Randomize for glam::Vec3A {
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, dist: &Uniform<f32>) {
        *self = glam::Vec3A::new(dist.sample(rng), dist.sample(rng), dist.sample(rng));
    }
}

impl Randomize for glam::Vec4 {
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, dist: &Uniform<f32>) {
        *self = glam::Vec4::new(
            dist.sample(rng),
            dist.sample(rng),
            dist.sample(rng),
            dist.sample(rng),
        );
    }
}

/// Uniform distribution over `[RANDOM_MIN, RANDOM_MAX]`.
pub fn component_distribution() -> Uniform<f32> {
    Uniform::new_inclusive(RANDOM_MIN, RANDOM_MAX)
}

/// Randomize every element of `storage` once, in index order.
pub fn fill_random<S, R>(storage: &mut S, rng: &mut R)
where
    S: Storage + ?Sized,
    S::Elem: Randomize,
    R: Rng + ?Sized,
{
    let dist = component_distribution();
    for item in storage.elements_mut() {
        item.randomize(rng, &dist);
    }
}
