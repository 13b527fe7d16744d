use rand::Rng;
use rand::seq::SliceRandom;

/// Source of the random choices a quiz session makes.
///
/// Every `rand::Rng` is a `Randomness`, so sessions normally run on a seeded or entropy-backed
/// `StdRng`. Tests can supply their own implementation to force specific draws.
pub trait Randomness {
    /// Returns a uniformly chosen value in `0..upper`. `upper` is never zero.
    fn index_below(&mut self, upper: usize) -> usize;

    /// Permutes `items` so that every order is equally likely.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<R: Rng + ?Sized> Randomness for R {
    fn index_below(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        SliceRandom::shuffle(items, self);
    }
}
