/// Source of uniform integer draws for the probabilistic layer triggers.
///
/// Seed a [`fastrand::Rng`] for reproducible shows; tests script the draws.
pub trait RandomSource {
    /// Uniform value in `0..bound`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: u32) -> u32;

    /// True with probability `chance / bound`.
    fn chance(&mut self, chance: u32, bound: u32) -> bool {
        self.below(bound) < chance
    }
}

impl RandomSource for fastrand::Rng {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.u32(..bound)
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::VecDeque;

    use super::RandomSource;

    /// Replays queued draws in order; once empty, returns `bound - 1`
    /// so any "< chance" test fails.
    pub struct ScriptedRandom {
        pub draws: VecDeque<u32>,
        pub calls: Vec<u32>,
    }

    impl ScriptedRandom {
        pub fn new(draws: &[u32]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
                calls: Vec::new(),
            }
        }

        /// No draw ever succeeds.
        pub fn never() -> Self {
            Self::new(&[])
        }
    }

    impl RandomSource for ScriptedRandom {
        fn below(&mut self, bound: u32) -> u32 {
            self.calls.push(bound);
            self.draws
                .pop_front()
                .unwrap_or_else(|| bound.saturating_sub(1))
        }
    }
}
