//! Locker selection.
//!
//! Each [`PlacementStrategy`] picks one non-full locker out of an ordered
//! slice, or none when every locker is full:
//! - **FirstFit**: lowest index that still has room
//! - **MaxAvailable**: most free slots
//! - **MaxVacancyRate**: highest free/total ratio
//!
//! Ties go to the earliest locker: a later candidate only replaces the
//! running best when it is strictly better. Selection reads state and never
//! mutates it, so the same slice always yields the same answer.

use lockerbay_core::PlacementStrategy;

use crate::locker::Locker;

/// Choose a locker for the next bag.
pub trait SelectLocker {
    /// Index into `lockers` of the chosen locker.
    fn select(&self, lockers: &[Locker]) -> Option<usize>;
}

impl SelectLocker for PlacementStrategy {
    fn select(&self, lockers: &[Locker]) -> Option<usize> {
        match self {
            PlacementStrategy::FirstFit => first_fit(lockers),
            PlacementStrategy::MaxAvailable => {
                best_by(lockers, |l| f64::from(l.available_capacity()))
            }
            PlacementStrategy::MaxVacancyRate => best_by(lockers, vacancy_rate),
        }
    }
}

/// Free slots as a fraction of capacity, in `[0, 1]`.
pub fn vacancy_rate(locker: &Locker) -> f64 {
    f64::from(locker.available_capacity()) / f64::from(locker.capacity())
}

fn first_fit(lockers: &[Locker]) -> Option<usize> {
    lockers.iter().position(|l| !l.is_full())
}

fn best_by(lockers: &[Locker], score: impl Fn(&Locker) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, locker) in lockers.iter().enumerate() {
        if locker.is_full() {
            continue;
        }
        let candidate = score(locker);
        match best {
            Some((_, top)) if candidate <= top => {}
            _ => best = Some((idx, candidate)),
        }
    }

    best.map(|(idx, _)| idx)
}
