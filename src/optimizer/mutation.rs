use crate::catalog::AssignmentPool;
use crate::roster::Roster;
use fastrand::Rng;

/// Redraws each slot with probability `rate`. Returns how many slots were redrawn.
///
/// A redrawn slot may land on the value it already had.
pub fn mutate(roster: &mut Roster, pool: &AssignmentPool, rate: f64, rng: &mut Rng) -> usize {
    if pool.is_empty() || rate <= 0.0 {
        return 0;
    }
    let mut redrawn = 0;
    for slot in roster.slots_mut() {
        if rng.f64() < rate {
            *slot = pool.draw(rng);
            redrawn += 1;
        }
    }
    redrawn
}
