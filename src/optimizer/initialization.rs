use crate::catalog::AssignmentPool;
use crate::roster::Roster;
use fastrand::Rng;

/// Fills every slot with an independent uniform draw from the pool.
/// Slots stay unfilled when the pool is empty.
pub fn generate_random_roster(rng: &mut Rng, pool: &AssignmentPool, team_size: usize) -> Roster {
    (0..team_size).map(|_| pool.draw(rng)).collect()
}

/// Draws `count` rosters sequentially from one rng.
pub fn generate_batch(
    rng: &mut Rng,
    pool: &AssignmentPool,
    team_size: usize,
    count: usize,
) -> Vec<Roster> {
    (0..count)
        .map(|_| generate_random_roster(rng, pool, team_size))
        .collect()
}
