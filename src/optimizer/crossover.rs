use crate::roster::Roster;
use fastrand::Rng;

// Uniform crossover: each slot comes from either parent with equal odds
pub fn crossover_uniform(p1: &Roster, p2: &Roster, rng: &mut Rng) -> Roster {
    debug_assert_eq!(p1.len(), p2.len());
    p1.slots()
        .iter()
        .zip(p2.slots())
        .map(|(a, b)| if rng.bool() { a.clone() } else { b.clone() })
        .collect()
}
