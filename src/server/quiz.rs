use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

/// Category id meaning "play with every category".
pub const ALL_CATEGORIES: i64 = 0;

/// Picks a question the player has not seen yet, uniformly at random.
/// `None` means the round is over.
pub fn pick_unseen<'a, R>(
    candidates: &'a [Question],
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    unseen.choose(rng).copied()
}
