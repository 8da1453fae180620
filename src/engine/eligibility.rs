use crate::types::catalog::Direction;
use crate::types::Grade;

/// Directions whose grade set contains the answered grade. The grade filter
/// is hard: an ineligible direction never appears in results, whatever its
/// score would have been.
pub fn eligible_directions(directions: &[Direction], grade: Grade) -> Vec<&Direction> {
    directions
        .iter()
        .filter(|direction| direction.eligible_for(grade))
        .collect()
}
