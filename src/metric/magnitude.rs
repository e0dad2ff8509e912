use crate::math::decimal::Dec;

/// Root-sum-of-squares of an error vector — the scalar the training driver
/// aggregates and compares against the convergence threshold. A zero sum
/// never reaches the square root (the adapter short-circuits it).
pub fn magnitude(errors: &[Dec]) -> Dec {
    let mut sum = Dec::zero();
    for e in errors {
        sum += &(e * e);
    }
    sum.sqrt()
}
