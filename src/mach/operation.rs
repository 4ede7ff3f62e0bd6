use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Binary operations
///
/// Both operands are coerced to floating point first, so a string that
/// does not hold a number takes part as zero. Results are normalized
/// back to `Integer` when whole.

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_f64(lhs.to_f64() + rhs.to_f64()))
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_f64(lhs.to_f64() - rhs.to_f64()))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from_f64(lhs.to_f64() * rhs.to_f64()))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let r = rhs.to_f64();
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::from_f64(lhs.to_f64() / r))
    }

    pub fn greater(lhs: &Val, rhs: &Val) -> bool {
        lhs.to_f64() > rhs.to_f64()
    }

    pub fn less(lhs: &Val, rhs: &Val) -> bool {
        lhs.to_f64() < rhs.to_f64()
    }

    pub fn equal(lhs: &Val, rhs: &Val) -> bool {
        lhs.to_f64() == rhs.to_f64()
    }
}
