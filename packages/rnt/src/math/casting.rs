use soroban_sdk::{log, Env};

use crate::error::{ErrorCode, RntResult};

pub trait Cast: Sized {
    /// Perform a checked conversion, failing with `CastingFailure` when the
    /// value does not fit the target type.
    #[track_caller]
    #[inline(always)]
    fn cast<T: TryFrom<Self>>(self, env: &Env) -> RntResult<T> {
        match T::try_from(self) {
            Ok(result) => Ok(result),
            Err(_) => {
                log!(env, "Casting error thrown at line {}", line!());
                Err(ErrorCode::CastingFailure)
            }
        }
    }
}

impl Cast for u128 {}
impl Cast for u64 {}
impl Cast for u32 {}
impl Cast for i128 {}
impl Cast for i64 {}
