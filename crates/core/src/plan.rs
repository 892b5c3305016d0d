// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use turnero_domain::ShiftCode;

use crate::error::CoreError;

/// The effective mutation a single cell requires.
///
/// Plans are data only. The no-op branch is what makes batch
/// resubmission idempotent: replaying a batch against the state it
/// already produced plans `Noop` for every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationPlan {
    /// No assignment exists and a non-blank code was requested.
    Create {
        /// The code to assign.
        new_code: ShiftCode,
    },
    /// An assignment exists and the requested code differs.
    Update {
        /// The currently persisted code.
        old_code: ShiftCode,
        /// The code to assign.
        new_code: ShiftCode,
    },
    /// An assignment exists and a blank value was requested.
    Delete {
        /// The currently persisted code.
        old_code: ShiftCode,
    },
    /// Nothing to do: the cell already matches the request.
    Noop,
}

/// Decides the mutation a cell needs.
///
/// The requested value is upper-cased before comparison, so `"m"` against
/// a persisted `"M"` is a no-op. A blank request against an empty cell is
/// also a no-op; absence of a row already means "no shift".
///
/// # Errors
///
/// Returns an error if a non-blank requested value is not a valid shift
/// code. The caller runs inside the batch transaction, so this error
/// rolls back the whole batch.
pub fn plan_mutation(
    current: Option<&ShiftCode>,
    requested: &str,
) -> Result<MutationPlan, CoreError> {
    let blank: bool = requested.trim().is_empty();

    match current {
        Some(existing) if blank => Ok(MutationPlan::Delete {
            old_code: existing.clone(),
        }),
        Some(existing) => {
            let new_code: ShiftCode = ShiftCode::new(requested)?;
            if existing.value() == new_code.value() {
                Ok(MutationPlan::Noop)
            } else {
                Ok(MutationPlan::Update {
                    old_code: existing.clone(),
                    new_code,
                })
            }
        }
        None if blank => Ok(MutationPlan::Noop),
        None => Ok(MutationPlan::Create {
            new_code: ShiftCode::new(requested)?,
        }),
    }
}
