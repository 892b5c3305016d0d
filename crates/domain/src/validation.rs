// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Maximum length of a shift code.
const MAX_SHIFT_CODE_LEN: usize = 4;

/// Validates a normalized (trimmed, upper-cased) shift code.
///
/// Codes are short alphanumeric tokens: one to four ASCII letters or
/// digits. The empty string is not a valid code; "no shift" is expressed
/// by the absence of an assignment, never by an empty code.
///
/// # Errors
///
/// Returns `DomainError::InvalidShiftCode` if the code is empty, too
/// long, or contains non-alphanumeric characters.
pub fn validate_shift_code(code: &str) -> Result<(), DomainError> {
    if code.is_empty() || code.len() > MAX_SHIFT_CODE_LEN {
        return Err(DomainError::InvalidShiftCode(code.to_string()));
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::InvalidShiftCode(code.to_string()));
    }
    Ok(())
}
