// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database mutations.
//!
//! All writes to assignments and the change log happen here, always
//! under the batch processor's transaction.

pub mod assignments;
pub mod audit;
pub mod employees;
pub mod processor;
