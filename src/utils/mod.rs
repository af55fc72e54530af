/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Miscellaneous utilities.

use std::collections::TryReserveError;

/// Allocates a vector containing `len` copies of `value`, reporting
/// allocation failure to the caller instead of aborting.
///
/// All buffers whose size is proportional to the input go through this
/// function, so that an impossible request surfaces as
/// [`Error::Allocation`](crate::errors::Error::Allocation).
pub fn try_vec<T: Clone>(value: T, len: usize) -> Result<Vec<T>, TryReserveError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, value);
    Ok(v)
}
