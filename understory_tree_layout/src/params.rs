// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strategy parameter checks.

use core::fmt;

/// A layout parameter outside the range a strategy can place nodes with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InvalidParameter {
    /// Field name, for example `"spacing"`.
    pub name: &'static str,
    /// The rejected value.
    pub value: f64,
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layout parameter `{}` is {}", self.name, self.value)
    }
}

impl core::error::Error for InvalidParameter {}

/// `value` must be finite and strictly positive.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), InvalidParameter> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidParameter { name, value })
    }
}

/// `value` must be finite.
pub(crate) fn finite(name: &'static str, value: f64) -> Result<(), InvalidParameter> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidParameter { name, value })
    }
}
