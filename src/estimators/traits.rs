// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::Result;
use crate::estimators::estimate::Estimate;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    ///
    /// Configuration problems are errors; data that cannot support an
    /// estimate yields [`Estimate::NotComputable`].
    fn global_value(&self) -> Result<Estimate>;
}
