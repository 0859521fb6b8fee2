// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styling for both brand identities.

pub mod button;
pub mod container;
