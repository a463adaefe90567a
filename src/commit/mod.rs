// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message parsing.

mod ignore;
mod message;

pub use ignore::IgnoreMatcher;
pub use message::ParsedCommit;
