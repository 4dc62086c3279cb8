//! Error types for the countdown tool.
//!
//! MIT License
//!
//! Copyright (c) 2026 66f94eae
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.

use std::time::Duration;

use thiserror::Error;

/// Top-level error type for all fallible operations.
///
/// Every failure here is local and recoverable: callers either substitute
/// defaults (dates, stored records) or report the message and stop the
/// current command.
#[derive(Debug, Error)]
pub enum Error {
    /// Date text that is not strict `YYYY-MM-DD` or names a day that does
    /// not exist in its month
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Identity token that could not be decoded into claims
    #[error("invalid identity token: {0}")]
    InvalidToken(String),

    /// The sign-in helper never delivered its token file
    #[error("timed out after {0:?} waiting for sign-in tokens")]
    SignInTimeout(Duration),

    /// A command that needs a session was run without one
    #[error("not signed in; run `countdown login` first")]
    NotSignedIn,

    /// Vacation list position that does not exist
    #[error("no vacation at position {0}")]
    VacationIndex(usize),

    /// Store file could not be read or written
    #[error("store i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Store content could not be encoded or decoded
    #[error("store encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand `Result` used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
