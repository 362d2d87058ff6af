// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! C interface to the cardeval evaluators.
//!
//! Evaluators are exposed as opaque handles with paired `new` and `free`
//! functions, see `include/cardeval.h` for the declarations. Functions that
//! return an `int8_t` return a non negative value on success and one of the
//! negative codes below on failure:
//!
//! | Code | Error                          |
//! |------|--------------------------------|
//! | -1   | Null or unknown handle         |
//! | -2   | Invalid card code              |
//! | -3   | Invalid hand size              |
//! | -4   | Duplicate card                 |
//! | -5   | Output buffer too small        |
//! | -6   | Internal invariant violation   |
//!
//! The last error of the calling thread and its input position can be read
//! with [rs_last_error_code] and [rs_last_error_position].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
#![allow(non_snake_case)]
use log::warn;
use std::cell::Cell;

use cardeval_cards::CardError;

mod handles;

mod gin;
pub use gin::*;

mod poker;
pub use poker::*;

mod texas;
pub use texas::*;

/// The return code for null or unknown handles.
pub const INVALID_HANDLE: i8 = -1;

thread_local! {
    static LAST_ERROR: Cell<(i8, i64)> = const { Cell::new((0, -1)) };
}

/// Records a failed call and returns its error code.
fn fail(func: &str, err: CardError) -> i8 {
    warn!("{func}: {err}");
    let pos = err.position().map(|p| p as i64).unwrap_or(-1);
    LAST_ERROR.set((err.code(), pos));
    err.code()
}

/// Records a call with an invalid handle, pointer or argument.
fn invalid_handle(func: &str) -> i8 {
    warn!("{func}: invalid handle or argument");
    LAST_ERROR.set((INVALID_HANDLE, -1));
    INVALID_HANDLE
}

/// Clears the last error of the calling thread.
fn clear_error() {
    LAST_ERROR.set((0, -1));
}

/// Converts a length to a return code.
fn ok_len(func: &str, len: usize) -> i8 {
    match i8::try_from(len) {
        Ok(len) => {
            clear_error();
            len
        }
        Err(_) => fail(func, CardError::InternalInvariant("length range")),
    }
}

/// Returns the error code of the last failed call on this thread, 0 if the
/// last call succeeded.
#[unsafe(no_mangle)]
pub extern "C" fn rs_last_error_code() -> i8 {
    LAST_ERROR.get().0
}

/// Returns the input position of the last invalid or duplicate card on this
/// thread, -1 if the last error has no position.
#[unsafe(no_mangle)]
pub extern "C" fn rs_last_error_position() -> i64 {
    LAST_ERROR.get().1
}

/// Installs a logger writing to stderr, `RUST_LOG` overrides the level.
///
/// Returns 0 if the logger was installed, 1 if a logger was already set.
#[unsafe(no_mangle)]
pub extern "C" fn rs_log_init() -> i8 {
    let res = env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();

    if res.is_ok() { 0 } else { 1 }
}
