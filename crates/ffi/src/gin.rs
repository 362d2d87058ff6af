// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! GinRummyCards handles.
use std::slice;

use cardeval_eval::GinRummyCards;

use crate::{
    fail,
    handles::{self, Kind},
    invalid_handle, ok_len,
    poker::read_codes,
};

/// Reads the output buffer passed by a caller.
///
/// # Safety
///
/// `out` must point to `len` writable bytes.
unsafe fn out_buffer<'a>(out: *mut u8, len: usize) -> Option<&'a mut [u8]> {
    if out.is_null() {
        None
    } else {
        // SAFETY: checked for null, the caller guarantees the length.
        Some(unsafe { slice::from_raw_parts_mut(out, len) })
    }
}

/// Creates an empty GinRummyCards handle with one joker allowed per meld.
#[unsafe(no_mangle)]
pub extern "C" fn rs_GinRummyCards_new() -> *mut GinRummyCards {
    handles::register(GinRummyCards::new(), Kind::GinRummyCards)
}

/// Releases a GinRummyCards handle, returns -1 if the handle is not live.
///
/// # Safety
///
/// The handle must not be used after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_GinRummyCards_free(p: *mut GinRummyCards) -> i8 {
    if unsafe { handles::release(p, Kind::GinRummyCards) } {
        0
    } else {
        invalid_handle("rs_GinRummyCards_free")
    }
}

/// Assigns 10 or 11 card codes and writes the best split to `out`.
///
/// With `freeze` not zero only contiguous cards are melded. The output is the
/// deadwood value, the deadwood count and codes, and for each meld its length
/// and codes. Returns the number of bytes written or an error code.
///
/// # Safety
///
/// `data` must point to `len` readable codes and `out` to `out_len` writable
/// bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_GinRummyCards_assign(
    p: *mut GinRummyCards,
    data: *const u16,
    len: usize,
    freeze: u8,
    out: *mut u8,
    out_len: usize,
) -> i8 {
    const FUNC: &str = "rs_GinRummyCards_assign";

    let Some(hand) = (unsafe { handles::get_mut(p, Kind::GinRummyCards) }) else {
        return invalid_handle(FUNC);
    };

    let (Some(codes), Some(out)) = (unsafe { read_codes(data, len) }, unsafe {
        out_buffer(out, out_len)
    }) else {
        return invalid_handle(FUNC);
    };

    match hand.assign_into(codes, freeze != 0, out) {
        Ok(n) => ok_len(FUNC, n),
        Err(e) => fail(FUNC, e),
    }
}

/// Writes the cards sorted by suit and then by number to `out`, each order
/// as a count followed by the codes.
///
/// Returns the number of bytes written or an error code.
///
/// # Safety
///
/// `out` must point to `out_len` writable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_GinRummyCards_sort(
    p: *const GinRummyCards,
    out: *mut u8,
    out_len: usize,
) -> i8 {
    const FUNC: &str = "rs_GinRummyCards_sort";

    let Some(hand) = (unsafe { handles::get(p, Kind::GinRummyCards) }) else {
        return invalid_handle(FUNC);
    };

    let Some(out) = (unsafe { out_buffer(out, out_len) }) else {
        return invalid_handle(FUNC);
    };

    match hand.write_sorted(out) {
        Ok(n) => ok_len(FUNC, n),
        Err(e) => fail(FUNC, e),
    }
}
