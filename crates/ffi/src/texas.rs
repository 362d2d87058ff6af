// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! TexasCards handles.
use cardeval_eval::{TexasCards, TexasType};

use crate::{
    CardBuffer, clear_error, fail,
    handles::{self, Kind},
    invalid_handle, ok_len,
    poker::read_codes,
};

/// The best hand of a TexasCards handle, release with [rs_TexasCardBuffer_free].
#[repr(C)]
#[derive(Debug)]
pub struct TexasCardBuffer {
    /// The best cards from the most significant.
    pub cardbuf: CardBuffer,
    /// The hand category.
    pub texas: TexasType,
    /// The hand score.
    pub score: u64,
}

/// Creates an empty TexasCards handle.
#[unsafe(no_mangle)]
pub extern "C" fn rs_TexasCards_new() -> *mut TexasCards {
    handles::register(TexasCards::new(), Kind::TexasCards)
}

/// Releases a TexasCards handle, returns -1 if the handle is not live.
///
/// # Safety
///
/// The handle must not be used after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_TexasCards_free(p: *mut TexasCards) -> i8 {
    if unsafe { handles::release(p, Kind::TexasCards) } {
        0
    } else {
        invalid_handle("rs_TexasCards_free")
    }
}

/// Assigns 5 to 7 card codes and finds the best hand.
///
/// Returns the number of cards or an error code.
///
/// # Safety
///
/// `data` must point to `len` readable codes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_TexasCards_assign(
    p: *mut TexasCards,
    data: *const u16,
    len: usize,
) -> i8 {
    const FUNC: &str = "rs_TexasCards_assign";

    let Some(hand) = (unsafe { handles::get_mut(p, Kind::TexasCards) }) else {
        return invalid_handle(FUNC);
    };

    let Some(codes) = (unsafe { read_codes(data, len) }) else {
        return invalid_handle(FUNC);
    };

    match hand.assign(codes) {
        Ok(n) => ok_len(FUNC, n),
        Err(e) => fail(FUNC, e),
    }
}

/// Copies the best hand into a new buffer.
///
/// An invalid or unassigned handle returns an empty buffer with category
/// `NoCalc`.
///
/// # Safety
///
/// The handle must not be used concurrently.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_TexasCards_get_best(p: *const TexasCards) -> TexasCardBuffer {
    match unsafe { handles::get(p, Kind::TexasCards) } {
        Some(hand) => {
            clear_error();
            let best = hand.get_best();
            TexasCardBuffer {
                cardbuf: CardBuffer::new(best.cards),
                texas: best.texas,
                score: best.score,
            }
        }
        None => {
            invalid_handle("rs_TexasCards_get_best");
            TexasCardBuffer {
                cardbuf: CardBuffer::empty(),
                texas: TexasType::NoCalc,
                score: 0,
            }
        }
    }
}

/// Releases a best hand buffer, returns -1 if the buffer is not live.
///
/// # Safety
///
/// The buffer cards must not be used after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_TexasCardBuffer_free(buf: TexasCardBuffer) -> i8 {
    if unsafe { buf.cardbuf.release() } {
        0
    } else {
        invalid_handle("rs_TexasCardBuffer_free")
    }
}
