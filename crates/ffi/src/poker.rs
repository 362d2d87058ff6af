// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! PokerCards, Counter and PokerCard handles.
use std::{ptr, slice};

use cardeval_cards::{Counter, PokerCard, PokerCards, Suit};

use crate::{
    clear_error, fail,
    handles::{self, Kind},
    invalid_handle, ok_len,
};

/// A caller owned cards buffer, release with [rs_CardBuffer_free].
#[repr(C)]
#[derive(Debug)]
pub struct CardBuffer {
    /// The cards, null for an empty buffer.
    pub data: *mut PokerCard,
    /// The number of cards.
    pub len: usize,
}

impl CardBuffer {
    pub(crate) fn new(cards: Vec<PokerCard>) -> Self {
        let (data, len) = handles::register_cards(cards);
        Self { data, len }
    }

    pub(crate) fn empty() -> Self {
        Self {
            data: ptr::null_mut(),
            len: 0,
        }
    }

    /// The buffer cards.
    ///
    /// # Safety
    ///
    /// The buffer must be live.
    pub unsafe fn as_slice(&self) -> &[PokerCard] {
        if self.data.is_null() {
            &[]
        } else {
            // SAFETY: a live buffer points to `len` initialized cards.
            unsafe { slice::from_raw_parts(self.data, self.len) }
        }
    }

    pub(crate) unsafe fn release(&self) -> bool {
        self.data.is_null() || unsafe { handles::release_cards(self.data, self.len) }
    }
}

/// Reads the codes passed by a caller.
///
/// # Safety
///
/// `data` must point to `len` readable codes, null is accepted for an empty
/// sequence.
pub(crate) unsafe fn read_codes<'a>(data: *const u16, len: usize) -> Option<&'a [u16]> {
    if data.is_null() && len == 0 {
        Some(&[])
    } else if data.is_null() {
        None
    } else {
        // SAFETY: checked for null, the caller guarantees the length.
        Some(unsafe { slice::from_raw_parts(data, len) })
    }
}

/// Creates an empty PokerCards handle.
#[unsafe(no_mangle)]
pub extern "C" fn rs_PokerCards_new() -> *mut PokerCards {
    handles::register(PokerCards::new(), Kind::PokerCards)
}

/// Releases a PokerCards handle, returns -1 if the handle is not live.
///
/// # Safety
///
/// Counters returned by [rs_PokerCards_get_counter] must not be used after
/// this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_PokerCards_free(p: *mut PokerCards) -> i8 {
    if unsafe { handles::release(p, Kind::PokerCards) } {
        0
    } else {
        invalid_handle("rs_PokerCards_free")
    }
}

/// Assigns `len` card codes to a PokerCards handle.
///
/// Returns the number of cards or an error code.
///
/// # Safety
///
/// `data` must point to `len` readable codes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_PokerCards_assign(
    p: *mut PokerCards,
    data: *const u16,
    len: usize,
) -> i8 {
    const FUNC: &str = "rs_PokerCards_assign";

    let Some(hand) = (unsafe { handles::get_mut(p, Kind::PokerCards) }) else {
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

/// Copies the cards of a PokerCards handle into a new buffer.
///
/// Returns an empty buffer for an invalid handle.
///
/// # Safety
///
/// The handle must not be used concurrently.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_PokerCards_get_cards(p: *const PokerCards) -> CardBuffer {
    match unsafe { handles::get(p, Kind::PokerCards) } {
        Some(hand) => {
            clear_error();
            CardBuffer::new(hand.cards().to_vec())
        }
        None => {
            invalid_handle("rs_PokerCards_get_cards");
            CardBuffer::empty()
        }
    }
}

/// Returns the counter of a suit (0 spade .. 3 diamond, 4 joker).
///
/// The counter is owned by the handle and is valid until the handle is
/// freed, returns null for an invalid handle or suit.
///
/// # Safety
///
/// The counter must not be read after the handle is re-assigned or freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_PokerCards_get_counter(
    p: *const PokerCards,
    suit: u8,
) -> *const Counter {
    match (unsafe { handles::get(p, Kind::PokerCards) }, Suit::from_u8(suit)) {
        (Some(hand), Some(suit)) => {
            clear_error();
            hand.counter(suit) as *const Counter
        }
        _ => {
            invalid_handle("rs_PokerCards_get_counter");
            ptr::null()
        }
    }
}

/// Returns the number of jokers in a PokerCards handle.
///
/// # Safety
///
/// The handle must not be used concurrently.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_PokerCards_joker_count(p: *const PokerCards) -> i8 {
    match unsafe { handles::get(p, Kind::PokerCards) } {
        Some(hand) => ok_len("rs_PokerCards_joker_count", hand.joker_count()),
        None => invalid_handle("rs_PokerCards_joker_count"),
    }
}

/// Releases a cards buffer, empty buffers need no release.
///
/// Returns -1 if the buffer is not live.
///
/// # Safety
///
/// The buffer cards must not be used after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_CardBuffer_free(buf: CardBuffer) -> i8 {
    if unsafe { buf.release() } {
        0
    } else {
        invalid_handle("rs_CardBuffer_free")
    }
}

/// Creates an empty counter for a suit, null for an invalid suit.
#[unsafe(no_mangle)]
pub extern "C" fn rs_Counter_new(suit: u8) -> *mut Counter {
    match Suit::from_u8(suit) {
        Some(suit) => handles::register(Counter::new(suit), Kind::Counter),
        None => {
            invalid_handle("rs_Counter_new");
            ptr::null_mut()
        }
    }
}

/// Releases a counter created with [rs_Counter_new].
///
/// Counters returned by [rs_PokerCards_get_counter] are owned by their hand
/// and are rejected with -1.
///
/// # Safety
///
/// The counter must not be used after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_Counter_free(p: *mut Counter) -> i8 {
    if unsafe { handles::release(p, Kind::Counter) } {
        0
    } else {
        invalid_handle("rs_Counter_free")
    }
}

/// Creates a card from its spades server code (102..=114 for spades with 114
/// the Ace, 115 and 116 for the jokers), null for an invalid code.
#[unsafe(no_mangle)]
pub extern "C" fn rs_PokerCard_new(code: u16) -> *mut PokerCard {
    match PokerCard::from_spades_code(code) {
        Ok(card) => {
            clear_error();
            handles::register(card, Kind::PokerCard)
        }
        Err(e) => {
            fail("rs_PokerCard_new", e);
            ptr::null_mut()
        }
    }
}

/// Releases a card created with [rs_PokerCard_new].
///
/// # Safety
///
/// The card must not be used after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rs_PokerCard_free(p: *mut PokerCard) -> i8 {
    if unsafe { handles::release(p, Kind::PokerCard) } {
        0
    } else {
        invalid_handle("rs_PokerCard_free")
    }
}
