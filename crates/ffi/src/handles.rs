// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Registry of the live handles and buffers handed out to C callers.
//!
//! Every pointer returned by a constructor is recorded with its [Kind] so that
//! a free of an unknown, already freed or differently typed pointer is
//! detected before touching memory.
use ahash::AHashMap;
use log::{error, trace};
use parking_lot::Mutex;
use std::sync::LazyLock;

use cardeval_cards::PokerCard;

/// The type of a live allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    PokerCards,
    Counter,
    PokerCard,
    TexasCards,
    GinRummyCards,
    CardBuffer { len: usize },
}

static HANDLES: LazyLock<Mutex<AHashMap<usize, Kind>>> =
    LazyLock::new(|| Mutex::new(AHashMap::default()));

/// Moves a value to the heap and registers its pointer.
pub(crate) fn register<T>(value: T, kind: Kind) -> *mut T {
    let ptr = Box::into_raw(Box::new(value));
    HANDLES.lock().insert(ptr as usize, kind);
    trace!("New {kind:?} {ptr:p}");
    ptr
}

/// Moves cards to the heap and registers the buffer, empty buffers are null.
pub(crate) fn register_cards(cards: Vec<PokerCard>) -> (*mut PokerCard, usize) {
    let len = cards.len();
    if len == 0 {
        return (std::ptr::null_mut(), 0);
    }

    let ptr = Box::into_raw(cards.into_boxed_slice()) as *mut PokerCard;
    HANDLES.lock().insert(ptr as usize, Kind::CardBuffer { len });
    trace!("New buffer {ptr:p} len {len}");
    (ptr, len)
}

/// Checks if a pointer is a live handle of the given kind.
pub(crate) fn is_live<T>(ptr: *const T, kind: Kind) -> bool {
    !ptr.is_null() && HANDLES.lock().get(&(ptr as usize)) == Some(&kind)
}

/// Removes a pointer from the registry if it is live with the given kind.
///
/// Returns false and leaves the registry untouched otherwise.
pub(crate) fn unregister<T>(ptr: *const T, kind: Kind) -> bool {
    if ptr.is_null() {
        error!("Free of a null {kind:?}");
        return false;
    }

    let mut handles = HANDLES.lock();
    match handles.get(&(ptr as usize)) {
        Some(live) if *live == kind => {
            handles.remove(&(ptr as usize));
            trace!("Free {kind:?} {ptr:p}");
            true
        }
        Some(live) => {
            error!("Free of {live:?} {ptr:p} as {kind:?}");
            false
        }
        None => {
            error!("Free of unknown or freed {kind:?} {ptr:p}");
            false
        }
    }
}

/// Returns a reference to a live handle.
///
/// # Safety
///
/// The handle must not be freed or mutated while the reference is alive.
pub(crate) unsafe fn get<'a, T>(ptr: *const T, kind: Kind) -> Option<&'a T> {
    if is_live(ptr, kind) {
        // SAFETY: the pointer was created by `register` and is still live.
        unsafe { ptr.as_ref() }
    } else {
        None
    }
}

/// Returns a mutable reference to a live handle.
///
/// # Safety
///
/// The handle must not be freed or accessed while the reference is alive.
pub(crate) unsafe fn get_mut<'a, T>(ptr: *mut T, kind: Kind) -> Option<&'a mut T> {
    if is_live(ptr, kind) {
        // SAFETY: the pointer was created by `register` and is still live.
        unsafe { ptr.as_mut() }
    } else {
        None
    }
}

/// Unregisters and drops a live handle, returns false if it is not live.
///
/// # Safety
///
/// No references to the handle may be alive.
pub(crate) unsafe fn release<T>(ptr: *mut T, kind: Kind) -> bool {
    if unregister(ptr, kind) {
        // SAFETY: the pointer was created by `Box::into_raw` in `register`.
        drop(unsafe { Box::from_raw(ptr) });
        true
    } else {
        false
    }
}

/// Unregisters and drops a cards buffer, returns false if it is not live.
///
/// # Safety
///
/// No references to the buffer cards may be alive.
pub(crate) unsafe fn release_cards(ptr: *mut PokerCard, len: usize) -> bool {
    if unregister(ptr, Kind::CardBuffer { len }) {
        let slice = std::ptr::slice_from_raw_parts_mut(ptr, len);
        // SAFETY: the slice was created by `Box::into_raw` in `register_cards`.
        drop(unsafe { Box::from_raw(slice) });
        true
    } else {
        false
    }
}
