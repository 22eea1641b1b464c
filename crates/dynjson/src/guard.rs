//! Re-entrancy tracking for `Debug` and `PartialEq` on shared handles.
//!
//! Both recurse through nested containers, and a handle that transitively
//! contains itself would otherwise recurse until the stack overflows. The
//! encoder keeps its own open set in `codec.rs`.

use std::cell::RefCell;
use std::fmt;
use std::thread::LocalKey;

type Storage = *const ();

thread_local! {
    static FORMATTING: RefCell<Vec<Storage>> = const { RefCell::new(Vec::new()) };
    static COMPARING: RefCell<Vec<(Storage, Storage)>> = const { RefCell::new(Vec::new()) };
}

/// Pops the entry pushed by [`enter`] when the walk leaves the container.
struct Exit<T: 'static> {
    stack: &'static LocalKey<RefCell<Vec<T>>>,
}

impl<T: 'static> Drop for Exit<T> {
    fn drop(&mut self) {
        self.stack.with(|open| {
            open.borrow_mut().pop();
        });
    }
}

fn enter<T: Copy + PartialEq + 'static>(
    stack: &'static LocalKey<RefCell<Vec<T>>>,
    key: T,
) -> Option<Exit<T>> {
    stack.with(|open| {
        let mut open = open.borrow_mut();
        if open.contains(&key) {
            return None;
        }
        open.push(key);
        Some(Exit { stack })
    })
}

/// Runs `body` unless `storage` is already being formatted, in which case
/// `<cycle>` is written instead.
pub(crate) fn debug_once(
    storage: Storage,
    f: &mut fmt::Formatter<'_>,
    body: impl FnOnce(&mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    match enter(&FORMATTING, storage) {
        Some(_exit) => body(f),
        None => f.write_str("<cycle>"),
    }
}

/// Runs `body` unless the pair is already being compared.
///
/// A revisited pair counts as equal: any difference between the two graphs
/// shows up on some other path, so this yields structural equality of the
/// unfolded documents.
pub(crate) fn eq_once(a: Storage, b: Storage, body: impl FnOnce() -> bool) -> bool {
    match enter(&COMPARING, (a, b)) {
        Some(_exit) => body(),
        None => true,
    }
}
