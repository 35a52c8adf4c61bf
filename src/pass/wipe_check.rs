//! Test allocator that counts heap blocks freed with secret bytes still in
//! them.
//!
//! Only blocks of at least [`MIN_SIZE`] bytes freed on the calling thread
//! while [`unwiped_frees`] runs are checked, so tests running in parallel
//! don't disturb each other.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::hint::black_box;

const MIN_SIZE: usize = 4096;

thread_local! {
    static WATCHING: Cell<bool> = const { Cell::new(false) };
    static UNWIPED: Cell<usize> = const { Cell::new(0) };
}

struct WipeCheck;

unsafe impl GlobalAlloc for WipeCheck {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        if layout.size() >= MIN_SIZE && WATCHING.with(Cell::get) {
            let block = unsafe { std::slice::from_raw_parts(ptr, layout.size()) };
            if block.iter().any(|&b| b != 0) {
                UNWIPED.with(|n| n.set(n.get() + 1));
            }
        }
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: WipeCheck = WipeCheck;

/// Run `f` and return how many large blocks it freed without zeroing.
pub fn unwiped_frees<F: FnOnce()>(f: F) -> usize {
    UNWIPED.with(|n| n.set(0));
    WATCHING.with(|w| w.set(true));
    f();
    WATCHING.with(|w| w.set(false));
    UNWIPED.with(Cell::get)
}

#[test]
fn counts_dirty_blocks() {
    let unwiped = unwiped_frees(|| drop(black_box(vec![7u8; MIN_SIZE])));
    assert_eq!(unwiped, 1);
}

#[test]
fn ignores_zeroed_blocks() {
    let unwiped = unwiped_frees(|| drop(black_box(vec![0u8; MIN_SIZE * 2])));
    assert_eq!(unwiped, 0);
}
