// Instrumented alternatives shared by the integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

/// Runs `f` and reports whether it panicked.
pub fn panics<F: FnOnce()>(f: F) -> bool {
    panic::catch_unwind(AssertUnwindSafe(f)).is_err()
}

/// Bumps a shared counter when dropped, once it has been given one.
#[derive(Clone, Default)]
pub struct DropCounter {
    pub drops: Option<Rc<Cell<usize>>>,
}

impl DropCounter {
    pub fn new(drops: &Rc<Cell<usize>>) -> Self {
        Self {
            drops: Some(Rc::clone(drops)),
        }
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        if let Some(drops) = &self.drops {
            drops.set(drops.get() + 1);
        }
    }
}

/// Counts clones and `clone_from` calls made on it.
pub struct CloneCounter {
    pub clones: Rc<Cell<usize>>,
    pub assigns: Rc<Cell<usize>>,
}

impl CloneCounter {
    pub fn new() -> Self {
        Self {
            clones: Rc::new(Cell::new(0)),
            assigns: Rc::new(Cell::new(0)),
        }
    }
}

impl Clone for CloneCounter {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Self {
            clones: Rc::clone(&self.clones),
            assigns: Rc::clone(&self.assigns),
        }
    }

    // Copy assignment keeps the target's own counters.
    fn clone_from(&mut self, _source: &Self) {
        self.assigns.set(self.assigns.get() + 1);
    }
}

/// Panics whenever it is cloned.
#[derive(Default)]
pub struct PanicOnClone;

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        panic!("PanicOnClone panics on clone");
    }
}

/// Panics when dropped, unless already unwinding.
#[derive(Clone, Default)]
pub struct PanicOnDrop;

impl Drop for PanicOnDrop {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            panic!("PanicOnDrop panics on drop");
        }
    }
}

/// Converts from `i32` by panicking.
#[derive(Clone)]
pub struct PanicOnConvert;

impl From<i32> for PanicOnConvert {
    fn from(_: i32) -> Self {
        panic!("PanicOnConvert panics on conversion");
    }
}

/// Remembers the `i32` it was converted from.
#[derive(Clone, Debug, PartialEq)]
pub struct FromInt {
    pub value: i32,
}

impl From<i32> for FromInt {
    fn from(value: i32) -> Self {
        Self { value }
    }
}
