//! Caller-owned state cells that leaf rules read and write.

use std::cell::{BorrowError, BorrowMutError, Cell, RefCell};

use thiserror::Error;

/// Errors surfaced when a slot cannot be accessed.
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("slot is mutably borrowed elsewhere")]
    Borrowed(#[from] BorrowError),

    #[error("slot is already borrowed")]
    BorrowedMut(#[from] BorrowMutError),
}

/// A cell holding a value owned by the caller.
///
/// Implemented for [`Cell`] (for `Copy` values) and [`RefCell`] (for any
/// value), so the caller picks whichever fits its state.
pub trait Slot<T> {
    /// Runs `f` against the current value.
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, SlotError>;

    /// Replaces the current value.
    fn write(&self, value: T) -> Result<(), SlotError>;
}

impl<T: Copy> Slot<T> for Cell<T> {
    #[inline]
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, SlotError> {
        Ok(f(&self.get()))
    }

    #[inline]
    fn write(&self, value: T) -> Result<(), SlotError> {
        self.set(value);
        Ok(())
    }
}

impl<T> Slot<T> for RefCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, SlotError> {
        let current = self.try_borrow()?;
        Ok(f(&current))
    }

    fn write(&self, value: T) -> Result<(), SlotError> {
        *self.try_borrow_mut()? = value;
        Ok(())
    }
}
