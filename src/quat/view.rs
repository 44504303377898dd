use std::ops::{Deref, DerefMut};

use crate::Quat;

#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

// Safety: `Quat<T>` transparently wraps `Vector<T, 4>`, which transparently wraps `[T; 4]`; the
// `#[repr(C)]` view struct has the same layout.
impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { &*(self as *const Self).cast() }
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *(self as *mut Self).cast() }
    }
}
