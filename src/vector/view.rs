//! [`Deref`] targets that give vector elements their conventional names.
//!
//! A [`Vector`] of dimension 1 to 4 dereferences to a `#[repr(C)]` struct with one public field
//! per element, so `v.x`, `v.y`, `v.z` and `v.w` work like ordinary fields (including mutation).
//! Each view in turn dereferences to a view with the color names `r`, `g`, `b`, `a`, so those are
//! available on the same vectors.

use std::ops::{Deref, DerefMut};

use super::Vector;

macro_rules! views {
    ( $($n:literal => $xyzw:ident { $($xf:ident),+ } / $rgba:ident { $($rf:ident),+ };)+ ) => {
        $(
            #[derive(Debug, Clone, Copy)]
            #[repr(C)]
            pub struct $xyzw<T> {
                $(pub $xf: T,)+
            }

            #[derive(Debug, Clone, Copy)]
            #[repr(C)]
            pub struct $rgba<T> {
                $(pub $rf: T,)+
            }

            // Safety: `Vector<T, $n>` is a `#[repr(transparent)]` wrapper around `[T; $n]`, which
            // has the same layout as a `#[repr(C)]` struct of $n fields of type `T`.
            impl<T> Deref for Vector<T, $n> {
                type Target = $xyzw<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { &*(self as *const Self).cast() }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { &mut *(self as *mut Self).cast() }
                }
            }

            impl<T> Deref for $xyzw<T> {
                type Target = $rgba<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { &*(self as *const Self).cast() }
                }
            }

            impl<T> DerefMut for $xyzw<T> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { &mut *(self as *mut Self).cast() }
                }
            }
        )+
    };
}

views! {
    1 => X { x } / R { r };
    2 => XY { x, y } / RG { r, g };
    3 => XYZ { x, y, z } / RGB { r, g, b };
    4 => XYZW { x, y, z, w } / RGBA { r, g, b, a };
}
