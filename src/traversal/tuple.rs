//! Traversals over heterogeneous tuples.
//!
//! Each slot may hold a different type, so the callable must be applicable
//! to every slot type. Closures have exactly one parameter type and
//! therefore only work on tuples whose slots share it; a visitor struct with
//! one [`Applicator`] impl per slot type handles the general case.
//!
//! ```rust
//! use shapewise::applicator::Applicator;
//! use shapewise::traversal::{apply, map};
//!
//! struct Describe;
//!
//! impl Applicator<(&i32,)> for Describe {
//!     type Output = String;
//!     fn invoke(&mut self, (value,): (&i32,)) -> String {
//!         format!("int {value}")
//!     }
//! }
//!
//! impl Applicator<(&&str,)> for Describe {
//!     type Output = String;
//!     fn invoke(&mut self, (value,): (&&str,)) -> String {
//!         format!("str {value}")
//!     }
//! }
//!
//! let described = map(Describe, &(1_i32, "two", 3_i32));
//! assert_eq!(
//!     described,
//!     (String::from("int 1"), String::from("str two"), String::from("int 3"))
//! );
//! ```

use crate::applicator::Applicator;

use super::{Apply, Map, ZipWith};

macro_rules! impl_traversal_for_tuples {
    ($(($($index:tt: $left:ident, $right:ident);+)),+ $(,)?) => {
        paste::paste! {
            $(
                impl<'a, V, $($left),+> Apply<V> for &'a ($($left,)+)
                where
                    $(V: Applicator<(&'a $left,)>,)+
                {
                    #[inline]
                    fn apply_with(self, visitor: &mut V) {
                        $(
                            <V as Applicator<(&'a $left,)>>::invoke(visitor, (&self.$index,));
                        )+
                    }
                }

                impl<'a, V, $($left),+> Apply<V> for &'a mut ($($left,)+)
                where
                    $(V: Applicator<(&'a mut $left,)>,)+
                {
                    #[inline]
                    fn apply_with(self, visitor: &mut V) {
                        let ($([<slot_ $index>],)+) = self;
                        $(
                            <V as Applicator<(&'a mut $left,)>>::invoke(visitor, ([<slot_ $index>],));
                        )+
                    }
                }

                impl<'a, F, $($left),+> Map<F> for &'a ($($left,)+)
                where
                    $(F: Applicator<(&'a $left,)>,)+
                {
                    type Output = ($(<F as Applicator<(&'a $left,)>>::Output,)+);

                    #[inline]
                    fn map_with(self, function: &mut F) -> Self::Output {
                        ($(
                            <F as Applicator<(&'a $left,)>>::invoke(function, (&self.$index,)),
                        )+)
                    }
                }

                impl<'a, 'b, F, $($left,)+ $($right),+> ZipWith<&'b ($($right,)+), F>
                    for &'a ($($left,)+)
                where
                    $(F: Applicator<(&'a $left, &'b $right)>,)+
                {
                    type Output = ($(<F as Applicator<(&'a $left, &'b $right)>>::Output,)+);

                    #[inline]
                    fn zip_with(self, rhs: &'b ($($right,)+), function: &mut F) -> Self::Output {
                        ($(
                            <F as Applicator<(&'a $left, &'b $right)>>::invoke(
                                function,
                                (&self.$index, &rhs.$index),
                            ),
                        )+)
                    }
                }
            )+
        }
    };
}

impl_traversal_for_tuples!(
    (0: A1, B1),
    (0: A1, B1; 1: A2, B2),
    (0: A1, B1; 1: A2, B2; 2: A3, B3),
    (0: A1, B1; 1: A2, B2; 2: A3, B3; 3: A4, B4),
    (0: A1, B1; 1: A2, B2; 2: A3, B3; 3: A4, B4; 4: A5, B5),
    (0: A1, B1; 1: A2, B2; 2: A3, B3; 3: A4, B4; 4: A5, B5; 5: A6, B6),
    (0: A1, B1; 1: A2, B2; 2: A3, B3; 3: A4, B4; 4: A5, B5; 5: A6, B6; 6: A7, B7),
    (0: A1, B1; 1: A2, B2; 2: A3, B3; 3: A4, B4; 4: A5, B5; 5: A6, B6; 6: A7, B7; 7: A8, B8),
);
