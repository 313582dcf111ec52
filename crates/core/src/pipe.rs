//! Left-to-right operator composition.
//!
//! Operators are plain `FnOnce(In) -> Out` values with heterogeneous
//! intermediate types, so ordered sequences of them are expressed as tuples.
//! [`compose`] folds a tuple into a single function applying each operator
//! left to right: the first operator in the tuple runs closest to the source.

/// An ordered sequence of operators applicable to `In`.
///
/// Implemented for tuples of arity 0 through 8. The empty tuple is the exact
/// identity; a one-tuple applies its operator directly, with no wrapping.
pub trait Pipeline<In> {
    /// The type produced by applying every operator.
    type Output;

    /// Applies each operator, left to right.
    fn apply(self, input: In) -> Self::Output;
}

/// Folds `operators` into a single left-to-right application function.
pub fn compose<In, P>(operators: P) -> impl FnOnce(In) -> P::Output
where
    P: Pipeline<In>,
{
    move |input| operators.apply(input)
}

impl<In> Pipeline<In> for () {
    type Output = In;

    fn apply(self, input: In) -> In {
        input
    }
}

macro_rules! impl_pipeline {
    ($input:ident, $last:ident; $($op:ident $var:ident: $in:ident -> $out:ident),+) => {
        impl<$input, $($out,)+ $($op,)+> Pipeline<$input> for ($($op,)+)
        where
            $($op: FnOnce($in) -> $out,)+
        {
            type Output = $last;

            fn apply(self, input: $input) -> $last {
                let ($($var,)+) = self;
                let value = input;
                $(let value = $var(value);)+
                value
            }
        }
    };
}

impl_pipeline!(In, O1; F1 f1: In -> O1);
impl_pipeline!(In, O2; F1 f1: In -> O1, F2 f2: O1 -> O2);
impl_pipeline!(In, O3; F1 f1: In -> O1, F2 f2: O1 -> O2, F3 f3: O2 -> O3);
impl_pipeline!(In, O4; F1 f1: In -> O1, F2 f2: O1 -> O2, F3 f3: O2 -> O3, F4 f4: O3 -> O4);
impl_pipeline!(In, O5; F1 f1: In -> O1, F2 f2: O1 -> O2, F3 f3: O2 -> O3, F4 f4: O3 -> O4, F5 f5: O4 -> O5);
impl_pipeline!(In, O6; F1 f1: In -> O1, F2 f2: O1 -> O2, F3 f3: O2 -> O3, F4 f4: O3 -> O4, F5 f5: O4 -> O5, F6 f6: O5 -> O6);
impl_pipeline!(In, O7; F1 f1: In -> O1, F2 f2: O1 -> O2, F3 f3: O2 -> O3, F4 f4: O3 -> O4, F5 f5: O4 -> O5, F6 f6: O5 -> O6, F7 f7: O6 -> O7);
impl_pipeline!(In, O8; F1 f1: In -> O1, F2 f2: O1 -> O2, F3 f3: O2 -> O3, F4 f4: O3 -> O4, F5 f5: O4 -> O5, F6 f6: O5 -> O6, F7 f7: O6 -> O7, F8 f8: O7 -> O8);
