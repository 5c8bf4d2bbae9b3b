//! Property tests for the public API of the persistent tree.

use quickcheck::{Arbitrary, Gen};

mod persistent;

/// An enum for the various kinds of "things" to do to
/// persistent trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Ask whether the value is in the data structure
    Contains(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Contains(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
