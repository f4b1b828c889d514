use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a heap in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the T to the heap
    Enqueue(T),
    /// Take the smallest element out of the heap
    Dequeue,
    /// Throw away the contents and heapify these instead
    Heapify(Vec<T>),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Heapifying
    /// wipes out everything before it so it is picked less often.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2]).unwrap() {
            0 => Op::Enqueue(T::arbitrary(g)),
            1 => Op::Dequeue,
            2 => Op::Heapify(Vec::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
