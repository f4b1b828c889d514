#[macro_use]
extern crate quickcheck_macros;

mod heap;
mod search;
mod tree;
