/*!
# Utilities

Support structures that are not graphs themselves but back the algorithms in
[`crate::algo`].
*/

mod union_find;

pub use union_find::*;
