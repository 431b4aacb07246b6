/*!
# Utilities

Helper abstractions shared by the algorithms, most notably generalized
[`Set`]s used as traversal visitation state.
*/

mod set;

pub use set::*;
