use super::{Classify, Terminal};
#[cfg(feature = "alloc")]
use alloc::string::String;

crate::impl_leaf!(
    bool, char, (),
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
);

impl Classify for str {
    type Kind = Terminal;
}
impl<'a> Classify for &'a str {
    type Kind = Terminal;
}
#[cfg(feature = "alloc")]
impl Classify for String {
    type Kind = Terminal;
}
