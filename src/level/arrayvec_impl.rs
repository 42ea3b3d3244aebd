use arrayvec::{ArrayVec, Array};
use super::{Level, LevelMut, Classify, Nested};

impl<A> Level for ArrayVec<A>
where A: Array,
{
    type Element = A::Item;
    type Cursor = usize;

    #[inline(always)]
    fn cursor_to_first(&self) -> usize {
        0
    }
    #[inline(always)]
    fn cursor_past_last(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn advance_cursor(&self, cursor: &usize) -> usize {
        cursor + 1
    }
    #[inline(always)]
    fn value_of(&self, cursor: &usize) -> &Self::Element {
        &self.as_slice()[*cursor]
    }
}
impl<A> LevelMut for ArrayVec<A>
where A: Array,
{
    #[inline(always)]
    fn value_mut_at(&mut self, cursor: &usize) -> &mut Self::Element {
        &mut self.as_mut_slice()[*cursor]
    }
}
impl<A> Classify for ArrayVec<A>
where A: Array,
{
    type Kind = Nested;
}
