use alloc::{boxed::Box, collections::VecDeque, vec::Vec};
use super::{Level, LevelMut, Classify, Nested};

impl<T> Level for Vec<T> {
    type Element = T;
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
    fn value_of(&self, cursor: &usize) -> &T {
        &self[*cursor]
    }
}
impl<T> LevelMut for Vec<T> {
    #[inline(always)]
    fn value_mut_at(&mut self, cursor: &usize) -> &mut T {
        &mut self[*cursor]
    }
}
impl<T> Classify for Vec<T> {
    type Kind = Nested;
}

// Indices are logical, so the ring buffer's wraparound never leaks into cursors.
impl<T> Level for VecDeque<T> {
    type Element = T;
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
    fn value_of(&self, cursor: &usize) -> &T {
        &self[*cursor]
    }
}
impl<T> LevelMut for VecDeque<T> {
    #[inline(always)]
    fn value_mut_at(&mut self, cursor: &usize) -> &mut T {
        &mut self[*cursor]
    }
}
impl<T> Classify for VecDeque<T> {
    type Kind = Nested;
}

impl<T: Level + ?Sized> Level for Box<T> {
    type Element = T::Element;
    type Cursor = T::Cursor;

    #[inline(always)]
    fn cursor_to_first(&self) -> Self::Cursor {
        (**self).cursor_to_first()
    }
    #[inline(always)]
    fn cursor_past_last(&self) -> Self::Cursor {
        (**self).cursor_past_last()
    }
    #[inline(always)]
    fn advance_cursor(&self, cursor: &Self::Cursor) -> Self::Cursor {
        (**self).advance_cursor(cursor)
    }
    #[inline(always)]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Element {
        (**self).value_of(cursor)
    }
}
impl<T: LevelMut + ?Sized> LevelMut for Box<T> {
    #[inline(always)]
    fn value_mut_at(&mut self, cursor: &Self::Cursor) -> &mut Self::Element {
        (**self).value_mut_at(cursor)
    }
}
impl<T: ?Sized> Classify for Box<T> {
    type Kind = Nested;
}
