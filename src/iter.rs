/// Iterator over a list buffer that does not borrow the list.
///
/// Created by `RawList::iter_unchecked`; see its safety contract.
pub struct UncheckedIter<K> {
    current: *const K,
    index: usize,
    len: usize,
}

impl<K> UncheckedIter<K> {
    pub(crate) unsafe fn new(current: *const K, len: usize) -> UncheckedIter<K> {
        UncheckedIter {
            current,
            index: 0,
            len,
        }
    }
}

impl<K: Clone> ExactSizeIterator for UncheckedIter<K> {
    fn len(&self) -> usize {
        self.len - self.index
    }
}

impl<K: Clone> Iterator for UncheckedIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let item = unsafe { (*self.current.add(self.index)).clone() };
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}
