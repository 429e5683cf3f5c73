use crate::growth::max_safe_length;
use crate::{Element, GrowthPolicy, NumericElement, RawListError, UncheckedIter};
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

/// Growable contiguous list of one element kind.
///
/// The buffer always holds `capacity()` initialized slots. Slots in
/// `[len, capacity)` keep whatever they held last (cleared values after an
/// allocation, removed values after a removal) and are only observable through
/// `array()` or by inserting past the end.
///
/// Mutators return `&mut Self` so calls can be chained.
pub struct RawList<T> where T: Element {
    buffer: Box<[T]>,
    len: usize,
}

impl<T> RawList<T> where T: Element {
    /// Creates an empty list with the default capacity of the element kind.
    pub fn new() -> RawList<T> {
        RawList::with_capacity(T::DEFAULT_CAPACITY)
    }

    /// Creates an empty list with exactly `capacity` slots.
    ///
    /// Panics if the capacity can not be allocated, see `try_with_capacity`.
    pub fn with_capacity(capacity: usize) -> RawList<T> {
        RawList::try_with_capacity(capacity).unwrap_or_else(|e| growth_failed(e))
    }

    pub fn try_with_capacity(capacity: usize) -> Result<RawList<T>, RawListError> {
        let max = max_safe_length::<T>();
        if capacity > max {
            return Err(RawListError::CapacityTooLarge { requested: capacity, max });
        }
        Ok(RawList {
            buffer: allocate(capacity)?,
            len: 0,
        })
    }

    /// Takes ownership of `items` as the buffer; every item is live.
    pub fn from_vec(items: Vec<T>) -> RawList<T> {
        let len = items.len();
        RawList {
            buffer: items.into_boxed_slice(),
            len,
        }
    }

    pub fn from_slice(items: &[T]) -> RawList<T> {
        RawList::from_vec(items.to_vec())
    }

    /// Independent copy of the live region of `other`, trimmed to its length.
    pub fn from_list(other: &RawList<T>) -> RawList<T> {
        RawList::from_slice(other.as_slice())
    }

    /// Collects a source of known length into a list with exactly that capacity.
    pub fn from_exact<I>(items: I) -> RawList<T>
        where I: IntoIterator<Item=T>, I::IntoIter: ExactSizeIterator
    {
        let items = items.into_iter();
        let mut list = RawList::with_capacity(items.len());
        list.append_all(items);
        list
    }

    /// Builds a list from `source` converting every item with `convert`.
    pub fn from_mapped<O, I, F>(source: I, convert: F) -> RawList<T>
        where I: IntoIterator<Item=O>, F: FnMut(O) -> T
    {
        source.into_iter().map(convert).collect()
    }

    /// The whole buffer, including slots past `len()`.
    ///
    /// The borrow ends before the next mutation, which may reallocate.
    #[inline(always)]
    pub fn array(&self) -> &[T] {
        &self.buffer
    }

    #[inline(always)]
    pub fn array_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }

    /// The live region `[0, len)`.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[..self.len]
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer[..self.len]
    }

    /// Converts into a boxed slice holding exactly the live elements.
    pub fn into_boxed_slice(mut self) -> Box<[T]> {
        self.trim();
        self.buffer
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Index of the last element, or `0` for an empty list.
    #[inline(always)]
    pub fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn append(&mut self, element: T) -> &mut Self {
        if self.len == self.buffer.len() {
            self.grow(required_length(self.len, 1));
        }
        self.buffer[self.len] = element;
        self.len += 1;
        self
    }

    /// Appends a run of elements.
    ///
    /// Grows whenever the run would fill the buffer completely, so a bulk
    /// append always leaves at least one spare slot behind it.
    pub fn append_slice(&mut self, elements: &[T]) -> &mut Self {
        let required = required_length(self.len, elements.len());
        if required >= self.buffer.len() {
            self.grow(required);
        }
        self.buffer[self.len..required].clone_from_slice(elements);
        self.len = required;
        self
    }

    pub fn append_list(&mut self, other: &RawList<T>) -> &mut Self {
        self.append_slice(other.as_slice())
    }

    /// Appends every item one at a time.
    pub fn append_all<I>(&mut self, items: I) -> &mut Self where I: IntoIterator<Item=T> {
        for item in items {
            self.append(item);
        }
        self
    }

    pub fn append_mapped<O, I, F>(&mut self, source: I, convert: F) -> &mut Self
        where I: IntoIterator<Item=O>, F: FnMut(O) -> T
    {
        self.append_all(source.into_iter().map(convert))
    }

    /// Inserts `element` at `index`, shifting the tail right.
    ///
    /// An index past the end extends the list to `index + 1`; the slots in
    /// between keep whatever the buffer held there.
    pub fn insert(&mut self, index: usize, element: T) -> &mut Self {
        let min_capacity = required_length(self.len.max(index), 1);
        if min_capacity >= self.buffer.len() {
            self.grow(min_capacity);
        }
        if self.len != 0 && self.len >= index {
            self.buffer[index..=self.len].rotate_right(1);
        }
        self.buffer[index] = element;
        self.len = min_capacity;
        self
    }

    /// Inserts a run of elements at `index`, with the same extension rule as `insert`.
    pub fn insert_slice(&mut self, index: usize, elements: &[T]) -> &mut Self {
        if elements.is_empty() {
            return self;
        }
        let count = elements.len();
        let min_capacity = required_length(self.len.max(index), count);
        if min_capacity >= self.buffer.len() {
            self.grow(min_capacity);
        }
        if self.len != 0 && self.len >= index {
            self.buffer[index..self.len + count].rotate_right(count);
        }
        self.buffer[index..index + count].clone_from_slice(elements);
        self.len = min_capacity;
        self
    }

    pub fn prepend(&mut self, element: T) -> &mut Self {
        self.insert(0, element)
    }

    pub fn prepend_slice(&mut self, elements: &[T]) -> &mut Self {
        self.insert_slice(0, elements)
    }

    /// Removes up to `count` elements starting at `index`.
    ///
    /// The count is clamped to the elements available; nothing happens when
    /// that leaves no element to remove.
    pub fn remove_range(&mut self, index: usize, count: usize) -> &mut Self {
        if index >= self.len {
            return self;
        }
        let count = count.min(self.len - index);
        if count == 0 {
            return self;
        }
        self.buffer[index..self.len].rotate_left(count);
        self.len -= count;
        self
    }

    /// Removes and returns the element at `index`. Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        let removed = std::mem::replace(&mut self.as_mut_slice()[index], T::clear_value());
        self.remove_range(index, 1);
        removed
    }

    pub fn remove_first(&mut self) -> T {
        self.remove(0)
    }

    /// Panics on an empty list.
    pub fn remove_last(&mut self) -> T {
        self.remove(self.last_index())
    }

    /// Removes the first element equal to `value`, returning it if found.
    pub fn remove_first_value(&mut self, value: &T) -> Option<T> {
        self.index_of(value).map(|index| self.remove(index))
    }

    /// Removes the last element equal to `value`, returning it if found.
    pub fn remove_last_value(&mut self, value: &T) -> Option<T> {
        self.last_index_of(value).map(|index| self.remove(index))
    }

    #[inline(always)]
    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.index_of_range(element, 0, self.len)
    }

    pub fn last_index_of(&self, element: &T) -> Option<usize> {
        self.last_index_of_range(element, 0, self.len)
    }

    /// First index in `[start, end)` holding `element`. An empty or inverted range finds nothing.
    pub fn index_of_range(&self, element: &T, start: usize, end: usize) -> Option<usize> {
        if start >= end {
            return None;
        }
        self.as_slice()[start..end]
            .iter()
            .position(|item| item == element)
            .map(|offset| start + offset)
    }

    /// Last index in `[start, end)` holding `element`.
    pub fn last_index_of_range(&self, element: &T, start: usize, end: usize) -> Option<usize> {
        if start >= end {
            return None;
        }
        self.as_slice()[start..end]
            .iter()
            .rposition(|item| item == element)
            .map(|offset| start + offset)
    }

    /// Resets the live elements to the clear value and empties the list; capacity is kept.
    pub fn clear(&mut self) -> &mut Self {
        for slot in self.as_mut_slice() {
            *slot = T::clear_value();
        }
        self.len = 0;
        self
    }

    /// Overwrites every live element with `value`.
    pub fn fill(&mut self, value: T) -> &mut Self {
        self.as_mut_slice().fill(value);
        self
    }

    /// Shrinks the buffer to exactly `len()` slots.
    pub fn trim(&mut self) -> &mut Self {
        if self.buffer.len() != self.len {
            self.set_capacity(self.len);
        }
        self
    }

    /// Reallocates the buffer to `capacity` slots, dropping live elements past it.
    pub fn set_capacity(&mut self, capacity: usize) -> &mut Self {
        if let Err(e) = self.try_set_capacity(capacity) {
            growth_failed(e);
        }
        self
    }

    pub fn try_set_capacity(&mut self, capacity: usize) -> Result<(), RawListError> {
        let max = max_safe_length::<T>();
        if capacity > max {
            return Err(RawListError::CapacityTooLarge { requested: capacity, max });
        }
        if capacity < self.len {
            debug!("{} list truncated from {} to {} elements", T::KIND, self.len, capacity);
        }
        self.reallocate(capacity)
    }

    /// Makes room for at least `additional` more elements using the growth policy.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), RawListError> {
        let required = self.len
            .checked_add(additional)
            .ok_or(RawListError::CapacityOverflow { old_capacity: self.len, min_growth: additional })?;
        if required > self.buffer.len() {
            self.try_grow(required)?;
        }
        Ok(())
    }

    /// Panics if `index >= len()`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }

    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }

    pub fn get_first(&self) -> &T {
        self.get(0)
    }

    pub fn get_last(&self) -> &T {
        self.get(self.last_index())
    }

    pub fn set(&mut self, index: usize, value: T) -> &mut Self {
        self.as_mut_slice()[index] = value;
        self
    }

    pub fn set_first(&mut self, value: T) -> &mut Self {
        self.set(0, value)
    }

    pub fn set_last(&mut self, value: T) -> &mut Self {
        self.set(self.last_index(), value)
    }

    /// Copies all live elements into a new vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Copies the first `len` live elements.
    pub fn copy_of(&self, len: usize) -> Vec<T> {
        self.copy_of_at(0, len)
    }

    /// Copies `len` live elements starting at `offset`.
    pub fn copy_of_at(&self, offset: usize, len: usize) -> Vec<T> {
        self.as_slice()[offset..][..len].to_vec()
    }

    /// Copies the live elements in `[from, to)`.
    pub fn copy_of_range(&self, from: usize, to: usize) -> Vec<T> {
        self.as_slice()[from..to].to_vec()
    }

    /// Copies every live element to the start of `dst`.
    pub fn copy_to(&self, dst: &mut [T]) -> &Self {
        self.copy_to_at(dst, 0)
    }

    /// Copies every live element into `dst` starting at `offset`.
    pub fn copy_to_at(&self, dst: &mut [T], offset: usize) -> &Self {
        self.copy_to_len(dst, offset, self.len)
    }

    /// Copies the first `len` live elements into `dst` starting at `offset`.
    pub fn copy_to_len(&self, dst: &mut [T], offset: usize, len: usize) -> &Self {
        dst[offset..][..len].clone_from_slice(&self.as_slice()[..len]);
        self
    }

    /// Deep copy whose capacity equals its length.
    pub fn copy(&self) -> RawList<T> {
        RawList::from_list(self)
    }

    #[inline(always)]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterates over the live region without holding a borrow of the list.
    ///
    /// # Safety
    ///
    /// The list must outlive the iterator and must not be accessed through
    /// `&mut` while the iterator is in use. Shared reads of the list are fine.
    /// The iterator keeps the length seen at creation.
    pub unsafe fn iter_unchecked(&self) -> UncheckedIter<T> {
        UncheckedIter::new(self.buffer.as_ptr(), self.len)
    }

    #[cold]
    fn grow(&mut self, min_capacity: usize) {
        if let Err(e) = self.try_grow(min_capacity) {
            growth_failed(e);
        }
    }

    fn try_grow(&mut self, min_capacity: usize) -> Result<(), RawListError> {
        let capacity = GrowthPolicy::for_element::<T>()
            .grown_capacity(self.buffer.len(), min_capacity, T::DEFAULT_CAPACITY)?;
        self.reallocate(capacity)
    }

    /// Moves the buffer into one of `capacity` slots. On failure the old buffer stays in place.
    fn reallocate(&mut self, capacity: usize) -> Result<(), RawListError> {
        let old_capacity = self.buffer.len();
        trace!("reallocate {} list from {} to {} slots", T::KIND, old_capacity, capacity);

        let mut storage = std::mem::take(&mut self.buffer).into_vec();
        if capacity > old_capacity {
            if let Err(source) = storage.try_reserve_exact(capacity - old_capacity) {
                self.buffer = storage.into_boxed_slice();
                return Err(RawListError::AllocationFailed { capacity, source });
            }
            storage.resize_with(capacity, T::clear_value);
        } else {
            storage.truncate(capacity);
        }
        self.buffer = storage.into_boxed_slice();
        self.len = self.len.min(capacity);
        Ok(())
    }
}

impl<T> RawList<T> where T: NumericElement {
    pub fn element_add(&mut self, index: usize, value: T) -> &mut Self {
        self.as_mut_slice()[index] += value;
        self
    }

    pub fn element_sub(&mut self, index: usize, value: T) -> &mut Self {
        self.as_mut_slice()[index] -= value;
        self
    }

    pub fn element_mul(&mut self, index: usize, value: T) -> &mut Self {
        self.as_mut_slice()[index] *= value;
        self
    }

    /// Integer division by zero panics; float division follows IEEE 754.
    pub fn element_div(&mut self, index: usize, value: T) -> &mut Self {
        self.as_mut_slice()[index] /= value;
        self
    }
}

/// Code point arithmetic. Overflow, division by `'\0'` and any result that is
/// not a Unicode scalar value panic.
impl RawList<char> {
    pub fn element_add(&mut self, index: usize, value: char) -> &mut Self {
        self.map_code_point(index, value, u32::checked_add)
    }

    pub fn element_sub(&mut self, index: usize, value: char) -> &mut Self {
        self.map_code_point(index, value, u32::checked_sub)
    }

    pub fn element_mul(&mut self, index: usize, value: char) -> &mut Self {
        self.map_code_point(index, value, u32::checked_mul)
    }

    pub fn element_div(&mut self, index: usize, value: char) -> &mut Self {
        self.map_code_point(index, value, u32::checked_div)
    }

    fn map_code_point<F>(&mut self, index: usize, value: char, op: F) -> &mut Self
        where F: FnOnce(u32, u32) -> Option<u32>
    {
        let slot = &mut self.as_mut_slice()[index];
        let (lhs, rhs) = (u32::from(*slot), u32::from(value));
        *slot = match op(lhs, rhs).and_then(char::from_u32) {
            Some(ch) => ch,
            None => panic!("code point arithmetic on {:#x} and {:#x} is not a char", lhs, rhs),
        };
        self
    }
}

fn allocate<T>(capacity: usize) -> Result<Box<[T]>, RawListError> where T: Element {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(capacity)
        .map_err(|source| RawListError::AllocationFailed { capacity, source })?;
    storage.resize_with(capacity, T::clear_value);
    Ok(storage.into_boxed_slice())
}

#[inline(always)]
fn required_length(len: usize, additional: usize) -> usize {
    match len.checked_add(additional) {
        Some(required) => required,
        None => growth_failed(RawListError::CapacityOverflow { old_capacity: len, min_growth: additional }),
    }
}

#[cold]
#[inline(never)]
fn growth_failed(error: RawListError) -> ! {
    panic!("{}", error)
}

impl<T> Default for RawList<T> where T: Element {
    fn default() -> RawList<T> {
        RawList::new()
    }
}

impl<T> Clone for RawList<T> where T: Element {
    fn clone(&self) -> RawList<T> {
        self.copy()
    }
}

impl<T> PartialEq for RawList<T> where T: Element {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().zip(other.iter()).all(|(a, b)| a.same(b))
    }
}

impl<T> Eq for RawList<T> where T: Element {}

impl<T> Hash for RawList<T> where T: Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for element in self.iter() {
            element.hash_element(state);
        }
        self.len.hash(state);
    }
}

impl<T> Debug for RawList<T> where T: Element + Debug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Display for RawList<T> where T: Element + Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}

impl<T> Index<usize> for RawList<T> where T: Element {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for RawList<T> where T: Element {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index)
    }
}

impl<T> AsRef<[T]> for RawList<T> where T: Element {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for RawList<T> where T: Element {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<Vec<T>> for RawList<T> where T: Element {
    fn from(items: Vec<T>) -> RawList<T> {
        RawList::from_vec(items)
    }
}

impl<T> From<&[T]> for RawList<T> where T: Element {
    fn from(items: &[T]) -> RawList<T> {
        RawList::from_slice(items)
    }
}

impl<T, const N: usize> From<[T; N]> for RawList<T> where T: Element {
    fn from(items: [T; N]) -> RawList<T> {
        RawList::from_vec(Vec::from(items))
    }
}

impl<T> From<RawList<T>> for Vec<T> where T: Element {
    fn from(list: RawList<T>) -> Vec<T> {
        let mut items = list.buffer.into_vec();
        items.truncate(list.len);
        items
    }
}

/// Starts from a single slot and trims once the source is exhausted.
impl<T> FromIterator<T> for RawList<T> where T: Element {
    fn from_iter<I: IntoIterator<Item=T>>(items: I) -> RawList<T> {
        let mut list = RawList::with_capacity(1);
        list.append_all(items);
        list.trim();
        list
    }
}

impl<T> Extend<T> for RawList<T> where T: Element {
    fn extend<I: IntoIterator<Item=T>>(&mut self, items: I) {
        self.append_all(items);
    }
}

impl<'a, T> Extend<&'a T> for RawList<T> where T: Element + Copy {
    fn extend<I: IntoIterator<Item=&'a T>>(&mut self, items: I) {
        self.append_all(items.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a RawList<T> where T: Element {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RawList<T> where T: Element {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for RawList<T> where T: Element {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self).into_iter()
    }
}
