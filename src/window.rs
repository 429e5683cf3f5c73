use crate::{RawList, RawListError, WindowElement};

/// Fixed-capacity buffer with a read cursor (`position`) and an upper bound (`limit`).
///
/// Lists read the elements in `[position, limit)` without moving the cursor.
pub trait Window {
    type Item: Copy;

    fn position(&self) -> usize;

    fn limit(&self) -> usize;

    /// Absolute read, does not move the position.
    fn get(&self, index: usize) -> Self::Item;

    fn remaining(&self) -> usize {
        self.limit().saturating_sub(self.position())
    }
}

/// A `Window` that accepts relative writes at its position.
pub trait WindowMut: Window {
    /// Writes at the position and advances it. Panics if no room is left.
    fn put(&mut self, value: Self::Item);
}

/// Whole slice as a window: position `0`, limit `len()`.
impl<T: Copy> Window for [T] {
    type Item = T;

    #[inline(always)]
    fn position(&self) -> usize {
        0
    }

    #[inline(always)]
    fn limit(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn get(&self, index: usize) -> T {
        self[index]
    }
}

/// Heap buffer with NIO-style cursor handling.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowBuffer<T> where T: Copy {
    data: Box<[T]>,
    position: usize,
    limit: usize,
}

impl<T> WindowBuffer<T> where T: Copy + Default {
    /// A zeroed buffer of `capacity` slots, ready for writing.
    pub fn allocate(capacity: usize) -> WindowBuffer<T> {
        WindowBuffer::wrap(vec![T::default(); capacity])
    }
}

impl<T> WindowBuffer<T> where T: Copy {
    /// Uses `data` as the buffer, with the whole of it inside the window.
    pub fn wrap(data: Vec<T>) -> WindowBuffer<T> {
        let limit = data.len();
        WindowBuffer {
            data: data.into_boxed_slice(),
            position: 0,
            limit,
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Panics if `position` is past the limit.
    pub fn set_position(&mut self, position: usize) -> &mut Self {
        assert!(position <= self.limit, "position {} is past limit {}", position, self.limit);
        self.position = position;
        self
    }

    /// Panics if `limit` is past the capacity. Pulls the position back to the new limit.
    pub fn set_limit(&mut self, limit: usize) -> &mut Self {
        assert!(limit <= self.data.len(), "limit {} is past capacity {}", limit, self.data.len());
        self.limit = limit;
        self.position = self.position.min(limit);
        self
    }

    pub fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    /// Switches from writing to reading what was written.
    pub fn flip(&mut self) -> &mut Self {
        self.limit = self.position;
        self.position = 0;
        self
    }

    pub fn rewind(&mut self) -> &mut Self {
        self.position = 0;
        self
    }

    /// Opens the whole buffer again; the contents are left alone.
    pub fn clear(&mut self) -> &mut Self {
        self.position = 0;
        self.limit = self.data.len();
        self
    }

    /// The whole buffer, ignoring position and limit.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Window for WindowBuffer<T> where T: Copy {
    type Item = T;

    #[inline(always)]
    fn position(&self) -> usize {
        self.position
    }

    #[inline(always)]
    fn limit(&self) -> usize {
        self.limit
    }

    fn get(&self, index: usize) -> T {
        assert!(index < self.limit, "index {} is past limit {}", index, self.limit);
        self.data[index]
    }
}

impl<T> WindowMut for WindowBuffer<T> where T: Copy {
    fn put(&mut self, value: T) {
        assert!(self.position < self.limit, "window overflow at position {}", self.position);
        self.data[self.position] = value;
        self.position += 1;
    }
}

impl<T> RawList<T> where T: WindowElement {
    /// Creates a list sized to the window limit holding the unread window elements.
    pub fn from_window<W>(window: &W) -> RawList<T> where W: Window<Item=T::Raw> + ?Sized {
        let mut list = RawList::with_capacity(window.limit());
        list.append_window(window);
        list
    }

    /// Appends every element in `[position, limit)` of `window`, leaving its cursor in place.
    pub fn append_window<W>(&mut self, window: &W) -> &mut Self where W: Window<Item=T::Raw> + ?Sized {
        for index in window.position()..window.limit() {
            self.append(T::from_raw(window.get(index)));
        }
        self
    }

    /// Writes the live elements at the window position, advancing it.
    ///
    /// Nothing is written when the window can not take all of them.
    pub fn put_into<W>(&self, window: &mut W) -> Result<&Self, RawListError> where W: WindowMut<Item=T::Raw> + ?Sized {
        let remaining = window.remaining();
        if remaining < self.len() {
            return Err(RawListError::WindowOverflow { required: self.len(), remaining });
        }
        for element in self.iter() {
            window.put(element.to_raw());
        }
        Ok(self)
    }
}

#[cfg(test)]
mod window_tests {
    use crate::{BoolList, ByteList, CharList, FloatList, IntList, RawListError, Window, WindowBuffer, WindowMut};

    #[test]
    fn imports_unread_window_elements() {
        let mut window = WindowBuffer::wrap(vec![10, 20, 30, 40, 50, 60]);
        window.set_limit(5).set_position(2);
        let list = IntList::from_window(&window);
        assert_eq!(&[30, 40, 50], list.as_slice());
        assert_eq!(5, list.capacity());
        assert_eq!(2, window.position());
    }

    #[test]
    fn appends_after_existing_elements() {
        let window = WindowBuffer::wrap(vec![3.0f32, 4.0]);
        let mut list = FloatList::from([1.0, 2.0]);
        list.append_window(&window);
        assert_eq!(&[1.0, 2.0, 3.0, 4.0], list.as_slice());
    }

    #[test]
    fn bools_read_only_one_as_true() {
        let mut window = WindowBuffer::wrap(vec![9u8, 9, 1, 0, 2, 1, 255]);
        window.set_position(2);
        let list = BoolList::from_window(&window);
        assert_eq!(&[true, false, false, true, false], list.as_slice());
    }

    #[test]
    fn slices_are_whole_windows() {
        let bytes: &[u8] = &[1, 2, 3];
        assert_eq!(3, bytes.remaining());
        let list = ByteList::from_window(bytes);
        assert_eq!(&[1, 2, 3], list.as_slice());
        let chars = CharList::from_window(&['h', 'i'][..]);
        assert_eq!("hi", chars.string_of());
    }

    #[test]
    fn exports_at_position() {
        let list = BoolList::from([true, false, true]);
        let mut window = WindowBuffer::<u8>::allocate(5);
        window.put(7);
        list.put_into(&mut window).unwrap();
        assert_eq!(4, window.position());
        window.flip();
        assert_eq!(4, window.limit());
        assert_eq!(&[7, 1, 0, 1, 0], window.as_slice());
        let copied = BoolList::from_window(&window);
        assert_eq!(4, copied.len());
    }

    #[test]
    fn export_overflow_writes_nothing() {
        let list = IntList::from([1, 2, 3]);
        let mut window = WindowBuffer::<i32>::allocate(4);
        window.set_position(2);
        match list.put_into(&mut window) {
            Err(RawListError::WindowOverflow { required, remaining }) => {
                assert_eq!(3, required);
                assert_eq!(2, remaining);
            }
            other => panic!("expected overflow, got {:?}", other.map(|l| l.len())),
        }
        assert_eq!(2, window.position());
        assert_eq!(&[0, 0, 0, 0], window.as_slice());
    }

    #[test]
    fn cursor_handling() {
        let mut window = WindowBuffer::<u8>::allocate(4);
        window.put(1);
        window.put(2);
        assert!(window.has_remaining());
        window.flip();
        assert_eq!(0, window.position());
        assert_eq!(2, window.limit());
        window.set_position(1);
        window.rewind();
        assert_eq!(0, window.position());
        window.set_limit(1);
        window.clear();
        assert_eq!(4, window.limit());
        assert_eq!(4, window.capacity());
    }

    #[test]
    #[should_panic]
    fn reading_past_limit_panics() {
        let mut window = WindowBuffer::wrap(vec![1u8, 2, 3]);
        window.set_limit(2);
        window.get(2);
    }
}
