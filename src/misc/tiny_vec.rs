/// Inline vector with a fixed capacity of `N` elements. Used for tile occupants,
/// where the capacity is known up front and the value should stay [`Copy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TinyVec<T, const N: usize> {
    data: [Option<T>; N],
    len: u8,
}

impl<T, const N: usize> TinyVec<T, N>
where
    T: Copy + PartialEq,
{
    pub const fn new() -> Self {
        const { assert!(N <= 255, "TinyVec supports up to 255 elements") }
        TinyVec { data: [None; N], len: 0 }
    }

    pub fn push(&mut self, value: T) {
        if (self.len as usize) < N {
            self.data[self.len as usize] = Some(value);
            self.len += 1;
        } else {
            panic!("TinyVec is full");
        }
    }

    /// Removes the first element equal to `element`, keeping the order of the rest.
    /// Returns `false` if no such element was stored.
    pub fn remove(&mut self, element: &T) -> bool {
        let Some(pos) = self.iter().position(|x| x == element) else {
            return false;
        };
        self.len -= 1;
        for i in pos..(self.len as usize) {
            self.data[i] = self.data[i + 1].take();
        }
        self.data[self.len as usize] = None;
        true
    }

    pub fn contains(&self, element: &T) -> bool {
        self.iter().any(|x| x == element)
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len as usize {
            self.data[index].as_ref()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data[..self.len as usize].iter().flatten()
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T, const N: usize> Default for TinyVec<T, N>
where
    T: Copy + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}
