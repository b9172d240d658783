/// Iterator over every `K`-element index combination of `0..N`, in lexicographic order.
///
/// Used for C(6,5) and C(7,5) best-of-N selection and the C(4,2) x C(5,3) Omaha split.
#[derive(Debug, Clone)]
pub struct Combinations<const N: usize, const K: usize> {
    indices: [usize; K],
    done: bool,
}

impl<const N: usize, const K: usize> Combinations<N, K> {
    pub fn new() -> Self {
        let mut indices = [0; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        Self { indices, done: K > N }
    }
}

impl<const N: usize, const K: usize> Default for Combinations<N, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const K: usize> Iterator for Combinations<N, K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Find the rightmost index that can still move right.
        let mut i = K;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < N - K + i {
                self.indices[i] += 1;
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(result)
    }
}

/// Pick the cards at `indices` out of `cards`.
pub(crate) fn select<T: Copy, const N: usize, const K: usize>(
    cards: &[T; N],
    indices: [usize; K],
) -> [T; K] {
    indices.map(|i| cards[i])
}
