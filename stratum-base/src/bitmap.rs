/// A presence bitmap of arbitrary length that counts bits in order from
/// least-to-most significant bits and ascending words. Bits at or past
/// `len` in the final word are always clear.
#[derive(Clone, Default, PartialEq, Eq, Debug, Hash)]
pub struct Bitmap {
    words: Vec<u64>,
    len: usize,
}

const WORD_BITS: usize = 64;

fn words_for(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

// Mask of the low `n` bits, n < 64.
fn low_mask(n: usize) -> u64 {
    (1_u64 << n) - 1
}

impl Bitmap {
    /// A bitmap of `len` clear bits.
    pub fn new(len: usize) -> Self {
        Bitmap {
            words: vec![0; words_for(len)],
            len,
        }
    }

    /// A bitmap of `len` set bits.
    pub fn all_set(len: usize) -> Self {
        let mut words = vec![u64::MAX; words_for(len)];
        if len % WORD_BITS != 0 {
            if let Some(last) = words.last_mut() {
                *last = low_mask(len % WORD_BITS);
            }
        }
        Bitmap { words, len }
    }

    pub fn from_bools(bits: impl IntoIterator<Item = bool>) -> Self {
        let mut bm = Bitmap::default();
        for b in bits {
            bm.push(b);
        }
        bm
    }

    pub fn push(&mut self, val: bool) {
        if self.len % WORD_BITS == 0 {
            self.words.push(0);
        }
        self.len += 1;
        self.set(self.len - 1, val);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    pub fn set(&mut self, i: usize, val: bool) {
        assert!(i < self.len, "bit {} out of range for bitmap of {} bits", i, self.len);
        if val {
            self.words[i / WORD_BITS] |= 1 << (i % WORD_BITS);
        } else {
            self.words[i / WORD_BITS] &= !(1 << (i % WORD_BITS));
        }
    }

    pub fn get(&self, i: usize) -> bool {
        assert!(i < self.len, "bit {} out of range for bitmap of {} bits", i, self.len);
        (self.words[i / WORD_BITS] & (1 << (i % WORD_BITS))) != 0
    }

    pub fn count(&self) -> usize {
        self.words.iter().map(|x| x.count_ones() as usize).sum()
    }

    /// Number of set bits in `[lo, hi)`.
    pub fn count_range(&self, lo: usize, hi: usize) -> usize {
        assert!(
            lo <= hi && hi <= self.len,
            "range {}..{} out of range for bitmap of {} bits",
            lo,
            hi,
            self.len
        );
        if lo == hi {
            return 0;
        }
        let (lo_word, lo_bit) = (lo / WORD_BITS, lo % WORD_BITS);
        let (hi_word, hi_bit) = (hi / WORD_BITS, hi % WORD_BITS);
        if lo_word == hi_word {
            let mask = (u64::MAX << lo_bit) & low_mask(hi_bit);
            return (self.words[lo_word] & mask).count_ones() as usize;
        }
        let mut n = (self.words[lo_word] & (u64::MAX << lo_bit)).count_ones() as usize;
        for w in &self.words[lo_word + 1..hi_word] {
            n += w.count_ones() as usize;
        }
        if hi_bit != 0 {
            n += (self.words[hi_word] & low_mask(hi_bit)).count_ones() as usize;
        }
        n
    }

    pub fn any(&self) -> bool {
        self.words.iter().any(|x| *x != 0)
    }

    pub fn is_full(&self) -> bool {
        self.count() == self.len
    }

    /// Indices of the set bits, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(w * WORD_BITS + bit)
            })
        })
    }
}
