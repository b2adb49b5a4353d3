//! Clue → suspect lookup table
//!
//! A fixed-size array of buckets, each a singly linked chain of entries.
//! Built once from the case dataset, then only read.

/// Number of buckets in the case dataset's table
pub const TABLE_SIZE: usize = 10;

const HASH_SEED: u64 = 5381;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SuspectEntry {
    clue_text: String,
    suspect: String,
    next: Option<Box<SuspectEntry>>,
}

/// Maps clue text to the suspect it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueIndex {
    buckets: Vec<Option<Box<SuspectEntry>>>,
    len: usize,
}

/// Bucket for `text` in a table of `buckets` slots.
///
/// Seeded at 5381 and folded as `acc * 33 + byte`, wrapping on overflow.
/// The result only depends on the bytes of `text`.
pub fn hash(text: &str, buckets: usize) -> usize {
    let acc = text
        .bytes()
        .fold(HASH_SEED, |acc, b| acc.wrapping_mul(33).wrapping_add(u64::from(b)));
    (acc % buckets as u64) as usize
}

impl ClueIndex {
    /// An index with `buckets` empty chains
    pub fn with_buckets(buckets: usize) -> Self {
        let buckets = buckets.max(1);
        Self {
            buckets: (0..buckets).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Build a [`TABLE_SIZE`] table from `(clue, suspect)` pairs, in order.
    ///
    /// A later pair with the same clue shadows the earlier one.
    pub fn build<'a, I>(dataset: I) -> Self
    where
        I: IntoIterator<Item = &'a (&'a str, &'a str)>,
    {
        let mut index = Self::with_buckets(TABLE_SIZE);
        for (clue, suspect) in dataset {
            index.insert(clue, suspect);
        }
        let longest_chain = (0..index.bucket_count())
            .map(|slot| index.chain_len(slot))
            .max()
            .unwrap_or(0);
        tracing::debug!(
            entries = index.len,
            buckets = index.bucket_count(),
            longest_chain,
            "clue index built"
        );
        index
    }

    /// Push a pair at the head of its bucket's chain
    pub fn insert(&mut self, clue_text: &str, suspect: &str) {
        let slot = hash(clue_text, self.buckets.len());
        let head = self.buckets[slot].take();
        self.buckets[slot] = Some(Box::new(SuspectEntry {
            clue_text: clue_text.to_string(),
            suspect: suspect.to_string(),
            next: head,
        }));
        self.len += 1;
    }

    /// Suspect linked to `clue_text`, newest entry first
    pub fn lookup(&self, clue_text: &str) -> Option<&str> {
        let slot = hash(clue_text, self.buckets.len());
        let mut node = self.buckets[slot].as_deref();
        while let Some(entry) = node {
            if entry.clue_text == clue_text {
                return Some(entry.suspect.as_str());
            }
            node = entry.next.as_deref();
        }
        None
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the chain in bucket `slot`
    pub fn chain_len(&self, slot: usize) -> usize {
        let mut node = self.buckets.get(slot).and_then(|b| b.as_deref());
        let mut count = 0;
        while let Some(entry) = node {
            count += 1;
            node = entry.next.as_deref();
        }
        count
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Free every chain. Returns how many entries were released.
    pub fn teardown(self) -> usize {
        let mut released = 0;
        for bucket in self.buckets {
            let mut node = bucket;
            while let Some(mut entry) = node {
                node = entry.next.take();
                released += 1;
            }
        }
        released
    }
}
