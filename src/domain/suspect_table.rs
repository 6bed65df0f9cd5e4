//! Suspects and the clues pointing at them.
//!
//! The table is a fixed array of [`BUCKET_COUNT`] buckets. Each bucket heads a
//! singly linked chain of [`Suspect`] records; new suspects are pushed onto the
//! front of their chain.

use std::collections::VecDeque;

use tracing::instrument;

/// The number of buckets in a [`SuspectTable`].
pub const BUCKET_COUNT: usize = 23;

/// Maps a suspect name to its bucket.
///
/// Sums the bytes of the name with ASCII letters lowercased, modulo
/// [`BUCKET_COUNT`]. Anagrams always collide.
#[must_use]
pub fn bucket_index(name: &str) -> usize {
    name.bytes()
        .map(|byte| usize::from(byte.to_ascii_lowercase()))
        .sum::<usize>()
        % BUCKET_COUNT
}

/// A suspect together with every distinct clue associated with them.
#[derive(Debug)]
pub struct Suspect {
    name: String,
    /// Most recently associated first.
    clues: VecDeque<String>,
    next: Option<Box<Suspect>>,
}

impl Suspect {
    fn new(name: &str, next: Option<Box<Self>>) -> Box<Self> {
        Box::new(Self {
            name: name.to_owned(),
            clues: VecDeque::new(),
            next,
        })
    }

    /// The suspect's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of distinct clues associated with this suspect.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.clues.len()
    }

    /// The associated clues, most recent first.
    pub fn clues(&self) -> impl Iterator<Item = &str> {
        self.clues.iter().map(String::as_str)
    }

    /// Whether `clue` is already associated with this suspect.
    #[must_use]
    pub fn has_clue(&self, clue: &str) -> bool {
        self.clues.iter().any(|known| known == clue)
    }

    fn add_clue(&mut self, clue: &str) -> bool {
        if self.has_clue(clue) {
            return false;
        }
        self.clues.push_front(clue.to_owned());
        true
    }
}

/// A hash table of suspects using separate chaining.
#[derive(Debug)]
pub struct SuspectTable {
    buckets: [Option<Box<Suspect>>; BUCKET_COUNT],
    len: usize,
}

impl Default for SuspectTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspectTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| None),
            len: 0,
        }
    }

    /// The number of suspects in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no suspects.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Looks up a suspect by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Suspect> {
        self.chain(bucket_index(name)).find(|suspect| suspect.name == name)
    }

    /// Returns the suspect called `name`, creating an empty record at the head
    /// of its chain if there is none.
    #[instrument(level = "debug", skip(self))]
    pub fn find_or_create(&mut self, name: &str) -> &mut Suspect {
        let index = bucket_index(name);
        if self.get(name).is_none() {
            let head = self.buckets[index].take();
            self.buckets[index] = Some(Suspect::new(name, head));
            self.len += 1;
            tracing::debug!(bucket = index, "new suspect");
        }

        let mut cursor = self.buckets[index].as_deref_mut();
        loop {
            match cursor {
                Some(suspect) if suspect.name == name => return suspect,
                Some(suspect) => cursor = suspect.next.as_deref_mut(),
                None => unreachable!("suspect {name} is in bucket {index}"),
            }
        }
    }

    /// Ties `clue` to `suspect`, creating the suspect if needed.
    ///
    /// Returns `false` if the pair was already recorded; the suspect's count is
    /// then unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn associate(&mut self, clue: &str, suspect: &str) -> bool {
        let record = self.find_or_create(suspect);
        let added = record.add_clue(clue);
        if added {
            tracing::info!(count = record.clue_count(), "clue associated");
        }
        added
    }

    /// The suspect with the most clues, or `None` if the table is empty.
    ///
    /// Ties go to the alphabetically first name.
    #[must_use]
    pub fn most_cited(&self) -> Option<&Suspect> {
        self.iter().max_by(|a, b| {
            a.clue_count()
                .cmp(&b.clue_count())
                .then_with(|| b.name.cmp(&a.name))
        })
    }

    /// Iterates over every suspect, by bucket index and then chain order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    /// Calls `visit` with every suspect, in the order of [`Self::iter`].
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&Suspect),
    {
        self.iter().for_each(visit);
    }

    /// Iterates over the chain of one bucket, head first.
    ///
    /// # Panics
    ///
    /// Panics if `bucket` is not below [`BUCKET_COUNT`].
    pub fn chain(&self, bucket: usize) -> impl Iterator<Item = &Suspect> {
        let mut cursor = self.buckets[bucket].as_deref();
        std::iter::from_fn(move || {
            let suspect = cursor?;
            cursor = suspect.next.as_deref();
            Some(suspect)
        })
    }
}

/// Iterator over the suspects of a [`SuspectTable`].
#[derive(Debug)]
pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Option<Box<Suspect>>>,
    chain: Option<&'a Suspect>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Suspect;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(suspect) = self.chain {
                self.chain = suspect.next.as_deref();
                return Some(suspect);
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }
}

impl<'a> IntoIterator for &'a SuspectTable {
    type Item = &'a Suspect;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
