//! Client-held copy of the server's pack sizes.

use super::{PackId, PackSize};

/// Working copy of the server catalog.
///
/// `revision` is bumped by every incremental edit (append or remove). A full
/// replacement keeps it, so a list fetch can tell whether an add or delete was
/// applied after the fetch was issued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    packs: Vec<PackSize>,
    revision: u64,
}

impl Catalog {
    /// Empty catalog at revision 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog, keeping the last entry when ids repeat.
    #[must_use]
    pub fn from_packs(packs: impl IntoIterator<Item = PackSize>) -> Self {
        let mut catalog = Self::new();
        for pack in packs {
            catalog.upsert(pack);
        }
        catalog
    }

    /// Counter bumped by every local append or removal.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of pack sizes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packs.len()
    }

    /// Whether the catalog has no pack sizes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PackSize> {
        self.packs.iter()
    }

    /// Entry with `id`, if present.
    #[must_use]
    pub fn get(&self, id: PackId) -> Option<&PackSize> {
        self.packs.iter().find(|pack| pack.id() == id)
    }

    /// Whether an entry with `id` exists.
    #[must_use]
    pub fn contains(&self, id: PackId) -> bool {
        self.get(id).is_some()
    }

    /// Replaces every entry with a fresh server snapshot.
    pub fn replace_all(&mut self, packs: impl IntoIterator<Item = PackSize>) {
        let revision = self.revision;
        *self = Self::from_packs(packs);
        self.revision = revision;
    }

    /// Appends a confirmed pack. Returns `false` when an entry with the same id
    /// was already present and got replaced instead.
    pub fn append(&mut self, pack: PackSize) -> bool {
        self.revision += 1;
        self.upsert(pack)
    }

    /// Removes the entry with the given id.
    pub fn remove(&mut self, id: PackId) -> Option<PackSize> {
        self.revision += 1;
        let index = self.packs.iter().position(|pack| pack.id() == id)?;
        Some(self.packs.remove(index))
    }

    /// Entries ordered by ascending size, ties broken by id.
    #[must_use]
    pub fn sorted_by_size(&self) -> Vec<PackSize> {
        let mut packs = self.packs.clone();
        packs.sort_by_key(|pack| (pack.size(), pack.id()));
        packs
    }

    fn upsert(&mut self, pack: PackSize) -> bool {
        if let Some(existing) = self.packs.iter_mut().find(|p| p.id() == pack.id()) {
            *existing = pack;
            false
        } else {
            self.packs.push(pack);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(id: u64, size: u64) -> PackSize {
        PackSize::new(PackId::new(id), size)
    }

    #[test]
    fn test_append_never_duplicates_ids() {
        let mut catalog = Catalog::from_packs([pack(1, 250), pack(2, 500)]);

        assert!(catalog.append(pack(3, 1000)));
        assert!(!catalog.append(pack(3, 1000)));

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.revision(), 2);
    }

    #[test]
    fn test_replace_all_keeps_revision() {
        let mut catalog = Catalog::new();
        catalog.append(pack(1, 250));
        let revision = catalog.revision();

        catalog.replace_all([pack(7, 42), pack(8, 43)]);

        assert_eq!(catalog.revision(), revision);
        assert!(!catalog.contains(PackId::new(1)));
        assert!(catalog.contains(PackId::new(8)));
    }

    #[test]
    fn test_remove_by_id() {
        let mut catalog = Catalog::from_packs([pack(1, 250), pack(2, 500), pack(3, 100)]);

        let removed = catalog.remove(PackId::new(2));

        assert_eq!(removed, Some(pack(2, 500)));
        assert!(!catalog.contains(PackId::new(2)));
        assert_eq!(catalog.remove(PackId::new(2)), None);
    }

    #[test]
    fn test_sorted_by_size() {
        let catalog = Catalog::from_packs([pack(1, 500), pack(2, 250), pack(3, 1000)]);

        let sizes: Vec<u64> = catalog.sorted_by_size().iter().map(PackSize::size).collect();

        assert_eq!(sizes, vec![250, 500, 1000]);
    }
}
