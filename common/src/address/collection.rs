use std::slice::Iter;

use super::validator::ValidatedAddress;

/// Every address accepted during a run, in the order it was found.
///
/// Duplicates are kept. The collection only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressCollection {
    addresses: Vec<ValidatedAddress>,
}

impl AddressCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, address: ValidatedAddress) {
        self.addresses.push(address);
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, ValidatedAddress> {
        self.addresses.iter()
    }
}

impl Extend<ValidatedAddress> for AddressCollection {
    fn extend<T: IntoIterator<Item = ValidatedAddress>>(&mut self, iter: T) {
        self.addresses.extend(iter);
    }
}

impl FromIterator<ValidatedAddress> for AddressCollection {
    fn from_iter<T: IntoIterator<Item = ValidatedAddress>>(iter: T) -> Self {
        Self {
            addresses: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AddressCollection {
    type Item = ValidatedAddress;
    type IntoIter = std::vec::IntoIter<ValidatedAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressCollection {
    type Item = &'a ValidatedAddress;
    type IntoIter = Iter<'a, ValidatedAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.iter()
    }
}
