use crate::query_filters::PrivateIpFilter;
use std::collections::BTreeSet;

/// Why a candidate address was not admitted into an [`AddressSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Added,
    Duplicate,
    Private,
    Malformed,
}

/// Distinct public IP addresses observed in a query log.
///
/// Addresses are kept in the exact textual form they were observed in and
/// deduplicated on that text. Private, loopback and link-local addresses are
/// rejected by [`AddressSet::admit`], so the set never holds one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSet {
    addresses: BTreeSet<String>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(&mut self, value: &str) -> Admission {
        match PrivateIpFilter::is_private_str(value) {
            None => Admission::Malformed,
            Some(true) => Admission::Private,
            Some(false) => {
                if self.addresses.insert(value.to_string()) {
                    Admission::Added
                } else {
                    Admission::Duplicate
                }
            }
        }
    }

    pub fn contains(&self, address: &str) -> bool {
        self.addresses.contains(address)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.addresses.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for AddressSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = AddressSet::new();
        for value in iter {
            set.admit(value);
        }
        set
    }
}

impl<'a> IntoIterator for &'a AddressSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.iter()
    }
}
