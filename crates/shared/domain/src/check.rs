//! Shape checks applied to store documents before a page is allowed to use them.

use serde::{Deserialize, Deserializer};

/// A document that satisfies the constraints its bundled counterpart satisfies.
pub trait WellFormed {
    fn is_well_formed(&self) -> bool;
}

/// Outcome of vetting a fetched value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Usable<T> {
    Ready(T),
    /// Nothing came back (no document, empty collection).
    Empty,
    /// Something came back but none of it passes its shape check.
    Malformed,
}

/// Values a page can be built from.
///
/// Singletons are usable when well-formed. Collections keep their well-formed members and
/// are usable when at least one remains.
pub trait PageContent: Sized {
    fn vet(self) -> Usable<Self>;
}

impl<T: WellFormed> PageContent for Vec<T> {
    fn vet(mut self) -> Usable<Self> {
        if self.is_empty() {
            return Usable::Empty;
        }
        self.retain(WellFormed::is_well_formed);
        if self.is_empty() { Usable::Malformed } else { Usable::Ready(self) }
    }
}

/// An optional document is usable when present and usable itself.
impl<T: PageContent> PageContent for Option<T> {
    fn vet(self) -> Usable<Self> {
        match self.map(PageContent::vet) {
            None | Some(Usable::Empty) => Usable::Empty,
            Some(Usable::Malformed) => Usable::Malformed,
            Some(Usable::Ready(value)) => Usable::Ready(Some(value)),
        }
    }
}

/// Implements [`PageContent`] for singleton documents.
#[macro_export]
macro_rules! singleton_content {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::check::PageContent for $ty {
                fn vet(self) -> $crate::check::Usable<Self> {
                    if $crate::check::WellFormed::is_well_formed(&self) {
                        $crate::check::Usable::Ready(self)
                    } else {
                        $crate::check::Usable::Malformed
                    }
                }
            }
        )+
    };
}

/// Syntactic e-mail check: `local@domain.tld`, no whitespace, one `@`.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && !host.starts_with('.')
        && !host.ends_with('.')
        && !host.contains("..")
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Deserializes `null` like a missing field. The store emits `null` for every projected
/// field that a document does not have.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Named(&'static str);

    impl WellFormed for Named {
        fn is_well_formed(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[test]
    fn collections_keep_well_formed_members() {
        let vetted = vec![Named("a"), Named(""), Named("b")].vet();
        assert_eq!(vetted, Usable::Ready(vec![Named("a"), Named("b")]));
    }

    #[test]
    fn empty_and_fully_malformed_collections_are_distinguished() {
        assert_eq!(Vec::<Named>::new().vet(), Usable::Empty);
        assert_eq!(vec![Named("")].vet(), Usable::Malformed);
    }

    #[test]
    fn optional_content_is_empty_when_absent() {
        assert_eq!(None::<Vec<Named>>.vet(), Usable::Empty);
        assert_eq!(Some(vec![Named("")]).vet(), Usable::Malformed);
        assert_eq!(Some(vec![Named("a")]).vet(), Usable::Ready(Some(vec![Named("a")])));
    }

    #[test]
    fn email_syntax() {
        for ok in ["hello@example.com", "a.b+c@mail.co.uk", " spaced@trim.io "] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in ["", "plain", "@example.com", "a@b", "a@@b.com", "a b@c.com", "a@.com", "a@b.c", "a@b..com"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }
}
