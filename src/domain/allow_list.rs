use std::collections::HashSet;

/// Phone numbers registered with the wallet provider.
const REGISTERED_PHONE_NUMBERS: [&str; 10] = [
    "081293846571",
    "085773092184",
    "087812349091",
    "082229901765",
    "081317758842",
    "085266104738",
    "085978452203",
    "081996731156",
    "087754209934",
    "083159914870",
];

/// The immutable set of phone numbers permitted to transact.
///
/// Numbers are matched verbatim; no normalisation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    numbers: HashSet<String>,
}

impl AllowList {
    pub fn new<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            numbers: numbers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, phone_number: &str) -> bool {
        self.numbers.contains(phone_number)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(REGISTERED_PHONE_NUMBERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allow_list() {
        let list = AllowList::default();
        assert_eq!(list.len(), 10);
        assert!(list.contains("081293846571"));
        assert!(list.contains("083159914870"));
        assert!(!list.contains("000000000000"));
    }

    #[test]
    fn test_matching_is_verbatim() {
        let list = AllowList::default();
        assert!(!list.contains(" 081293846571"));
        assert!(!list.contains("+6281293846571"));
    }

    #[test]
    fn test_custom_allow_list() {
        let list = AllowList::new(vec!["111".to_string()]);
        assert!(list.contains("111"));
        assert!(!list.contains("081293846571"));
    }
}
