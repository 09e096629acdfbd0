use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read access to incoming webhook headers. Lookups ignore ASCII case.
pub trait HeaderSource {
    fn header(&self, name: &str) -> Option<&str>;
}

fn find_in<'a, K, V>(mut pairs: impl Iterator<Item = (&'a K, &'a V)>, name: &str) -> Option<&'a str>
where
    K: AsRef<str> + ?Sized + 'a,
    V: AsRef<str> + ?Sized + 'a,
{
    pairs
        .find(|(key, _)| key.as_ref().eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_ref())
}

impl HeaderSource for reqwest::header::HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }
}

impl<S: BuildHasher> HeaderSource for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&str> {
        find_in(self.iter(), name)
    }
}

impl HeaderSource for BTreeMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        find_in(self.iter(), name)
    }
}

impl HeaderSource for [(&str, &str)] {
    fn header(&self, name: &str) -> Option<&str> {
        find_in(self.iter().map(|(key, value)| (*key, *value)), name)
    }
}

impl<const N: usize> HeaderSource for [(&str, &str); N] {
    fn header(&self, name: &str) -> Option<&str> {
        self.as_slice().header(name)
    }
}

impl HeaderSource for [(String, String)] {
    fn header(&self, name: &str) -> Option<&str> {
        find_in(self.iter().map(|(key, value)| (key, value)), name)
    }
}

impl HeaderSource for Vec<(String, String)> {
    fn header(&self, name: &str) -> Option<&str> {
        self.as_slice().header(name)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderMap, HeaderValue};

    use super::*;

    #[test]
    fn lookups_ignore_case() {
        let mut map = HeaderMap::new();
        map.insert("telnyx-timestamp", HeaderValue::from_static("1700000000"));
        assert_eq!(map.header("Telnyx-Timestamp"), Some("1700000000"));

        let hash: HashMap<String, String> =
            HashMap::from([("Telnyx-Timestamp".to_owned(), "1".to_owned())]);
        assert_eq!(hash.header("telnyx-timestamp"), Some("1"));

        let tree = BTreeMap::from([("TELNYX-TIMESTAMP".to_owned(), "2".to_owned())]);
        assert_eq!(tree.header("telnyx-timestamp"), Some("2"));

        let pairs = [("telnyx-timestamp", "3"), ("content-type", "application/json")];
        assert_eq!(pairs.header("Content-Type"), Some("application/json"));
        assert_eq!(pairs[..].header("TELNYX-timestamp"), Some("3"));

        let owned = vec![("X-Request-Id".to_owned(), "abc".to_owned())];
        assert_eq!(owned.header("x-request-id"), Some("abc"));
        assert_eq!(owned.header("missing"), None);
    }
}
