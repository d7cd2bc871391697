use doping_plot_protocol::ThemeToken;

/// Number of entries in the categorical palette (Category10).
pub const PALETTE_LEN: u8 = 10;

/// Discrete scale from keys to palette colors.
///
/// The domain is the keys in order of first appearance; the n-th distinct
/// key gets palette entry n.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale<K> {
    domain: Vec<K>,
}

impl<K: PartialEq + Clone> OrdinalScale<K> {
    pub fn new() -> Self {
        Self { domain: Vec::new() }
    }

    /// Build the implicit domain from a sequence of keys.
    pub fn from_keys(keys: impl IntoIterator<Item = K>) -> Self {
        let mut scale = Self::new();
        for key in keys {
            scale.insert(key);
        }
        scale
    }

    fn insert(&mut self, key: K) -> usize {
        match self.domain.iter().position(|k| *k == key) {
            Some(i) => i,
            None => {
                self.domain.push(key);
                self.domain.len() - 1
            }
        }
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    /// Color for a key already in the domain.
    pub fn get(&self, key: &K) -> Option<ThemeToken> {
        self.domain
            .iter()
            .position(|k| k == key)
            .map(|i| ThemeToken::Category((i % PALETTE_LEN as usize) as u8))
    }
}

impl<K: PartialEq + Clone> Default for OrdinalScale<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_key_gets_first_color() {
        let scale = OrdinalScale::from_keys([true, true, false, true]);
        assert_eq!(scale.domain(), &[true, false]);
        assert_eq!(scale.get(&true), Some(ThemeToken::Category(0)));
        assert_eq!(scale.get(&false), Some(ThemeToken::Category(1)));
    }

    #[test]
    fn unknown_key_has_no_color() {
        let scale = OrdinalScale::from_keys(["a"]);
        assert_eq!(scale.get(&"b"), None);
    }

    #[test]
    fn palette_wraps() {
        let scale = OrdinalScale::from_keys(0..12);
        assert_eq!(scale.get(&10), Some(ThemeToken::Category(0)));
        assert_eq!(scale.get(&11), Some(ThemeToken::Category(1)));
    }
}
