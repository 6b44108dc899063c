use std::cell::RefCell;

/// Somewhere to keep the player's provider key between sessions.
pub trait KeyStore {
    type Error;

    /// The stored key, if any.
    ///
    /// # Errors
    ///
    /// Returns the backend's error when the store cannot be read.
    fn load(&self) -> Result<Option<String>, Self::Error>;

    /// # Errors
    ///
    /// Returns the backend's error when the store cannot be written.
    fn save(&self, key: &str) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Returns the backend's error when the entry cannot be removed.
    fn clear(&self) -> Result<(), Self::Error>;

    /// Whether a non-blank key is stored; read failures count as no key.
    fn has_key(&self) -> bool {
        self.load()
            .ok()
            .flatten()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

/// In-memory store for tests and the native tester.
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    key: RefCell<Option<String>>,
}

impl MemoryKeyStore {
    #[must_use]
    pub fn with_key(key: &str) -> Self {
        Self {
            key: RefCell::new(Some(key.to_string())),
        }
    }
}

impl KeyStore for MemoryKeyStore {
    type Error = std::convert::Infallible;

    fn load(&self) -> Result<Option<String>, Self::Error> {
        Ok(self.key.borrow().clone())
    }

    fn save(&self, key: &str) -> Result<(), Self::Error> {
        *self.key.borrow_mut() = Some(key.trim().to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        self.key.borrow_mut().take();
        Ok(())
    }
}

/// First 8 and last 4 characters of `key`, joined by `...`.
///
/// Keys too short to mask meaningfully are hidden entirely.
#[must_use]
pub fn mask_api_key(key: &str) -> String {
    const HEAD: usize = 8;
    const TAIL: usize = 4;
    let chars: Vec<char> = key.trim().chars().collect();
    if chars.len() <= HEAD + TAIL {
        return "...".to_string();
    }
    let head: String = chars[..HEAD].iter().collect();
    let tail: String = chars[chars.len() - TAIL..].iter().collect();
    format!("{head}...{tail}")
}
