use rand::{rngs::OsRng, RngCore};

/// Test if the SecretString does not reveal the secret
///
/// ```compile_fail
/// use stow_session::utils::secret_str::SecretString;
/// let x: SecretString = "".into();
/// println!("{:?}", x);
/// ```
///
/// ```compile_fail
/// use stow_session::utils::secret_str::SecretString;
/// let x: SecretString = "".into();
/// println!("{}", x);
/// ```

#[derive(Clone, PartialEq)]
#[cfg_attr(test, derive(Debug))]
pub struct SecretString(String);

impl SecretString {
    /// ```
    /// use stow_session::utils::secret_str::SecretString;
    ///
    /// let x: SecretString = "abc123".into();
    /// assert_eq!(x.reveal_secret(), "abc123");
    /// ```
    pub fn reveal_secret(&self) -> &str {
        &self.0
    }

    /// ```
    /// use stow_session::utils::secret_str::SecretString;
    ///
    /// let x: SecretString = "abc123".into();
    /// assert_eq!(x.len(), 6);
    /// ```
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Generates a fresh signing secret: 64 bytes from the OS RNG, hex
    /// encoded to 128 characters.
    pub fn generate() -> SecretString {
        let mut bytes = [0u8; 64];
        OsRng.fill_bytes(&mut bytes);
        SecretString(hex::encode(bytes))
    }
}

impl From<&str> for SecretString {
    fn from(secret: &str) -> Self {
        SecretString(secret.to_string())
    }
}

impl From<String> for SecretString {
    fn from(secret: String) -> Self {
        SecretString(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape() {
        let secret = SecretString::generate();
        assert_eq!(secret.len(), 128);
        assert!(secret.reveal_secret().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_differs() {
        assert_ne!(SecretString::generate(), SecretString::generate());
    }
}
