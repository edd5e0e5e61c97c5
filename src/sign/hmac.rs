use base64::{prelude::BASE64_URL_SAFE, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::model::config::MIN_SECRET_LEN;
use crate::model::sign;
use crate::utils::secret_str::SecretString;
use crate::Signer;

type HmacSha256 = Hmac<Sha256>;

/// Produces and checks session cookie values of the form
/// `base64url(payload)--hex(tag)`, the tag being an HMAC-SHA256 over the
/// encoded payload. Signing is deterministic: the same secret and payload
/// always yield the same cookie value.
pub struct HmacSigner {
    mac: HmacSha256,
}

impl HmacSigner {
    pub fn new(secret: &SecretString) -> anyhow::Result<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(anyhow::anyhow!(
                "signing secret length must be >= {}",
                MIN_SECRET_LEN
            ));
        }
        let mac = HmacSha256::new_from_slice(secret.reveal_secret().as_bytes())
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        Ok(HmacSigner { mac })
    }

    fn tag(&self, data: &[u8]) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(data);
        mac.finalize().into_bytes().to_vec()
    }
}

impl Signer for HmacSigner {
    fn sign(&self, data: &str) -> String {
        let encoded = BASE64_URL_SAFE.encode(data);
        let tag = self.tag(encoded.as_bytes());
        format!("{}--{}", encoded, hex::encode(tag))
    }

    fn verify(&self, value: &str) -> Result<String, sign::Error> {
        let (encoded, tag_hex) = value.split_once("--").ok_or(sign::Error::Malformed())?;
        let tag = hex::decode(tag_hex).map_err(|_| sign::Error::Malformed())?;
        let mut mac = self.mac.clone();
        mac.update(encoded.as_bytes());
        // constant time comparison
        mac.verify_slice(&tag)
            .map_err(|_| sign::Error::BadSignature())?;
        let decoded = BASE64_URL_SAFE
            .decode(encoded)
            .map_err(|_| sign::Error::Malformed())?;
        String::from_utf8(decoded).map_err(|e| sign::Error::Other(anyhow::anyhow!("{}", e)))
    }
}
