//! Core types shared across the tree builder and differ.

/// Hash: 256-bit content fingerprint of a file
pub type Hash = [u8; 32];

/// Serde adapter rendering an optional [`Hash`] as lower-case hex.
pub mod hash_hex {
    use super::Hash;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(hash: &Option<Hash>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match hash {
            Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Hash>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(encoded) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let bytes = hex::decode(&encoded).map_err(D::Error::custom)?;
        let hash: Hash = bytes
            .try_into()
            .map_err(|_| D::Error::custom("content hash must be 32 bytes"))?;
        Ok(Some(hash))
    }
}
