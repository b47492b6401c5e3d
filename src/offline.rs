//! Offline-mode ("cracked") player UUIDs.
//!
//! A server running `online-mode=false` never asks the session service who a
//! player is. It derives the UUID locally the way Java's
//! `UUID.nameUUIDFromBytes` does: MD5 over the string `OfflinePlayer:<name>`,
//! stamped as a version 3 UUID.

use md5::{Digest, Md5};
use uuid::{Builder, Uuid};

/// Literal hashed in front of the player name.
const OFFLINE_PREFIX: &str = "OfflinePlayer:";

/// Namespace bytes hashed ahead of the name. RFC 4122 puts a 16 byte
/// namespace UUID here; Java's `UUID.nameUUIDFromBytes` takes none, so the
/// namespace is a zero-length constant rather than one of the `uuid` crate's
/// `NAMESPACE_*` values.
const NULL_NAMESPACE: &[u8] = b"";

/// Derives the UUID an offline-mode server assigns to `name`.
///
/// The name is hashed exactly as given, without trimming or case folding.
pub fn offline_uuid(name: &str) -> Uuid {
    name_uuid_from_bytes(format!("{OFFLINE_PREFIX}{name}").as_bytes())
}

/// Java's `UUID.nameUUIDFromBytes`: MD5 over the namespace and name bytes,
/// then force the version field to 3 and the variant to RFC 4122. The bit
/// surgery lives in `Builder::from_md5_bytes`.
fn name_uuid_from_bytes(data: &[u8]) -> Uuid {
    let mut hasher = Md5::new();
    hasher.update(NULL_NAMESPACE);
    hasher.update(data);
    Builder::from_md5_bytes(hasher.finalize().into()).into_uuid()
}
