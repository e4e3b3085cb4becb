//! Deterministic avatar selection.

use sha2::{Digest, Sha256};

/// Avatar images a member can be assigned, relative to the static assets root.
pub const AVATARS: [&str; 5] = [
    "/assets/images/avatars/avatar1.png",
    "/assets/images/avatars/avatar2.png",
    "/assets/images/avatars/avatar3.png",
    "/assets/images/avatars/avatar4.png",
    "/assets/images/avatars/avatar5.png",
];

/// Picks an avatar for `seed` (member id or email).
///
/// The same seed always maps to the same avatar.
pub fn avatar_for(seed: &str) -> &'static str {
    let digest = Sha256::digest(seed.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let index = u64::from_be_bytes(prefix) % AVATARS.len() as u64;
    AVATARS[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_avatar_is_stable() {
        assert_eq!(avatar_for("member-1"), avatar_for("member-1"));
        assert!(AVATARS.contains(&avatar_for("")));
    }

    #[test]
    fn test_avatars_are_spread() {
        let picked: HashSet<_> = (0..200).map(|i| avatar_for(&format!("member-{i}"))).collect();
        assert!(picked.len() > 1);
    }
}
