//! Document id generation.

use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated document ids.
pub const DOCUMENT_ID_LEN: usize = 20;

/// Generates a random 20-character alphanumeric document id.
pub fn generate_document_id() -> String {
    let mut rng = rand::rng();

    (0..DOCUMENT_ID_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
