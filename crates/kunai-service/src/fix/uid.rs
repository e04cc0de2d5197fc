//! Generated UIDs.

/// ## Summary
/// Returns a new globally unique identifier of the form `<hex>@<domain>`.
///
/// The hex part is 128 random bits from the thread-local CSPRNG.
#[must_use]
pub fn generate_uid(domain: &str) -> String {
    let bytes: [u8; 16] = rand::random();
    format!("{}@{domain}", hex::encode(bytes))
}
