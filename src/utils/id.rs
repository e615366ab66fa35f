/// Generates a random idempotency key for an order
///
/// 30 characters from the URL-safe `nanoid` alphabet, so the key can travel in
/// a header without escaping. A fresh key per submission makes a retried HTTP
/// call recognizable to the remote service as the same order.
#[must_use]
pub fn idempotency_key() -> String {
    nanoid::nanoid!(30, &nanoid::alphabet::SAFE)
}
