/// Liveness probe. Doesn't touch the database.
#[tracing::instrument(level = "trace")]
pub async fn handler() -> &'static str {
    "OK"
}
