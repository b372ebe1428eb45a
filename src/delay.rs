use std::time::Duration;

/// Wait for the given number of milliseconds.
///
/// The returned future resolves once the duration has elapsed on the tokio
/// clock, so it respects `tokio::time::pause` in tests.
///
/// # Examples
///
/// ```no_run
/// use camelize_schema::delay;
///
/// # async fn run() {
/// delay(1000).await;
/// println!("one second later");
/// # }
/// ```
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
