use std::ops::Add;

/// Return the sum of two numbers.
///
/// # Examples
///
/// ```
/// use camelize_schema::add;
///
/// assert_eq!(add(5, 3), 8);
/// assert_eq!(add(-5.0, 10.0), 5.0);
/// ```
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}
