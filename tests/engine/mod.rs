mod tests_properties;
#[cfg(feature = "serde")]
mod tests_serde;
