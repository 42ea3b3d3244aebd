// Without the `tracing` feature, the arguments are not evaluated at all, so only pass values
// which are used elsewhere too.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}
