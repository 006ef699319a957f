/// Returns early with the given error when the condition does not hold.
///
/// The error is converted with `Into`, so operation-specific error enums can be
/// raised from helpers that return a wrapping error type.
#[macro_export]
macro_rules! require {
    ($cond:expr, $err:expr $(,)?) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
