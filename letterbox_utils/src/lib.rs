pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides
    /// the contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use letterbox_utils::Apply;
    /// fn describe(subject: String, reply_to: Option<&str>) -> String {
    ///     subject.apply_map(reply_to, |s, r| format!("{s} (reply to {r})"))
    /// }
    /// assert_eq!(describe("Hi".into(), None), "Hi");
    /// assert_eq!(describe("Hi".into(), Some("a@b.de")), "Hi (reply to a@b.de)");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        if let Some(value) = value {
            f(self, value)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}

#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables)]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}
