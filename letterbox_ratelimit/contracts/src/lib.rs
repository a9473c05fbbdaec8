use std::future::Future;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RateLimitService: Send + Sync + 'static {
    /// Counts a hit for `key` and reports whether the request is still
    /// within every configured window.
    fn check(&self, key: String) -> impl Future<Output = bool> + Send;
}

#[cfg(feature = "mock")]
impl MockRateLimitService {
    pub fn with_check(mut self, key: impl Into<String>, allowed: bool) -> Self {
        self.expect_check()
            .once()
            .with(mockall::predicate::eq(key.into()))
            .return_once(move |_| Box::pin(std::future::ready(allowed)));
        self
    }
}
