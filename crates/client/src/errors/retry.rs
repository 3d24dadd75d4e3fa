/// Classification for caller-side retry policy.
///
/// The client never retries on its own. This only tells a caller whether
/// repeating the same call could plausibly succeed.
///
/// | Class | Typical cause |
/// |-------|---------------|
/// | `Never` | bad symbol, malformed payload, upstream-reported error |
/// | `WithBackoff` | connection failure, timeout, HTTP 429 or 5xx |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// The request is fundamentally invalid, repeating it won't help.
    Never,

    /// Transient failure; repeat after a delay.
    WithBackoff,
}
