use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of generated identifier suffixes. Four alphanumeric characters give
/// a 62^4 token space, enough for the expected set sizes (low hundreds of
/// identifiers per process).
pub const SUFFIX_LEN: usize = 4;

/// Source of the short random tokens appended to instance and field names.
/// Injected into [`DynamicFieldSet`](crate::DynamicFieldSet) so tests can
/// substitute a deterministic generator.
pub trait SuffixGenerator {
    fn suffix(&mut self) -> String;
}

/// Default generator: URL-safe alphanumeric tokens from the thread RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSuffix;

impl SuffixGenerator for RandomSuffix {
    fn suffix(&mut self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(char::from)
            .collect()
    }
}
