use rand::distr::Distribution;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::error::GeneratorError;

/// Cap on `*`/`+`/unbounded `{n,}` repetitions when sampling
const MAX_REPEAT: u32 = 8;

/// Generate a string matching the given pattern
pub(crate) fn sample_matching(pattern: &str) -> Result<String, GeneratorError> {
    let generator = rand_regex::Regex::compile(pattern, MAX_REPEAT).map_err(|err| GeneratorError::Pattern {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    })?;

    let mut rng = XorShiftRng::from_rng(&mut rand::rng());
    let value: String = generator.sample(&mut rng);
    Ok(value)
}
