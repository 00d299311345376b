//! Room id and password generation.
//!
//! Both are four-digit decimal strings drawn from a caller-supplied RNG so
//! tests can pin them with a seed.

use rand::Rng;

const CODE_MIN: u16 = 1000;
const CODE_MAX: u16 = 9999;

/// Number of distinct codes `generate_room_code` can produce.
pub const CODE_SPACE: usize = (CODE_MAX - CODE_MIN + 1) as usize;

/// Generate a four-digit code in `1000..=9999`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sixhand_engine::utils::room_code::generate_room_code;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let code = generate_room_code(&mut rng);
/// assert_eq!(code.len(), 4);
/// ```
pub fn generate_room_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.random_range(CODE_MIN..=CODE_MAX).to_string()
}
