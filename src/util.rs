// Browser helpers shared by the components.

/// 64 bits of entropy from `Math.random`, used to seed the game RNG.
pub fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    let lo = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    (hi << 32) | lo
}
