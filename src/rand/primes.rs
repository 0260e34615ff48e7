/// Odd prime multipliers for the state transition.
pub const PRIMES: [u64; 8] = [
    16_777_619,
    2_147_483_647,
    998_244_353,
    1_000_000_007,
    4_294_967_291,
    1_099_511_628_211,
    2_305_843_009_213_693_951,
    18_446_744_073_709_551_557,
];
