use crate::Nullable;

mod column;
mod dense;
mod join;
mod types;

pub(crate) fn lcg_rand_step(state: &mut u32) -> u32 {
    *state = (*state as u64 * 279470273u64 % 0xfffffffb) as u32;
    *state
}

// Bitmap 101101 over backing 10, 20, 30, 40.
pub(crate) fn sparse_longs() -> Nullable<i64> {
    Nullable::from_options([Some(10), None, Some(20), Some(30), None, Some(40)])
}

// A sorted column of `len` elements with roughly a third null and
// duplicates among the present values.
pub(crate) fn random_sorted(state: &mut u32, len: usize) -> Nullable<i64> {
    let mut next = 0_i64;
    Nullable::from_options((0..len).map(|_| {
        if lcg_rand_step(state) % 3 == 0 {
            None
        } else {
            next += (lcg_rand_step(state) % 3) as i64;
            Some(next)
        }
    }))
}
