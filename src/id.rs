//! Todo Id Generation
//!
//! Ids are the base-36 creation time followed by five base-36 digits of a
//! random fraction, e.g. `lq2k3m4a` + `9fz0k`.

use crate::models::{Todo, TodoId};
use crate::todo_list;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_DIGITS: usize = 5;

fn push_base36(mut n: u64, out: &mut String) {
    if n == 0 {
        out.push('0');
        return;
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.extend(buf.iter().rev().map(|&b| b as char));
}

/// Build an id from a millisecond timestamp and a random number in `[0, 1)`
pub fn uid_from(millis: u64, random: f64) -> TodoId {
    let mut id = String::new();
    push_base36(millis, &mut id);

    let mut frac = random.fract().abs();
    for _ in 0..RANDOM_DIGITS {
        if frac == 0.0 {
            break;
        }
        frac *= 36.0;
        let digit = frac.floor();
        id.push(DIGITS[digit as usize % 36] as char);
        frac -= digit;
    }
    TodoId::new(id)
}

/// Draw a new id from the browser clock and RNG
pub fn uid() -> TodoId {
    uid_from(js_sys::Date::now() as u64, js_sys::Math::random())
}

/// Draw ids from `next` until one is not already used in `list`
pub fn fresh_id_with(list: &[Todo], mut next: impl FnMut() -> TodoId) -> TodoId {
    loop {
        let id = next();
        if !todo_list::contains(list, &id) {
            return id;
        }
        log::debug!("[ID] collision on {}, drawing again", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_prefix() {
        // 1700000000000 ms in base 36
        let id = uid_from(1_700_000_000_000, 0.0);
        assert_eq!(id.as_str(), "loyw3v28");
    }

    #[test]
    fn test_random_suffix() {
        let id = uid_from(35, 0.5);
        // 0.5 in base 36 is 0.i
        assert_eq!(id.as_str(), "zi");

        let id = uid_from(1, 0.123456789);
        assert_eq!(id.as_str().len(), 1 + RANDOM_DIGITS);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_fresh_id_skips_existing() {
        let list = vec![Todo::new(TodoId::new("a"), "x".to_string())];
        let mut draws = vec![TodoId::new("b"), TodoId::new("a")];
        let id = fresh_id_with(&list, || draws.pop().unwrap());
        assert_eq!(id, TodoId::new("b"));
    }
}
