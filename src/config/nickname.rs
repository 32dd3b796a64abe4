//! Fallback nickname for connect forms without one, e.g. `guest4821`.

use rand::RngExt;

const PREFIX: &str = "guest";

pub fn generate_nickname() -> String {
    let mut rng = rand::rng();
    let num: u16 = rng.random_range(0..10000);
    format!("{}{:04}", PREFIX, num)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_nick_shape() {
        let nick = generate_nickname();
        assert_eq!(nick.len(), 9);
        assert!(nick[PREFIX.len()..].chars().all(|c| c.is_ascii_digit()));
    }
}
