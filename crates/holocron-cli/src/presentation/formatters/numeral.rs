/// Symbols in greedy substitution order, largest value first.
///
/// Nothing above L: episode numbers stay well below 50. Larger values
/// repeat `L`.
const NUMERALS: [(&str, i64); 7] = [
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Format an integer as an uppercase Roman numeral.
///
/// Zero and negative values have no representation and yield an empty string.
pub fn to_roman(value: i64) -> String {
    let mut remaining = value;
    let mut roman = String::new();

    for (symbol, amount) in NUMERALS {
        while remaining >= amount {
            roman.push_str(symbol);
            remaining -= amount;
        }
    }

    roman
}

/// Title line of the crawl, e.g. `Episode IV`
pub fn episode_title(episode_id: u32) -> String {
    format!("Episode {}", to_roman(i64::from(episode_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(roman: &str) -> i64 {
        let mut rest = roman;
        let mut total = 0;
        'outer: while !rest.is_empty() {
            for (symbol, amount) in NUMERALS {
                if let Some(tail) = rest.strip_prefix(symbol) {
                    total += amount;
                    rest = tail;
                    continue 'outer;
                }
            }
            panic!("unparseable numeral: {}", roman);
        }
        total
    }

    #[test]
    fn test_known_values() {
        assert_eq!(to_roman(1), "I");
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(9), "IX");
        assert_eq!(to_roman(40), "XL");
        assert_eq!(to_roman(50), "L");
        assert_eq!(to_roman(6), "VI");
        assert_eq!(to_roman(14), "XIV");
        assert_eq!(to_roman(49), "XLIX");
        assert_eq!(to_roman(99), "LXLIX");
    }

    #[test]
    fn test_non_positive_values_are_empty() {
        assert_eq!(to_roman(0), "");
        assert_eq!(to_roman(-3), "");
    }

    #[test]
    fn test_greedy_output_is_canonical_below_one_hundred() {
        for n in 1..100 {
            let roman = to_roman(n);
            assert_eq!(parse(&roman), n, "{} -> {}", n, roman);

            // At most three repeats of a single-letter symbol below L
            for symbol in ["X", "I"] {
                assert!(
                    !roman.contains(&symbol.repeat(4)),
                    "{} -> {} repeats {}",
                    n,
                    roman,
                    symbol
                );
            }
            assert!(!roman.contains("VV"), "{} -> {}", n, roman);
        }
    }

    #[test]
    fn test_episode_title() {
        assert_eq!(episode_title(4), "Episode IV");
        assert_eq!(episode_title(6), "Episode VI");
    }
}
