// tests/rational_tests.rs

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use rationals_core::{div_by, format_rational, parse_rational, Rational, RationalError};

    fn r(numerator: i64, denominator: i64) -> Rational {
        div_by(numerator, denominator).unwrap()
    }

    #[test]
    fn test_worked_arithmetic() {
        let half = r(1, 2);
        let third = r(1, 3);

        assert_eq!(half.add(&third), r(5, 6));
        assert_eq!(half.subtract(&third), r(1, 6));
        assert_eq!(half.multiply(&third), r(1, 6));
        assert_eq!(half.divide(&third).unwrap(), r(3, 2));
        assert_eq!(half.negate(), r(-1, 2));
    }

    #[test]
    fn test_worked_text() {
        assert_eq!(format_rational(&r(2, 1)), "2");
        assert_eq!(format_rational(&r(-2, 4)), "-1/2");
        assert_eq!(parse_rational("117/1098").unwrap(), r(13, 122));
        assert_eq!(parse_rational("117/1098").unwrap().to_string(), "13/122");
    }

    #[test]
    fn test_worked_ordering_and_range() {
        let half = r(1, 2);
        let third = r(1, 3);
        let two_thirds = r(2, 3);

        assert!(half < two_thirds);
        assert!(third.range_to(&two_thirds).contains(&half));
    }

    #[test]
    fn test_worked_large_values() {
        assert_eq!(div_by(2_000_000_000i64, 4_000_000_000i64).unwrap(), r(1, 2));

        let num: BigInt = "912016490186296920119201192141970416029".parse().unwrap();
        let den: BigInt = "1824032980372593840238402384283940832058".parse().unwrap();
        assert_eq!(div_by(num, den).unwrap(), r(1, 2));
    }

    #[test]
    fn test_division_by_zero_value() {
        let zero = Rational::new(BigInt::from(0), BigInt::from(17)).unwrap();
        assert_eq!(r(1, 2).divide(&zero), Err(RationalError::DivisionByZero));
    }

    #[test]
    fn test_entry_points_agree() {
        let from_pair = div_by(6, 4).unwrap();
        let from_text: Rational = "6/4".parse().unwrap();
        assert_eq!(from_pair, from_text);

        let whole = Rational::from(BigInt::from(3));
        assert_eq!(whole, "3".parse::<Rational>().unwrap());
        assert_eq!(whole, r(9, 3));
    }

    #[test]
    fn test_sorting_uses_value_order() {
        let mut values: Vec<Rational> = ["3/4", "-1/2", "0", "2/3", "1", "-5/3"]
            .iter()
            .map(|s| parse_rational(s).unwrap())
            .collect();
        values.sort();
        let text: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        assert_eq!(text, vec!["-5/3", "-1/2", "0", "2/3", "3/4", "1"]);
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(parse_rational("1/2/3"), Err(RationalError::MalformedInput { .. })));
        assert!(matches!(parse_rational("one"), Err(RationalError::MalformedInput { .. })));
        assert!(matches!(parse_rational(""), Err(RationalError::MalformedInput { .. })));
    }
}
