use super::*;

fn fmt() -> FormatConfig {
    FormatConfig::default()
}

#[test]
fn parse_amount_reads_plain_numbers() {
    assert_eq!(parse_amount("1500"), 1500.0);
    assert_eq!(parse_amount("  42.5 "), 42.5);
    assert_eq!(parse_amount("-10"), -10.0);
}

#[test]
fn parse_amount_coerces_invalid_input_to_zero() {
    assert_eq!(parse_amount(""), 0.0);
    assert_eq!(parse_amount("   "), 0.0);
    assert_eq!(parse_amount("abc"), 0.0);
    assert_eq!(parse_amount("12abc"), 0.0);
    assert_eq!(parse_amount("NaN"), 0.0);
    assert_eq!(parse_amount("inf"), 0.0);
}

#[test]
fn format_amount_groups_thousands() {
    assert_eq!(format_amount(0.0, &fmt()), "0");
    assert_eq!(format_amount(999.0, &fmt()), "999");
    assert_eq!(format_amount(3999.0, &fmt()), "3,999");
    assert_eq!(format_amount(5499.0, &fmt()), "5,499");
    assert_eq!(format_amount(1_234_567.0, &fmt()), "1,234,567");
}

#[test]
fn format_amount_keeps_up_to_three_fraction_digits() {
    assert_eq!(format_amount(1234.5, &fmt()), "1,234.5");
    assert_eq!(format_amount(0.125, &fmt()), "0.125");
    assert_eq!(format_amount(1.0004, &fmt()), "1");
}

#[test]
fn format_amount_handles_negative_values() {
    assert_eq!(format_amount(-2500.0, &fmt()), "-2,500");
    assert_eq!(format_amount(-0.0001, &fmt()), "0");
}

#[test]
fn format_amount_honors_configured_separators() {
    let ru = FormatConfig {
        group_separator: "\u{a0}".to_owned(),
        decimal_separator: ",".to_owned(),
        currency: "₽".to_owned(),
    };
    assert_eq!(format_amount(3999.5, &ru), "3\u{a0}999,5");
}

#[test]
fn format_price_appends_currency_marker() {
    assert_eq!(format_price(2500.0, &fmt()), "2,500 ₽");
}

#[test]
fn format_amount_keeps_every_digit_of_large_values() {
    assert_eq!(format_amount(1e20, &fmt()), "100,000,000,000,000,000,000");
    assert_eq!(format_amount(1e15 + 0.5, &fmt()), "1,000,000,000,000,000.5");
    assert_eq!(format_amount(-1e20, &fmt()), "-100,000,000,000,000,000,000");
}

#[test]
fn format_amount_rounds_to_three_fraction_digits() {
    assert_eq!(format_amount(0.0004, &fmt()), "0");
    assert_eq!(format_amount(2.5, &fmt()), "2.5");
    assert_eq!(format_amount(999.9996, &fmt()), "1,000");
}
