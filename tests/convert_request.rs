use radixer::convert::{convert_request, Base, ConvertError};

#[test]
fn scenario_binary_to_decimal() {
    let conversion = convert_request("1010", Some(Base::Binary), Some(Base::Decimal)).unwrap();
    assert_eq!(conversion.to_string(), "(2) 1010 → (10) 10");
}

#[test]
fn scenario_hex_to_decimal() {
    let conversion = convert_request("FF", Some(Base::Hex), Some(Base::Decimal)).unwrap();
    assert_eq!(conversion.to_string(), "(16) FF → (10) 255");
}

#[test]
fn empty_input_is_reported_first() {
    // Whitespace-only counts as empty; no selection error even though both
    // selections are also missing.
    assert_eq!(convert_request("   ", None, None), Err(ConvertError::EmptyInput));
}

#[test]
fn missing_selection_is_reported_before_validation() {
    // "zz" is invalid everywhere, but the selection check comes first.
    assert_eq!(
        convert_request("zz", Some(Base::Binary), None),
        Err(ConvertError::MissingSelection)
    );
    assert_eq!(
        convert_request("zz", None, Some(Base::Binary)),
        Err(ConvertError::MissingSelection)
    );
}

#[test]
fn same_base_is_rejected_regardless_of_input_validity() {
    assert_eq!(
        convert_request("not even a number", Some(Base::Decimal), Some(Base::Decimal)),
        Err(ConvertError::SameBase)
    );
}

#[test]
fn octal_rejects_nine_with_the_source_base_in_the_message() {
    let err = convert_request("9", Some(Base::Octal), Some(Base::Decimal)).unwrap_err();
    assert_eq!(err, ConvertError::InvalidDigits { base: Base::Octal });
    assert_eq!(err.to_string(), "Invalid input for base 8.");
}

#[test]
fn input_is_trimmed_before_any_check() {
    let conversion = convert_request("  FF  ", Some(Base::Hex), Some(Base::Binary)).unwrap();
    assert_eq!(conversion.input, "FF");
    assert_eq!(conversion.output, "11111111");
}

#[test]
fn input_case_is_preserved_in_the_result_line() {
    let conversion = convert_request("ff", Some(Base::Hex), Some(Base::Decimal)).unwrap();
    assert_eq!(conversion.to_string(), "(16) ff → (10) 255");
}

#[test]
fn error_messages_match_the_dialog_taxonomy() {
    assert_eq!(ConvertError::EmptyInput.to_string(), "Please enter a number.");
    assert_eq!(
        ConvertError::MissingSelection.to_string(),
        "Please select both FROM and TO bases."
    );
    assert_eq!(
        ConvertError::SameBase.to_string(),
        "FROM and TO bases are the same. No conversion needed."
    );
    assert_eq!(
        ConvertError::InvalidDigits { base: Base::Binary }.to_string(),
        "Invalid input for base 2."
    );
    assert_eq!(
        ConvertError::ParseFailed.to_string(),
        "Conversion failed – invalid number for this base."
    );
}

#[test]
fn unknown_radix_is_unrepresentable() {
    assert_eq!(Base::from_radix(3), None);
    assert_eq!(Base::from_radix(0), None);
    assert_eq!(Base::from_radix(64), None);
    for base in Base::ALL {
        assert_eq!(Base::from_radix(base.radix()), Some(base));
    }
}
