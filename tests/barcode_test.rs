//! Barcode validation and formatting, end to end across symbologies.

use labelgen::barcode::{check, format_barcode, validate, BarcodeError, Symbology};

#[test]
fn test_gtin_payloads_gain_their_check_digit() {
    let cases = [
        (Symbology::UpcA, "03600029145", "036000291452"),
        (Symbology::Ean13, "590123412345", "5901234123457"),
        (Symbology::Ean8, "9638507", "96385074"),
        (Symbology::Itf14, "1234567890123", "12345678901231"),
    ];
    for (symbology, payload, expected) in cases {
        assert_eq!(
            format_barcode(symbology, payload).unwrap(),
            expected,
            "{}",
            symbology.as_str()
        );
    }
}

#[test]
fn test_gs1_types_wrap_the_gtin_in_an_application_identifier() {
    assert_eq!(
        format_barcode(Symbology::Gs1_128, "1234567890123").unwrap(),
        "(01)12345678901235"
    );
    assert_eq!(
        format_barcode(Symbology::DataBar, "590123412345").unwrap(),
        "(01)5901234123457"
    );
    // short payloads are zero-padded to the full GTIN width first
    assert_eq!(
        format_barcode(Symbology::Gs1_128, "42").unwrap(),
        "(01)00000000000426"
    );
}

#[test]
fn test_formatted_codes_pass_validation() {
    let sources = [
        (Symbology::UpcA, "036000291452"),
        (Symbology::Ean13, "4006381333931"),
        (Symbology::Ean8, "9638507"),
        (Symbology::Itf14, "812345"),
    ];
    for (symbology, raw) in sources {
        let formatted = format_barcode(symbology, raw).unwrap();
        assert!(
            validate(symbology, &formatted),
            "{} from '{}' -> '{}'",
            symbology.as_str(),
            raw,
            formatted
        );
    }
}

#[test]
fn test_checksum_mismatch_is_reported() {
    let err = check(Symbology::UpcA, "036000291453").unwrap_err();
    assert_eq!(
        err,
        BarcodeError::ChecksumMismatch {
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn test_length_window() {
    // payload alone or payload plus check digit
    assert!(validate(Symbology::UpcA, "03600029145"));
    assert!(validate(Symbology::UpcA, "036000291452"));

    let err = check(Symbology::UpcA, "0360002914").unwrap_err();
    assert!(matches!(err, BarcodeError::WrongLength { found: 10, .. }));

    // padded symbologies accept any short numeric payload
    assert!(validate(Symbology::Gs1_128, "42"));
    assert!(validate(Symbology::Itf14, "812345"));
}

#[test]
fn test_separators_are_tolerated() {
    assert!(validate(Symbology::UpcA, "0-36000-29145-2"));
    assert!(validate(Symbology::Ean13, "590 1234 12345 7"));

    let err = check(Symbology::Ean13, "59O1234123457").unwrap_err();
    assert_eq!(err, BarcodeError::NonNumeric('O'));
}

#[test]
fn test_condensed_upc_expansion() {
    // a bare 6-digit payload gets the leading number system digit
    assert_eq!(format_barcode(Symbology::UpcE, "123456").unwrap(), "0123456");
    // longer payloads already carry it
    assert_eq!(
        format_barcode(Symbology::UpcE, "01234565").unwrap(),
        "01234565"
    );

    assert!(validate(Symbology::UpcE, "123456"));
    assert!(!validate(Symbology::UpcE, "12345"));
}

#[test]
fn test_freeform_data_is_untouched() {
    let url = "https://example.com/p/12345?lot=A7";
    assert_eq!(format_barcode(Symbology::Qr, url).unwrap(), url);
    assert!(validate(Symbology::DataMatrix, "GS1|17260101|10ABC123"));
    assert_eq!(check(Symbology::Qr, "   ").unwrap_err(), BarcodeError::Empty);
}

#[test]
fn test_symbology_names_round_trip() {
    for symbology in Symbology::ALL {
        assert_eq!(Symbology::from_str(symbology.as_str()), Some(symbology));
    }
    assert_eq!(Symbology::from_str("EAN13"), Some(Symbology::Ean13));
    assert_eq!(Symbology::from_str("nope"), None);
}
