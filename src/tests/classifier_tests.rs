use crate::{
    Classification, DID_UTIL, DidError, DidInput, ExtractedNumber, Format, Region, ServiceCode,
    SplitNadpNumber, TollState,
};

use super::get_did_util;

#[test]
fn classify_nadp_e164() {
    let did_util = get_did_util();
    assert_eq!(
        did_util.classify("+12065551212"),
        Classification {
            region: Region::Nadp,
            format: Format::E164,
            tollstate: TollState::Standard,
        }
    );
}

#[test]
fn classify_toll_free_and_premium() {
    let did_util = get_did_util();

    let classification = did_util.classify("18005551212");
    assert_eq!(classification.tollstate, TollState::TollFree);
    assert_eq!(classification.region, Region::Nadp);
    assert_eq!(classification.format, Format::OneNpan);

    for area_code in ["800", "888", "877", "866", "855", "844", "833"] {
        let did = format!("+1{}5551212", area_code);
        assert!(did_util.is_toll_free(&did), "{}", did);
        assert_eq!(did_util.tollstate(&did), TollState::TollFree);
    }

    assert_eq!(did_util.tollstate("9005551212"), TollState::Premium);
    assert!(did_util.is_premium("+19005551212"));
    assert!(!did_util.is_toll_free("9005551212"));
    assert!(!did_util.is_premium("8005551212"));
}

#[test]
fn classify_formats() {
    let did_util = get_did_util();
    let cases = [
        ("2065551212", Region::Nadp, Format::Npan, TollState::Standard),
        ("12065551212", Region::Nadp, Format::OneNpan, TollState::Standard),
        ("98765", Region::Nadp, Format::Shortcode, TollState::Shortcode),
        ("987654", Region::Nadp, Format::Shortcode, TollState::Shortcode),
        ("+96824560742", Region::International, Format::E164, TollState::International),
        ("01196824560742", Region::International, Format::UsIntl, TollState::International),
        ("+2345678", Region::International, Format::UsIntl, TollState::International),
        (
            "911",
            Region::Nadp,
            Format::N11,
            TollState::ServiceCode(ServiceCode::Emergency),
        ),
        (
            "411",
            Region::Nadp,
            Format::N11,
            TollState::ServiceCode(ServiceCode::DirectoryInfo),
        ),
    ];
    for (did, region, format, tollstate) in cases {
        assert_eq!(
            did_util.classify(did),
            Classification { region, format, tollstate },
            "{}",
            did
        );
    }
}

#[test]
fn classify_unknown() {
    let did_util = get_did_util();
    for did in ["", "abc", "1234", "0005551212", "111", "+1", "2065551212x", "1206555121"] {
        assert_eq!(did_util.classify(did), Classification::UNKNOWN, "{:?}", did);
    }
    assert_eq!(did_util.classify(DidInput::Absent), Classification::UNKNOWN);
    assert_eq!(did_util.classify(2065551212_i64), Classification::UNKNOWN);
    assert_eq!(did_util.classify(2.5_f64), Classification::UNKNOWN);
}

#[test]
fn format_and_region_unknown_only_together() {
    let did_util = get_did_util();
    let inputs = [
        "+12065551212", "2065551212", "12065551212", "98765", "911", "+96824560742",
        "01144208765432", "+10005551212", "", "hello", "0",
    ];
    for did in inputs {
        let classification = did_util.classify(did);
        assert_eq!(
            classification.format == Format::Unknown,
            classification.region == Region::Unknown,
            "{}: {:?}",
            did,
            classification
        );
    }
}

#[test]
fn classify_is_pure() {
    let did_util = get_did_util();
    for did in ["+12065551212", "18005551212", "98765", "garbage", "+96824560742"] {
        assert_eq!(did_util.classify(did), did_util.classify(did));
        assert_eq!(did_util.classify(did), DID_UTIL.classify(did));
    }
}

#[test]
fn unassigned_n11_is_unknown_service() {
    let did_util = get_did_util();
    // 933 is in the service table but is not N11 shaped.
    assert!(!did_util.is_n11("933"));
    assert!(did_util.is_n11("211"));
    for did in ["211", "311", "511", "611", "711", "811"] {
        assert!(matches!(did_util.tollstate(did), TollState::ServiceCode(code) if code != ServiceCode::Unknown));
    }
}

#[test]
fn predicates_are_independent() {
    let did_util = get_did_util();
    // One string may satisfy several predicates.
    assert!(did_util.is_nadp("+12065551212"));
    assert!(did_util.is_e164("+12065551212"));
    assert!(!did_util.is_intl("+12065551212"));

    assert!(did_util.is_npan("2065551212"));
    assert!(did_util.is_nadp("2065551212"));
    assert!(!did_util.is_one_npan("2065551212"));

    assert!(did_util.is_one_npan("12065551212"));
    assert!(!did_util.is_npan("12065551212"));

    assert!(did_util.is_e164("+96824560742"));
    assert!(did_util.is_us_intl("+96824560742"));
    assert!(did_util.is_intl("+96824560742"));

    assert!(did_util.is_shortcode("98765"));
    assert!(!did_util.is_shortcode("18765"));
    assert!(!did_util.is_shortcode("9876543"));

    assert!(!did_util.is_e164("+0123456789"));
    assert!(!did_util.is_e164("+1234567890123456"));
    assert!(did_util.is_e164("+123456789012345"));
    assert!(!did_util.is_us_intl("0111234567"));
}

#[test]
fn extract_international() {
    let did_util = get_did_util();
    assert_eq!(
        did_util.extract("+96824560742"),
        Ok(ExtractedNumber::new("968", "24560742"))
    );
    assert_eq!(
        did_util.extract("01196824560742"),
        Ok(ExtractedNumber::new("968", "24560742"))
    );
    assert_eq!(
        did_util.extract("+442087654321"),
        Ok(ExtractedNumber::new("44", "2087654321"))
    );
    assert_eq!(
        did_util.extract("+79161234567"),
        Ok(ExtractedNumber::new("7", "9161234567"))
    );
    assert_eq!(
        did_util.extract("+12065551212"),
        Ok(ExtractedNumber::new("1", "2065551212"))
    );
}

#[test]
fn extract_n11_is_not_split() {
    let did_util = get_did_util();
    assert_eq!(did_util.extract("911"), Ok(ExtractedNumber::new("1", "911")));
    assert_eq!(did_util.extract("411"), Ok(ExtractedNumber::new("1", "411")));
}

#[test]
fn extract_garbage() {
    let did_util = get_did_util();
    assert_eq!(did_util.extract(1923_i64), Err(DidError::InvalidNumberFormat));
    assert_eq!(did_util.extract(DidInput::Absent), Err(DidError::InvalidNumberFormat));
    assert_eq!(did_util.extract(None::<&str>), Err(DidError::InvalidNumberFormat));
    assert_eq!(did_util.extract(19.23_f64), Err(DidError::InvalidNumberFormat));
    assert_eq!(did_util.extract("not a number"), Err(DidError::InvalidNumberFormat));
    assert_eq!(did_util.extract(""), Err(DidError::InvalidNumberFormat));
    assert_eq!(did_util.extract("+"), Err(DidError::InvalidNumberFormat));
    assert_eq!(did_util.extract("+44 20 8765"), Err(DidError::InvalidNumberFormat));
    // 0 is not a calling code
    assert_eq!(did_util.extract("+0123456"), Err(DidError::InvalidNumberFormat));
    // a calling code alone leaves no national number
    assert_eq!(did_util.extract("+968"), Err(DidError::InvalidNumberFormat));
}

#[test]
fn split_nadp() {
    let did_util = get_did_util();
    let expected = SplitNadpNumber::new("206", "555", "1212");
    for did in ["+12065551212", "12065551212", "2065551212"] {
        assert_eq!(did_util.split(did), Ok(expected.clone()));
    }
    assert_eq!(did_util.split("98765"), Err(DidError::InvalidNumberFormat));
    assert_eq!(did_util.split("+96824560742"), Err(DidError::InvalidNumberFormat));
    assert_eq!(did_util.split("1065551212"), Err(DidError::InvalidNumberFormat));
    assert_eq!(did_util.split(2065551212_i64), Err(DidError::InvalidNumberFormat));
}

#[test]
fn split_reassembles_digits() {
    let did_util = get_did_util();
    for did in ["+12065551212", "12065551212", "2065551212", "+18005551212", "3125550000"] {
        let parts = did_util.split(did).unwrap();
        assert_eq!(did_util.region(did), Region::Nadp);
        assert!(did.ends_with(&parts.to_npan()));
        let prefix = &did[..did.len() - 10];
        assert!(["", "1", "+1"].contains(&prefix));
    }
}

#[test]
fn calling_codes() {
    let did_util = get_did_util();
    assert!(did_util.is_calling_code("1"));
    assert!(did_util.is_calling_code("968"));
    assert!(!did_util.is_calling_code("969"));
    assert!(did_util.supported_calling_codes().count() > 200);
    assert!(
        did_util
            .supported_calling_codes()
            .all(|code| did_util.is_calling_code(code))
    );
}
