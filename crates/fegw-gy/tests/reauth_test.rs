use fegw_diameter_dict::{AvpValue, DictionaryManager, StandardAvpCode};
use fegw_gy::{FromAvps, ReAuthAnswer, ReAuthRequest, ToAvps};

#[test]
fn test_rar_without_rating_group_stays_absent() {
    fegw_logging::init_test();

    let rar = ReAuthRequest {
        session_id: "IMSI001010000000001-77".to_string(),
        rating_group: None,
    };
    let avps = rar.to_avps();
    assert_eq!(avps.len(), 1);
    assert!(avps.iter().all(|avp| avp.code != StandardAvpCode::RatingGroup));

    let decoded = ReAuthRequest::from_avps(&avps).unwrap();
    assert_eq!(decoded.rating_group, None);
    assert_eq!(decoded, rar);
}

#[test]
fn test_rar_rating_group_zero_is_kept() {
    fegw_logging::init_test();

    let rar = ReAuthRequest {
        session_id: "IMSI001010000000001-77".to_string(),
        rating_group: Some(0),
    };
    let avps = rar.to_avps();
    assert!(DictionaryManager::new().validate(&avps).is_ok());
    assert!(avps
        .iter()
        .any(|avp| avp.code == StandardAvpCode::RatingGroup && avp.value == AvpValue::Unsigned32(0)));

    let decoded = ReAuthRequest::from_avps(&avps).unwrap();
    assert_eq!(decoded.rating_group, Some(0));

    let unscoped = ReAuthRequest {
        rating_group: None,
        ..rar.clone()
    };
    assert_ne!(decoded, ReAuthRequest::from_avps(&unscoped.to_avps()).unwrap());
}

#[test]
fn test_raa_echoes_session() {
    let rar = ReAuthRequest {
        session_id: "sess-5".to_string(),
        rating_group: Some(3),
    };
    let raa = ReAuthAnswer::for_request(&rar, 2001);
    let decoded = ReAuthAnswer::from_avps(&raa.to_avps()).unwrap();
    assert_eq!(decoded.session_id, "sess-5");
    assert_eq!(decoded.result_code, 2001);
}
