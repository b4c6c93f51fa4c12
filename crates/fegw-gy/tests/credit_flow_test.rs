use fegw_core::FegwError;
use fegw_gy::{
    check_correlation, check_result, CcaDiameterMessage, CreditControlAnswer,
    CreditControlRequest, CreditRequestType, FinalUnitAction, FinalUnitIndication, FromAvps,
    GrantedServiceUnit, MsccDiameterMessage, ServiceDefaults, ToAvps, UsedCredits,
    UsedCreditsType,
};

fn update_request(request_number: u32) -> CreditControlRequest {
    CreditControlRequest {
        session_id: "IMSI001010000000001-1".to_string(),
        request_type: CreditRequestType::Update,
        imsi: "001010000000001".to_string(),
        request_number,
        ue_ipv4: "192.168.128.2".to_string(),
        spgw_ipv4: String::new(),
        apn: "internet".to_string(),
        imei: String::new(),
        plmn_id: String::new(),
        gc_id: String::new(),
        user_location: Vec::new(),
        msisdn: Vec::new(),
        qos: None,
        credits: vec![UsedCredits {
            rating_group: 1,
            input_octets: 512,
            output_octets: 512,
            total_octets: 1024,
            reason: UsedCreditsType::QuotaExhausted,
        }],
    }
}

fn final_grant_cca(request_number: u32) -> CcaDiameterMessage {
    CcaDiameterMessage {
        session_id: "IMSI001010000000001-1".to_string(),
        request_number,
        result_code: 2001,
        request_type: CreditRequestType::Update,
        credit_control: vec![MsccDiameterMessage {
            result_code: None,
            granted_service_unit: Some(GrantedServiceUnit {
                total_octets: Some(4096),
                input_octets: None,
                output_octets: None,
            }),
            validity_time: Some(600),
            final_unit_indication: Some(FinalUnitIndication {
                action: FinalUnitAction::RestrictAccess,
            }),
            rating_group: Some(1),
        }],
    }
}

#[test]
fn test_update_answered_with_final_grant() {
    fegw_logging::init_test();

    let ccr = update_request(5);
    let ccr_avps = ccr.to_avps_with(&ServiceDefaults::default()).unwrap();
    assert!(!ccr_avps.is_empty());

    // OCS side builds the answer, client side decodes it
    let wire = final_grant_cca(5).to_avps();
    let cca = CcaDiameterMessage::from_avps(&wire).unwrap();
    let answer = CreditControlAnswer::from(&cca);

    check_correlation(&ccr, &answer).unwrap();
    check_result(&answer).unwrap();

    assert_eq!(answer.credits.len(), 1);
    let grant = &answer.credits[0];
    assert_eq!(grant.result_code, 2001);
    assert_eq!(grant.rating_group, 1);
    assert_eq!(grant.granted_units.total_octets, Some(4096));
    assert_eq!(grant.validity_time, 600);
    assert_eq!(grant.effective_final_action(), Some(FinalUnitAction::RestrictAccess));
}

#[test]
fn test_stale_answer_is_rejected() {
    let ccr = update_request(6);
    let answer = CreditControlAnswer::from(&final_grant_cca(5));

    match check_correlation(&ccr, &answer) {
        Err(FegwError::Correlation {
            expected_request_number,
            request_number,
            ..
        }) => {
            assert_eq!(expected_request_number, 6);
            assert_eq!(request_number, 5);
        }
        other => panic!("Expected Correlation, got {other:?}"),
    }
}

#[test]
fn test_denied_answer() {
    let mut cca = final_grant_cca(5);
    cca.result_code = 4012;
    cca.credit_control.clear();
    let answer = CreditControlAnswer::from(&cca);

    let err = check_result(&answer).unwrap_err();
    assert_eq!(err, FegwError::Protocol { result_code: 4012 });
    assert!(err.is_retryable());
}
