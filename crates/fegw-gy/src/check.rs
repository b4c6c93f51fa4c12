//! Checks the charging client runs on a CCA before applying its grants.

use fegw_core::{FegwError, Result, ResultClass};
use tracing::warn;

use crate::definitions::{CreditControlAnswer, CreditControlRequest};

/// The answer must echo the Session-Id and CC-Request-Number it answers
pub fn check_correlation(
    request: &CreditControlRequest,
    answer: &CreditControlAnswer,
) -> Result<()> {
    if request.session_id == answer.session_id && request.request_number == answer.request_number
    {
        return Ok(());
    }
    warn!(
        session_id = %answer.session_id,
        request_number = answer.request_number,
        "Answer does not match outstanding request"
    );
    Err(FegwError::Correlation {
        expected_session_id: request.session_id.clone(),
        expected_request_number: request.request_number,
        session_id: answer.session_id.clone(),
        request_number: answer.request_number,
    })
}

/// Non-2xxx answer-level Result-Code is a protocol error
pub fn check_result(answer: &CreditControlAnswer) -> Result<()> {
    if ResultClass::of(answer.result_code).is_success() {
        Ok(())
    } else {
        Err(FegwError::Protocol {
            result_code: answer.result_code,
        })
    }
}
