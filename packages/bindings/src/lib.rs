use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// EMI engine
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let input: loan_emi_core::emi::engine::LoanInputs =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_emi_core::emi::engine::calculate_emi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Breakdown chart series
// ---------------------------------------------------------------------------

#[napi]
pub fn emi_breakdown(input_json: String) -> NapiResult<String> {
    let input: loan_emi_core::emi::engine::LoanInputs =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_emi_core::emi::engine::calculate_emi(&input).map_err(to_napi_error)?;
    let series = loan_emi_core::emi::breakdown::breakdown_series(&output.result);
    serde_json::to_string(&series).map_err(to_napi_error)
}
