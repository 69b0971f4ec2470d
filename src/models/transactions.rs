use super::responses::ResponseData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CollectionResponseData {
    pub id: i64,
    pub request_amount: f64,
    pub request_currency: String,
    pub account_amount: f64,
    pub account_currency: String,
    pub transaction_fee: f64,
    pub total_credit: f64,
    pub customer_charged: bool,
    pub provider_id: String,
    pub merchant_reference: String,
    pub internal_reference: String,
    pub transaction_status: String,
    pub transaction_type: String,
    pub message: String,
    pub payment_url: String,
    pub instructions: Vec<Instruction>,
}

impl ResponseData for CollectionResponseData {}

/// A step the customer follows to complete a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Instruction {
    pub step_no: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PayoutResponseData {
    pub id: i64,
    pub request_amount: f64,
    pub request_currency: String,
    pub account_amount: f64,
    pub account_currency: String,
    pub transaction_fee: f64,
    pub total_debit: f64,
    pub provider_id: String,
    pub merchant_reference: String,
    pub internal_reference: String,
    pub transaction_status: String,
    pub transaction_type: String,
    pub message: String,
}

impl ResponseData for PayoutResponseData {}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RefundResponseData {
    pub id: i64,
    pub refund_amount: f64,
    pub refund_currency: String,
    pub transaction_fee: f64,
    pub total_debit: f64,
    pub provider_id: String,
    pub merchant_reference: String,
    pub collection_reference: String,
    pub internal_reference: String,
    pub transaction_type: String,
    pub transaction_status: String,
    pub account_number: String,
    pub message: String,
}

impl ResponseData for RefundResponseData {}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub transaction_currency: String,
    pub min_amount: f64,
    pub max_amount: f64,
    pub available: bool,
    /// Only present on sandbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox_test_accounts: Option<SandboxTestAccounts>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SandboxTestAccounts {
    pub success: String,
    pub failure: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Bank {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BankBranch {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Balance {
    pub currency: String,
    pub balance: f64,
}
