use super::common::{CountryCode, CurrencyCode, TransactionMethod, TransactionType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A required request field is missing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parameter \"{0}\" is empty")]
pub struct ValidationError(pub &'static str);

fn require(value: &str, name: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError(name))
    } else {
        Ok(())
    }
}

fn require_amount(amount: f64) -> Result<(), ValidationError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ValidationError("amount"))
    }
}

fn require_some(value: Option<&str>, name: &'static str) -> Result<(), ValidationError> {
    require(value.unwrap_or_default(), name)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionRequest {
    pub currency: CurrencyCode,
    pub amount: f64,
    pub method: TransactionMethod,
    pub provider_id: String,
    pub merchant_reference: String,
    pub narration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default)]
    pub mobile_money_hpp: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_email: Option<String>,
}

impl CollectionRequest {
    pub fn new(
        currency: CurrencyCode,
        amount: f64,
        method: TransactionMethod,
        provider_id: impl Into<String>,
        merchant_reference: impl Into<String>,
        narration: impl Into<String>,
    ) -> Self {
        Self {
            currency,
            amount,
            method,
            provider_id: provider_id.into(),
            merchant_reference: merchant_reference.into(),
            narration: narration.into(),
            account_number: None,
            mobile_money_hpp: false,
            redirect_url: None,
            account_name: None,
            account_email: None,
        }
    }

    pub fn with_account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    pub fn with_redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    /// Direct mobile money debits charge `account_number`; every other flow
    /// (cards, banks, the hosted mobile money page) sends the customer to
    /// `redirect_url`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_amount(self.amount)?;
        require(&self.provider_id, "provider_id")?;
        require(&self.merchant_reference, "merchant_reference")?;
        require(&self.narration, "narration")?;
        if self.method == TransactionMethod::MobileMoney && !self.mobile_money_hpp {
            require_some(self.account_number.as_deref(), "account_number")
        } else {
            require_some(self.redirect_url.as_deref(), "redirect_url")
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoutRequest {
    pub currency: CurrencyCode,
    pub amount: f64,
    pub method: TransactionMethod,
    pub provider_id: String,
    pub merchant_reference: String,
    pub narration: String,
    pub account_number: String,
    pub account_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_email: Option<String>,
}

impl PayoutRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_amount(self.amount)?;
        require(&self.provider_id, "provider_id")?;
        require(&self.merchant_reference, "merchant_reference")?;
        require(&self.narration, "narration")?;
        require(&self.account_number, "account_number")?;
        require(&self.account_name, "account_name")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefundRequest {
    /// Omit for a full refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub internal_reference: String,
}

impl RefundRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.internal_reference, "internal_reference")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvidersFilter {
    pub transaction_type: TransactionType,
    pub method: TransactionMethod,
    pub country: CountryCode,
}

impl ProvidersFilter {
    pub(crate) fn build_path(&self) -> String {
        format!("{}/{}/{}", self.transaction_type, self.method, self.country)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BanksFilter {
    pub method: TransactionMethod,
    pub country: CountryCode,
}

impl BanksFilter {
    pub(crate) fn build_path(&self) -> String {
        format!("{}/bank/{}", self.method, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanksBranchesFilter {
    pub country: CountryCode,
    pub bank_code: String,
}

impl BanksBranchesFilter {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.bank_code, "bank_code")
    }

    pub(crate) fn build_path(&self) -> String {
        format!("{}/branches/{}", self.country, self.bank_code)
    }
}
