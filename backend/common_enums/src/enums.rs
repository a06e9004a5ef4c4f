/// Action requested from the gateway for a single service in a transaction request.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum PaymentAction {
    Pay,
    /// Pays what is left of an order that already has partial payments in its group.
    PayRemainder,
    Authorize,
    Capture,
    CancelAuthorize,
    Refund,
}

/// Gateway endpoint family a transaction builder is sent to.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum TransactionMethod {
    #[default]
    TransactionRequest,
}

/// Host operation a transaction builder is requested for.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionType {
    Order,
    Capture,
    Authorize,
    Void,
    Refund,
}

/// Last segment of a per-method configuration path (`payment/<method_code>/<field>`).
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ConfigField {
    Active,
    Title,
    AllowedCurrencies,
    #[strum(serialize = "allowspecific")]
    AllowSpecific,
    #[strum(serialize = "specificcountry")]
    SpecificCountry,
    #[strum(serialize = "specificcustomergroup")]
    SpecificCustomerGroup,
    #[strum(serialize = "specificcustomergroupb2b")]
    SpecificCustomerGroupB2b,
    PaymentFee,
    PaymentFeeLabel,
    SortOrder,
    #[strum(serialize = "selectiontype")]
    SelectionType,
}
