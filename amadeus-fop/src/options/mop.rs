//! Method-of-payment options.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{Map, serde_as};

use super::FraudScreeningOptions;
use crate::error::OptionsError;
use crate::message::mop::{AttributeDetails, FopDetails};
use crate::message::payment::{
    ApprovalCodeData, ExtendedPaymentDetails, FormOfPayment, MonetaryDetails, PaymentId,
};

static CURRENCY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("currency pattern is valid"));

static EXPIRY_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])[0-9]{2}$").expect("expiry pattern is valid"));

/// One method of payment.
///
/// With a [`fop_type`](Self::fop_type) the payment is sent as a structured
/// payment module and every structured field below is used. Without one,
/// only the FOP code, supplementary data and
/// [`free_flow_text`](Self::free_flow_text) are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MopInfo {
    /// Position of the payment in its group.
    pub sequence_nr: u32,
    /// FOP code (e.g. `VI`, `CCVI`, `CASH`).
    pub fop_code: String,
    /// New or old form of payment.
    pub fop_status: Option<FopStatus>,
    /// Kind of structured FOP.
    pub fop_type: Option<FopType>,
    /// Legacy unstructured FOP text.
    pub free_flow_text: Option<String>,
    /// Structured free-flow data fields.
    pub supplementary_data: Vec<DataOrSwitch>,
    /// Structured free-flow switches.
    pub supplementary_switches: Vec<DataOrSwitch>,
    /// Airline code of the merchant.
    pub pay_merchant: Option<String>,
    /// Amounts. The first one is the main amount.
    pub payments: Vec<Payment>,
    /// Installment plan.
    pub installments_info: Option<InstallmentsInfo>,
    /// Payment means.
    pub mop_payment_type: Option<MopPaymentType>,
    /// Card data, used when the payment means is a card.
    pub credit_card_info: Option<CreditCardInfo>,
    /// Fraud screening request.
    pub fraud_screening: Option<FraudScreeningOptions>,
    /// Payment identifiers.
    pub pay_ids: Vec<PayId>,
    /// Function-specific supplementary data.
    pub pay_sup_data: Vec<PaySupData>,
}

impl MopInfo {
    /// Creates a method of payment with a sequence number and FOP code.
    #[must_use]
    pub fn new(sequence_nr: u32, fop_code: impl Into<String>) -> Self {
        Self {
            sequence_nr,
            fop_code: fop_code.into(),
            ..Self::default()
        }
    }

    /// Sets the structured FOP type.
    #[must_use]
    pub const fn with_fop_type(mut self, fop_type: FopType) -> Self {
        self.fop_type = Some(fop_type);
        self
    }

    /// Sets the legacy free-flow text.
    #[must_use]
    pub fn with_free_flow_text(mut self, text: impl Into<String>) -> Self {
        self.free_flow_text = Some(text.into());
        self
    }

    /// Sets the merchant airline.
    #[must_use]
    pub fn with_pay_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.pay_merchant = Some(merchant.into());
        self
    }

    /// Appends an amount.
    #[must_use]
    pub fn with_payment(mut self, payment: Payment) -> Self {
        self.payments.push(payment);
        self
    }

    /// Sets card payment means and card data.
    #[must_use]
    pub fn with_credit_card(mut self, card: CreditCardInfo) -> Self {
        self.mop_payment_type = Some(MopPaymentType::CreditCard);
        self.credit_card_info = Some(card);
        self
    }

    fn has_structured_data(&self) -> bool {
        self.pay_merchant.is_some()
            || !self.payments.is_empty()
            || self.installments_info.is_some()
            || self.mop_payment_type.is_some()
            || self.credit_card_info.is_some()
            || self.fraud_screening.is_some()
            || !self.pay_ids.is_empty()
            || !self.pay_sup_data.is_empty()
    }

    pub(super) fn validate(&self) -> Result<(), OptionsError> {
        let sequence_nr = self.sequence_nr;
        if self.fop_type.is_none() && self.has_structured_data() {
            return Err(OptionsError::MissingFopType { sequence_nr });
        }
        if self.fop_type.is_some() && self.free_flow_text.is_some() {
            return Err(OptionsError::FreeFlowWithFopType { sequence_nr });
        }
        if self.credit_card_info.is_some() && self.mop_payment_type.is_none() {
            return Err(OptionsError::MissingMopPaymentType { sequence_nr });
        }
        if let Some(payment) = self
            .payments
            .iter()
            .find(|payment| !CURRENCY_CODE.is_match(&payment.currency))
        {
            return Err(OptionsError::InvalidCurrency(payment.currency.clone()));
        }
        if let Some(payment) = self
            .payments
            .iter()
            .find(|payment| payment.amount < Decimal::ZERO)
        {
            return Err(OptionsError::NegativeAmount {
                sequence_nr,
                amount: payment.amount.to_string(),
            });
        }
        if let Some(card) = &self.credit_card_info {
            if !EXPIRY_DATE.is_match(&card.expiry_date) {
                return Err(OptionsError::InvalidExpiryDate(card.expiry_date.clone()));
            }
        }
        if self
            .installments_info
            .as_ref()
            .is_some_and(|info| info.nr_of_installments == 0)
        {
            return Err(OptionsError::NoInstallments { sequence_nr });
        }
        if let Some(fraud) = &self.fraud_screening {
            fraud.validate(sequence_nr)?;
        }
        Ok(())
    }
}

/// Status of a form of payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FopStatus {
    /// New form of payment.
    New,
    /// Old form of payment.
    Old,
}

impl FopStatus {
    /// Returns the vendor status code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::New => FopDetails::STATUS_NEW,
            Self::Old => FopDetails::STATUS_OLD,
        }
    }
}

/// Kinds of structured forms of payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FopType {
    /// FP element of the PNR.
    FpElement,
}

impl FopType {
    /// Returns the vendor group usage code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::FpElement => AttributeDetails::TYPE_FP_ELEMENT,
        }
    }
}

/// A structured free-flow data field or switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataOrSwitch {
    /// Field or switch name (e.g. `FF1`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Field value.
    pub description: String,
}

impl DataOrSwitch {
    /// Creates a data field or switch.
    #[must_use]
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
        }
    }
}

/// A qualified amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Amount qualifier.
    #[serde(rename = "type")]
    pub kind: PaymentType,
    /// Amount.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl Payment {
    /// Creates an amount.
    #[must_use]
    pub fn new(kind: PaymentType, amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            currency: currency.into(),
        }
    }
}

/// Amount qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Total fare amount.
    TotalFareAmount,
    /// First instalment.
    FirstInstalmentAmount,
    /// Each following instalment.
    FollowingInstalmentAmount,
    /// Instalment interest.
    InstalmentInterest,
}

impl PaymentType {
    /// Returns the vendor amount qualifier.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TotalFareAmount => MonetaryDetails::TYPE_TOTAL_FARE_AMOUNT,
            Self::FirstInstalmentAmount => MonetaryDetails::TYPE_FIRST_INSTALMENT_AMOUNT,
            Self::FollowingInstalmentAmount => MonetaryDetails::TYPE_FOLLOWING_INSTALMENT_AMOUNT,
            Self::InstalmentInterest => MonetaryDetails::TYPE_INSTALMENT_INTEREST,
        }
    }
}

/// Installment plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstallmentsInfo {
    /// Number of installments; must be positive.
    pub nr_of_installments: u32,
    /// Installment frequency.
    pub frequency: Option<InstallmentFrequency>,
    /// Date of the first installment.
    pub start_date: Option<NaiveDate>,
    /// Format the start date is sent in; YYMMDD when a date is given without one.
    pub format: Option<DateFormat>,
}

/// Installment frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentFrequency {
    /// Monthly.
    Monthly,
}

impl InstallmentFrequency {
    /// Returns the vendor frequency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Monthly => ExtendedPaymentDetails::FREQUENCY_MONTHLY,
        }
    }
}

/// Date formats for the installment start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// Day, month, two-digit year.
    Ddmmyy,
    /// Two-digit year, month, day.
    Yymmdd,
    /// Four-digit year, month, day.
    Yyyymmdd,
}

impl DateFormat {
    /// Returns the vendor date format code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ddmmyy => ExtendedPaymentDetails::FORMAT_DDMMYY,
            Self::Yymmdd => ExtendedPaymentDetails::FORMAT_YYMMDD,
            Self::Yyyymmdd => ExtendedPaymentDetails::FORMAT_YYYYMMDD,
        }
    }

    /// Returns the `chrono` format pattern.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Ddmmyy => "%d%m%y",
            Self::Yymmdd => "%y%m%d",
            Self::Yyyymmdd => "%Y%m%d",
        }
    }
}

/// Payment means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MopPaymentType {
    /// Credit card.
    CreditCard,
    /// Cash.
    Cash,
    /// Check.
    Check,
    /// Miscellaneous.
    Miscellaneous,
}

impl MopPaymentType {
    /// Returns the vendor payment means code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::CreditCard => FormOfPayment::TYPE_CREDIT_CARD,
            Self::Cash => FormOfPayment::TYPE_CASH,
            Self::Check => FormOfPayment::TYPE_CHECK,
            Self::Miscellaneous => FormOfPayment::TYPE_MISCELLANEOUS,
        }
    }
}

/// Credit card data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditCardInfo {
    /// Card vendor (e.g. `VI`).
    pub vendor_code: String,
    /// Card number.
    pub card_number: String,
    /// Expiry date, `MMYY`.
    pub expiry_date: String,
    /// Card holder name.
    pub name: Option<String>,
    /// Card security code.
    pub security_id: Option<String>,
    /// Pre-obtained approval code.
    pub approval_code: Option<String>,
    /// How the approval code was obtained.
    pub source_of_approval: Option<ApprovalSource>,
}

impl CreditCardInfo {
    /// Creates card data from vendor, number and `MMYY` expiry date.
    #[must_use]
    pub fn new(
        vendor_code: impl Into<String>,
        card_number: impl Into<String>,
        expiry_date: impl Into<String>,
    ) -> Self {
        Self {
            vendor_code: vendor_code.into(),
            card_number: card_number.into(),
            expiry_date: expiry_date.into(),
            ..Self::default()
        }
    }

    /// Sets the card holder name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Sources of an approval code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalSource {
    /// Obtained manually, e.g. by phone.
    Manual,
    /// Obtained automatically.
    Automatic,
}

impl ApprovalSource {
    /// Returns the vendor approval source code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Manual => ApprovalCodeData::SOURCE_MANUAL,
            Self::Automatic => ApprovalCodeData::SOURCE_AUTOMATIC,
        }
    }
}

/// A typed payment identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayId {
    /// Identifier kind.
    #[serde(rename = "type")]
    pub kind: PayIdType,
    /// Identifier value.
    pub id: String,
}

impl PayId {
    /// Creates a payment identifier.
    #[must_use]
    pub fn new(kind: PayIdType, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// Payment identifier kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayIdType {
    /// Currency chosen for dynamic currency conversion.
    DccCurrencyChosen,
    /// Payment record identifier.
    PaymentRecordId,
}

impl PayIdType {
    /// Returns the vendor identifier qualifier.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::DccCurrencyChosen => PaymentId::TYPE_DCC_CURRENCY_CHOSEN,
            Self::PaymentRecordId => PaymentId::TYPE_PAYMENT_RECORD_ID,
        }
    }
}

/// Function-specific supplementary payment data, such as descriptive
/// billing information (`DBI`) for TP cards.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaySupData {
    /// Data function (e.g. `DBI`).
    pub function: String,
    /// Attribute type and value pairs, written as a map in option files.
    /// Entry order is kept on the wire.
    #[serde_as(as = "Map<_, _>")]
    pub data: Vec<(String, String)>,
}

impl PaySupData {
    /// Creates an empty data block for a function.
    #[must_use]
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            data: Vec::new(),
        }
    }

    /// Appends an attribute.
    #[must_use]
    pub fn with_entry(mut self, kind: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((kind.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed_mop() -> MopInfo {
        MopInfo::new(1, "VI").with_fop_type(FopType::FpElement)
    }

    #[test]
    fn test_structured_data_requires_fop_type() {
        let mop = MopInfo::new(3, "VI").with_pay_merchant("AY");
        assert_eq!(
            mop.validate(),
            Err(OptionsError::MissingFopType { sequence_nr: 3 })
        );
    }

    #[test]
    fn test_free_flow_with_fop_type_rejected() {
        let mop = typed_mop().with_free_flow_text("VI4541099100010016/0919");
        assert_eq!(
            mop.validate(),
            Err(OptionsError::FreeFlowWithFopType { sequence_nr: 1 })
        );
    }

    #[test]
    fn test_card_without_payment_type_rejected() {
        let mut mop = typed_mop();
        mop.credit_card_info = Some(CreditCardInfo::new("VI", "4541099100010016", "0913"));
        assert_eq!(
            mop.validate(),
            Err(OptionsError::MissingMopPaymentType { sequence_nr: 1 })
        );
    }

    #[test]
    fn test_invalid_currency_rejected() {
        let mop = typed_mop().with_payment(Payment::new(
            PaymentType::TotalFareAmount,
            Decimal::from(100),
            "eur",
        ));
        assert_eq!(
            mop.validate(),
            Err(OptionsError::InvalidCurrency("eur".to_owned()))
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mop = typed_mop()
            .with_payment(Payment::new(
                PaymentType::TotalFareAmount,
                Decimal::from(100),
                "EUR",
            ))
            .with_payment(Payment::new(
                PaymentType::InstalmentInterest,
                Decimal::new(-5, 1),
                "EUR",
            ));
        assert_eq!(
            mop.validate(),
            Err(OptionsError::NegativeAmount {
                sequence_nr: 1,
                amount: "-0.5".to_owned()
            })
        );
    }

    #[test]
    fn test_zero_amount_accepted() {
        let mop = typed_mop().with_payment(Payment::new(
            PaymentType::TotalFareAmount,
            Decimal::ZERO,
            "EUR",
        ));
        assert_eq!(mop.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_expiry_rejected() {
        let mop =
            typed_mop().with_credit_card(CreditCardInfo::new("VI", "4541099100010016", "1399"));
        assert_eq!(
            mop.validate(),
            Err(OptionsError::InvalidExpiryDate("1399".to_owned()))
        );
    }

    #[test]
    fn test_zero_installments_rejected() {
        let mut mop = typed_mop();
        mop.installments_info = Some(InstallmentsInfo::default());
        assert_eq!(
            mop.validate(),
            Err(OptionsError::NoInstallments { sequence_nr: 1 })
        );
    }

    #[test]
    fn test_untyped_free_flow_is_valid() {
        let mop = MopInfo::new(2, "VI").with_free_flow_text("VI4541099100010024/0919/EUR20");
        assert_eq!(mop.validate(), Ok(()));
    }

    #[test]
    fn test_pay_sup_data_keeps_map_order() {
        let data: PaySupData = serde_json::from_str(
            r#"{ "function": "DBI", "data": { " KS": "12345", "RZ": "NCE", " AE": "4" } }"#,
        )
        .unwrap();
        let kinds: Vec<&str> = data.data.iter().map(|(kind, _)| kind.as_str()).collect();
        assert_eq!(kinds, [" KS", "RZ", " AE"]);
        assert_eq!(serde_json::to_value(&data).unwrap()["data"]["RZ"], "NCE");
    }

    #[test]
    fn test_date_format_patterns() {
        let date = NaiveDate::from_ymd_opt(2013, 2, 23).unwrap();
        assert_eq!(date.format(DateFormat::Yymmdd.pattern()).to_string(), "130223");
        assert_eq!(date.format(DateFormat::Ddmmyy.pattern()).to_string(), "230213");
        assert_eq!(date.format(DateFormat::Yyyymmdd.pattern()).to_string(), "20130223");
        assert_eq!(DateFormat::Yymmdd.code(), 101);
    }
}
