//! Structured payment module.

use rust_decimal::Decimal;
use serde::Serialize;

use super::fraud::FraudScreeningData;
use super::mop::AttributeDetails;
use crate::options::{
    CreditCardInfo, DateFormat, FopType, InstallmentsInfo, MopInfo, MopPaymentType, PaySupData,
    PayId, Payment,
};

/// Structured description of a typed form of payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentModule {
    /// Which kind of FOP this module describes.
    pub group_usage: GroupUsage,
    /// Merchant, amounts, installments and fraud screening.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_data: Option<PaymentData>,
    /// Payment means (credit card, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mop_information: Option<MopInformation>,
    /// Additional function-specific data (e.g. DBI).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payment_supplementary_data: Vec<PaymentSupplementaryData>,
}

impl PaymentModule {
    /// Builds the payment module for a typed method of payment.
    #[must_use]
    pub fn new(fop_type: FopType, mop: &MopInfo) -> Self {
        Self {
            group_usage: GroupUsage {
                attribute_details: vec![AttributeDetails::new(fop_type.code().to_owned(), None)],
            },
            payment_data: PaymentData::from_mop(mop),
            mop_information: mop
                .mop_payment_type
                .map(|kind| MopInformation::new(kind, mop.credit_card_info.as_ref())),
            payment_supplementary_data: mop
                .pay_sup_data
                .iter()
                .map(PaymentSupplementaryData::from)
                .collect(),
        }
    }
}

/// Usage of the payment group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUsage {
    /// Usage attributes.
    pub attribute_details: Vec<AttributeDetails>,
}

/// Payment data block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    /// The merchant collecting the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_information: Option<MerchantInformation>,
    /// Amounts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monetary_information: Vec<MonetaryInformation>,
    /// Payment identifiers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payment_id: Vec<PaymentId>,
    /// Installment plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_payment_info: Option<ExtendedPaymentInfo>,
    /// Fraud screening request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud_screening_data: Option<FraudScreeningData>,
}

impl PaymentData {
    /// Builds payment data, or `None` when the method of payment carries none.
    #[must_use]
    pub fn from_mop(mop: &MopInfo) -> Option<Self> {
        let has_data = mop.pay_merchant.is_some()
            || !mop.payments.is_empty()
            || mop.installments_info.is_some()
            || mop.fraud_screening.is_some()
            || !mop.pay_ids.is_empty();
        if !has_data {
            return None;
        }

        Some(Self {
            merchant_information: mop.pay_merchant.as_deref().map(MerchantInformation::new),
            monetary_information: MonetaryInformation::from_payments(&mop.payments)
                .into_iter()
                .collect(),
            payment_id: mop.pay_ids.iter().map(PaymentId::from).collect(),
            extended_payment_info: mop.installments_info.as_ref().map(ExtendedPaymentInfo::from),
            fraud_screening_data: mop.fraud_screening.as_ref().map(FraudScreeningData::from),
        })
    }
}

/// Merchant identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantInformation {
    /// Airline code of the merchant.
    pub company_code: String,
}

impl MerchantInformation {
    /// Creates a merchant reference from an airline code.
    #[must_use]
    pub fn new(company_code: &str) -> Self {
        Self {
            company_code: company_code.to_owned(),
        }
    }
}

/// Amounts of a payment.
///
/// The first amount is the main one; every further amount is listed under
/// `otherMonetaryDetails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonetaryInformation {
    /// Main amount.
    pub monetary_details: MonetaryDetails,
    /// Additional amounts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other_monetary_details: Vec<MonetaryDetails>,
}

impl MonetaryInformation {
    /// Groups payments into a single monetary block, `None` when empty.
    #[must_use]
    pub fn from_payments(payments: &[Payment]) -> Option<Self> {
        let (first, rest) = payments.split_first()?;
        Some(Self {
            monetary_details: MonetaryDetails::from(first),
            other_monetary_details: rest.iter().map(MonetaryDetails::from).collect(),
        })
    }
}

/// Qualified amount in a currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonetaryDetails {
    /// Amount qualifier.
    pub type_qualifier: String,
    /// Amount.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl MonetaryDetails {
    /// Total fare amount.
    pub const TYPE_TOTAL_FARE_AMOUNT: &'static str = "TFA";
    /// Amount of the first instalment.
    pub const TYPE_FIRST_INSTALMENT_AMOUNT: &'static str = "INI";
    /// Amount of each following instalment.
    pub const TYPE_FOLLOWING_INSTALMENT_AMOUNT: &'static str = "FOL";
    /// Interest charged on the instalments.
    pub const TYPE_INSTALMENT_INTEREST: &'static str = "INT";
}

impl From<&Payment> for MonetaryDetails {
    fn from(payment: &Payment) -> Self {
        Self {
            type_qualifier: payment.kind.code().to_owned(),
            amount: payment.amount,
            currency: payment.currency.clone(),
        }
    }
}

/// Typed payment identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentId {
    /// Identifier qualifier.
    pub reference_type: String,
    /// Identifier value.
    pub unique_reference: String,
}

impl PaymentId {
    /// Currency chosen for dynamic currency conversion.
    pub const TYPE_DCC_CURRENCY_CHOSEN: &'static str = "DCC";
    /// Payment record identifier.
    pub const TYPE_PAYMENT_RECORD_ID: &'static str = "PRI";
}

impl From<&PayId> for PaymentId {
    fn from(pay_id: &PayId) -> Self {
        Self {
            reference_type: pay_id.kind.code().to_owned(),
            unique_reference: pay_id.id.clone(),
        }
    }
}

/// Installment plan wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedPaymentInfo {
    /// Installment plan.
    pub extended_payment_details: ExtendedPaymentDetails,
}

/// Installment plan.
///
/// `instalmentsDatrDateFormat` is spelled as in the vendor schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedPaymentDetails {
    /// Number of installments.
    pub instalments_number: u32,
    /// Installment frequency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instalments_frequency: Option<String>,
    /// First installment date, formatted per `instalments_datr_date_format`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instalments_start_date: Option<String>,
    /// Date format code of the start date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instalments_datr_date_format: Option<u16>,
}

impl ExtendedPaymentDetails {
    /// Monthly installments.
    pub const FREQUENCY_MONTHLY: &'static str = "MTH";
    /// `DDMMYY` date format.
    pub const FORMAT_DDMMYY: u16 = 2;
    /// `YYMMDD` date format.
    pub const FORMAT_YYMMDD: u16 = 101;
    /// `YYYYMMDD` date format.
    pub const FORMAT_YYYYMMDD: u16 = 102;
}

impl From<&InstallmentsInfo> for ExtendedPaymentInfo {
    fn from(info: &InstallmentsInfo) -> Self {
        // A start date is meaningless without its format; default to YYMMDD.
        let format = match (info.start_date, info.format) {
            (Some(_), None) => Some(DateFormat::Yymmdd),
            (_, format) => format,
        };
        let start_date = info
            .start_date
            .zip(format)
            .map(|(date, format)| date.format(format.pattern()).to_string());

        Self {
            extended_payment_details: ExtendedPaymentDetails {
                instalments_number: info.nr_of_installments,
                instalments_frequency: info.frequency.map(|frequency| frequency.code().to_owned()),
                instalments_start_date: start_date,
                instalments_datr_date_format: format.map(DateFormat::code),
            },
        }
    }
}

/// Payment means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MopInformation {
    /// Type of payment means.
    pub fop_information: FopInformation,
    /// Card data for credit card payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_data: Option<CreditCardData>,
}

impl MopInformation {
    /// Builds the payment means block.
    #[must_use]
    pub fn new(kind: MopPaymentType, card: Option<&CreditCardInfo>) -> Self {
        Self {
            fop_information: FopInformation {
                form_of_payment: FormOfPayment {
                    kind: kind.code().to_owned(),
                },
            },
            credit_card_data: card.map(CreditCardData::from),
        }
    }
}

/// Form of payment wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FopInformation {
    /// Form of payment.
    pub form_of_payment: FormOfPayment,
}

/// Type of payment means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOfPayment {
    /// Payment means code.
    #[serde(rename = "type")]
    pub kind: String,
}

impl FormOfPayment {
    /// Credit card.
    pub const TYPE_CREDIT_CARD: &'static str = "CC";
    /// Cash.
    pub const TYPE_CASH: &'static str = "CA";
    /// Check.
    pub const TYPE_CHECK: &'static str = "CK";
    /// Miscellaneous.
    pub const TYPE_MISCELLANEOUS: &'static str = "MS";
}

/// Credit card data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardData {
    /// Card details.
    pub credit_card_details: CreditCardDetails,
    /// Pre-obtained approval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_details: Option<ApprovalDetails>,
}

impl From<&CreditCardInfo> for CreditCardData {
    fn from(card: &CreditCardInfo) -> Self {
        Self {
            credit_card_details: CreditCardDetails {
                cc_info: CcInfo {
                    vendor_code: card.vendor_code.clone(),
                    card_number: card.card_number.clone(),
                    security_id: card.security_id.clone(),
                    expiry_date: card.expiry_date.clone(),
                    cc_holder_name: card.name.clone(),
                },
            },
            approval_details: card.approval_code.as_ref().map(|code| ApprovalDetails {
                approval_code_data: ApprovalCodeData {
                    approval_code: code.clone(),
                    source_of_approval: card
                        .source_of_approval
                        .map(|source| source.code().to_owned()),
                },
            }),
        }
    }
}

/// Card details wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardDetails {
    /// Card details.
    pub cc_info: CcInfo,
}

/// Card details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CcInfo {
    /// Card vendor (e.g. `VI`).
    pub vendor_code: String,
    /// Card number.
    pub card_number: String,
    /// Card security code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_id: Option<String>,
    /// Expiry date, `MMYY`.
    pub expiry_date: String,
    /// Card holder name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_holder_name: Option<String>,
}

/// Approval wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalDetails {
    /// Approval code and its source.
    pub approval_code_data: ApprovalCodeData,
}

/// Approval code and its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalCodeData {
    /// Approval code.
    pub approval_code: String,
    /// How the approval was obtained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_approval: Option<String>,
}

impl ApprovalCodeData {
    /// Manually obtained approval.
    pub const SOURCE_MANUAL: &'static str = "M";
    /// Automatically obtained approval.
    pub const SOURCE_AUTOMATIC: &'static str = "A";
}

/// Function-specific supplementary payment data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSupplementaryData {
    /// Function of the data (e.g. `DBI`).
    pub attribute_function: String,
    /// Attributes, in input order.
    pub attribute_details: Vec<AttributeDetails>,
}

impl From<&PaySupData> for PaymentSupplementaryData {
    fn from(data: &PaySupData) -> Self {
        Self {
            attribute_function: data.function.clone(),
            attribute_details: data
                .data
                .iter()
                .map(|(kind, value)| AttributeDetails::new(kind.clone(), Some(value.clone())))
                .collect(),
        }
    }
}
