//! Wire structure of the `FOP_CreateFormOfPayment` request.
//!
//! The types in this module mirror the vendor schema element for element.
//! Field declaration order is the schema sequence order, since the XML
//! serializer emits children in that order. Optional structures that are
//! `None` and repetitions that are empty are left out of the document.
//!
//! A message is built from [`FopCreateFopOptions`] with
//! [`CreateFormOfPayment::new`]; the conversion is infallible and does not
//! validate the options (see [`FopCreateFopOptions::validate`]).
//!
//! # Layout
//!
//! - [`CreateFormOfPayment`] - message root: transaction context, best effort, groups
//! - [`mop`] - method-of-payment description and PNR details
//! - [`payment`] - structured payment module (amounts, installments, card data)
//! - [`fraud`] - fraud screening data block

use serde::Serialize;

use crate::encoding::RequestMessage;
use crate::options::{
    BestEffortOptions, ElementRef, FopCreateFopOptions, Group, PaxRef, TransactionCode,
};

pub mod fraud;
pub mod mop;
pub mod payment;

pub use mop::MopDescription;

/// The `FOP_CreateFormOfPayment` request message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormOfPayment {
    /// Transaction code context; absent when no transaction code was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_context: Option<TransactionContext>,
    /// Best-effort processing instructions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub best_effort: Vec<BestEffort>,
    /// Record locator of the PNR the form of payment applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_control_information: Option<ReservationControlInformation>,
    /// One group per set of associations and methods of payment.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fop_group: Vec<FopGroup>,
}

impl CreateFormOfPayment {
    /// Builds the wire message from request options.
    #[must_use]
    pub fn new(options: &FopCreateFopOptions) -> Self {
        Self {
            transaction_context: options.transaction_code.map(TransactionContext::new),
            best_effort: options.best_effort.iter().map(BestEffort::from).collect(),
            reservation_control_information: options
                .record_locator
                .as_deref()
                .map(ReservationControlInformation::new),
            fop_group: options.fop_group.iter().map(FopGroup::from).collect(),
        }
    }
}

impl From<&FopCreateFopOptions> for CreateFormOfPayment {
    fn from(options: &FopCreateFopOptions) -> Self {
        Self::new(options)
    }
}

impl RequestMessage for CreateFormOfPayment {
    const ROOT_ELEMENT: &'static str = "FOP_CreateFormOfPayment";
}

/// Container for the transaction code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionContext {
    /// Transaction details carrying the code.
    pub transaction_details: TransactionDetails,
}

impl TransactionContext {
    /// Creates a context for the given transaction code.
    #[must_use]
    pub fn new(code: TransactionCode) -> Self {
        Self {
            transaction_details: TransactionDetails {
                code: code.code().to_owned(),
            },
        }
    }
}

/// The transaction code of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionDetails {
    /// Transaction code (e.g. `FP`).
    pub code: String,
}

impl TransactionDetails {
    /// Create a form of payment.
    pub const TRANS_CREATE_FORM_OF_PAYMENT: &'static str = "FP";
    /// Authorization on ticket, MCO or EMD.
    pub const TRANS_AUTH_ON_TICKET_MCO_EMD: &'static str = "DEF";
}

/// A best-effort processing instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestEffort {
    /// Indicator and action pair.
    pub status_information: StatusInformation,
}

impl From<&BestEffortOptions> for BestEffort {
    fn from(options: &BestEffortOptions) -> Self {
        Self {
            status_information: StatusInformation {
                indicator: options.indicator.clone(),
                action: options.action.clone(),
            },
        }
    }
}

/// Generic indicator/action status pair.
///
/// Used both for best-effort instructions and for the fraud screening flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusInformation {
    /// Status indicator.
    pub indicator: String,
    /// Requested action for the indicator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl StatusInformation {
    /// Action value meaning "yes".
    pub const ACTION_YES: &'static str = "Y";
    /// Action value meaning "no".
    pub const ACTION_NO: &'static str = "N";
    /// Indicator requesting fraud screening.
    pub const INDICATOR_FRAUD_SCREENING: &'static str = "FRA";
}

/// Reference to the PNR by record locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationControlInformation {
    /// Reservation identification.
    pub reservation: Reservation,
}

impl ReservationControlInformation {
    /// Creates a reservation reference for a record locator.
    #[must_use]
    pub fn new(record_locator: &str) -> Self {
        Self {
            reservation: Reservation {
                control_number: record_locator.to_owned(),
            },
        }
    }
}

/// Reservation identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Record locator.
    pub control_number: String,
}

/// A form of payment group: who and what is paid, and how.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FopGroup {
    /// Passengers the payment applies to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub passenger_association: Vec<PassengerAssociation>,
    /// PNR elements (TSTs, segments, ...) the payment applies to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pnr_element_association: Vec<PnrElementAssociation>,
    /// Methods of payment, in sequence order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mop_description: Vec<MopDescription>,
}

impl From<&Group> for FopGroup {
    fn from(group: &Group) -> Self {
        Self {
            passenger_association: group.pax_ref.iter().map(PassengerAssociation::from).collect(),
            pnr_element_association: group
                .element_ref
                .iter()
                .map(PnrElementAssociation::from)
                .collect(),
            mop_description: group.mop_info.iter().map(MopDescription::from).collect(),
        }
    }
}

/// Association to a passenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerAssociation {
    /// Passenger reference.
    pub passenger_reference: PassengerReference,
}

impl From<&PaxRef> for PassengerAssociation {
    fn from(pax: &PaxRef) -> Self {
        Self {
            passenger_reference: PassengerReference {
                kind: pax.kind.code().to_owned(),
                value: pax.value,
            },
        }
    }
}

/// Passenger reference qualifier and number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassengerReference {
    /// Reference qualifier.
    #[serde(rename = "type")]
    pub kind: String,
    /// Passenger tattoo.
    pub value: u32,
}

impl PassengerReference {
    /// Adult passenger.
    pub const TYPE_ADULT: &'static str = "PA";
    /// Infant passenger.
    pub const TYPE_INFANT: &'static str = "PI";
}

/// Association to a PNR element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PnrElementAssociation {
    /// Element reference.
    pub reference_details: ReferenceDetails,
}

impl From<&ElementRef> for PnrElementAssociation {
    fn from(element: &ElementRef) -> Self {
        Self {
            reference_details: ReferenceDetails {
                kind: element.kind.code().to_owned(),
                value: element.value.to_string(),
            },
        }
    }
}

/// Typed reference: a qualifier and a value.
///
/// Shared by PNR element associations and identity documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceDetails {
    /// Reference qualifier.
    #[serde(rename = "type")]
    pub kind: String,
    /// Reference value.
    pub value: String,
}

impl ReferenceDetails {
    /// Transitional stored ticket number.
    pub const TYPE_TST: &'static str = "TST";
    /// Segment tattoo.
    pub const TYPE_SEGMENT_TATTOO: &'static str = "ST";
    /// Other element tattoo.
    pub const TYPE_OTHER_ELEMENT_TATTOO: &'static str = "OT";
    /// Brazilian CPF number.
    pub const TYPE_CPF_BRAZILIAN_SECURITY_NUMBER: &'static str = "CP";
    /// Passport number.
    pub const TYPE_PASSPORT: &'static str = "PP";
    /// National identity card number.
    pub const TYPE_NATIONAL_IDENTITY_CARD: &'static str = "NI";
    /// Driving license number.
    pub const TYPE_DRIVING_LICENSE: &'static str = "DLN";
}

#[cfg(test)]
mod tests {
    use super::payment::{ExtendedPaymentDetails, MonetaryDetails, PaymentData, PaymentId};
    use super::*;
    use crate::options::{
        CreditCardInfo, DataOrSwitch, DateFormat, ElementRefType, FopType, FraudScreeningOptions,
        IdDocumentType, InstallmentFrequency, InstallmentsInfo, MopInfo, MopPaymentType,
        PaxRefType, PayId, PayIdType, PaySupData, Payment, PaymentType,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn tst_group(mops: Vec<MopInfo>) -> Group {
        Group {
            element_ref: vec![ElementRef::new(ElementRefType::TstNumber, 1)],
            pax_ref: Vec::new(),
            mop_info: mops,
        }
    }

    fn payment_data(message: &CreateFormOfPayment) -> &PaymentData {
        message.fop_group[0].mop_description[0]
            .payment_module
            .as_ref()
            .unwrap()
            .payment_data
            .as_ref()
            .unwrap()
    }

    #[test]
    fn test_structured_free_flow() {
        let mut mop = MopInfo::new(1, "VI")
            .with_fop_type(FopType::FpElement)
            .with_pay_merchant("AY")
            .with_payment(Payment::new(
                PaymentType::TotalFareAmount,
                Decimal::from(100),
                "EUR",
            ));
        mop.supplementary_data = vec![
            DataOrSwitch::new("FF1", "1234"),
            DataOrSwitch::new("FF2", "ABCD-*12"),
        ];
        let options = FopCreateFopOptions::new(TransactionCode::CreateFormOfPayment)
            .with_group(tst_group(vec![mop]));

        let message = CreateFormOfPayment::new(&options);

        assert_eq!(
            message.transaction_context.as_ref().unwrap().transaction_details.code,
            TransactionDetails::TRANS_CREATE_FORM_OF_PAYMENT
        );
        assert_eq!(message.fop_group.len(), 1);
        let group = &message.fop_group[0];
        let reference = &group.pnr_element_association[0].reference_details;
        assert_eq!(reference.kind, ReferenceDetails::TYPE_TST);
        assert_eq!(reference.value, "1");
        assert_eq!(group.mop_description.len(), 1);

        let description = &group.mop_description[0];
        assert_eq!(description.fop_sequence_number.sequence_details.number, 1);
        assert_eq!(description.mop_details.fop_pnr_details.fop_details[0].fop_code, "VI");
        assert!(description.mop_details.old_fop_freeflow.is_none());

        let data = &description.mop_details.pnr_supplementary_data;
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].data_and_switch_map.criteria_set_type, "DAT");
        assert_eq!(data[1].data_and_switch_map.criteria_details[0].attribute_type, "FF2");
        assert_eq!(
            data[1].data_and_switch_map.criteria_details[0].attribute_description.as_deref(),
            Some("ABCD-*12")
        );

        let module = description.payment_module.as_ref().unwrap();
        assert_eq!(module.group_usage.attribute_details.len(), 1);
        assert_eq!(module.group_usage.attribute_details[0].attribute_type, "FP");
        assert!(module.group_usage.attribute_details[0].attribute_description.is_none());

        let payment_data = payment_data(&message);
        assert_eq!(payment_data.merchant_information.as_ref().unwrap().company_code, "AY");
        assert_eq!(payment_data.monetary_information.len(), 1);
        let amount = &payment_data.monetary_information[0].monetary_details;
        assert_eq!(amount.type_qualifier, MonetaryDetails::TYPE_TOTAL_FARE_AMOUNT);
        assert_eq!(amount.amount, Decimal::from(100));
        assert_eq!(amount.currency, "EUR");
    }

    #[test]
    fn test_unstructured_free_flow() {
        let options = FopCreateFopOptions::new(TransactionCode::CreateFormOfPayment).with_group(
            tst_group(vec![
                MopInfo::new(1, "VI").with_free_flow_text("VI4541099100010016/0919"),
                MopInfo::new(2, "VI").with_free_flow_text("VI4541099100010024/0919/EUR20"),
            ]),
        );

        let message = CreateFormOfPayment::new(&options);
        let descriptions = &message.fop_group[0].mop_description;
        assert_eq!(descriptions.len(), 2);

        for (description, (number, text)) in descriptions.iter().zip([
            (1, "VI4541099100010016/0919"),
            (2, "VI4541099100010024/0919/EUR20"),
        ]) {
            assert_eq!(description.fop_sequence_number.sequence_details.number, number);
            assert_eq!(description.mop_details.fop_pnr_details.fop_details[0].fop_code, "VI");
            let free_flow = description.mop_details.old_fop_freeflow.as_ref().unwrap();
            assert_eq!(free_flow.free_text, text);
            assert_eq!(free_flow.free_text_details.text_subject_qualifier, "ZZZ");
            assert_eq!(free_flow.free_text_details.source, "M");
            assert_eq!(free_flow.free_text_details.encoding, "ZZZ");
            assert!(description.payment_module.is_none());
        }
    }

    #[test]
    fn test_installments() {
        let mut mop = MopInfo::new(1, "CCVI")
            .with_fop_type(FopType::FpElement)
            .with_pay_merchant("QF")
            .with_payment(Payment::new(
                PaymentType::FirstInstalmentAmount,
                Decimal::from(100),
                "AUD",
            ))
            .with_payment(Payment::new(
                PaymentType::FollowingInstalmentAmount,
                Decimal::from(200),
                "AUD",
            ))
            .with_payment(Payment::new(
                PaymentType::InstalmentInterest,
                Decimal::from(300),
                "AUD",
            ))
            .with_credit_card(CreditCardInfo::new("VI", "4541099100010016", "0913"));
        mop.installments_info = Some(InstallmentsInfo {
            nr_of_installments: 2,
            frequency: Some(InstallmentFrequency::Monthly),
            start_date: NaiveDate::from_ymd_opt(2013, 2, 23),
            format: Some(DateFormat::Yymmdd),
        });
        let options = FopCreateFopOptions::default().with_group(tst_group(vec![mop]));

        let message = CreateFormOfPayment::new(&options);

        assert!(message.transaction_context.is_none());
        assert!(message.best_effort.is_empty());
        assert!(message.reservation_control_information.is_none());

        let description = &message.fop_group[0].mop_description[0];
        assert_eq!(description.mop_details.fop_pnr_details.fop_details[0].fop_code, "CCVI");
        assert!(description.mop_details.pnr_supplementary_data.is_empty());
        assert!(description.mop_details.old_fop_freeflow.is_none());

        let payment_data = payment_data(&message);
        assert_eq!(payment_data.merchant_information.as_ref().unwrap().company_code, "QF");
        assert_eq!(payment_data.monetary_information.len(), 1);
        let monetary = &payment_data.monetary_information[0];
        assert_eq!(monetary.monetary_details.type_qualifier, "INI");
        assert_eq!(monetary.monetary_details.amount, Decimal::from(100));
        assert_eq!(monetary.other_monetary_details.len(), 2);
        assert_eq!(monetary.other_monetary_details[0].type_qualifier, "FOL");
        assert_eq!(monetary.other_monetary_details[0].amount, Decimal::from(200));
        assert_eq!(monetary.other_monetary_details[1].type_qualifier, "INT");
        assert_eq!(monetary.other_monetary_details[1].amount, Decimal::from(300));
        assert_eq!(monetary.other_monetary_details[1].currency, "AUD");

        let plan = &payment_data
            .extended_payment_info
            .as_ref()
            .unwrap()
            .extended_payment_details;
        assert_eq!(plan.instalments_number, 2);
        assert_eq!(plan.instalments_frequency.as_deref(), Some("MTH"));
        assert_eq!(plan.instalments_start_date.as_deref(), Some("130223"));
        assert_eq!(plan.instalments_datr_date_format, Some(101));

        let module = description.payment_module.as_ref().unwrap();
        let mop_information = module.mop_information.as_ref().unwrap();
        assert_eq!(mop_information.fop_information.form_of_payment.kind, "CC");
        let card = &mop_information
            .credit_card_data
            .as_ref()
            .unwrap()
            .credit_card_details
            .cc_info;
        assert_eq!(card.vendor_code, "VI");
        assert_eq!(card.card_number, "4541099100010016");
        assert_eq!(card.expiry_date, "0913");
        assert!(module.payment_supplementary_data.is_empty());
    }

    #[test]
    fn test_start_date_defaults_to_yymmdd() {
        let mut mop = MopInfo::new(1, "VI").with_fop_type(FopType::FpElement);
        mop.installments_info = Some(InstallmentsInfo {
            nr_of_installments: 3,
            start_date: NaiveDate::from_ymd_opt(2013, 2, 23),
            ..InstallmentsInfo::default()
        });
        let options = FopCreateFopOptions::default().with_group(tst_group(vec![mop]));

        let message = CreateFormOfPayment::new(&options);
        let plan = &payment_data(&message)
            .extended_payment_info
            .as_ref()
            .unwrap()
            .extended_payment_details;
        assert_eq!(plan.instalments_start_date.as_deref(), Some("130223"));
        assert_eq!(plan.instalments_datr_date_format, Some(101));
    }

    #[test]
    fn test_start_date_formats() {
        let cases = [
            (DateFormat::Ddmmyy, "030213", ExtendedPaymentDetails::FORMAT_DDMMYY),
            (DateFormat::Yyyymmdd, "20130203", ExtendedPaymentDetails::FORMAT_YYYYMMDD),
            (DateFormat::Yymmdd, "130203", ExtendedPaymentDetails::FORMAT_YYMMDD),
        ];
        for (format, date, code) in cases {
            let mut mop = MopInfo::new(1, "VI").with_fop_type(FopType::FpElement);
            mop.installments_info = Some(InstallmentsInfo {
                nr_of_installments: 2,
                start_date: NaiveDate::from_ymd_opt(2013, 2, 3),
                format: Some(format),
                ..InstallmentsInfo::default()
            });
            let options = FopCreateFopOptions::default().with_group(tst_group(vec![mop]));

            let message = CreateFormOfPayment::new(&options);
            let plan = &payment_data(&message)
                .extended_payment_info
                .as_ref()
                .unwrap()
                .extended_payment_details;
            assert_eq!(plan.instalments_start_date.as_deref(), Some(date), "{format:?}");
            assert_eq!(plan.instalments_datr_date_format, Some(code), "{format:?}");
        }
    }

    #[test]
    fn test_fraud_screening() {
        let mut mop = MopInfo::new(1, "VI")
            .with_fop_type(FopType::FpElement)
            .with_pay_merchant("AY")
            .with_credit_card(
                CreditCardInfo::new("VI", "4541099100010016", "0915").with_name("CLEMENT DUPONT"),
            );
        mop.installments_info = Some(InstallmentsInfo {
            nr_of_installments: 1,
            ..InstallmentsInfo::default()
        });
        mop.fraud_screening = Some(FraudScreeningOptions {
            ip_address: Some("111.222.333.444".to_owned()),
            first_name: Some("CLEMENT".to_owned()),
            last_name: Some("DUPONT".to_owned()),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 10, 30),
            id_document_nr: Some("25208731592".to_owned()),
            id_document_type: Some(IdDocumentType::CpfBrazilianSecurityNumber),
            ..FraudScreeningOptions::default()
        });
        let options = FopCreateFopOptions::default().with_group(Group {
            pax_ref: vec![PaxRef::new(PaxRefType::Adult, 1)],
            mop_info: vec![mop],
            ..Group::default()
        });

        let message = CreateFormOfPayment::new(&options);

        assert!(message.transaction_context.is_none());
        let group = &message.fop_group[0];
        assert!(group.pnr_element_association.is_empty());
        assert_eq!(group.passenger_association.len(), 1);
        let passenger = &group.passenger_association[0].passenger_reference;
        assert_eq!(passenger.kind, PassengerReference::TYPE_ADULT);
        assert_eq!(passenger.value, 1);

        let fop_details = &group.mop_description[0].mop_details.fop_pnr_details.fop_details;
        assert_eq!(fop_details.len(), 1);
        assert!(fop_details[0].fop_status.is_none());

        let payment_data = payment_data(&message);
        assert_eq!(payment_data.merchant_information.as_ref().unwrap().company_code, "AY");
        assert!(payment_data.monetary_information.is_empty());

        let plan = &payment_data
            .extended_payment_info
            .as_ref()
            .unwrap()
            .extended_payment_details;
        assert_eq!(plan.instalments_number, 1);
        assert!(plan.instalments_frequency.is_none());
        assert!(plan.instalments_start_date.is_none());
        assert!(plan.instalments_datr_date_format.is_none());

        let fraud = payment_data.fraud_screening_data.as_ref().unwrap();
        assert_eq!(fraud.fraud_screening.status_information.indicator, "FRA");
        assert_eq!(fraud.fraud_screening.status_information.action.as_deref(), Some("Y"));
        let device = &fraud.ip_adress.as_ref().unwrap().device_identification;
        assert_eq!(device.address, "111.222.333.444");
        assert_eq!(device.qualifier, "IP");
        let name = fraud.payer_name.as_ref().unwrap();
        assert_eq!(name.cc_holder_name_details.as_ref().unwrap().surname, "DUPONT");
        assert_eq!(name.other_name_details.as_ref().unwrap().given_name, "CLEMENT");
        let birth = &fraud.payer_date_of_birth.as_ref().unwrap().date_time;
        assert_eq!(
            (birth.year.as_str(), birth.month.as_str(), birth.day.as_str()),
            ("1980", "10", "30")
        );
        let id = &fraud.form_of_id_details.as_ref().unwrap().reference_details;
        assert_eq!(id.kind, ReferenceDetails::TYPE_CPF_BRAZILIAN_SECURITY_NUMBER);
        assert_eq!(id.value, "25208731592");
        assert!(fraud.billing_address.is_none());
        assert!(fraud.payer_phone_or_email.is_empty());

        let mop_information = group.mop_description[0]
            .payment_module
            .as_ref()
            .unwrap()
            .mop_information
            .as_ref()
            .unwrap();
        let card = &mop_information
            .credit_card_data
            .as_ref()
            .unwrap()
            .credit_card_details
            .cc_info;
        assert_eq!(card.expiry_date, "0915");
        assert_eq!(card.cc_holder_name.as_deref(), Some("CLEMENT DUPONT"));
    }

    #[test]
    fn test_account_payment_ids() {
        let mut mop = MopInfo::new(1, "VI")
            .with_fop_type(FopType::FpElement)
            .with_pay_merchant("AY")
            .with_payment(Payment::new(
                PaymentType::TotalFareAmount,
                Decimal::from(100),
                "EUR",
            ));
        mop.pay_ids = vec![
            PayId::new(PayIdType::DccCurrencyChosen, "EUR"),
            PayId::new(PayIdType::PaymentRecordId, "123456"),
        ];
        let options = FopCreateFopOptions::new(TransactionCode::CreateFormOfPayment)
            .with_group(tst_group(vec![mop]));

        let message = CreateFormOfPayment::new(&options);

        let context = message.transaction_context.as_ref().unwrap();
        assert_eq!(context.transaction_details.code, "FP");
        let payment_data = payment_data(&message);
        assert_eq!(payment_data.monetary_information[0].monetary_details.currency, "EUR");
        assert_eq!(payment_data.payment_id.len(), 2);
        assert_eq!(payment_data.payment_id[0].reference_type, PaymentId::TYPE_DCC_CURRENCY_CHOSEN);
        assert_eq!(payment_data.payment_id[0].unique_reference, "EUR");
        assert_eq!(payment_data.payment_id[1].reference_type, PaymentId::TYPE_PAYMENT_RECORD_ID);
        assert_eq!(payment_data.payment_id[1].unique_reference, "123456");
    }

    #[test]
    fn test_descriptive_billing_info() {
        let mut mop = MopInfo::new(1, "VI").with_fop_type(FopType::FpElement);
        mop.pay_sup_data = vec![
            PaySupData::new("DBI")
                .with_entry(" KS", "12345")
                .with_entry("RZ", "NCE")
                .with_entry(" AE", "4")
                .with_entry("AU", "526")
                .with_entry("PK", "1234"),
        ];
        mop.mop_payment_type = Some(MopPaymentType::CreditCard);
        mop.credit_card_info = Some(CreditCardInfo::new("TP", "4541099999990013", "0916"));
        let options = FopCreateFopOptions::new(TransactionCode::AuthOnTicketMcoEmd)
            .with_group(tst_group(vec![mop]));

        let message = CreateFormOfPayment::new(&options);

        let context = message.transaction_context.as_ref().unwrap();
        assert_eq!(context.transaction_details.code, "DEF");
        let module = message.fop_group[0].mop_description[0]
            .payment_module
            .as_ref()
            .unwrap();
        assert!(module.payment_data.is_none());
        assert_eq!(module.group_usage.attribute_details[0].attribute_type, "FP");

        assert_eq!(module.payment_supplementary_data.len(), 1);
        let sup_data = &module.payment_supplementary_data[0];
        assert_eq!(sup_data.attribute_function, "DBI");
        let pairs: Vec<(&str, Option<&str>)> = sup_data
            .attribute_details
            .iter()
            .map(|attr| (attr.attribute_type.as_str(), attr.attribute_description.as_deref()))
            .collect();
        assert_eq!(
            pairs,
            [
                (" KS", Some("12345")),
                ("RZ", Some("NCE")),
                (" AE", Some("4")),
                ("AU", Some("526")),
                ("PK", Some("1234")),
            ]
        );

        let mop_information = module.mop_information.as_ref().unwrap();
        assert_eq!(mop_information.fop_information.form_of_payment.kind, "CC");
        let card = &mop_information
            .credit_card_data
            .as_ref()
            .unwrap()
            .credit_card_details
            .cc_info;
        assert_eq!(card.vendor_code, "TP");
        assert_eq!(card.card_number, "4541099999990013");
        assert!(card.cc_holder_name.is_none());
    }

    #[test]
    fn test_record_locator_and_best_effort() {
        let mut options = FopCreateFopOptions::new(TransactionCode::CreateFormOfPayment)
            .with_record_locator("ABC123")
            .with_group(tst_group(vec![MopInfo::new(1, "CASH")]));
        options.best_effort.push(BestEffortOptions {
            indicator: "BES".to_owned(),
            action: Some(StatusInformation::ACTION_YES.to_owned()),
        });

        let message = CreateFormOfPayment::from(&options);

        assert_eq!(
            message
                .reservation_control_information
                .as_ref()
                .unwrap()
                .reservation
                .control_number,
            "ABC123"
        );
        assert_eq!(message.best_effort[0].status_information.indicator, "BES");
        assert_eq!(message.best_effort[0].status_information.action.as_deref(), Some("Y"));
    }
}
