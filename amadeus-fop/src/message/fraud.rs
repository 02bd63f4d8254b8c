//! Fraud screening data block.

use chrono::NaiveDate;
use serde::Serialize;

use super::{ReferenceDetails, StatusInformation};
use crate::options::{FraudScreeningAddress, FraudScreeningOptions};

/// Request for fraud screening of the payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudScreeningData {
    /// Screening flag, always set to "yes".
    pub fraud_screening: FraudScreening,
    /// Shopper device IP address. The element name is misspelled in the schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_adress: Option<IpAddress>,
    /// Payer phone and email contacts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payer_phone_or_email: Vec<PhoneOrEmail>,
    /// Payer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<PayerName>,
    /// Payer date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_date_of_birth: Option<DateOfBirth>,
    /// Card billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<BillingAddress>,
    /// Payer identity document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_of_id_details: Option<FormOfIdDetails>,
}

impl From<&FraudScreeningOptions> for FraudScreeningData {
    fn from(options: &FraudScreeningOptions) -> Self {
        let payer_phone_or_email = options
            .phone
            .as_deref()
            .map(PhoneOrEmail::phone)
            .into_iter()
            .chain(options.email.as_deref().map(PhoneOrEmail::email))
            .collect();

        let payer_name = if options.first_name.is_some() || options.last_name.is_some() {
            Some(PayerName {
                cc_holder_name_details: options
                    .last_name
                    .clone()
                    .map(|surname| CcHolderNameDetails { surname }),
                other_name_details: options
                    .first_name
                    .clone()
                    .map(|given_name| OtherNameDetails { given_name }),
            })
        } else {
            None
        };

        let form_of_id_details = options
            .id_document_nr
            .as_ref()
            .zip(options.id_document_type)
            .map(|(number, kind)| FormOfIdDetails {
                reference_details: ReferenceDetails {
                    kind: kind.code().to_owned(),
                    value: number.clone(),
                },
            });

        Self {
            fraud_screening: FraudScreening::default(),
            ip_adress: options.ip_address.as_deref().map(IpAddress::new),
            payer_phone_or_email,
            payer_name,
            payer_date_of_birth: options.date_of_birth.map(DateOfBirth::new),
            billing_address: options.billing_address.as_ref().map(BillingAddress::from),
            form_of_id_details,
        }
    }
}

/// Fraud screening flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudScreening {
    /// Indicator `FRA` with action `Y`.
    pub status_information: StatusInformation,
}

impl Default for FraudScreening {
    fn default() -> Self {
        Self {
            status_information: StatusInformation {
                indicator: StatusInformation::INDICATOR_FRAUD_SCREENING.to_owned(),
                action: Some(StatusInformation::ACTION_YES.to_owned()),
            },
        }
    }
}

/// Device identification wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAddress {
    /// Device identification.
    pub device_identification: DeviceIdentification,
}

impl IpAddress {
    /// Identifies a device by IP address.
    #[must_use]
    pub fn new(address: &str) -> Self {
        Self {
            device_identification: DeviceIdentification {
                address: address.to_owned(),
                qualifier: DeviceIdentification::QUAL_IP_ADDRESS.to_owned(),
            },
        }
    }
}

/// Qualified device address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceIdentification {
    /// Address.
    pub address: String,
    /// Address qualifier.
    pub qualifier: String,
}

impl DeviceIdentification {
    /// IP address.
    pub const QUAL_IP_ADDRESS: &'static str = "IP";
}

/// A phone number or an email address of the payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneOrEmail {
    /// Contact kind.
    pub phone_or_email_type: String,
    /// Phone number, for phone contacts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone_number_details: Option<TelephoneNumberDetails>,
    /// Email address, for email contacts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

impl PhoneOrEmail {
    /// Phone contact.
    pub const TYPE_PHONE: &'static str = "PHO";
    /// Email contact.
    pub const TYPE_EMAIL: &'static str = "EML";

    /// Creates a phone contact.
    #[must_use]
    pub fn phone(number: &str) -> Self {
        Self {
            phone_or_email_type: Self::TYPE_PHONE.to_owned(),
            telephone_number_details: Some(TelephoneNumberDetails {
                telephone_number: number.to_owned(),
            }),
            email_address: None,
        }
    }

    /// Creates an email contact.
    #[must_use]
    pub fn email(address: &str) -> Self {
        Self {
            phone_or_email_type: Self::TYPE_EMAIL.to_owned(),
            telephone_number_details: None,
            email_address: Some(address.to_owned()),
        }
    }
}

/// Phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelephoneNumberDetails {
    /// Phone number.
    pub telephone_number: String,
}

/// Payer name split in surname and given name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayerName {
    /// Surname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_holder_name_details: Option<CcHolderNameDetails>,
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_name_details: Option<OtherNameDetails>,
}

/// Surname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CcHolderNameDetails {
    /// Surname.
    pub surname: String,
}

/// Given name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherNameDetails {
    /// Given name.
    pub given_name: String,
}

/// Date of birth wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateOfBirth {
    /// Date split in components.
    pub date_time: DateTime,
}

impl DateOfBirth {
    /// Splits a date into four-digit year and two-digit month and day.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date_time: DateTime {
                year: date.format("%Y").to_string(),
                month: date.format("%m").to_string(),
                day: date.format("%d").to_string(),
            },
        }
    }
}

/// Date components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTime {
    /// Four-digit year.
    pub year: String,
    /// Two-digit month.
    pub month: String,
    /// Two-digit day.
    pub day: String,
}

/// Billing address of the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    /// Street lines.
    pub address_details: AddressDetails,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

impl From<&FraudScreeningAddress> for BillingAddress {
    fn from(address: &FraudScreeningAddress) -> Self {
        let mut lines = address.address_lines.iter().cloned();
        Self {
            address_details: AddressDetails {
                format: AddressDetails::FORMAT_UNSTRUCTURED.to_owned(),
                line1: lines.next().unwrap_or_default(),
                line2: lines.next(),
            },
            city: address.city.clone(),
            zip_code: address.zip_code.clone(),
            country_code: address.country_code.clone(),
        }
    }
}

/// Street lines of an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetails {
    /// Address format code.
    pub format: String,
    /// First line.
    pub line1: String,
    /// Second line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
}

impl AddressDetails {
    /// Unstructured address lines.
    pub const FORMAT_UNSTRUCTURED: &'static str = "5";
}

/// Identity document wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOfIdDetails {
    /// Document type and number.
    pub reference_details: ReferenceDetails,
}
