//! Fraud screening options.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::message::ReferenceDetails;

/// Data sent along a card payment for fraud screening.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FraudScreeningOptions {
    /// IP address of the shopper device.
    pub ip_address: Option<String>,
    /// Payer given name.
    pub first_name: Option<String>,
    /// Payer surname.
    pub last_name: Option<String>,
    /// Payer date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Identity document number; sent only together with its type.
    pub id_document_nr: Option<String>,
    /// Identity document type.
    pub id_document_type: Option<IdDocumentType>,
    /// Payer phone number.
    pub phone: Option<String>,
    /// Payer email address.
    pub email: Option<String>,
    /// Card billing address.
    pub billing_address: Option<FraudScreeningAddress>,
}

impl FraudScreeningOptions {
    pub(super) fn validate(&self, sequence_nr: u32) -> Result<(), OptionsError> {
        if self.id_document_nr.is_some() != self.id_document_type.is_some() {
            return Err(OptionsError::IncompleteIdDocument { sequence_nr });
        }
        if let Some(address) = &self.billing_address {
            let lines = address.address_lines.len();
            if !(1..=2).contains(&lines) {
                return Err(OptionsError::InvalidAddressLines { sequence_nr, lines });
            }
        }
        Ok(())
    }
}

/// Identity document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdDocumentType {
    /// Brazilian CPF number.
    CpfBrazilianSecurityNumber,
    /// Passport.
    Passport,
    /// National identity card.
    NationalIdentityCard,
    /// Driving license.
    DrivingLicense,
}

impl IdDocumentType {
    /// Returns the vendor reference qualifier.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::CpfBrazilianSecurityNumber => {
                ReferenceDetails::TYPE_CPF_BRAZILIAN_SECURITY_NUMBER
            }
            Self::Passport => ReferenceDetails::TYPE_PASSPORT,
            Self::NationalIdentityCard => ReferenceDetails::TYPE_NATIONAL_IDENTITY_CARD,
            Self::DrivingLicense => ReferenceDetails::TYPE_DRIVING_LICENSE,
        }
    }
}

/// Card billing address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FraudScreeningAddress {
    /// One or two street lines.
    pub address_lines: Vec<String>,
    /// City.
    pub city: Option<String>,
    /// Postal code.
    pub zip_code: Option<String>,
    /// ISO country code.
    pub country_code: Option<String>,
}
