//! Request options for the Form of Payment operations.
//!
//! Options describe a form of payment in domain terms. They deserialize from
//! camelCase JSON or TOML, and code lists use `snake_case` names rather than
//! vendor codes; [`CreateFormOfPayment`](crate::message::CreateFormOfPayment)
//! translates them to the wire codes.
//!
//! # Example
//!
//! ```rust
//! use amadeus_fop::options::{
//!     ElementRef, ElementRefType, FopCreateFopOptions, Group, MopInfo, TransactionCode,
//! };
//!
//! let options = FopCreateFopOptions::new(TransactionCode::CreateFormOfPayment).with_group(
//!     Group::default()
//!         .with_element_ref(ElementRef::new(ElementRefType::TstNumber, 1))
//!         .with_mop_info(MopInfo::new(1, "VI").with_free_flow_text("VI4541099100010016/0919")),
//! );
//! assert!(options.validate().is_ok());
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::message::{PassengerReference, ReferenceDetails, TransactionDetails};

mod fraud;
mod mop;

pub use fraud::{FraudScreeningAddress, FraudScreeningOptions, IdDocumentType};
pub use mop::{
    ApprovalSource, CreditCardInfo, DataOrSwitch, DateFormat, FopStatus, FopType,
    InstallmentFrequency, InstallmentsInfo, MopInfo, MopPaymentType, PayId, PayIdType,
    PaySupData, Payment, PaymentType,
};

/// Options for the `FOP_CreateFormOfPayment` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FopCreateFopOptions {
    /// Transaction to perform; no transaction context is sent when absent.
    pub transaction_code: Option<TransactionCode>,
    /// Record locator of the PNR to work on.
    pub record_locator: Option<String>,
    /// Best-effort processing instructions.
    pub best_effort: Vec<BestEffortOptions>,
    /// Form of payment groups.
    pub fop_group: Vec<Group>,
}

impl FopCreateFopOptions {
    /// Creates options for the given transaction.
    #[must_use]
    pub fn new(transaction_code: TransactionCode) -> Self {
        Self {
            transaction_code: Some(transaction_code),
            ..Self::default()
        }
    }

    /// Appends a form of payment group.
    #[must_use]
    pub fn with_group(mut self, group: Group) -> Self {
        self.fop_group.push(group);
        self
    }

    /// Sets the record locator.
    #[must_use]
    pub fn with_record_locator(mut self, record_locator: impl Into<String>) -> Self {
        self.record_locator = Some(record_locator.into());
        self
    }

    /// Checks the options for combinations the vendor would reject or that
    /// would silently drop data.
    ///
    /// # Errors
    ///
    /// Returns the first [`OptionsError`] found, walking groups and methods
    /// of payment in order.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.fop_group.is_empty() {
            return Err(OptionsError::NoFopGroup);
        }
        for (index, group) in self.fop_group.iter().enumerate() {
            group.validate(index)?;
        }
        Ok(())
    }
}

/// Transaction codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionCode {
    /// Create a form of payment.
    CreateFormOfPayment,
    /// Authorization on ticket, MCO or EMD.
    AuthOnTicketMcoEmd,
}

impl TransactionCode {
    /// Returns the vendor transaction code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::CreateFormOfPayment => TransactionDetails::TRANS_CREATE_FORM_OF_PAYMENT,
            Self::AuthOnTicketMcoEmd => TransactionDetails::TRANS_AUTH_ON_TICKET_MCO_EMD,
        }
    }
}

/// A best-effort instruction: what to do when part of the request fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestEffortOptions {
    /// Indicator code.
    pub indicator: String,
    /// Action code.
    #[serde(default)]
    pub action: Option<String>,
}

/// A form of payment group.
///
/// Associates one or more methods of payment to passengers and/or PNR
/// elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
    /// PNR elements paid for.
    pub element_ref: Vec<ElementRef>,
    /// Passengers paid for.
    pub pax_ref: Vec<PaxRef>,
    /// Methods of payment.
    pub mop_info: Vec<MopInfo>,
}

impl Group {
    /// Appends a PNR element reference.
    #[must_use]
    pub fn with_element_ref(mut self, element_ref: ElementRef) -> Self {
        self.element_ref.push(element_ref);
        self
    }

    /// Appends a passenger reference.
    #[must_use]
    pub fn with_pax_ref(mut self, pax_ref: PaxRef) -> Self {
        self.pax_ref.push(pax_ref);
        self
    }

    /// Appends a method of payment.
    #[must_use]
    pub fn with_mop_info(mut self, mop_info: MopInfo) -> Self {
        self.mop_info.push(mop_info);
        self
    }

    fn validate(&self, index: usize) -> Result<(), OptionsError> {
        if self.mop_info.is_empty() {
            return Err(OptionsError::NoMopInfo { group: index });
        }
        let mut seen = HashSet::with_capacity(self.mop_info.len());
        for mop in &self.mop_info {
            if !seen.insert(mop.sequence_nr) {
                return Err(OptionsError::DuplicateSequenceNr {
                    group: index,
                    sequence_nr: mop.sequence_nr,
                });
            }
            mop.validate()?;
        }
        Ok(())
    }
}

/// Reference to a PNR element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRef {
    /// Kind of element.
    #[serde(rename = "type")]
    pub kind: ElementRefType,
    /// Element number or tattoo.
    pub value: u32,
}

impl ElementRef {
    /// Creates an element reference.
    #[must_use]
    pub const fn new(kind: ElementRefType, value: u32) -> Self {
        Self { kind, value }
    }
}

/// Kinds of PNR element references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRefType {
    /// TST number.
    TstNumber,
    /// Segment tattoo.
    SegmentTattoo,
    /// Other element tattoo.
    OtherElementTattoo,
}

impl ElementRefType {
    /// Returns the vendor reference qualifier.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TstNumber => ReferenceDetails::TYPE_TST,
            Self::SegmentTattoo => ReferenceDetails::TYPE_SEGMENT_TATTOO,
            Self::OtherElementTattoo => ReferenceDetails::TYPE_OTHER_ELEMENT_TATTOO,
        }
    }
}

/// Reference to a passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaxRef {
    /// Kind of passenger.
    #[serde(rename = "type")]
    pub kind: PaxRefType,
    /// Passenger tattoo.
    pub value: u32,
}

impl PaxRef {
    /// Creates a passenger reference.
    #[must_use]
    pub const fn new(kind: PaxRefType, value: u32) -> Self {
        Self { kind, value }
    }
}

/// Kinds of passenger references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaxRefType {
    /// Adult passenger.
    Adult,
    /// Infant passenger.
    Infant,
}

impl PaxRefType {
    /// Returns the vendor passenger qualifier.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Adult => PassengerReference::TYPE_ADULT,
            Self::Infant => PassengerReference::TYPE_INFANT,
        }
    }
}
