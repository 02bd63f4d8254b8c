//! Method-of-payment description.
//!
//! Each [`MopInfo`] becomes one [`MopDescription`]. The presence of a FOP
//! type decides the shape: with a type, the payment is described by a
//! structured [`PaymentModule`]; without one, it is carried as legacy
//! free-flow text in [`MopDetails::old_fop_freeflow`].

use serde::Serialize;

use super::payment::PaymentModule;
use crate::options::{DataOrSwitch, MopInfo};

/// Description of one method of payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MopDescription {
    /// Position of this payment inside its group.
    pub fop_sequence_number: FopSequenceNumber,
    /// FOP code, status and PNR-level data.
    pub mop_details: MopDetails,
    /// Structured payment data; only present for typed forms of payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_module: Option<PaymentModule>,
}

impl From<&MopInfo> for MopDescription {
    fn from(mop: &MopInfo) -> Self {
        Self {
            fop_sequence_number: FopSequenceNumber::new(mop.sequence_nr),
            mop_details: MopDetails::from(mop),
            payment_module: mop.fop_type.map(|fop_type| PaymentModule::new(fop_type, mop)),
        }
    }
}

/// Sequence number wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FopSequenceNumber {
    /// Sequence details.
    pub sequence_details: SequenceDetails,
}

impl FopSequenceNumber {
    /// Creates a sequence number.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self {
            sequence_details: SequenceDetails { number },
        }
    }
}

/// Sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequenceDetails {
    /// The number.
    pub number: u32,
}

/// PNR-level description of the method of payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MopDetails {
    /// FOP code and status.
    #[serde(rename = "fopPNRDetails")]
    pub fop_pnr_details: FopPnrDetails,
    /// Unstructured free-flow FOP text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_fop_freeflow: Option<FreeFlow>,
    /// Structured free-flow data and switches.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pnr_supplementary_data: Vec<PnrSupplementaryData>,
}

impl From<&MopInfo> for MopDetails {
    fn from(mop: &MopInfo) -> Self {
        let old_fop_freeflow = if mop.fop_type.is_none() {
            mop.free_flow_text.as_deref().map(FreeFlow::new)
        } else {
            None
        };

        let pnr_supplementary_data = mop
            .supplementary_data
            .iter()
            .map(|data| {
                PnrSupplementaryData::new(PnrSupplementaryData::TYPE_DATA_INFORMATION, data)
            })
            .chain(mop.supplementary_switches.iter().map(|switch| {
                PnrSupplementaryData::new(PnrSupplementaryData::TYPE_SWITCH_INFORMATION, switch)
            }))
            .collect();

        Self {
            fop_pnr_details: FopPnrDetails {
                fop_details: vec![FopDetails {
                    fop_code: mop.fop_code.clone(),
                    fop_status: mop.fop_status.map(|status| status.code().to_owned()),
                }],
            },
            old_fop_freeflow,
            pnr_supplementary_data,
        }
    }
}

/// FOP details list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FopPnrDetails {
    /// Codes of the form of payment.
    pub fop_details: Vec<FopDetails>,
}

/// FOP code and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FopDetails {
    /// FOP code (e.g. `VI`, `CCVI`).
    pub fop_code: String,
    /// New or old form of payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fop_status: Option<String>,
}

impl FopDetails {
    /// New form of payment.
    pub const STATUS_NEW: &'static str = "N";
    /// Old form of payment.
    pub const STATUS_OLD: &'static str = "O";
}

/// Free-flow text with its encoding metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeFlow {
    /// How the text is qualified and encoded.
    pub free_text_details: FreeTextDetails,
    /// The text itself.
    pub free_text: String,
}

impl FreeFlow {
    /// Creates a manually entered, mutually defined free-flow text.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            free_text_details: FreeTextDetails {
                text_subject_qualifier: FreeTextDetails::QUALIFIER_MUTUAL.to_owned(),
                source: FreeTextDetails::SOURCE_MANUAL.to_owned(),
                encoding: FreeTextDetails::ENCODING_MUTUAL.to_owned(),
            },
            free_text: text.to_owned(),
        }
    }
}

/// Free text qualifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeTextDetails {
    /// Text subject qualifier.
    pub text_subject_qualifier: String,
    /// Source of the text.
    pub source: String,
    /// Text encoding.
    pub encoding: String,
}

impl FreeTextDetails {
    /// Mutually defined subject qualifier.
    pub const QUALIFIER_MUTUAL: &'static str = "ZZZ";
    /// Manually entered text.
    pub const SOURCE_MANUAL: &'static str = "M";
    /// Mutually defined encoding.
    pub const ENCODING_MUTUAL: &'static str = "ZZZ";
}

/// One structured free-flow datum or switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PnrSupplementaryData {
    /// Criteria set.
    pub data_and_switch_map: DataAndSwitchMap,
}

impl PnrSupplementaryData {
    /// Criteria set holding data fields.
    pub const TYPE_DATA_INFORMATION: &'static str = "DAT";
    /// Criteria set holding switches.
    pub const TYPE_SWITCH_INFORMATION: &'static str = "SWI";

    /// Creates a criteria set of the given type holding one attribute.
    #[must_use]
    pub fn new(criteria_set_type: &str, entry: &DataOrSwitch) -> Self {
        Self {
            data_and_switch_map: DataAndSwitchMap {
                criteria_set_type: criteria_set_type.to_owned(),
                criteria_details: vec![AttributeDetails::new(
                    entry.kind.clone(),
                    Some(entry.description.clone()),
                )],
            },
        }
    }
}

/// Criteria set type and its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataAndSwitchMap {
    /// Data or switch set.
    pub criteria_set_type: String,
    /// Attributes of the set.
    pub criteria_details: Vec<AttributeDetails>,
}

/// Attribute type with an optional description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDetails {
    /// Attribute type.
    pub attribute_type: String,
    /// Attribute value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_description: Option<String>,
}

impl AttributeDetails {
    /// Group usage: FP element.
    pub const TYPE_FP_ELEMENT: &'static str = "FP";

    /// Creates an attribute.
    #[must_use]
    pub const fn new(attribute_type: String, attribute_description: Option<String>) -> Self {
        Self {
            attribute_type,
            attribute_description,
        }
    }
}
