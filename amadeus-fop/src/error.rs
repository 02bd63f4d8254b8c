//! Error types for building Form of Payment requests.

/// Top-level error for turning options into a request document.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FopError {
    /// The options were rejected before building the message.
    #[error("{0}")]
    Options(#[from] OptionsError),

    /// The message could not be serialized to XML.
    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::SeError),
}

/// Inconsistent or incomplete request options.
///
/// Group indexes are zero-based positions in
/// [`FopCreateFopOptions::fop_group`](crate::options::FopCreateFopOptions::fop_group);
/// methods of payment are identified by their sequence number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum OptionsError {
    /// No form of payment group was given.
    #[error("at least one fop group is required")]
    NoFopGroup,

    /// A group carries no method of payment.
    #[error("fop group {group} has no method of payment")]
    NoMopInfo {
        /// Group index.
        group: usize,
    },

    /// Two methods of payment in a group share a sequence number.
    #[error("sequence number {sequence_nr} is used twice in fop group {group}")]
    DuplicateSequenceNr {
        /// Group index.
        group: usize,
        /// The repeated sequence number.
        sequence_nr: u32,
    },

    /// Structured payment data was given without a FOP type and would be dropped.
    #[error("method of payment {sequence_nr}: structured payment data requires a fop type")]
    MissingFopType {
        /// Sequence number of the method of payment.
        sequence_nr: u32,
    },

    /// Free-flow text was given together with a FOP type and would be dropped.
    #[error("method of payment {sequence_nr}: free-flow text cannot be combined with a fop type")]
    FreeFlowWithFopType {
        /// Sequence number of the method of payment.
        sequence_nr: u32,
    },

    /// Card data was given without a payment means and would be dropped.
    #[error("method of payment {sequence_nr}: credit card data requires a payment type")]
    MissingMopPaymentType {
        /// Sequence number of the method of payment.
        sequence_nr: u32,
    },

    /// A currency is not a three-letter uppercase ISO code.
    #[error("invalid currency code {0:?}")]
    InvalidCurrency(String),

    /// A payment amount is negative.
    #[error("method of payment {sequence_nr}: amount {amount} is negative")]
    NegativeAmount {
        /// Sequence number of the method of payment.
        sequence_nr: u32,
        /// The rejected amount.
        amount: String,
    },

    /// A card expiry date is not `MMYY`.
    #[error("invalid card expiry date {0:?}, expected MMYY")]
    InvalidExpiryDate(String),

    /// An installment plan has zero installments.
    #[error("method of payment {sequence_nr}: number of installments must be positive")]
    NoInstallments {
        /// Sequence number of the method of payment.
        sequence_nr: u32,
    },

    /// An identity document number without type, or the reverse.
    #[error("method of payment {sequence_nr}: identity document needs both number and type")]
    IncompleteIdDocument {
        /// Sequence number of the method of payment.
        sequence_nr: u32,
    },

    /// A billing address without street lines, or with more than two.
    #[error("method of payment {sequence_nr}: billing address needs one or two lines, got {lines}")]
    InvalidAddressLines {
        /// Sequence number of the method of payment.
        sequence_nr: u32,
        /// Number of lines given.
        lines: usize,
    },
}
