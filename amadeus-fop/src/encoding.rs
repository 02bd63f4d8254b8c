//! XML rendering of request messages.
//!
//! Messages are serialized with `quick-xml`: every struct field becomes a
//! child element, repetitions become repeated elements, and text content is
//! escaped. No SOAP envelope or namespace is added.

use quick_xml::se::Serializer;
use serde::Serialize;
#[cfg(feature = "telemetry")]
use tracing::instrument;

use crate::error::FopError;
use crate::message::CreateFormOfPayment;
use crate::options::FopCreateFopOptions;

/// A request message with a fixed root element.
pub trait RequestMessage: Serialize {
    /// Name of the document root element.
    const ROOT_ELEMENT: &'static str;
}

/// Output settings for the XML document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XmlOptions {
    /// Spaces per indentation level; compact output when `None`.
    pub indent: Option<usize>,
}

impl XmlOptions {
    /// Compact output on a single line.
    pub const COMPACT: Self = Self { indent: None };

    /// Indented output.
    #[must_use]
    pub const fn indented(size: usize) -> Self {
        Self { indent: Some(size) }
    }
}

/// Serializes a request message into an XML document.
///
/// # Errors
///
/// Returns [`FopError::Xml`] if the serializer rejects the message.
pub fn to_xml<M: RequestMessage>(message: &M, options: XmlOptions) -> Result<String, FopError> {
    let mut xml = String::new();
    let mut serializer = Serializer::with_root(&mut xml, Some(M::ROOT_ELEMENT))?;
    if let Some(size) = options.indent {
        serializer.indent(' ', size);
    }
    message.serialize(serializer)?;
    Ok(xml)
}

/// Validates options, builds the `FOP_CreateFormOfPayment` message and
/// renders it.
///
/// # Errors
///
/// Returns [`FopError::Options`] when validation fails and
/// [`FopError::Xml`] when serialization fails.
#[cfg_attr(feature = "telemetry", instrument(skip_all, err))]
pub fn encode(options: &FopCreateFopOptions, xml: XmlOptions) -> Result<String, FopError> {
    options.validate()?;
    let message = CreateFormOfPayment::new(options);

    #[cfg(feature = "telemetry")]
    tracing::debug!(
        groups = message.fop_group.len(),
        root = CreateFormOfPayment::ROOT_ELEMENT,
        "Built form of payment request"
    );

    to_xml(&message, xml)
}
