#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Typed request builder for the Amadeus Form of Payment web service.
//!
//! This crate turns strongly-typed request options into the XML structure of
//! the `FOP_CreateFormOfPayment` operation. The mapping is one-directional
//! and stateless: options go in, a schema-shaped message and its XML
//! rendering come out. Transport, sessions and response parsing are left to
//! the caller.
//!
//! # Overview
//!
//! A request is described with [`options::FopCreateFopOptions`]: groups of
//! methods of payment associated to passengers or PNR elements. Each method
//! of payment is either structured (it has a FOP type and carries amounts,
//! installments, card and fraud screening data) or unstructured (free-flow
//! text). [`message::CreateFormOfPayment`] mirrors the vendor schema and is
//! built from the options; [`encoding`] renders it as XML.
//!
//! ```rust
//! use amadeus_fop::encoding::{XmlOptions, encode};
//! use amadeus_fop::options::{
//!     ElementRef, ElementRefType, FopCreateFopOptions, Group, MopInfo, TransactionCode,
//! };
//!
//! let options = FopCreateFopOptions::new(TransactionCode::CreateFormOfPayment).with_group(
//!     Group::default()
//!         .with_element_ref(ElementRef::new(ElementRefType::TstNumber, 1))
//!         .with_mop_info(MopInfo::new(1, "VI").with_free_flow_text("VI4541099100010016/0919")),
//! );
//! let xml = encode(&options, XmlOptions::COMPACT)?;
//! assert!(xml.starts_with("<FOP_CreateFormOfPayment>"));
//! # Ok::<(), amadeus_fop::error::FopError>(())
//! ```
//!
//! # Modules
//!
//! - [`options`] - Domain request options and their validation
//! - [`message`] - Wire structure of the request
//! - [`encoding`] - XML rendering
//! - [`error`] - Error types
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation of request encoding

pub mod encoding;
pub mod error;
pub mod message;
pub mod options;

pub use encoding::{XmlOptions, encode};
pub use error::{FopError, OptionsError};
pub use message::CreateFormOfPayment;
pub use options::FopCreateFopOptions;
