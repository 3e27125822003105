//! Binary buffer utilities for ubeacon.
//!
//! This crate provides the byte-level reading and writing plumbing shared
//! by every advertisement codec in the `ubeacon` crate.
//!
//! # Overview
//!
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//!
//! Beacon wire formats mix byte orders: field values are mostly
//! big-endian, while BLE company identifiers and the MikroTik sensor
//! layout are little-endian, so both flavors are provided.
//!
//! # Example
//!
//! ```
//! use ubeacon_buffers::{Reader, Writer};
//!
//! // Write some data
//! let mut writer = Writer::new();
//! writer.u8(0x02);
//! writer.u16(0x0103);
//! writer.u16_le(0x0499);
//! let data = writer.flush();
//!
//! // Read it back
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8(), 0x02);
//! assert_eq!(reader.u16(), 0x0103);
//! assert_eq!(reader.u16_le(), 0x0499);
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;
