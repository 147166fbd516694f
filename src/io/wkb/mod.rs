//! Reading and writing ISO-flavored WKB-encoded geometries.

mod api;
pub(crate) mod common;
pub(crate) mod reader;
pub(crate) mod writer;

pub use api::{from_wkb, read_wkb, to_wkb, wkb_size, write_wkb};
pub use common::{Endianness, WKBType};
pub use reader::WKBReaderOptions;
pub use writer::WKBWriterOptions;
