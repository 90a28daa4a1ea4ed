//! XML serialization and deserialization for TCX documents.
//!
//! Reading and writing both go through the keyed element tree of
//! `pacer-serde-support`:
//!
//! - **Deserialization**: quick-xml events are folded into an [`XmlElement`]
//!   tree (text, CDATA and entity references merged, indentation dropped),
//!   the root element name is checked against the target type and the tree
//!   is decoded by the model's `XmlCodable` implementations.
//! - **Serialization**: the model encodes itself into a tree, consulting each
//!   entity's node-placement table, and the tree is written out as quick-xml
//!   events.
//!
//! ## Keys and namespaces
//!
//! Element and attribute names are matched on their qualified spelling.
//! Encoding writes the default TCX namespace plus the `xsi`, `ns3`
//! (ActivityExtension v2) and `ns5` (ActivityGoals v1) prefixes on the root
//! and always uses the prefixed extension keys. Decoding also accepts the
//! unprefixed spellings some producers write.
//!
//! ```xml
//! <TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2" ...>
//!   <Activities>
//!     <Activity Sport="Running">
//!       <Id>2019-01-01T10:00:00Z</Id>
//!       <Lap StartTime="2019-01-01T10:00:00Z">...</Lap>
//!     </Activity>
//!   </Activities>
//!   <Extensions>
//!     <ns5:ActivityGoals>
//!       <ns5:activityGoal Sport="Running" Measure="DistanceMeters" Target="40000" Current="0">
//!         <Name>Weekly</Name>
//!       </ns5:activityGoal>
//!     </ns5:ActivityGoals>
//!   </Extensions>
//! </TrainingCenterDatabase>
//! ```
//!
//! [`XmlElement`]: pacer_serde_support::XmlElement

pub mod de;
pub mod ser;
mod utils;

// Re-export serialization functions
pub use ser::{to_xml_string, to_xml_string_pretty, to_xml_vec, to_xml_writer, write_element};

// Re-export deserialization functions
pub use de::{from_xml_reader, from_xml_slice, from_xml_str, parse_element};
