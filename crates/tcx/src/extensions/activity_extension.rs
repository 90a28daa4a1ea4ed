//! Trackpoint extension (`ActivityExtension v2`, usually bound to the `ns3`
//! prefix): speed, running cadence and power samples.

use pacer_serde_support::{
    AliasedKey, DecodeError, NodePlacement, XmlCodable, XmlDecoder, XmlEncoder,
    decode_with_fallback,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::codes::code_enum;

code_enum! {
    /// CadenceSensorType_t
    pub enum CadenceSensorType {
        Footpod = "Footpod",
        Bike = "Bike",
    }
}

/// The `Extensions` element of a trackpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackpointExtensions {
    // Extensions_t
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tpx: Option<TrackpointExtension>,
}

impl TrackpointExtensions {
    pub const TPX: AliasedKey = AliasedKey::new("ns3:TPX", &["TPX"]);

    pub fn new(tpx: Option<TrackpointExtension>) -> Self {
        Self { tpx }
    }

    pub fn tpx(&self) -> Option<&TrackpointExtension> {
        self.tpx.as_ref()
    }
}

impl XmlCodable for TrackpointExtensions {
    const ENTITY: &'static str = "TrackpointExtensions";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode_optional_entity(Self::TPX.primary(), self.tpx.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(decode_with_fallback(
            decoder,
            &Self::TPX,
            |decoder, key| decoder.decode_entity(key),
        )?))
    }
}

/// TPX_t
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackpointExtension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cadence_sensor: Option<CadenceSensorType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    speed: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    run_cadence: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    watts: Option<u16>,
}

impl TrackpointExtension {
    const CADENCE_SENSOR: &'static str = "CadenceSensor";

    pub const SPEED: AliasedKey = AliasedKey::new("ns3:Speed", &["Speed"]);
    pub const RUN_CADENCE: AliasedKey = AliasedKey::new("ns3:RunCadence", &["RunCadence"]);
    pub const WATTS: AliasedKey = AliasedKey::new("ns3:Watts", &["Watts"]);

    pub fn new(
        cadence_sensor: Option<CadenceSensorType>,
        speed: Option<Decimal>,
        run_cadence: Option<u8>,
        watts: Option<u16>,
    ) -> Self {
        Self {
            cadence_sensor,
            speed,
            run_cadence,
            watts,
        }
    }

    pub fn cadence_sensor(&self) -> Option<CadenceSensorType> {
        self.cadence_sensor
    }

    /// Speed in meters per second.
    pub fn speed(&self) -> Option<Decimal> {
        self.speed
    }

    /// Running cadence in steps per minute, one foot.
    pub fn run_cadence(&self) -> Option<u8> {
        self.run_cadence
    }

    pub fn watts(&self) -> Option<u16> {
        self.watts
    }
}

impl XmlCodable for TrackpointExtension {
    const ENTITY: &'static str = "TrackpointExtension";

    fn node_placement(key: &str) -> NodePlacement {
        match key {
            Self::CADENCE_SENSOR => NodePlacement::Attribute,
            _ => NodePlacement::Element,
        }
    }

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode_optional(Self::CADENCE_SENSOR, self.cadence_sensor.as_ref());
        encoder.encode_optional(Self::SPEED.primary(), self.speed.as_ref());
        encoder.encode_optional(Self::RUN_CADENCE.primary(), self.run_cadence.as_ref());
        encoder.encode_optional(Self::WATTS.primary(), self.watts.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode_optional(Self::CADENCE_SENSOR)?,
            decode_with_fallback(decoder, &Self::SPEED, |decoder, key| decoder.decode(key))?,
            decode_with_fallback(decoder, &Self::RUN_CADENCE, |decoder, key| {
                decoder.decode(key)
            })?,
            decode_with_fallback(decoder, &Self::WATTS, |decoder, key| decoder.decode(key))?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacer_serde_support::{XmlElement, classify, decode_element, encode_element};
    use rust_decimal_macros::dec;

    fn tpx(key_prefix: &str, speed: &str, watts: &str) -> XmlElement {
        let mut element = XmlElement::new(format!("{key_prefix}TPX"));
        element.push_child(XmlElement::with_text(format!("{key_prefix}Speed"), speed));
        element.push_child(XmlElement::with_text(format!("{key_prefix}Watts"), watts));
        element
    }

    #[test]
    fn test_encode_writes_prefixed_keys() {
        let extensions = TrackpointExtensions::new(Some(TrackpointExtension::new(
            Some(CadenceSensorType::Footpod),
            Some(dec!(3.412)),
            Some(88),
            None,
        )));
        let element = encode_element(&extensions, "Extensions");
        let tpx = element.child("ns3:TPX").unwrap();
        assert_eq!(tpx.attribute("CadenceSensor"), Some("Footpod"));
        let names: Vec<_> = tpx.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["ns3:Speed", "ns3:RunCadence"]);
        assert_eq!(
            decode_element::<TrackpointExtensions>(&element),
            Ok(extensions)
        );
    }

    #[test]
    fn test_decode_unprefixed_spelling() {
        let mut element = XmlElement::new("Extensions");
        element.push_child(tpx("", "2.5", "210"));
        let decoded: TrackpointExtensions = decode_element(&element).unwrap();
        let tpx = decoded.tpx().unwrap();
        assert_eq!(tpx.speed(), Some(dec!(2.5)));
        assert_eq!(tpx.watts(), Some(210));
        assert_eq!(tpx.run_cadence(), None);
    }

    #[test]
    fn test_prefixed_field_wins_over_unprefixed() {
        let mut element = tpx("ns3:", "4.0", "250");
        element.push_child(XmlElement::with_text("Watts", "999"));
        let decoded: TrackpointExtension = decode_element(&element).unwrap();
        assert_eq!(decoded.watts(), Some(250));
    }

    #[test]
    fn test_malformed_prefixed_field_is_fatal() {
        let mut element = tpx("ns3:", "4.0", "lots");
        element.push_child(XmlElement::with_text("Watts", "250"));
        assert_eq!(
            decode_element::<TrackpointExtension>(&element),
            Err(DecodeError::MalformedValue {
                entity: "TrackpointExtension",
                key: "ns3:Watts",
                expected: "unsigned short",
                value: "lots".to_string(),
            })
        );
    }

    #[test]
    fn test_cadence_sensor_placement() {
        assert_eq!(
            classify::<TrackpointExtension>("CadenceSensor"),
            NodePlacement::Attribute
        );
        assert_eq!(
            classify::<TrackpointExtension>("ns3:Speed"),
            NodePlacement::Element
        );
        assert_eq!(
            decode_element::<TrackpointExtensions>(&XmlElement::new("Extensions")),
            Ok(TrackpointExtensions::default())
        );
    }
}
