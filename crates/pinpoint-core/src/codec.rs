//! GeoJSON codec — decode the fetched `FeatureCollection` document into
//! [`Feature`] records and re-encode arbitrary subsets back into the same
//! document shape.
//!
//! Decoding is tolerant: a document feature with missing
//! `properties`, a missing geometry, or a non-point geometry still produces
//! a [`Feature`] (with the corresponding fields `None`). Only a document
//! that is not valid GeoJSON, or not a `FeatureCollection`, is an error.
//!
//! Encoding exists so a reduced set (a single highlighted feature, a nearby
//! set) can be handed to a rendering surface as its own data source.

use crate::types::{Feature, LonLat};
use geojson::{FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid GeoJSON document: {0}")]
    Parse(#[from] geojson::Error),
    #[error("expected a FeatureCollection document, got a {0}")]
    NotACollection(&'static str),
}

/// Decode a GeoJSON `FeatureCollection` document into features, preserving
/// document order.
pub fn decode(document: &str) -> Result<Vec<Feature>, CodecError> {
    let collection = match document.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(fc) => fc,
        GeoJson::Feature(_) => return Err(CodecError::NotACollection("Feature")),
        GeoJson::Geometry(_) => return Err(CodecError::NotACollection("Geometry")),
    };

    Ok(collection.features.iter().map(from_document).collect())
}

/// Encode features back into a `FeatureCollection` document string.
pub fn encode(features: &[Feature]) -> String {
    let collection = FeatureCollection {
        bbox: None,
        features: features.iter().map(to_document).collect(),
        foreign_members: None,
    };
    GeoJson::FeatureCollection(collection).to_string()
}

fn from_document(doc: &geojson::Feature) -> Feature {
    let prop = |key: &str| {
        doc.properties
            .as_ref()
            .and_then(|props| props.get(key))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    };

    let coord = doc.geometry.as_ref().and_then(|geometry| match &geometry.value {
        Value::Point(position) if position.len() >= 2 => {
            Some(LonLat::new(position[0], position[1]))
        }
        _ => None,
    });

    Feature {
        name: prop("name"),
        kind: prop("type"),
        category: prop("category"),
        coord,
    }
}

fn to_document(feature: &Feature) -> geojson::Feature {
    let mut props = JsonObject::new();
    let mut put = |key: &str, value: &Option<String>| {
        if let Some(value) = value {
            props.insert(key.to_string(), value.clone().into());
        }
    };
    put("name", &feature.name);
    put("type", &feature.kind);
    put("category", &feature.category);

    geojson::Feature {
        bbox: None,
        geometry: feature
            .coord
            .map(|c| Geometry::new(Value::Point(vec![c.lon, c.lat]))),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "Cafe B", "type": "cafe", "category": "food" },
                "geometry": { "type": "Point", "coordinates": [54.371, 24.471] }
            },
            {
                "type": "Feature",
                "properties": { "name": "No Geometry" },
                "geometry": null
            },
            {
                "type": "Feature",
                "properties": null,
                "geometry": { "type": "Point", "coordinates": [55.0, 25.0] }
            }
        ]
    }"#;

    #[test]
    fn decode_tolerates_missing_properties_and_geometry() {
        let features = decode(DOC).unwrap();
        assert_eq!(features.len(), 3);

        assert_eq!(features[0].name.as_deref(), Some("Cafe B"));
        assert_eq!(features[0].kind.as_deref(), Some("cafe"));
        assert_eq!(features[0].coord, Some(LonLat::new(54.371, 24.471)));

        assert_eq!(features[1].name.as_deref(), Some("No Geometry"));
        assert_eq!(features[1].coord, None);

        assert_eq!(features[2].name, None);
        assert_eq!(features[2].coord, Some(LonLat::new(55.0, 25.0)));
    }

    #[test]
    fn decode_rejects_non_collection_documents() {
        let point = r#"{ "type": "Point", "coordinates": [0.0, 0.0] }"#;
        assert!(matches!(
            decode(point),
            Err(CodecError::NotACollection("Geometry"))
        ));
        assert!(matches!(decode("not json"), Err(CodecError::Parse(_))));
    }

    #[test]
    fn encode_round_trips_the_document_shape() {
        let features = decode(DOC).unwrap();
        let doc = encode(&features);

        // The encoded string is itself a decodable FeatureCollection with
        // the same observable content.
        let reparsed = decode(&doc).unwrap();
        assert_eq!(reparsed, features);

        // And the raw document shape matches the wire contract.
        let json: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][0]["properties"]["name"], "Cafe B");
        assert_eq!(
            json["features"][0]["geometry"]["coordinates"][0]
                .as_f64()
                .unwrap(),
            54.371
        );
    }

    #[test]
    fn non_point_geometries_decode_without_coordinate() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "name": "Area" },
                "geometry": { "type": "Polygon", "coordinates": [[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]] }
            }]
        }"#;
        let features = decode(doc).unwrap();
        assert_eq!(features[0].name.as_deref(), Some("Area"));
        assert_eq!(features[0].coord, None);
    }
}
