use std::str::FromStr;

use geojson::feature::Id;
use geojson::GeoJson;
use serde_json::{Map, Value};

use crate::error::{GeomError, Result};
use crate::io::geojson::reader::{from_geojson, parse_geojson};
use crate::io::geojson::writer::to_geojson;
use crate::scalar::Geometry;

/// A GeoJSON feature: an optional geometry with free-form properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
    /// Numeric ids are kept in their textual form.
    pub id: Option<String>,
    pub geometry: Option<Geometry>,
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// Any top-level GeoJSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJsonDocument {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl TryFrom<&geojson::Feature> for Feature {
    type Error = GeomError;

    fn try_from(value: &geojson::Feature) -> Result<Self> {
        let id = value.id.as_ref().map(|id| match id {
            Id::String(s) => s.clone(),
            Id::Number(n) => n.to_string(),
        });
        let geometry = value.geometry.as_ref().map(from_geojson).transpose()?;
        Ok(Self {
            id,
            geometry,
            properties: value.properties.clone().unwrap_or_default(),
        })
    }
}

impl From<&Feature> for geojson::Feature {
    fn from(value: &Feature) -> Self {
        geojson::Feature {
            bbox: None,
            geometry: value.geometry.as_ref().map(to_geojson),
            id: value.id.clone().map(Id::String),
            properties: Some(value.properties.clone()),
            foreign_members: None,
        }
    }
}

impl TryFrom<&geojson::FeatureCollection> for FeatureCollection {
    type Error = GeomError;

    fn try_from(value: &geojson::FeatureCollection) -> Result<Self> {
        let features = value
            .features
            .iter()
            .map(Feature::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { features })
    }
}

impl From<&FeatureCollection> for geojson::FeatureCollection {
    fn from(value: &FeatureCollection) -> Self {
        geojson::FeatureCollection {
            bbox: None,
            features: value.features.iter().map(geojson::Feature::from).collect(),
            foreign_members: None,
        }
    }
}

impl TryFrom<&GeoJson> for GeoJsonDocument {
    type Error = GeomError;

    fn try_from(value: &GeoJson) -> Result<Self> {
        Ok(match value {
            GeoJson::Geometry(geometry) => Self::Geometry(from_geojson(geometry)?),
            GeoJson::Feature(feature) => Self::Feature(feature.try_into()?),
            GeoJson::FeatureCollection(collection) => {
                Self::FeatureCollection(collection.try_into()?)
            }
        })
    }
}

impl From<&GeoJsonDocument> for GeoJson {
    fn from(value: &GeoJsonDocument) -> Self {
        match value {
            GeoJsonDocument::Geometry(geometry) => GeoJson::Geometry(to_geojson(geometry)),
            GeoJsonDocument::Feature(feature) => GeoJson::Feature(feature.into()),
            GeoJsonDocument::FeatureCollection(collection) => {
                GeoJson::FeatureCollection(collection.into())
            }
        }
    }
}

impl From<Geometry> for GeoJsonDocument {
    fn from(value: Geometry) -> Self {
        Self::Geometry(value)
    }
}

impl FromStr for GeoJsonDocument {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self> {
        parse_geojson(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scalar::Point;
    use serde_json::json;

    #[test]
    fn feature_with_properties() {
        let document: GeoJsonDocument = r#"{
            "type": "Feature",
            "id": 7,
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0, 3.0, 4.0]},
            "properties": {"name": "a", "height": 12.5}
        }"#
        .parse()
        .unwrap();
        let GeoJsonDocument::Feature(feature) = document else {
            panic!("expected a feature");
        };
        assert_eq!(feature.id.as_deref(), Some("7"));
        assert_eq!(
            feature.geometry,
            Some(Geometry::Point(Point::xyzm(1.0, 2.0, 3.0, 4.0)))
        );
        assert_eq!(feature.properties["name"], json!("a"));
        assert_eq!(feature.properties["height"], json!(12.5));
    }

    #[test]
    fn feature_without_geometry() {
        let document: GeoJsonDocument =
            r#"{"type":"Feature","geometry":null,"properties":null}"#.parse().unwrap();
        assert_eq!(document, GeoJsonDocument::Feature(Feature::default()));
    }

    #[test]
    fn feature_collection() {
        let document: GeoJsonDocument = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "id": "x", "geometry": {"type": "Point", "coordinates": [0, 1]}, "properties": {}},
                {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0, 1], [1, 2]]}, "properties": {}}
            ]
        }"#
        .parse()
        .unwrap();
        let GeoJsonDocument::FeatureCollection(collection) = document else {
            panic!("expected a feature collection");
        };
        assert_eq!(collection.features.len(), 2);
        assert_eq!(collection.features[0].id.as_deref(), Some("x"));
        assert_eq!(
            collection.features[1].geometry,
            Some(Geometry::LineString(crate::test::linestring::ls0()))
        );
    }

    #[test]
    fn feature_collection_propagates_child_errors() {
        let err = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0, 1, 2, 3, 4]}, "properties": {}}
            ]
        }"#
        .parse::<GeoJsonDocument>()
        .unwrap_err();
        assert!(matches!(err, GeomError::UnsupportedDimension(5)));
    }
}
