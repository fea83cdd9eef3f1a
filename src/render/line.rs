use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

use crate::models::{DeliveryPlan, Position};

fn line_feature(positions: &[Position], properties: JsonObject) -> Feature {
    let coordinates = positions
        .iter()
        .map(|p| vec![p.longitude(), p.latitude()])
        .collect();
    Feature {
        bbox: None,
        id: None,
        properties: Some(properties),
        foreign_members: None,
        geometry: Some(Geometry::new(Value::LineString(coordinates))),
    }
}

/// Wraps an ordered list of positions into a single-feature collection
/// holding one line string.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Position;
/// use u_dispatch::render::route_feature_collection;
///
/// let fc = route_feature_collection(&[Position::new(52.5, 13.3), Position::new(52.6, 13.4)]);
/// let json = serde_json::to_value(&fc).unwrap();
/// assert_eq!(json["type"], "FeatureCollection");
/// assert_eq!(json["features"][0]["geometry"]["coordinates"][0][0], 13.3);
/// ```
pub fn route_feature_collection(positions: &[Position]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        foreign_members: None,
        features: vec![line_feature(positions, JsonObject::new())],
    }
}

/// One line-string feature per route, tagged with its `vehicle_id`.
pub fn plan_feature_collection(plan: &DeliveryPlan) -> FeatureCollection {
    let features = plan
        .routes()
        .iter()
        .map(|route| {
            let mut properties = JsonObject::new();
            properties.insert(
                "vehicle_id".to_string(),
                JsonValue::from(route.vehicle_id()),
            );
            line_feature(&route.positions(), properties)
        })
        .collect();

    FeatureCollection {
        bbox: None,
        foreign_members: None,
        features,
    }
}
