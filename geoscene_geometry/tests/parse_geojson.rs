use anyhow::Result;
use approx::assert_relative_eq;
use geoscene_core::json::JsonValue;
use geoscene_geometry::{
	BoundingBox, Config, GeoJsonParser, HoleWinding, LatLng, PropertyBag, RenderOptions, Scene, Shape,
	ShapeFactory, builder::winding::is_clockwise, parse_geojson, parse_geojson_with_properties,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn geometry(kind: &str, coordinates: JsonValue) -> JsonValue {
	JsonValue::from(vec![("type", JsonValue::from(kind)), ("coordinates", coordinates)])
}

fn feature(geometry: JsonValue, properties: Vec<(&str, JsonValue)>) -> JsonValue {
	JsonValue::from(vec![
		("type", JsonValue::from("Feature")),
		("properties", JsonValue::from(properties)),
		("geometry", geometry),
	])
}

fn feature_collection(features: Vec<JsonValue>) -> JsonValue {
	JsonValue::from(vec![
		("type", JsonValue::from("FeatureCollection")),
		("features", JsonValue::from(features)),
	])
}

fn square_with_hole() -> JsonValue {
	geometry(
		"Polygon",
		JsonValue::from(vec![
			vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]],
			vec![[2.0, 2.0], [2.0, 4.0], [4.0, 4.0], [4.0, 2.0]],
		]),
	)
}

#[test]
fn point_feature_becomes_marker() -> Result<()> {
	let document = feature(
		geometry("Point", JsonValue::from([10.0, 20.0])),
		vec![("name", JsonValue::from("a"))],
	);
	let scene = parse_geojson(&document, &RenderOptions::new())?;

	let Scene::Single(Shape::Marker(marker)) = &scene else {
		panic!("expected a single marker, got {scene:?}");
	};
	assert_eq!(marker.position, LatLng::new(20.0, 10.0));
	assert_eq!(
		marker.bounds,
		BoundingBox {
			south: 20.0,
			west: 10.0,
			north: 20.0,
			east: 10.0
		}
	);
	assert_eq!(marker.properties.get("name"), Some(&JsonValue::from("a")));
	assert_eq!(marker.properties.type_name(), Some("Point"));
	assert_eq!(marker.properties.bounds(), Some(marker.bounds));
	Ok(())
}

#[test]
fn line_string_keeps_order_and_tight_bounds() -> Result<()> {
	let document = geometry("LineString", JsonValue::from(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]));
	let scene = parse_geojson(&document, &RenderOptions::new())?;

	let Some(Shape::Polyline(line)) = scene.first() else {
		panic!("expected a polyline");
	};
	assert_eq!(
		line.path,
		vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0), LatLng::new(0.0, 2.0)]
	);
	assert_eq!(line.bounds.south, 0.0);
	assert_eq!(line.bounds.west, 0.0);
	assert_eq!(line.bounds.north, 1.0);
	assert_eq!(line.bounds.east, 2.0);
	assert_eq!(line.properties.type_name(), Some("LineString"));
	Ok(())
}

#[test]
fn polygon_hole_is_reversed() -> Result<()> {
	let scene = parse_geojson(&square_with_hole(), &RenderOptions::new())?;

	let Some(Shape::Polygon(polygon)) = scene.first() else {
		panic!("expected a polygon");
	};
	assert_eq!(polygon.rings.len(), 2);
	assert_eq!(polygon.rings[0][1], LatLng::new(10.0, 0.0));
	assert_eq!(
		polygon.rings[1],
		vec![
			LatLng::new(2.0, 4.0),
			LatLng::new(4.0, 4.0),
			LatLng::new(4.0, 2.0),
			LatLng::new(2.0, 2.0),
		]
	);
	assert!(is_clockwise(&polygon.rings[0]));
	assert!(!is_clockwise(&polygon.rings[1]));
	assert_relative_eq!(polygon.bounds.north, 10.0);
	Ok(())
}

#[rstest]
#[case::per_ring(HoleWinding::PerRing)]
#[case::first_hole(HoleWinding::FirstHole)]
fn already_opposite_holes_are_untouched(#[case] mode: HoleWinding) -> Result<()> {
	let document = geometry(
		"Polygon",
		JsonValue::from(vec![
			vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]],
			vec![[2.0, 2.0], [4.0, 2.0], [4.0, 4.0], [2.0, 4.0]],
		]),
	);
	let parser = GeoJsonParser::new(&geoscene_geometry::SceneFactory)
		.with_config(Config::default().with_hole_winding(mode));
	let scene = parser.parse(&document, &RenderOptions::new(), None)?;

	let Some(Shape::Polygon(polygon)) = scene.first() else {
		panic!("expected a polygon");
	};
	assert_eq!(polygon.rings[1][0], LatLng::new(2.0, 2.0));
	assert_eq!(polygon.rings[1][1], LatLng::new(2.0, 4.0));
	Ok(())
}

#[test]
fn parsing_twice_is_idempotent_and_unshared() -> Result<()> {
	let document = feature(
		geometry("MultiPoint", JsonValue::from(vec![[0.0, 0.0], [1.0, 1.0]])),
		vec![("name", JsonValue::from("a"))],
	);
	let options = RenderOptions::from(vec![("color", "red")]);

	let first = parse_geojson(&document, &options)?;
	let mut second = parse_geojson(&document, &options)?;
	assert_eq!(first, second);

	let Scene::Multiple(shapes) = &mut second else {
		panic!("expected multiple shapes");
	};
	shapes[0].properties_mut().insert("name", "changed");
	assert_eq!(shapes[1].properties().get("name"), Some(&JsonValue::from("a")));
	assert_eq!(first.as_slice()[0].properties().get("name"), Some(&JsonValue::from("a")));
	assert_eq!(options.get("icon"), None);
	Ok(())
}

#[test]
fn feature_collection_skips_unknown_members() -> Result<()> {
	let document = feature_collection(vec![
		feature(geometry("Point", JsonValue::from([0.0, 0.0])), vec![]),
		feature(geometry("Circle", JsonValue::from([0.0, 0.0])), vec![]),
		feature(
			geometry("LineString", JsonValue::from(vec![[0.0, 0.0], [1.0, 1.0]])),
			vec![],
		),
	]);
	let scene = parse_geojson(&document, &RenderOptions::new())?;

	assert_eq!(scene.len(), 2);
	let kinds: Vec<&str> = scene.iter().map(|shape| shape.kind().as_str()).collect();
	assert_eq!(kinds, vec!["Marker", "Polyline"]);
	Ok(())
}

#[test]
fn feature_properties_flow_into_geometry_collection() -> Result<()> {
	let collection = JsonValue::from(vec![
		("type", JsonValue::from("GeometryCollection")),
		(
			"geometries",
			JsonValue::from(vec![
				geometry("Point", JsonValue::from([0.0, 0.0])),
				geometry(
					"Polygon",
					JsonValue::from(vec![vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]]),
				),
			]),
		),
	]);
	let document = feature(collection, vec![("name", JsonValue::from("group"))]);
	let scene = parse_geojson(&document, &RenderOptions::new())?;

	assert_eq!(scene.len(), 2);
	for shape in &scene {
		assert_eq!(shape.properties().get("name"), Some(&JsonValue::from("group")));
	}
	assert_eq!(scene.as_slice()[0].properties().type_name(), Some("Point"));
	assert_eq!(scene.as_slice()[1].properties().type_name(), Some("Polygon"));
	Ok(())
}

#[test]
fn explicit_type_property_is_kept() -> Result<()> {
	let document = feature(
		geometry("Point", JsonValue::from([0.0, 0.0])),
		vec![("type", JsonValue::from("poi"))],
	);
	let scene = parse_geojson(&document, &RenderOptions::new())?;
	assert_eq!(scene.as_slice()[0].properties().type_name(), Some("poi"));
	Ok(())
}

#[test]
fn caller_properties_are_used_for_bare_geometries() -> Result<()> {
	let inherited = PropertyBag::from(vec![("layer", "import")]);
	let scene = parse_geojson_with_properties(
		&geometry("Point", JsonValue::from([5.0, 6.0])),
		&RenderOptions::new(),
		&inherited,
	)?;

	let shape = &scene.as_slice()[0];
	assert_eq!(shape.properties().get("layer"), Some(&JsonValue::from("import")));
	assert_eq!(shape.properties().type_name(), Some("Point"));
	assert_eq!(inherited.len(), 1);
	Ok(())
}

#[test]
fn scene_bounds_cover_every_shape() -> Result<()> {
	let document = feature_collection(vec![
		feature(geometry("Point", JsonValue::from([-5.0, 1.0])), vec![]),
		feature(square_with_hole(), vec![]),
	]);
	let bounds = parse_geojson(&document, &RenderOptions::new())?.bounds();
	assert_eq!(bounds.west, -5.0);
	assert_eq!(bounds.east, 10.0);
	assert_eq!(bounds.south, 0.0);
	assert_eq!(bounds.north, 10.0);
	Ok(())
}

#[test]
fn documents_can_be_parsed_concurrently() -> Result<()> {
	let documents: Vec<JsonValue> = (0u8..8)
		.map(|i| geometry("Point", JsonValue::from([f64::from(i), 0.0])))
		.collect();

	let scenes = std::thread::scope(|scope| {
		let handles: Vec<_> = documents
			.iter()
			.map(|document| scope.spawn(move || parse_geojson(document, &RenderOptions::new())))
			.collect();
		handles
			.into_iter()
			.map(|handle| handle.join().expect("parser thread panicked"))
			.collect::<Result<Vec<_>>>()
	})?;

	for (scene, i) in scenes.iter().zip(0u8..) {
		let Some(Shape::Marker(marker)) = scene.first() else {
			panic!("expected a marker");
		};
		assert_eq!(marker.position.lng, f64::from(i));
	}
	Ok(())
}

/// Renders shapes into short descriptions instead of data structs.
struct LabelFactory;

impl ShapeFactory for LabelFactory {
	type Marker = String;
	type Polyline = String;
	type Polygon = String;

	fn make_marker(&self, position: LatLng, _: RenderOptions, properties: PropertyBag, _: BoundingBox) -> String {
		format!("{} at {},{}", properties.type_name().unwrap_or("?"), position.lat, position.lng)
	}

	fn make_polyline(&self, path: Vec<LatLng>, _: RenderOptions, _: PropertyBag, _: BoundingBox) -> String {
		format!("line of {}", path.len())
	}

	fn make_polygon(&self, rings: Vec<Vec<LatLng>>, _: RenderOptions, _: PropertyBag, _: BoundingBox) -> String {
		format!("polygon with {} rings", rings.len())
	}
}

#[test]
fn custom_factory_receives_resolved_data() -> Result<()> {
	let document = feature_collection(vec![
		feature(geometry("Point", JsonValue::from([1.0, 2.0])), vec![]),
		feature(
			geometry("MultiLineString", JsonValue::from(vec![vec![[0, 0], [1, 1], [2, 2]]])),
			vec![],
		),
		feature(square_with_hole(), vec![]),
	]);
	let scene = GeoJsonParser::new(&LabelFactory).parse(&document, &RenderOptions::new(), None)?;

	assert_eq!(
		scene.into_vec(),
		vec![
			Shape::Marker(String::from("Point at 2,1")),
			Shape::Polyline(String::from("line of 3")),
			Shape::Polygon(String::from("polygon with 2 rings")),
		]
	);
	Ok(())
}

#[test]
fn strict_mode_rejects_broken_features() -> Result<()> {
	let document = feature_collection(vec![
		feature(geometry("Point", JsonValue::from([1.0, 2.0])), vec![]),
		feature(geometry("Point", JsonValue::from([1.0])), vec![]),
	]);

	assert_eq!(parse_geojson(&document, &RenderOptions::new())?.len(), 1);

	let strict = GeoJsonParser::new(&geoscene_geometry::SceneFactory).with_config(Config::default().with_strict(true));
	let error = strict.parse(&document, &RenderOptions::new(), None).unwrap_err();
	assert_eq!(error.to_string(), "failed to build feature 1");
	assert!(format!("{error:#}").contains("a position needs at least two values, found 1"));
	Ok(())
}

#[test]
fn scene_serializes_to_json() -> Result<()> {
	let scene = parse_geojson(&geometry("Point", JsonValue::from([1, 2])), &RenderOptions::new())?;
	let json = scene.to_json().stringify();
	assert!(json.contains(r#""kind":"Marker""#));
	assert!(json.contains(r#""type":"Point""#));
	Ok(())
}
