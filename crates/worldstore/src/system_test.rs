use uuid::Uuid;

use crate::system::{GalacticPosition, Star, StarSystem, SystemKind};

fn test_system(name: &str) -> StarSystem {
    StarSystem {
        id: Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()),
        world_id: Uuid::new_v5(&Uuid::NAMESPACE_OID, b"test-world"),
        name: name.to_string(),
        kind: SystemKind::Single,
        position: GalacticPosition {
            azimuth_deg: 120.0,
            distance: 40.0,
            elevation: 2.0,
        },
        stars: vec![Star {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, b"test-star"),
            name: None,
            spectral_class: "G".to_string(),
            radius: 1.0,
            mass: Some(1.0),
            orbit_radius: None,
            orbit_angle_deg: None,
        }],
    }
}

#[test]
fn deserializes_store_record_with_absent_optional_fields() {
    // The remote store omits mass and the orbital hints when the author
    // never set them; the record must still parse.
    let json = r#"{
        "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
        "worldId": "f47ac10b-58cc-4372-a567-0e02b2c3d480",
        "name": "Cygnus Prime",
        "kind": "Binary",
        "position": { "azimuthDeg": 45.0, "distance": 80.0, "elevation": -3.0 },
        "stars": [
            { "id": "f47ac10b-58cc-4372-a567-0e02b2c3d481", "spectralClass": "G", "radius": 1.0 },
            { "id": "f47ac10b-58cc-4372-a567-0e02b2c3d482", "spectralClass": "M", "radius": 0.5, "mass": 0.4 }
        ]
    }"#;

    let system: StarSystem = serde_json::from_str(json).expect("record should parse");
    assert_eq!(system.kind, SystemKind::Binary);
    assert_eq!(system.stars.len(), 2);
    assert_eq!(system.stars[0].mass, None);
    assert_eq!(system.stars[0].orbit_radius, None);
    assert_eq!(system.stars[1].mass, Some(0.4));
}

#[test]
fn effective_mass_defuses_absent_and_non_positive_values() {
    let mut star = test_system("x").stars.remove(0);

    star.mass = None;
    assert_eq!(star.effective_mass(), 1.0);

    star.mass = Some(0.0);
    assert_eq!(star.effective_mass(), 1.0);

    star.mass = Some(-3.0);
    assert_eq!(star.effective_mass(), 1.0);

    star.mass = Some(2.5);
    assert_eq!(star.effective_mass(), 2.5);
}

#[test]
fn catalog_name_is_deterministic() {
    let a = test_system("alpha");
    let b = test_system("alpha");
    assert_eq!(a.catalog_name(), b.catalog_name());

    let name = a.catalog_name();
    assert_eq!(name.len(), 7);
    assert!(name.contains('-'));
}

#[test]
fn display_name_falls_back_to_catalog_designation() {
    let named = test_system("Cygnus Prime");
    assert_eq!(named.display_name(), "Cygnus Prime");

    let mut unnamed = test_system("whatever");
    unnamed.name = String::new();
    assert_eq!(unnamed.display_name(), unnamed.catalog_name());
}

#[test]
fn kind_from_star_count() {
    assert_eq!(SystemKind::from_star_count(1), SystemKind::Single);
    assert_eq!(SystemKind::from_star_count(2), SystemKind::Binary);
    assert_eq!(SystemKind::from_star_count(3), SystemKind::Multiple);
    assert_eq!(SystemKind::from_star_count(7), SystemKind::Multiple);
}
